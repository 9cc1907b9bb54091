//! The run command: resolve the profile and backend, translate arguments,
//! and hand the terminal to the backend process.

use colored::Colorize;

use crate::backend::{Registry, SystemEnv, build_args, resolve};
use crate::config::Config;
use crate::error::{Error, Result};

pub fn run(profile: Option<&str>, backend: Option<&str>, extra: &[String]) -> Result<()> {
    let config = Config::load()?;

    let name = match profile {
        Some(name) => {
            if !config.profiles.contains_key(name) {
                return Err(Error::ProfileNotFound(name.to_string()));
            }
            name
        }
        None => match config.active_profile() {
            Some((name, _)) => name,
            None => return Err(Error::NoActiveProfile),
        },
    };
    let prof = &config.profiles[name];

    println!(
        "{}",
        format!("Using profile: {name} ({}/{})", prof.provider, prof.model).blue()
    );

    let registry = Registry::builtin();
    let resolved = match resolve(
        backend,
        config.backends.active.as_deref(),
        &registry,
        &SystemEnv,
    ) {
        Ok(resolved) => resolved,
        Err(e) => {
            if matches!(e, Error::NoUsableBackend) {
                report_install_guidance(&registry);
            }
            return Err(e);
        }
    };

    let args = build_args(&prof.provider, &prof.model, extra, &resolved);
    let status = std::process::Command::new(&resolved.command)
        .args(&args)
        .status()?;

    // The backend owns the outcome from here; its exit status is ours.
    std::process::exit(status.code().unwrap_or(1));
}

fn report_install_guidance(registry: &Registry) {
    eprintln!("{}", "Known backends:".yellow());
    for descriptor in registry.iter() {
        if let Some(install) = &descriptor.install {
            eprintln!(
                "  {}: {} ({})",
                descriptor.id.cyan(),
                descriptor.description,
                install.instruction()
            );
        }
    }
}
