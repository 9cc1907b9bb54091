//! Backend commands: list, set, info, install.

use colored::Colorize;

use crate::backend::resolve::Environment;
use crate::backend::{Registry, SystemEnv};
use crate::config::Config;
use crate::error::{Error, Result};

pub fn list_backends() -> Result<()> {
    let config = Config::load()?;
    let registry = Registry::builtin();
    let env = SystemEnv;

    println!("{}", "Known backends:".bold());
    for descriptor in registry.iter() {
        let mark = if config.backends.active.as_deref() == Some(descriptor.id.as_str()) {
            "*".green()
        } else {
            " ".normal()
        };
        let state = if env.probe(&descriptor.command) {
            "installed".green()
        } else {
            "not installed".yellow()
        };
        println!(
            "{mark} {}: {} [{state}]",
            descriptor.id.cyan(),
            descriptor.description
        );
    }

    for name in config.backends.custom.keys() {
        let mark = if config.backends.active.as_deref() == Some(name.as_str()) {
            "*".green()
        } else {
            " ".normal()
        };
        println!("{mark} {}: custom backend", name.cyan());
    }
    Ok(())
}

pub fn set_backend(name: &str) -> Result<()> {
    let mut config = Config::load()?;
    let registry = Registry::builtin();
    let env = SystemEnv;

    // Known identifiers are accepted even when not installed; resolution
    // installs them later. Anything else must already be on PATH.
    if registry.describe(name).is_none() && !env.probe(name) {
        return Err(Error::BackendNotFound(name.to_string()));
    }

    config.backends.active = Some(name.to_string());
    config.save()?;
    println!("{}", format!("Active backend: '{name}'.").green());
    Ok(())
}

/// Read-only description of the backend the next run would use. Unlike
/// resolution proper, this never installs anything.
pub fn backend_info() -> Result<()> {
    let config = Config::load()?;
    let registry = Registry::builtin();
    let env = SystemEnv;

    match config.backends.active.as_deref() {
        Some(id) => match registry.describe(id) {
            Some(descriptor) => {
                let state = if env.probe(&descriptor.command) {
                    "installed".green()
                } else {
                    "not installed".yellow()
                };
                println!("Active backend: {} ({}) [{state}]", id.cyan(), descriptor.description);
                println!("  Command: {}", descriptor.command);
                if let Some(install) = &descriptor.install {
                    println!("  Install: {}", install.instruction());
                }
            }
            None => {
                let state = if env.probe(id) {
                    "installed".green()
                } else {
                    "not found on PATH".yellow()
                };
                println!("Active backend: {} (custom backend) [{state}]", id.cyan());
            }
        },
        None => {
            println!("No active backend configured.");
            match registry.iter().find(|d| env.probe(&d.command)) {
                Some(descriptor) => println!(
                    "The next run would use {} ({}).",
                    descriptor.id.cyan(),
                    descriptor.description
                ),
                None => println!("{}", "No known backend is installed.".yellow()),
            }
        }
    }
    Ok(())
}

pub fn install_backend(name: &str) -> Result<()> {
    let registry = Registry::builtin();
    let env = SystemEnv;

    let descriptor = registry
        .describe(name)
        .ok_or_else(|| Error::BackendNotFound(name.to_string()))?;

    if env.probe(&descriptor.command) {
        println!("{}", format!("'{name}' is already installed.").green());
        return Ok(());
    }

    if !env.install(descriptor) {
        return Err(Error::InstallFailed(name.to_string()));
    }
    Ok(())
}
