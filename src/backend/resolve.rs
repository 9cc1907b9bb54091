//! Backend resolution.
//!
//! Resolution is deterministic and side-effect-free except for one
//! explicit step: installing the specifically requested or configured
//! backend when it is missing. The opportunistic fallback scan never
//! installs anything the user did not ask for.

use colored::Colorize;

use crate::backend::registry::{BackendDescriptor, Registry};
use crate::error::{Error, Result};

/// Result of backend resolution. Never persisted; recomputed on every
/// invocation.
#[derive(Debug, Clone)]
pub struct ResolvedBackend {
    pub command: String,
    pub descriptor: BackendDescriptor,
    pub installed: bool,
}

impl ResolvedBackend {
    fn installed(descriptor: &BackendDescriptor) -> Self {
        Self {
            command: descriptor.command.clone(),
            descriptor: descriptor.clone(),
            installed: true,
        }
    }
}

/// Probe-and-install boundary with the operating system.
pub trait Environment {
    /// Whether `command` is present on the executable search path. A
    /// presence check only; nothing is executed.
    fn probe(&self, command: &str) -> bool;

    /// Runs the backend's installer, inheriting the terminal. Returns
    /// whether it completed successfully; spawn failures count as false.
    fn install(&self, descriptor: &BackendDescriptor) -> bool;
}

/// Production environment: `which` lookups and package-manager spawns.
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn probe(&self, command: &str) -> bool {
        which::which(command).is_ok()
    }

    fn install(&self, descriptor: &BackendDescriptor) -> bool {
        let Some(install) = &descriptor.install else {
            return false;
        };

        println!(
            "{}",
            format!(
                "{} not found. Installing {}...",
                descriptor.command,
                install.package()
            )
            .yellow()
        );

        let (program, args) = install.argv();
        let ok = std::process::Command::new(program)
            .args(args)
            .status()
            .map(|status| status.success())
            .unwrap_or(false);

        if ok {
            println!(
                "{}",
                format!("{} installed successfully.", descriptor.command).green()
            );
        }
        ok
    }
}

/// Picks the backend to use for an invocation.
///
/// The candidate is the explicit `preferred` identifier, falling back to
/// the persisted `active` one. A known candidate that is missing gets
/// exactly one install attempt and is never silently replaced by another
/// installed backend. An unknown candidate is treated as a literal
/// executable name. Only when no candidate was usable at all does the
/// registry get scanned, in registration order, for anything installed.
///
/// # Errors
/// Returns [`Error::NoUsableBackend`] when nothing resolved; the caller
/// treats this as fatal.
pub fn resolve(
    preferred: Option<&str>,
    active: Option<&str>,
    registry: &Registry,
    env: &dyn Environment,
) -> Result<ResolvedBackend> {
    let candidate = preferred.or(active);

    if let Some(id) = candidate {
        if let Some(descriptor) = registry.describe(id) {
            if env.probe(&descriptor.command) {
                return Ok(ResolvedBackend::installed(descriptor));
            }

            if env.install(descriptor) && env.probe(&descriptor.command) {
                return Ok(ResolvedBackend::installed(descriptor));
            }

            return Err(Error::NoUsableBackend);
        }

        // Not in the registry: treat the identifier as a literal
        // executable name.
        if env.probe(id) {
            let descriptor = BackendDescriptor::custom(id);
            return Ok(ResolvedBackend::installed(&descriptor));
        }
    }

    for descriptor in registry.iter() {
        if env.probe(&descriptor.command) {
            return Ok(ResolvedBackend::installed(descriptor));
        }
    }

    Err(Error::NoUsableBackend)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::registry::InstallMethod;
    use std::cell::RefCell;
    use std::collections::HashSet;

    struct MockEnv {
        present: RefCell<HashSet<String>>,
        install_succeeds: bool,
        installs: RefCell<Vec<String>>,
    }

    impl MockEnv {
        fn new(present: &[&str], install_succeeds: bool) -> Self {
            Self {
                present: RefCell::new(present.iter().map(|s| s.to_string()).collect()),
                install_succeeds,
                installs: RefCell::new(Vec::new()),
            }
        }

        fn installs(&self) -> Vec<String> {
            self.installs.borrow().clone()
        }
    }

    impl Environment for MockEnv {
        fn probe(&self, command: &str) -> bool {
            self.present.borrow().contains(command)
        }

        fn install(&self, descriptor: &BackendDescriptor) -> bool {
            self.installs.borrow_mut().push(descriptor.id.clone());
            if self.install_succeeds {
                self.present.borrow_mut().insert(descriptor.command.clone());
            }
            self.install_succeeds
        }
    }

    fn two_backends() -> Registry {
        Registry::from_entries(vec![
            BackendDescriptor {
                id: "alpha".into(),
                command: "alpha".into(),
                install: Some(InstallMethod::Npm("@acme/alpha".into())),
                description: "Alpha".into(),
                default_args: Vec::new(),
            },
            BackendDescriptor {
                id: "beta".into(),
                command: "beta".into(),
                install: Some(InstallMethod::Npm("@acme/beta".into())),
                description: "Beta".into(),
                default_args: Vec::new(),
            },
        ])
    }

    #[test]
    fn installed_candidate_resolves_without_install() {
        let registry = two_backends();
        let env = MockEnv::new(&["beta"], false);

        let resolved = resolve(Some("beta"), None, &registry, &env).unwrap();
        assert_eq!(resolved.command, "beta");
        assert!(resolved.installed);
        assert!(env.installs().is_empty());
    }

    #[test]
    fn preferred_beats_configured_active() {
        let registry = two_backends();
        let env = MockEnv::new(&["alpha", "beta"], false);

        let resolved = resolve(Some("beta"), Some("alpha"), &registry, &env).unwrap();
        assert_eq!(resolved.command, "beta");
    }

    #[test]
    fn missing_candidate_is_installed_once() {
        let registry = two_backends();
        let env = MockEnv::new(&[], true);

        let resolved = resolve(None, Some("beta"), &registry, &env).unwrap();
        assert_eq!(resolved.command, "beta");
        assert!(resolved.installed);
        assert_eq!(env.installs(), ["beta"]);
    }

    #[test]
    fn resolver_does_not_fall_back_after_failed_install() {
        // alpha is installed, but the configured backend is beta. The
        // failed install of beta must not be papered over with alpha.
        let registry = two_backends();
        let env = MockEnv::new(&["alpha"], false);

        let result = resolve(None, Some("beta"), &registry, &env);
        assert!(matches!(result, Err(Error::NoUsableBackend)));
        assert_eq!(env.installs(), ["beta"]);
    }

    #[test]
    fn unknown_candidate_resolves_as_custom_executable() {
        let registry = two_backends();
        let env = MockEnv::new(&["mytool"], false);

        let resolved = resolve(Some("mytool"), None, &registry, &env).unwrap();
        assert_eq!(resolved.command, "mytool");
        assert_eq!(resolved.descriptor.install, None);
        assert!(resolved.descriptor.default_args.is_empty());
        assert!(env.installs().is_empty());
    }

    #[test]
    fn absent_unknown_candidate_falls_back_to_scan_without_install() {
        let registry = two_backends();
        let env = MockEnv::new(&["beta"], false);

        let resolved = resolve(Some("mytool"), None, &registry, &env).unwrap();
        assert_eq!(resolved.command, "beta");
        assert!(env.installs().is_empty());
    }

    #[test]
    fn no_candidate_scans_in_registration_order() {
        let registry = two_backends();
        let env = MockEnv::new(&["alpha", "beta"], false);

        let resolved = resolve(None, None, &registry, &env).unwrap();
        assert_eq!(resolved.command, "alpha");
    }

    #[test]
    fn nothing_usable_is_a_terminal_failure() {
        let registry = two_backends();
        let env = MockEnv::new(&[], false);

        let result = resolve(None, None, &registry, &env);
        assert!(matches!(result, Err(Error::NoUsableBackend)));
        assert!(env.installs().is_empty());
    }
}
