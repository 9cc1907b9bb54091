//! Static registry of known backends.

/// How a backend is installed when its executable is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMethod {
    /// Global npm package.
    Npm(String),
    /// Pip package.
    Pip(String),
}

impl InstallMethod {
    pub fn package(&self) -> &str {
        match self {
            Self::Npm(pkg) | Self::Pip(pkg) => pkg,
        }
    }

    /// The installer invocation as (program, arguments).
    pub fn argv(&self) -> (&'static str, Vec<&str>) {
        match self {
            Self::Npm(pkg) => ("npm", vec!["install", "-g", pkg]),
            Self::Pip(pkg) => ("pip", vec!["install", pkg]),
        }
    }

    /// Human-readable install instruction.
    pub fn instruction(&self) -> String {
        let (program, args) = self.argv();
        format!("{program} {}", args.join(" "))
    }
}

/// Static metadata for one backend tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendDescriptor {
    /// Identifier used in config and on the command line.
    pub id: String,
    /// Executable invoked to run the backend.
    pub command: String,
    /// How to install the backend; `None` for ad-hoc custom executables.
    pub install: Option<InstallMethod>,
    pub description: String,
    /// Arguments always placed before the translated provider/model flags.
    pub default_args: Vec<String>,
}

impl BackendDescriptor {
    fn new(
        id: &str,
        command: &str,
        install: InstallMethod,
        description: &str,
        default_args: &[&str],
    ) -> Self {
        Self {
            id: id.to_string(),
            command: command.to_string(),
            install: Some(install),
            description: description.to_string(),
            default_args: default_args.iter().map(|a| a.to_string()).collect(),
        }
    }

    /// Minimal descriptor for an executable that is not in the registry.
    pub fn custom(command: &str) -> Self {
        Self {
            id: command.to_string(),
            command: command.to_string(),
            install: None,
            description: "Custom backend executable".to_string(),
            default_args: Vec::new(),
        }
    }
}

/// The fixed set of known backends. Iteration order is registration
/// order, which is also the fallback scan order.
#[derive(Debug, Clone)]
pub struct Registry {
    entries: Vec<BackendDescriptor>,
}

impl Registry {
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            BackendDescriptor::new(
                "codex",
                "codex",
                InstallMethod::Npm("@openai/codex".into()),
                "OpenAI Codex CLI",
                &[],
            ),
            BackendDescriptor::new(
                "claude",
                "claude",
                InstallMethod::Npm("@anthropic-ai/claude-code".into()),
                "Anthropic Claude Code",
                &[],
            ),
            BackendDescriptor::new(
                "gemini",
                "gemini",
                InstallMethod::Npm("@google/gemini-cli".into()),
                "Google Gemini CLI",
                &[],
            ),
            BackendDescriptor::new(
                "openai",
                "openai",
                InstallMethod::Pip("openai".into()),
                "OpenAI API reference CLI",
                &["api", "completions.create"],
            ),
        ])
    }

    pub fn from_entries(entries: Vec<BackendDescriptor>) -> Self {
        Self { entries }
    }

    pub fn describe(&self, id: &str) -> Option<&BackendDescriptor> {
        self.entries.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackendDescriptor> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_finds_known_backends() {
        let registry = Registry::builtin();
        let codex = registry.describe("codex").unwrap();
        assert_eq!(codex.command, "codex");
        assert_eq!(
            codex.install.as_ref().unwrap().instruction(),
            "npm install -g @openai/codex"
        );

        assert!(registry.describe("notreal").is_none());
    }

    #[test]
    fn iteration_follows_registration_order() {
        let registry = Registry::builtin();
        let ids: Vec<&str> = registry.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["codex", "claude", "gemini", "openai"]);
    }

    #[test]
    fn custom_descriptor_is_minimal() {
        let custom = BackendDescriptor::custom("mytool");
        assert_eq!(custom.id, "mytool");
        assert_eq!(custom.command, "mytool");
        assert_eq!(custom.install, None);
        assert!(custom.default_args.is_empty());
    }

    #[test]
    fn pip_install_instruction() {
        let registry = Registry::builtin();
        let openai = registry.describe("openai").unwrap();
        assert_eq!(
            openai.install.as_ref().unwrap().instruction(),
            "pip install openai"
        );
        assert_eq!(openai.default_args, ["api", "completions.create"]);
    }
}
