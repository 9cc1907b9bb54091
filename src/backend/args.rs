//! Argument translation for backend invocations.

use crate::backend::resolve::ResolvedBackend;

/// Flag convention a backend uses for provider/model selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// `--model <model>`; the provider is implied by the tool itself.
    Model,
    /// `--engine <model>`, the legacy OpenAI CLI convention.
    Engine,
    /// `--provider <provider> --model <model>`, for tools reins knows
    /// nothing about.
    Generic,
}

/// Closed dialect table, keyed by invocation command. Adding a backend
/// dialect is a row here, not a new branch somewhere else.
const DIALECTS: &[(&str, Dialect)] = &[
    ("codex", Dialect::Model),
    ("claude", Dialect::Model),
    ("gemini", Dialect::Model),
    ("openai", Dialect::Engine),
];

pub fn dialect_for(command: &str) -> Dialect {
    DIALECTS
        .iter()
        .find(|(cmd, _)| *cmd == command)
        .map_or(Dialect::Generic, |(_, dialect)| *dialect)
}

/// Builds the full argument vector for a backend invocation: the
/// descriptor's default arguments, the dialect's provider/model flags,
/// then the pass-through arguments verbatim. Pure; the descriptor is
/// never mutated.
pub fn build_args(
    provider: &str,
    model: &str,
    extra: &[String],
    resolved: &ResolvedBackend,
) -> Vec<String> {
    let mut args = resolved.descriptor.default_args.clone();

    match dialect_for(&resolved.command) {
        Dialect::Model => args.extend(["--model".to_string(), model.to_string()]),
        Dialect::Engine => args.extend(["--engine".to_string(), model.to_string()]),
        Dialect::Generic => args.extend([
            "--provider".to_string(),
            provider.to_string(),
            "--model".to_string(),
            model.to_string(),
        ]),
    }

    args.extend(extra.iter().cloned());
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::registry::{BackendDescriptor, Registry};

    fn resolved(id: &str) -> ResolvedBackend {
        let descriptor = Registry::builtin()
            .describe(id)
            .cloned()
            .unwrap_or_else(|| BackendDescriptor::custom(id));
        ResolvedBackend {
            command: descriptor.command.clone(),
            descriptor,
            installed: true,
        }
    }

    #[test]
    fn codex_takes_model_only() {
        let args = build_args("openai", "gpt-4.1", &[], &resolved("codex"));
        assert_eq!(args, ["--model", "gpt-4.1"]);
    }

    #[test]
    fn openai_takes_engine_after_default_args() {
        let args = build_args("openai", "davinci", &[], &resolved("openai"));
        assert_eq!(
            args,
            ["api", "completions.create", "--engine", "davinci"]
        );
    }

    #[test]
    fn unknown_command_gets_generic_provider_model() {
        let args = build_args("acme", "acme-large", &[], &resolved("mytool"));
        assert_eq!(args, ["--provider", "acme", "--model", "acme-large"]);
    }

    #[test]
    fn extra_args_are_appended_verbatim_in_order() {
        let extra = vec!["explain".to_string(), "--verbose".to_string()];
        let args = build_args("anthropic", "claude-3.7-sonnet", &extra, &resolved("claude"));
        assert_eq!(
            args,
            ["--model", "claude-3.7-sonnet", "explain", "--verbose"]
        );
    }

    #[test]
    fn build_args_is_pure_and_does_not_mutate_default_args() {
        let backend = resolved("openai");
        let before = backend.descriptor.default_args.clone();

        let first = build_args("openai", "davinci", &[], &backend);
        let second = build_args("openai", "davinci", &[], &backend);

        assert_eq!(first, second);
        assert_eq!(backend.descriptor.default_args, before);
    }
}
