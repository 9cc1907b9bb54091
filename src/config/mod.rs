//! Configuration persistence for reins.
//!
//! The whole configuration is one YAML record at
//! `~/.config/reins/config.yaml`: the profile mapping, the active profile
//! name, and the backend settings. It is loaded and saved as a unit; there
//! are no partial updates. Concurrent invocations race with
//! last-writer-wins semantics, which is accepted for a single-user CLI.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Backend used when nothing is configured or requested.
pub const DEFAULT_BACKEND: &str = "codex";

/// Default model per provider, offered as the prompt default in
/// interactive profile creation.
const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("openai", "gpt-4.1"),
    ("gemini", "gemini-2.5-pro"),
    ("anthropic", "claude-3.7-sonnet"),
    ("deepseek", "deepseek-coder-v3"),
    ("mistral", "mistral-codestral-2501"),
    ("qwen", "qwen2.5-coder-32b"),
    ("openrouter", "agentica-org/deepcoder-14b-preview"),
];

pub fn default_model(provider: &str) -> Option<&'static str> {
    let provider = provider.to_lowercase();
    DEFAULT_MODELS
        .iter()
        .find(|(p, _)| *p == provider)
        .map(|(_, m)| *m)
}

/// A named provider/model pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub provider: String,
    pub model: String,
}

/// Backend settings persisted alongside the profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend used when `run` is not given an explicit `--backend`.
    pub active: Option<String>,

    /// Ad-hoc backend definitions keyed by name. The records are opaque
    /// to reins; they are kept so hand-edited entries survive a save.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, serde_yaml::Value>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            active: Some(DEFAULT_BACKEND.to_string()),
            custom: BTreeMap::new(),
        }
    }
}

/// The on-disk configuration record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    /// Name of the active profile. Always keys an existing entry in
    /// `profiles` when set.
    pub active: Option<String>,

    /// Injected with defaults for config files written before backends
    /// existed.
    #[serde(default)]
    pub backends: BackendConfig,
}

impl Config {
    /// Configuration directory, honoring `REINS_CONFIG_DIR` so tests can
    /// isolate their state.
    pub fn config_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var("REINS_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }
        dirs::config_dir()
            .map(|d| d.join("reins"))
            .ok_or(Error::NoConfigDir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }

    /// Loads the configuration, substituting built-in defaults when the
    /// file is absent or unreadable. Loading never writes to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let fallback = |e: &dyn std::fmt::Display| {
            eprintln!("{}", format!("Error loading config: {e}").red());
            Self::default()
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => Ok(fallback(&e)),
            },
            Err(e) => Ok(fallback(&e)),
        }
    }

    /// Saves the whole record, creating the config directory if needed.
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;
        self.save_to(&dir.join("config.yaml"))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    /// The active profile, when one is set.
    pub fn active_profile(&self) -> Option<(&str, &Profile)> {
        self.active
            .as_deref()
            .and_then(|name| self.profiles.get(name).map(|p| (name, p)))
    }

    /// Adds or silently overwrites a profile. The first profile added
    /// becomes the active one.
    pub fn upsert(&mut self, name: &str, provider: String, model: String) {
        self.profiles
            .insert(name.to_string(), Profile { provider, model });
        if self.active.is_none() {
            self.active = Some(name.to_string());
        }
    }

    /// Removes a profile if present, repointing `active` at another
    /// existing profile (or clearing it) so the active name always keys a
    /// real entry. Returns whether anything was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.profiles.remove(name).is_some();
        if removed && self.active.as_deref() == Some(name) {
            self.active = self.profiles.keys().next().cloned();
        }
        removed
    }

    /// Sets the active profile.
    ///
    /// # Errors
    /// Returns [`Error::ProfileNotFound`] if no such profile exists.
    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            return Err(Error::ProfileNotFound(name.to_string()));
        }
        self.active = Some(name.to_string());
        Ok(())
    }
}
