//! Profile commands: list, add, remove, use, select.

use colored::Colorize;
use dialoguer::{Input, Select};

use crate::config::{Config, default_model};
use crate::error::{Error, Result};

/// Provider choices offered in interactive mode. The last entry falls
/// through to a free-text prompt.
const PROVIDERS: &[(&str, &str)] = &[
    ("OpenAI", "openai"),
    ("Google Gemini", "gemini"),
    ("Anthropic", "anthropic"),
    ("DeepSeek", "deepseek"),
    ("Mistral AI", "mistral"),
    ("Qwen", "qwen"),
    ("OpenRouter", "openrouter"),
    ("Other (specify)", "other"),
];

pub fn list_profiles() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Available profiles:".bold());
    if config.profiles.is_empty() {
        println!(
            "{}",
            "  No profiles defined. Use `reins add <name>` to add a new profile.".yellow()
        );
        return Ok(());
    }

    for (name, profile) in &config.profiles {
        let mark = if config.active.as_deref() == Some(name.as_str()) {
            "*".green()
        } else {
            " ".normal()
        };
        println!(
            "{mark} {}: provider={}, model={}",
            name.cyan(),
            profile.provider.yellow(),
            profile.model.yellow()
        );
    }
    Ok(())
}

pub fn add_profile(
    name: &str,
    provider: Option<String>,
    model: Option<String>,
    interactive: bool,
) -> Result<()> {
    let mut config = Config::load()?;

    let (provider, model) = match (provider, model) {
        (Some(provider), Some(model)) if !interactive => (provider, model),
        _ => prompt_profile(&config, name)?,
    };

    if provider.trim().is_empty() {
        return Err(Error::EmptyField("Provider name"));
    }
    if model.trim().is_empty() {
        return Err(Error::EmptyField("Model name"));
    }

    config.upsert(name, provider, model);
    config.save()?;
    println!("{}", format!("Profile '{name}' added/updated.").green());
    Ok(())
}

fn prompt_profile(config: &Config, name: &str) -> Result<(String, String)> {
    let existing = config.profile(name);

    let labels: Vec<&str> = PROVIDERS.iter().map(|(label, _)| *label).collect();
    let default_index = existing
        .and_then(|p| PROVIDERS.iter().position(|(_, v)| *v == p.provider))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Choose a provider")
        .items(&labels)
        .default(default_index)
        .interact()?;

    let provider = if PROVIDERS[choice].1 == "other" {
        Input::<String>::new()
            .with_prompt("Enter provider name")
            .interact_text()?
    } else {
        PROVIDERS[choice].1.to_string()
    };

    let mut model_prompt = Input::<String>::new().with_prompt("Enter model name");
    let suggested = existing
        .map(|p| p.model.clone())
        .or_else(|| default_model(&provider).map(str::to_string));
    if let Some(suggested) = suggested {
        model_prompt = model_prompt.default(suggested);
    }
    let model = model_prompt
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("Model name cannot be empty")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    Ok((provider, model))
}

pub fn remove_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    if !config.remove(name) {
        return Err(Error::ProfileNotFound(name.to_string()));
    }

    config.save()?;
    println!("{}", format!("Profile '{name}' removed.").green());
    Ok(())
}

pub fn use_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.set_active(name)?;
    config.save()?;
    println!("{}", format!("Active profile: '{name}'.").green());
    Ok(())
}

pub fn select_profile() -> Result<()> {
    let mut config = Config::load()?;

    if config.profiles.is_empty() {
        println!(
            "{}",
            "No profiles defined. Use `reins add <name>` to add a new profile.".yellow()
        );
        return Ok(());
    }

    let names: Vec<&String> = config.profiles.keys().collect();
    let items: Vec<String> = config
        .profiles
        .iter()
        .map(|(name, p)| format!("{name} ({}/{})", p.provider, p.model))
        .collect();
    let current = config
        .active
        .as_ref()
        .and_then(|active| names.iter().position(|n| *n == active))
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Select active profile")
        .items(&items)
        .default(current)
        .interact()?;

    let selected = names[choice].clone();
    config.set_active(&selected)?;
    config.save()?;
    println!("{}", format!("Active profile: '{selected}'.").green());
    Ok(())
}
