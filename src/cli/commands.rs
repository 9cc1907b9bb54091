//! CLI subcommand definitions.

use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available profiles.
    List,

    /// Add or update a profile.
    Add {
        /// Profile name to create or update.
        name: String,

        /// Provider name.
        #[arg(short, long)]
        provider: Option<String>,

        /// Model name.
        #[arg(short, long)]
        model: Option<String>,

        /// Choose provider and model interactively.
        #[arg(short, long)]
        interactive: bool,
    },

    /// Remove a profile.
    #[command(alias = "rm")]
    Remove {
        /// Profile name to remove.
        name: String,
    },

    /// Set the active profile.
    Use {
        /// Profile name to activate.
        name: String,
    },

    /// Interactively select the active profile.
    Select,

    /// Manage backends.
    #[command(subcommand)]
    Backend(BackendCommands),

    /// Run the active profile's backend with a prompt.
    Run {
        /// Profile to use instead of the active one.
        #[arg(short, long)]
        profile: Option<String>,

        /// Backend to use instead of the configured one.
        #[arg(short, long)]
        backend: Option<String>,

        /// Arguments passed through to the backend.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum BackendCommands {
    /// List known backends and their installation state.
    List,

    /// Set the active backend.
    Set {
        /// Backend identifier, or any executable on PATH.
        name: String,
    },

    /// Show the backend the next run would use.
    Info,

    /// Install a known backend.
    Install {
        /// Backend identifier to install.
        name: String,
    },
}
