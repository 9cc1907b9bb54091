mod backend;
mod cli;
mod config;
mod error;

use clap::Parser;
use cli::{BackendCommands, Commands};
use colored::Colorize;

#[derive(Parser)]
#[command(name = "reins")]
#[command(version, about = "Profile manager and dispatcher for AI coding CLIs")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Free text sent to the active profile's backend.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    prompt: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let outcome = match cli.command {
        Some(Commands::List) => cli::profile::list_profiles(),
        Some(Commands::Add {
            name,
            provider,
            model,
            interactive,
        }) => cli::profile::add_profile(&name, provider, model, interactive),
        Some(Commands::Remove { name }) => cli::profile::remove_profile(&name),
        Some(Commands::Use { name }) => cli::profile::use_profile(&name),
        Some(Commands::Select) => cli::profile::select_profile(),
        Some(Commands::Backend(backend_cmd)) => match backend_cmd {
            BackendCommands::List => cli::backend_cmd::list_backends(),
            BackendCommands::Set { name } => cli::backend_cmd::set_backend(&name),
            BackendCommands::Info => cli::backend_cmd::backend_info(),
            BackendCommands::Install { name } => cli::backend_cmd::install_backend(&name),
        },
        Some(Commands::Run {
            profile,
            backend,
            args,
        }) => cli::run::run(profile.as_deref(), backend.as_deref(), &args),
        None => cli::run::run(None, None, &cli.prompt),
    };

    if let Err(e) = outcome {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }

    Ok(())
}
