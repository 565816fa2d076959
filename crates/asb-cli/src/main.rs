//! CLI entry point - the composition root.
//!
//! Settings are loaded and the plugin is composed via bootstrap; command
//! dispatch routes to handlers.

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use asb_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    // RUST_LOG wins; --verbose only changes the fallback
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to install tracing subscriber: {err}"))
}

fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::load(cli.settings.as_deref())?;

    match command {
        Commands::Absorb {
            input,
            output,
            strict,
            summary,
        } => {
            let config = if strict { config.strict() } else { config };
            let ctx = bootstrap(config);
            handlers::absorb::execute(&ctx, input.as_deref(), output.as_deref(), summary)?;
        }
        Commands::Plugins => {
            let ctx = bootstrap(config);
            handlers::plugins::execute(&ctx, io::stdout().lock())?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables (RUST_LOG, ASB_SETTINGS)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match run(cli) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            eprintln!("Error: {err}");
            let code = u8::try_from(err.exit_code()).unwrap_or(1);
            Ok(ExitCode::from(code))
        }
    }
}
