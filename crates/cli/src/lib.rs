pub mod commands;

use clap::{Parser, Subcommand};
use lapwise_core::config::{AppConfig, LoadOptions};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "lapwise",
    about = "Lapwise laptop comparison CLI",
    long_about = "Compare two laptops side by side, browse the catalog, and inspect student packages and configuration.",
    after_help = "Examples:\n  lapwise compare surface-laptop-4 hp-elitebook-845-g8-r7\n  lapwise list --budget 500k-750k --sort price-low\n  lapwise show hp-pro-x2 --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Compare two laptops attribute by attribute and recommend one")]
    Compare {
        #[arg(help = "Identifier of the first laptop")]
        first: String,
        #[arg(help = "Identifier of the second laptop")]
        second: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List catalog laptops with shop filters and sorting")]
    List(commands::list::ListArgs),
    #[command(about = "Show one laptop with its score breakdown and related models")]
    Show {
        #[arg(help = "Laptop identifier")]
        id: String,
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "List student bundles and the laptops they include")]
    Packages {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

fn init_logging(config: &AppConfig) {
    use lapwise_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let installed = match config.logging.format {
        Compact => builder.compact().try_init(),
        Pretty => builder.pretty().try_init(),
        Json => builder.json().try_init(),
    };
    if let Err(error) = installed {
        eprintln!("logging was already initialized: {error}");
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Commands report config failures themselves; logging just falls back to off.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    let result = match cli.command {
        Command::Compare { first, second, json } => commands::compare::run(&first, &second, json),
        Command::List(args) => commands::list::run(&args),
        Command::Show { id, json } => commands::show::run(&id, json),
        Command::Packages { json } => commands::packages::run(json),
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
