//! sshmkr CLI
//!
//! Adds, removes, comments and edits host blocks in an ssh config while
//! keeping its `####` / `##` header layout intact.

mod cli;
mod commands;
mod error;
mod interactive;
mod session;
mod settings;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};
use error::Result;
use session::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(cmd) => {
            let session = Session::open(cli.path)?;
            execute_command(&session, cmd)
        }
        None => {
            println!("{} A header-aware ssh_config editor", "sshmkr".green().bold());
            println!();
            println!("Run {} for available commands.", "sshmkr --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter_layer =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // A subscriber may already be installed when running under tests.
    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
    tracing::debug!("Verbose mode enabled");
}

fn execute_command(session: &Session, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add {
            source,
            placement,
            prompt,
            dry_run,
        } => commands::run_add(session, &source, &placement, &prompt, dry_run),
        Commands::Copy {
            source,
            placement,
            prompt,
            dry_run,
        } => commands::run_copy(session, &source, &placement, &prompt, dry_run),
        Commands::Delete { source, dry_run } => commands::run_delete(session, &source, dry_run),
        Commands::Comment { source, dry_run } => commands::run_comment(session, &source, dry_run),
        Commands::Edit {
            source,
            prompt,
            dry_run,
        } => commands::run_edit(session, &source, &prompt, dry_run),
        Commands::Show { source } => commands::run_show(session, &source),
        Commands::List { json } => commands::run_list(session, json),
    }
}
