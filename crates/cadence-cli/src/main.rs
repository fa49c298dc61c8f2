//! Cadence CLI - composable, consistently spaced terminal output
//!
//! Renders a showcase stream, JSON data as (optionally paginated) tables,
//! and manages theme files.

mod app;
mod cli;
mod commands;
mod config;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::AppContext;
use cli::{Cli, Commands, ThemeCommand};

fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with rendered output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("CADENCE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);
    match &cli.command {
        Commands::Demo(args) => commands::handle_demo(&ctx, args),
        Commands::Table(args) => commands::handle_table(&ctx, args),
        Commands::Theme(ThemeCommand::Show { json }) => commands::handle_theme_show(&ctx, *json),
        Commands::Theme(ThemeCommand::Init { path, force }) => {
            commands::handle_theme_init(&ctx, path.as_deref(), *force)
        }
        Commands::Completions { shell } => commands::handle_completions(*shell),
    }
}
