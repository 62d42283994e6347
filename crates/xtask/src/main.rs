//! Development tasks for the form rules
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{List, ReadState, Show, Simulate};

/// Development tasks for the form rules
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for shapeshift forms", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List every form in the catalogue
    List(List),

    /// Show derived values of one form
    Show(Show),

    /// Run a sequence of transformations against a loadout
    Simulate(Simulate),

    /// Read and inspect a saved form state
    ReadState(ReadState),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::List(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
        Command::Simulate(cmd) => cmd.execute(),
        Command::ReadState(cmd) => cmd.execute(),
    }
}
