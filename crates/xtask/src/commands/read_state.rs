//! Read and inspect a saved form state.
//!
//! Decodes a state file written by `simulate --save` and displays its contents.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use form_core::{ActiveFormState, BaselineProfile, FormView};

use crate::utils::{format_bytes, format_hex, format_slots};

/// Read and inspect a saved form state
#[derive(Parser)]
pub struct ReadState {
    /// Path of the state file
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Summary view (form, duration, melded slots)
    Summary,
    /// Full JSON output
    Json,
    /// Pretty-printed debug format
    Debug,
}

impl ReadState {
    pub fn execute(self) -> Result<()> {
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;

        let state = ActiveFormState::from_bytes(&bytes).with_context(|| {
            format!("Failed to deserialize state file: {}", self.path.display())
        })?;

        println!(
            "{} {}",
            style("State File:").bold().cyan(),
            self.path.display()
        );
        println!(
            "{} {}",
            style("File Size:").bold().cyan(),
            format_bytes(bytes.len())
        );
        println!("{} {}", style("Nonce:").bold().cyan(), state.nonce());
        println!(
            "{} {}",
            style("State Root:").bold().cyan(),
            format_hex(&state.state_root())
        );
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&state),
            OutputFormat::Json => print_json(&state)?,
            OutputFormat::Debug => println!("{:#?}", state),
        }

        Ok(())
    }
}

fn print_summary(state: &ActiveFormState) {
    println!("{}", style("=== Form State Summary ===").bold().green());
    println!();

    let baseline = BaselineProfile::default();
    let view = FormView::new(state, &baseline);

    println!("{}", style("Form:").bold().yellow());
    println!("  Form: {}", state.form());
    if let Some(heads) = state.hydra_heads() {
        println!("  Heads: {}", heads);
    }
    println!("  Power: {}", state.power());
    println!("  Duration: {}", state.duration());
    println!("  Swimming: {}", state.is_swimming());
    println!("  Melded: {}", format_slots(state.melded()));
    println!("  Consistent: {}", state.is_consistent());
    println!();

    println!("{}", style("Derived (average humanoid):").bold().yellow());
    println!("  AC bonus: {}", view.ac_bonus());
    println!("  Can wield: {}", view.can_wield());
    println!("  Can cast: {}", view.can_cast());
    println!();
}

fn print_json(state: &ActiveFormState) -> Result<()> {
    let json = serde_json::to_string_pretty(state).context("Failed to serialize state to JSON")?;
    println!("{}", json);
    Ok(())
}
