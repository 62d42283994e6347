//! List every form in the catalogue.

use anyhow::Result;
use clap::Parser;
use console::style;

use form_core::FormRegistry;

use crate::utils::format_slots;

/// List every form in the catalogue
#[derive(Parser)]
pub struct List {
    /// Also print the slots each form blocks
    #[arg(short, long)]
    slots: bool,
}

impl List {
    pub fn execute(self) -> Result<()> {
        println!(
            "{:<12} {:<14} {:<8} {}",
            style("NAME").bold().cyan(),
            style("STATUS").bold().cyan(),
            style("SIZE").bold().cyan(),
            style("DURATION").bold().cyan(),
        );

        for def in FormRegistry::global().iter() {
            let size = def
                .size
                .map(|size| size.to_string())
                .unwrap_or_else(|| "species".to_string());
            let duration = format!(
                "{} + {:?} (max {})",
                def.duration.base, def.duration.scaling, def.duration.max
            );
            println!(
                "{:<12} {:<14} {:<8} {}",
                def.wiz_name, def.short_name, size, duration
            );
            if self.slots {
                println!("  {} {}", style("blocks:").dim(), format_slots(def.blocked_slots));
            }
        }

        Ok(())
    }
}
