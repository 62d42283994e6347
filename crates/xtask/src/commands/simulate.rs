//! Run transformations against a loadout and print what happens.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use form_core::{
    ActiveFormState, Env, FormId, FormView, MessageLog, PcgRng, TransformAction,
    TransformationController, UntransformReport,
};

use crate::utils::{content_factory, format_hex, format_slots, parse_form, parse_terrain};

/// Run a sequence of transformations against a loadout
#[derive(Parser)]
pub struct Simulate {
    /// Forms to enter in order (e.g. spider statue hydra)
    #[arg(value_name = "FORM", required = true)]
    forms: Vec<String>,

    /// Transformation power
    #[arg(short, long, default_value_t = 50)]
    power: i32,

    /// Species from species.ron
    #[arg(short, long, default_value = "human")]
    species: String,

    /// Terrain under the character
    #[arg(short, long, default_value = "floor")]
    terrain: String,

    /// Force the transformations (skips stat safety)
    #[arg(long)]
    involuntary: bool,

    /// Start swimming before the first transformation
    #[arg(long)]
    swim: bool,

    /// End with an emergency untransform instead of a regular one
    #[arg(long)]
    emergency: bool,

    /// Write the final state to this file instead of untransforming
    #[arg(long, value_name = "FILE")]
    save: Option<PathBuf>,

    /// Custom data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Simulate {
    pub fn execute(self) -> Result<()> {
        let forms = self
            .forms
            .iter()
            .map(String::as_str)
            .map(parse_form)
            .collect::<Result<Vec<FormId>>>()?;
        let terrain = parse_terrain(&self.terrain)?;

        let factory = content_factory(self.data_dir);
        let config = factory.load_config()?;
        let baseline = factory.load_baseline(&self.species)?;
        let mut equipment = factory.load_equipment()?;
        let env = Env::with_all(&baseline, &terrain, &config, &PcgRng).into_form_env();

        let mut state = ActiveFormState::new();
        let mut messages = MessageLog::new();
        let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

        println!(
            "{} {} on {}",
            style("Species:").bold().cyan(),
            self.species,
            terrain
        );

        if self.swim {
            match controller.merfolk_start_swimming(&env) {
                Ok(_) => println!("{}", style("swimming").green()),
                Err(error) => println!("{} {}", style("cannot swim:").red(), error),
            }
        }

        for form in forms {
            let mut action = TransformAction::new(form, self.power);
            if self.involuntary {
                action = action.involuntary();
            }

            match controller.transform(&env, action) {
                Ok(report) => {
                    println!(
                        "{} {} -> {} for {} turns",
                        style("transform").bold().green(),
                        report.previous,
                        report.form,
                        report.duration
                    );
                    println!("  melded:   {}", format_slots(report.melded));
                    println!("  unmelded: {}", format_slots(report.unmelded));
                    if report.stopped_swimming {
                        println!("  stopped swimming");
                    }
                }
                Err(error) => {
                    println!("{} {} ({})", style("rejected").bold().red(), form, error);
                }
            }
        }

        let view = FormView::new(controller.state(), &baseline);
        println!(
            "{} {} (ac {:+}, {} left)",
            style("Current:").bold().cyan(),
            if view.form().is_none() {
                "natural form".to_string()
            } else {
                view.long_name()
            },
            view.ac_bonus(),
            controller.state().duration()
        );

        if let Some(path) = self.save {
            let bytes = controller.state().to_bytes().context("Failed to encode state")?;
            std::fs::write(&path, &bytes)
                .with_context(|| format!("Failed to write state file: {}", path.display()))?;
            println!(
                "{} {} (root {})",
                style("Saved:").bold().cyan(),
                path.display(),
                format_hex(&controller.state().state_root())
            );
        } else if self.emergency {
            let report = controller.emergency_untransform(&env);
            print_untransform("emergency untransform", &report);
        } else if controller.state().is_transformed() {
            match controller.untransform(&env, false) {
                Ok(report) => print_untransform("untransform", &report),
                Err(error) => println!("{} {}", style("untransform failed:").bold().red(), error),
            }
        }
        drop(controller);

        println!();
        println!("{}", style("Messages:").bold().yellow());
        for (channel, text) in messages.entries() {
            println!("  [{:?}] {}", channel, text);
        }

        Ok(())
    }
}

fn print_untransform(label: &str, report: &UntransformReport) {
    println!(
        "{} {} -> none",
        style(label).bold().green(),
        report.previous
    );
    println!("  unmelded: {}", format_slots(report.unmelded));
    if report.resumed_swimming {
        println!("  resumed swimming");
    } else if report.stopped_swimming {
        println!("  stopped swimming");
    }
}
