//! Show the derived values of one form for a given species and power.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use console::style;

use form_core::{
    CapabilityResolver, DurationModel, FormContext, FormRegistry, StatDeriver, TerrainFeature,
};

use crate::utils::{content_factory, format_slots, parse_form};

/// Show derived values of one form
#[derive(Parser)]
pub struct Show {
    /// Form name (e.g. statue, ice_beast, hydra)
    #[arg(value_name = "FORM")]
    form: String,

    /// Transformation power
    #[arg(short, long, default_value_t = 50)]
    power: i32,

    /// Experience level of the character
    #[arg(short, long, default_value_t = 1)]
    level: i32,

    /// Species from species.ron
    #[arg(short, long, default_value = "human")]
    species: String,

    /// Hydra head count
    #[arg(long)]
    heads: Option<u8>,

    /// Custom data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Show {
    pub fn execute(self) -> Result<()> {
        let form = parse_form(&self.form)?;
        let factory = content_factory(self.data_dir);
        let mut baseline = factory.load_baseline(&self.species)?;
        baseline.experience_level = self.level;

        let def = FormRegistry::global().lookup(form);
        let ctx = FormContext::new(&baseline).with_hydra_heads(self.heads);
        let caps = CapabilityResolver::new(def, ctx);
        let stats = StatDeriver::new(def, ctx);

        println!(
            "{} {} ({})",
            style("Form:").bold().cyan(),
            def.long_name(&ctx),
            def.description(&ctx)
        );
        println!(
            "{} {}, level {}, power {}",
            style("Species:").bold().cyan(),
            self.species,
            self.level,
            self.power
        );
        println!();

        println!("{}", style("Body:").bold().yellow());
        println!("  Size: {}", caps.size());
        println!("  Blocked slots: {}", format_slots(def.blocked_slots));
        println!("  Equivalent creature: {}", def.equivalent_mons(&ctx).name());
        println!();

        println!("{}", style("Capabilities:").bold().yellow());
        println!("  Fly: {}  Swim: {}  Bleed: {}", caps.can_fly(), caps.can_swim(), caps.can_bleed());
        println!(
            "  Wield: {}  Wear armour: {}  Use wands: {}  Cast: {}",
            caps.can_wield(),
            caps.can_wear(),
            caps.can_use_wand(),
            caps.can_cast()
        );
        println!(
            "  Deep water dangerous: {}  Lava dangerous: {}",
            caps.feat_dangerous(TerrainFeature::DeepWater),
            caps.feat_dangerous(TerrainFeature::Lava)
        );
        println!();

        println!("{}", style("Stats:").bold().yellow());
        println!("  AC bonus: {}", stats.ac_bonus(self.power));
        println!(
            "  Str: {} ({:+})  Dex: {} ({:+})",
            stats.effective_strength(),
            stats.str_mod(),
            stats.effective_dexterity(),
            stats.dex_mod()
        );
        println!("  HP: {}%", stats.hp_mod() * 10);
        println!("  Stealth multiplier: {}", stats.stealth_multiplier());
        println!(
            "  Resists: fire {} cold {} neg {} poison {} elec {}",
            stats.res_fire().0,
            stats.res_cold().0,
            stats.res_negative().0,
            stats.res_poison().0,
            stats.res_elec()
        );
        println!(
            "  Unarmed: {} damage, +{} to hit, {} brand, \"{}\"",
            stats.base_unarmed_damage(),
            stats.unarmed_hit_bonus(),
            stats.brand(),
            def.uc_attack_name("Fists", &ctx)
        );
        println!();

        let (low, high) = DurationModel::bounds(&def.duration, self.power);
        println!("{}", style("Duration:").bold().yellow());
        println!("  {}..={} turns", low, high);

        Ok(())
    }
}
