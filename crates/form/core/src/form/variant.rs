//! Per-form specializations of the default derivations.
//!
//! The set is closed: every form is tagged with one variant when the catalog
//! builds it, and each method falls back to the definition's plain data
//! unless the variant has something to say.

use super::definition::FormDefinition;
use super::{FormContext, FormId, MonsterKind, ResistFlags};
use crate::env::{ArmourKind, DraconianColour};

const DEFAULT_UNTRANSFORM_MESSAGE: &str = "Your transformation has ended.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormVariant {
    /// The distinguished "no form" entry.
    Unchanged,
    /// Any form that uses the definition data as-is.
    #[default]
    Plain,
    BladeHands,
    Appendage,
    Lich,
    Shadow,
    Dragon,
    Bat,
    Tree,
    Hydra,
}

impl FormVariant {
    /// Whether the form replaces the character's anatomy.
    ///
    /// Forms that only graft something onto the existing body (or change what
    /// it is made of without reshaping it) keep the species physiology.
    pub const fn changes_physiology(self) -> bool {
        !matches!(
            self,
            FormVariant::Unchanged
                | FormVariant::BladeHands
                | FormVariant::Appendage
                | FormVariant::Lich
                | FormVariant::Shadow
        )
    }

    /// Whether armour of `kind` fits this body, assuming its slots are free.
    pub const fn accepts_armour(self, kind: ArmourKind) -> bool {
        match self {
            // Branches make room for a soft hat but not a rigid helmet.
            FormVariant::Tree => !matches!(kind, ArmourKind::Helmet),
            _ => true,
        }
    }

    pub fn long_name(self, def: &FormDefinition, ctx: &FormContext<'_>) -> String {
        match (self, ctx.hydra_heads) {
            (FormVariant::Hydra, Some(heads)) => format!("{heads}-headed hydra form"),
            _ => def.raw_long_name().to_owned(),
        }
    }

    pub fn description(self, def: &FormDefinition, ctx: &FormContext<'_>) -> String {
        match self {
            FormVariant::BladeHands => {
                format!("a being with blades for {}", ctx.baseline.blade_parts(true))
            }
            FormVariant::Dragon => {
                format!("a fearsome {}", self.equivalent_mons(def, ctx).name())
            }
            FormVariant::Bat if ctx.baseline.vampire => "a vampire bat".to_owned(),
            FormVariant::Hydra => match ctx.hydra_heads {
                Some(heads) => format!("a {heads}-headed hydra"),
                None => def.raw_description().to_owned(),
            },
            _ => def.raw_description().to_owned(),
        }
    }

    pub fn transform_message(
        self,
        def: &FormDefinition,
        previous: FormId,
        ctx: &FormContext<'_>,
    ) -> String {
        match self {
            FormVariant::Unchanged => String::new(),
            FormVariant::BladeHands if previous.is_none() => format!(
                "Your {} turn into razor-sharp scythe blades.",
                ctx.baseline.blade_parts(false)
            ),
            FormVariant::BladeHands => format!(
                "Your body reshapes itself, and your {} become razor-sharp scythe blades.",
                ctx.baseline.blade_parts(false)
            ),
            _ if previous.is_none() => format!("You turn into {}.", self.description(def, ctx)),
            _ => format!(
                "Your body reshapes itself as you turn into {}.",
                self.description(def, ctx)
            ),
        }
    }

    pub fn untransform_message(self, def: &FormDefinition, ctx: &FormContext<'_>) -> String {
        match self {
            FormVariant::BladeHands => format!(
                "Your {} revert to their normal proportions.",
                ctx.baseline.blade_parts(false)
            ),
            _ if def.raw_untransform_message().is_empty() => {
                DEFAULT_UNTRANSFORM_MESSAGE.to_owned()
            }
            _ => def.raw_untransform_message().to_owned(),
        }
    }

    pub fn uc_attack_name(
        self,
        def: &FormDefinition,
        default_name: &str,
        ctx: &FormContext<'_>,
    ) -> String {
        match self {
            FormVariant::BladeHands => {
                format!("Blade {}", capitalise(&ctx.baseline.blade_parts(true)))
            }
            _ if def.raw_uc_attack().is_empty() => default_name.to_owned(),
            _ => def.raw_uc_attack().to_owned(),
        }
    }

    pub fn equivalent_mons(self, def: &FormDefinition, ctx: &FormContext<'_>) -> MonsterKind {
        match self {
            FormVariant::Dragon => dragon_type(ctx.baseline.draconian),
            FormVariant::Bat if ctx.baseline.vampire => MonsterKind::VampireBat,
            _ => def.raw_equivalent_mons(),
        }
    }

    pub fn resists(self, def: &FormDefinition, ctx: &FormContext<'_>) -> ResistFlags {
        let base = def.raw_resists();
        match self {
            FormVariant::Dragon => match dragon_type(ctx.baseline.draconian) {
                MonsterKind::FireDragon => with_fire_and_cold(base, 2, -1),
                MonsterKind::IceDragon => with_fire_and_cold(base, -1, 2),
                _ => base,
            },
            _ => base,
        }
    }
}

/// Dragon a character turns into, by draconian scale colour.
pub fn dragon_type(colour: Option<DraconianColour>) -> MonsterKind {
    match colour {
        Some(DraconianColour::White) => MonsterKind::IceDragon,
        Some(DraconianColour::Green) => MonsterKind::SwampDragon,
        Some(DraconianColour::Yellow) => MonsterKind::GoldenDragon,
        Some(DraconianColour::Grey) => MonsterKind::IronDragon,
        Some(DraconianColour::Black) => MonsterKind::StormDragon,
        Some(DraconianColour::Purple) => MonsterKind::QuicksilverDragon,
        Some(DraconianColour::Mottled) => MonsterKind::MottledDragon,
        Some(DraconianColour::Pale) => MonsterKind::SteamDragon,
        Some(DraconianColour::Red) | None => MonsterKind::FireDragon,
    }
}

fn with_fire_and_cold(base: ResistFlags, fire: i8, cold: i8) -> ResistFlags {
    (base - ResistFlags::FIRE_FIELD - ResistFlags::COLD_FIELD)
        | ResistFlags::fire(fire)
        | ResistFlags::cold(cold)
}

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
