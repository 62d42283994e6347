//! Form definitions and the registry that owns them.
//!
//! A [`FormDefinition`] is an immutable record describing everything a form
//! changes about the character's body. Most behaviour is plain data; the few
//! derivations that differ per form (display text, the creature used for the
//! player glyph, some resistances) are dispatched through [`FormVariant`].
//!
//! # Module Structure
//!
//! - `slots`: equipment slots and the slot groups forms block
//! - `resist`: packed resistance flags and graded levels
//! - `definition`: the definition record and its builder
//! - `variant`: per-form specializations of the default derivations
//! - `catalog`: the concrete rule data for every form
//! - `registry`: process-lifetime lookup from [`FormId`] to definition

mod catalog;
mod definition;
mod registry;
pub mod resist;
pub mod slots;
mod variant;

pub use definition::{FormDefinition, FormDefinitionBuilder};
pub use registry::{FormRegistry, UnknownFormId};
pub use resist::{ResistFlags, ResistLevel};
pub use slots::{EquipSlot, EquipSlots};
pub use variant::FormVariant;

use crate::env::BaselineProfile;

/// Identifier of every form the character can take, including the
/// distinguished "no form" value.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum FormId {
    #[default]
    None,
    Spider,
    BladeHands,
    Statue,
    IceBeast,
    Dragon,
    Lich,
    Bat,
    Pig,
    Appendage,
    Tree,
    Wisp,
    Fungus,
    Shadow,
    Hydra,
}

impl FormId {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, FormId::None)
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Tri-state override a form applies to a baseline capability.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// Defer entirely to the baseline.
    #[default]
    Default,
    /// Always grant the capability.
    Enable,
    /// Always remove the capability.
    Forbid,
}

impl Capability {
    /// Combines the override with the baseline value.
    #[inline]
    pub const fn resolve(self, baseline: bool) -> bool {
        match self {
            Capability::Default => baseline,
            Capability::Enable => true,
            Capability::Forbid => false,
        }
    }

    pub const fn enables(self) -> bool {
        matches!(self, Capability::Enable)
    }

    pub const fn forbids(self) -> bool {
        matches!(self, Capability::Forbid)
    }
}

/// How strongly power lengthens a form's duration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DurationScaling {
    /// No bonus.
    #[default]
    None,
    /// `random(power) / 10`.
    Tenth,
    /// `random(power)`.
    Single,
    /// `random(power) + random(power / 2)`.
    OneAndAHalf,
    /// `random(power) + random(power)`.
    Double,
}

/// Duration of a form in ticks, before and after the power bonus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationSpec {
    pub base: u32,
    pub scaling: DurationScaling,
    pub max: u32,
}

impl DurationSpec {
    pub const fn new(base: u32, scaling: DurationScaling, max: u32) -> Self {
        Self { base, scaling, max }
    }
}

/// Verbs used for unarmed attacks, picked by the damage dealt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttackVerbs {
    pub weak: &'static str,
    pub medium: &'static str,
    pub strong: &'static str,
    pub devastating: &'static str,
}

impl AttackVerbs {
    /// Damage below this uses the weak verb.
    pub const WEAK_BELOW: i32 = 7;
    /// Damage below this uses the medium verb.
    pub const MEDIUM_BELOW: i32 = 18;
    /// Damage below this uses the strong verb; anything else is devastating.
    pub const STRONG_BELOW: i32 = 36;

    /// Generic verbs for forms without a distinct set.
    pub const DEFAULT: Self = Self::new("hit", "hit", "hit", "hit");
    /// Verbs shared by the beast-like forms.
    pub const ANIMAL: Self = Self::new("hit", "bite", "maul", "maul");

    pub const fn new(
        weak: &'static str,
        medium: &'static str,
        strong: &'static str,
        devastating: &'static str,
    ) -> Self {
        Self {
            weak,
            medium,
            strong,
            devastating,
        }
    }

    pub fn verb_for(&self, damage: i32) -> &'static str {
        if damage < Self::WEAK_BELOW {
            self.weak
        } else if damage < Self::MEDIUM_BELOW {
            self.medium
        } else if damage < Self::STRONG_BELOW {
            self.strong
        } else {
            self.devastating
        }
    }
}

impl Default for AttackVerbs {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Body size; forms without a fixed size keep the species size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum SizeCategory {
    Tiny,
    Little,
    Small,
    #[default]
    Medium,
    Large,
    Big,
    Giant,
}

/// Special effect attached to unarmed attacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Brand {
    #[default]
    Normal,
    Venom,
    Freezing,
    Flaming,
    Draining,
    Confusion,
}

/// Display colour of the unarmed "weapon".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Colour {
    #[default]
    LightGrey,
    White,
    Red,
    Green,
    LightGreen,
    Brown,
    Magenta,
    LightBlue,
}

/// Creature whose glyph stands in for the player while transformed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonsterKind {
    #[default]
    Player,
    Spider,
    Statue,
    IceBeast,
    FireDragon,
    IceDragon,
    SwampDragon,
    GoldenDragon,
    IronDragon,
    StormDragon,
    QuicksilverDragon,
    MottledDragon,
    SteamDragon,
    Lich,
    Bat,
    VampireBat,
    Hog,
    AnimatedTree,
    InsubstantialWisp,
    WanderingMushroom,
    PlayerShadow,
    Hydra,
}

impl MonsterKind {
    pub const fn name(self) -> &'static str {
        match self {
            MonsterKind::Player => "player",
            MonsterKind::Spider => "spider",
            MonsterKind::Statue => "statue",
            MonsterKind::IceBeast => "ice beast",
            MonsterKind::FireDragon => "fire dragon",
            MonsterKind::IceDragon => "ice dragon",
            MonsterKind::SwampDragon => "swamp dragon",
            MonsterKind::GoldenDragon => "golden dragon",
            MonsterKind::IronDragon => "iron dragon",
            MonsterKind::StormDragon => "storm dragon",
            MonsterKind::QuicksilverDragon => "quicksilver dragon",
            MonsterKind::MottledDragon => "mottled dragon",
            MonsterKind::SteamDragon => "steam dragon",
            MonsterKind::Lich => "lich",
            MonsterKind::Bat => "bat",
            MonsterKind::VampireBat => "vampire bat",
            MonsterKind::Hog => "hog",
            MonsterKind::AnimatedTree => "animated tree",
            MonsterKind::InsubstantialWisp => "insubstantial wisp",
            MonsterKind::WanderingMushroom => "wandering mushroom",
            MonsterKind::PlayerShadow => "shadow",
            MonsterKind::Hydra => "hydra",
        }
    }
}

/// External state the per-form derivations may read.
///
/// Everything here is supplied by the caller at query time; definitions
/// never hold on to it.
#[derive(Clone, Copy, Debug)]
pub struct FormContext<'a> {
    pub baseline: &'a BaselineProfile,
    /// Current hydra head count, present only while the hydra form is active.
    pub hydra_heads: Option<u8>,
}

impl<'a> FormContext<'a> {
    pub fn new(baseline: &'a BaselineProfile) -> Self {
        Self {
            baseline,
            hydra_heads: None,
        }
    }

    pub fn with_hydra_heads(mut self, heads: Option<u8>) -> Self {
        self.hydra_heads = heads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn capability_resolution_table() {
        for baseline in [false, true] {
            assert!(Capability::Enable.resolve(baseline));
            assert!(!Capability::Forbid.resolve(baseline));
            assert_eq!(Capability::Default.resolve(baseline), baseline);
        }
    }

    #[test]
    fn attack_verbs_follow_damage_tiers() {
        let verbs = AttackVerbs::new("nip", "bite", "gouge", "chomp");
        assert_eq!(verbs.verb_for(0), "nip");
        assert_eq!(verbs.verb_for(6), "nip");
        assert_eq!(verbs.verb_for(7), "bite");
        assert_eq!(verbs.verb_for(18), "gouge");
        assert_eq!(verbs.verb_for(35), "gouge");
        assert_eq!(verbs.verb_for(36), "chomp");
    }

    #[test]
    fn form_ids_parse_from_snake_case() {
        assert_eq!(FormId::from_str("blade_hands"), Ok(FormId::BladeHands));
        assert_eq!(FormId::from_str("ICE_BEAST"), Ok(FormId::IceBeast));
        assert_eq!(FormId::Hydra.to_string(), "hydra");
        assert!(FormId::None.is_none());
    }
}
