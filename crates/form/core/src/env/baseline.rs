//! Baseline oracle: the character's body without any form.
//!
//! The species/race stat system lives outside this crate. It is summarised
//! into a [`BaselineProfile`] that every capability and stat query reads.

use crate::form::SizeCategory;

pub trait BaselineOracle: Send + Sync {
    /// Snapshot of the innate capabilities and stats at query time.
    fn profile(&self) -> BaselineProfile;
}

/// Scale colour of draconian characters; decides the dragon they become.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DraconianColour {
    Red,
    White,
    Green,
    Yellow,
    Grey,
    Black,
    Purple,
    Mottled,
    Pale,
}

/// Innate capabilities and stats of the character absent any form.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaselineProfile {
    /// Species size, used when a form keeps the character's own size.
    pub size: SizeCategory,

    // ===== innate capabilities =====
    pub can_fly: bool,
    pub can_swim: bool,
    pub can_bleed: bool,
    /// Can stand in lava without burning (e.g. innate lava affinity).
    pub likes_lava: bool,

    // ===== active effects outside the form =====
    /// Some non-form source (item, spell) currently keeps the character aloft.
    pub airborne: bool,
    /// Some non-form source lets the character walk on water.
    pub water_walk: bool,

    // ===== stats =====
    pub strength: i32,
    pub dexterity: i32,
    pub experience_level: i32,
    /// Stealth multiplier used when the form does not override it.
    pub stealth_multiplier: i32,

    // ===== species flavour =====
    pub draconian: Option<DraconianColour>,
    pub vampire: bool,
    pub hand_name: String,
    pub foot_name: String,
    /// Felid-style paws; only the front pair turns into blades.
    pub paws: bool,
    pub arm_count: u8,
}

impl BaselineProfile {
    pub fn builder() -> BaselineProfileBuilder {
        BaselineProfileBuilder::default()
    }

    /// Plural body-part name, e.g. "hands" or "paws".
    pub fn hands(&self) -> String {
        pluralise(&self.hand_name)
    }

    /// The body parts blade hands reshape.
    ///
    /// `terse` drops the qualifier for species with more than one pair of
    /// limbs ("front paws", "main tentacles").
    pub fn blade_parts(&self, terse: bool) -> String {
        let parts = self.hands();
        if terse {
            parts
        } else if self.paws {
            format!("front {parts}")
        } else if self.arm_count > 2 {
            format!("main {parts}")
        } else {
            parts
        }
    }
}

impl Default for BaselineProfile {
    /// An ordinary medium-sized humanoid with average stats.
    fn default() -> Self {
        Self {
            size: SizeCategory::Medium,
            can_fly: false,
            can_swim: false,
            can_bleed: true,
            likes_lava: false,
            airborne: false,
            water_walk: false,
            strength: 10,
            dexterity: 10,
            experience_level: 1,
            stealth_multiplier: 15,
            draconian: None,
            vampire: false,
            hand_name: "hand".to_owned(),
            foot_name: "foot".to_owned(),
            paws: false,
            arm_count: 2,
        }
    }
}

impl BaselineOracle for BaselineProfile {
    fn profile(&self) -> BaselineProfile {
        self.clone()
    }
}

pub(crate) fn pluralise(noun: &str) -> String {
    if noun.ends_with('s') || noun.ends_with("sh") || noun.ends_with("ch") {
        format!("{noun}es")
    } else if noun.ends_with('a') {
        format!("{noun}e")
    } else if let Some(stem) = noun.strip_suffix("foot") {
        format!("{stem}feet")
    } else {
        format!("{noun}s")
    }
}

/// Builder for constructing baseline profiles.
#[derive(Default)]
pub struct BaselineProfileBuilder {
    profile: BaselineProfile,
}

impl BaselineProfileBuilder {
    pub fn size(mut self, size: SizeCategory) -> Self {
        self.profile.size = size;
        self
    }

    pub fn flies(mut self, can_fly: bool) -> Self {
        self.profile.can_fly = can_fly;
        self
    }

    pub fn swims(mut self, can_swim: bool) -> Self {
        self.profile.can_swim = can_swim;
        self
    }

    pub fn bleeds(mut self, can_bleed: bool) -> Self {
        self.profile.can_bleed = can_bleed;
        self
    }

    pub fn likes_lava(mut self, likes_lava: bool) -> Self {
        self.profile.likes_lava = likes_lava;
        self
    }

    pub fn airborne(mut self, airborne: bool) -> Self {
        self.profile.airborne = airborne;
        self
    }

    pub fn water_walk(mut self, water_walk: bool) -> Self {
        self.profile.water_walk = water_walk;
        self
    }

    pub fn stats(mut self, strength: i32, dexterity: i32) -> Self {
        self.profile.strength = strength;
        self.profile.dexterity = dexterity;
        self
    }

    pub fn level(mut self, experience_level: i32) -> Self {
        self.profile.experience_level = experience_level;
        self
    }

    pub fn stealth(mut self, multiplier: i32) -> Self {
        self.profile.stealth_multiplier = multiplier;
        self
    }

    pub fn draconian(mut self, colour: DraconianColour) -> Self {
        self.profile.draconian = Some(colour);
        self
    }

    pub fn vampire(mut self, vampire: bool) -> Self {
        self.profile.vampire = vampire;
        self
    }

    pub fn body_parts(mut self, hand: impl Into<String>, foot: impl Into<String>) -> Self {
        self.profile.hand_name = hand.into();
        self.profile.foot_name = foot.into();
        self
    }

    pub fn paws(mut self, paws: bool) -> Self {
        self.profile.paws = paws;
        self
    }

    pub fn arms(mut self, arm_count: u8) -> Self {
        self.profile.arm_count = arm_count;
        self
    }

    pub fn build(self) -> BaselineProfile {
        self.profile
    }
}
