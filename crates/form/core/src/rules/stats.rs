//! Stat contributions of a form.
//!
//! Everything here is a pure function of the definition, the caller-supplied
//! context and the power the form was entered with. Combat values (unarmed
//! damage, hit bonus, brand) are handed to the combat system unchanged.

use crate::form::{Brand, FormContext, FormDefinition, ResistFlags, ResistLevel};

/// A stat that transformations can lower.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Stat {
    Strength,
    Dexterity,
}

/// AC granted by a form: `flat + floor(power_ac * power / 100) + floor(xl_ac * level / 100)`.
pub fn ac_bonus(terms: (i32, i32, i32), power: i32, level: i32) -> i32 {
    let (flat, power_ac, xl_ac) = terms;
    let scaled = |coefficient: i32, value: i32| {
        (i64::from(coefficient) * i64::from(value)).div_euclid(100)
    };
    let total = i64::from(flat) + scaled(power_ac, power) + scaled(xl_ac, level);
    total.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Checks that switching from `current` to `next` keeps strength and
/// dexterity at or above `floor`.
///
/// Only stats the switch lowers are checked; a body that is already weak is
/// not punished for keeping its current modifiers. Returns the first stat
/// that would fall too low.
pub fn check_stat_safety(
    current: &FormDefinition,
    next: &FormDefinition,
    ctx: &FormContext<'_>,
    floor: i32,
) -> Result<(), Stat> {
    let checks = [
        (Stat::Strength, ctx.baseline.strength, current.str_mod, next.str_mod),
        (Stat::Dexterity, ctx.baseline.dexterity, current.dex_mod, next.dex_mod),
    ];
    for (stat, base, current_mod, next_mod) in checks {
        let delta = next_mod - current_mod;
        let now = base + current_mod;
        if delta < 0 && now + delta < floor {
            return Err(stat);
        }
    }
    Ok(())
}

/// Derived stat view of one form on one body.
#[derive(Clone, Copy, Debug)]
pub struct StatDeriver<'a> {
    def: &'a FormDefinition,
    ctx: FormContext<'a>,
}

impl<'a> StatDeriver<'a> {
    pub fn new(def: &'a FormDefinition, ctx: FormContext<'a>) -> Self {
        Self { def, ctx }
    }

    pub fn ac_bonus(&self, power: i32) -> i32 {
        ac_bonus(
            self.def.ac_terms(),
            power,
            self.ctx.baseline.experience_level,
        )
    }

    // ===== resistances =====

    pub fn resists(&self) -> ResistFlags {
        self.def.resists(&self.ctx)
    }

    pub fn res_fire(&self) -> ResistLevel {
        self.resists().fire_level()
    }

    pub fn res_cold(&self) -> ResistLevel {
        self.resists().cold_level()
    }

    pub fn res_negative(&self) -> ResistLevel {
        self.resists().negative_level()
    }

    pub fn res_poison(&self) -> ResistLevel {
        self.resists().poison_level()
    }

    pub fn res_elec(&self) -> bool {
        self.resists().contains(ResistFlags::RES_ELEC)
    }

    pub fn res_rot(&self) -> bool {
        self.resists().contains(ResistFlags::RES_ROT)
    }

    pub fn res_acid(&self) -> bool {
        self.resists().contains(ResistFlags::RES_ACID)
    }

    pub fn res_sticky_flame(&self) -> bool {
        self.resists().contains(ResistFlags::RES_STICKY_FLAME)
    }

    // ===== modifiers =====

    /// Stealth multiplier; a form value of 0 keeps the baseline.
    pub fn stealth_multiplier(&self) -> i32 {
        match self.def.stealth_mod() {
            0 => self.ctx.baseline.stealth_multiplier,
            form => form,
        }
    }

    pub fn str_mod(&self) -> i32 {
        self.def.str_mod
    }

    pub fn dex_mod(&self) -> i32 {
        self.def.dex_mod
    }

    pub fn effective_strength(&self) -> i32 {
        self.ctx.baseline.strength + self.def.str_mod
    }

    pub fn effective_dexterity(&self) -> i32 {
        self.ctx.baseline.dexterity + self.def.dex_mod
    }

    /// Hit point multiplier in tenths.
    pub fn hp_mod(&self) -> i32 {
        self.def.hp_mod
    }

    /// Scales `max_hp` by the form's multiplier.
    pub fn scaled_hp(&self, max_hp: i32) -> i32 {
        max_hp * self.def.hp_mod / 10
    }

    pub fn spellcasting_penalty(&self) -> i32 {
        self.def.spellcasting_penalty
    }

    // ===== unarmed combat =====

    pub fn base_unarmed_damage(&self) -> i32 {
        self.def.base_unarmed_damage()
    }

    pub fn unarmed_hit_bonus(&self) -> i32 {
        self.def.unarmed_hit_bonus
    }

    pub fn brand(&self) -> Brand {
        self.def.uc_brand()
    }

    pub fn attack_verb(&self, damage: i32) -> &'static str {
        self.def.uc_attack_verbs.verb_for(damage)
    }
}
