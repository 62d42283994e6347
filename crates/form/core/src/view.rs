//! Read-only queries about the character's current form.

use crate::env::{BaselineProfile, ItemDescriptor, TerrainFeature, pluralise};
use crate::form::{
    Brand, FormContext, FormDefinition, FormId, MonsterKind, ResistFlags, SizeCategory,
};
use crate::rules::{CapabilityResolver, DurationModel, StatDeriver};
use crate::state::ActiveFormState;

/// Everything gameplay code asks about the active form.
///
/// Borrowed from the state and the baseline for the duration of one query
/// batch; nothing is cached.
#[derive(Clone, Copy, Debug)]
pub struct FormView<'a> {
    state: &'a ActiveFormState,
    def: &'static FormDefinition,
    ctx: FormContext<'a>,
}

impl<'a> FormView<'a> {
    pub fn new(state: &'a ActiveFormState, baseline: &'a BaselineProfile) -> Self {
        Self {
            state,
            def: state.definition(),
            ctx: state.context(baseline),
        }
    }

    pub fn form(&self) -> FormId {
        self.state.form()
    }

    pub fn definition(&self) -> &'static FormDefinition {
        self.def
    }

    pub fn capabilities(&self) -> CapabilityResolver<'a> {
        CapabilityResolver::new(self.def, self.ctx)
    }

    pub fn stats(&self) -> StatDeriver<'a> {
        StatDeriver::new(self.def, self.ctx)
    }

    // ===== capabilities =====

    pub fn can_fly(&self) -> bool {
        self.capabilities().can_fly()
    }

    pub fn can_swim(&self) -> bool {
        self.capabilities().can_swim()
    }

    pub fn can_bleed(&self) -> bool {
        self.capabilities().can_bleed()
    }

    pub fn can_wield(&self) -> bool {
        self.capabilities().can_wield()
    }

    pub fn can_wear(&self) -> bool {
        self.capabilities().can_wear()
    }

    pub fn can_wear_item(&self, item: &ItemDescriptor) -> bool {
        self.capabilities().can_wear_item(item)
    }

    pub fn can_use_wand(&self) -> bool {
        self.capabilities().can_use_wand()
    }

    pub fn can_cast(&self) -> bool {
        self.capabilities().can_cast()
    }

    pub fn keeps_mutations(&self) -> bool {
        self.capabilities().keeps_mutations()
    }

    pub fn changed_physiology(&self) -> bool {
        self.capabilities().changed_physiology()
    }

    pub fn feat_dangerous(&self, feature: TerrainFeature) -> bool {
        self.capabilities().feat_dangerous(feature)
    }

    pub fn size(&self) -> SizeCategory {
        self.capabilities().size()
    }

    // ===== stats =====

    /// AC bonus at the power the form was entered with.
    pub fn ac_bonus(&self) -> i32 {
        self.stats().ac_bonus(self.state.power())
    }

    pub fn resists(&self) -> ResistFlags {
        self.stats().resists()
    }

    pub fn stealth_multiplier(&self) -> i32 {
        self.stats().stealth_multiplier()
    }

    pub fn base_unarmed_damage(&self) -> i32 {
        self.stats().base_unarmed_damage()
    }

    pub fn unarmed_hit_bonus(&self) -> i32 {
        self.stats().unarmed_hit_bonus()
    }

    pub fn brand(&self) -> Brand {
        self.stats().brand()
    }

    pub fn hp_mod(&self) -> i32 {
        self.stats().hp_mod()
    }

    /// Range of durations the active form would roll at `power`.
    pub fn duration_bounds(&self, power: i32) -> (u32, u32) {
        DurationModel::bounds(&self.def.duration, power)
    }

    // ===== text =====

    /// Status light name; empty without a form.
    pub fn short_name(&self) -> &'static str {
        self.def.short_name
    }

    pub fn long_name(&self) -> String {
        self.def.long_name(&self.ctx)
    }

    pub fn description(&self) -> String {
        self.def.description(&self.ctx)
    }

    /// "You are ..." for status text, or "You were ..." for a character dump.
    pub fn status_description(&self, past_tense: bool) -> String {
        self.def.status_description(&self.ctx, past_tense)
    }

    pub fn untransform_message(&self) -> String {
        self.def.untransform_message(&self.ctx)
    }

    pub fn uc_attack_name(&self, default_name: &str) -> String {
        self.def.uc_attack_name(default_name, &self.ctx)
    }

    pub fn equivalent_mons(&self) -> MonsterKind {
        self.def.equivalent_mons(&self.ctx)
    }

    /// Singular hand name; the species name unless the form renames it.
    pub fn hand_name(&self) -> &str {
        match self.def.hand_name {
            "" => self.ctx.baseline.hand_name.as_str(),
            name => name,
        }
    }

    pub fn foot_name(&self) -> &str {
        match self.def.foot_name {
            "" => self.ctx.baseline.foot_name.as_str(),
            name => name,
        }
    }

    pub fn hands(&self) -> String {
        pluralise(self.hand_name())
    }
}
