//! The immutable rule record for a single form.

use super::variant::FormVariant;
use super::{
    AttackVerbs, Brand, Capability, Colour, DurationSpec, FormContext, FormId, MonsterKind,
    ResistFlags, SizeCategory,
};
use crate::env::{ItemDescriptor, ItemKind};
use crate::form::{EquipSlot, EquipSlots};

/// Complete rule set for one form.
///
/// Definitions are built once by the registry and only ever handed out by
/// shared reference. Fields that a [`FormVariant`] may reinterpret are kept
/// private and read through methods, so callers always see the specialized
/// value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormDefinition {
    pub id: FormId,
    pub variant: FormVariant,

    /// Status light text ("Spider"); empty for none.
    pub short_name: &'static str,
    /// Name used for debugging and alias lookup ("spider").
    pub wiz_name: &'static str,
    long_name: &'static str,
    description: &'static str,
    untransform_message: &'static str,

    /// Slots this form makes unusable.
    pub blocked_slots: EquipSlots,
    /// `None` keeps the species size.
    pub size: Option<SizeCategory>,
    /// Body-part names; empty defers to the species.
    pub hand_name: &'static str,
    pub foot_name: &'static str,

    pub str_mod: i32,
    pub dex_mod: i32,
    /// Hit point multiplier in tenths (10 = unchanged).
    pub hp_mod: i32,
    stealth_mod: i32,

    resists: ResistFlags,
    flat_ac: i32,
    power_ac: i32,
    xl_ac: i32,

    pub can_cast: bool,
    pub spellcasting_penalty: i32,
    pub unarmed_hit_bonus: i32,
    base_unarmed_damage: i32,
    uc_brand: Brand,
    pub uc_colour: Colour,
    uc_attack: &'static str,
    pub uc_attack_verbs: AttackVerbs,

    can_fly: Capability,
    can_swim: Capability,
    pub can_bleed: Capability,
    pub breathes: bool,
    pub keeps_mutations: bool,

    pub shout_verb: &'static str,
    pub shout_volume_modifier: i32,

    pub duration: DurationSpec,
    equivalent_mons: MonsterKind,
}

impl FormDefinition {
    pub fn builder(id: FormId) -> FormDefinitionBuilder {
        FormDefinitionBuilder::new(id)
    }

    // ===== slots =====

    #[inline]
    pub fn slot_available(&self, slot: EquipSlot) -> bool {
        !self.blocked_slots.contains(slot.flag())
    }

    /// True when every slot of `group` is blocked.
    #[inline]
    pub fn all_blocked(&self, group: EquipSlots) -> bool {
        self.blocked_slots.covers(group)
    }

    /// Whether an item could be put on while in this form.
    ///
    /// Jewellery only needs its slot. Armour additionally has to suit the
    /// form's body, and suits covering several slots need all of them free.
    pub fn can_wear_item(&self, item: &ItemDescriptor) -> bool {
        if self.blocked_slots.intersects(item.covered_slots()) {
            return false;
        }
        match item.kind {
            ItemKind::Armour(kind) => self.variant.accepts_armour(kind),
            ItemKind::Weapon | ItemKind::Ring | ItemKind::Amulet => true,
        }
    }

    // ===== text =====

    pub fn long_name(&self, ctx: &FormContext<'_>) -> String {
        self.variant.long_name(self, ctx)
    }

    pub fn description(&self, ctx: &FormContext<'_>) -> String {
        self.variant.description(self, ctx)
    }

    /// Full sentence for status and character dump text, e.g.
    /// "You were a venomous arachnid creature."; empty for the natural form.
    pub fn status_description(&self, ctx: &FormContext<'_>, past_tense: bool) -> String {
        if self.variant == FormVariant::Unchanged {
            return String::new();
        }
        let verb = if past_tense { "were" } else { "are" };
        format!("You {verb} {}.", self.description(ctx))
    }

    /// Message shown when entering this form from `previous`.
    pub fn transform_message(&self, previous: FormId, ctx: &FormContext<'_>) -> String {
        self.variant.transform_message(self, previous, ctx)
    }

    pub fn untransform_message(&self, ctx: &FormContext<'_>) -> String {
        self.variant.untransform_message(self, ctx)
    }

    /// Name of the unarmed "weapon"; `default_name` is used when the form
    /// does not rename it.
    pub fn uc_attack_name(&self, default_name: &str, ctx: &FormContext<'_>) -> String {
        self.variant.uc_attack_name(self, default_name, ctx)
    }

    pub fn equivalent_mons(&self, ctx: &FormContext<'_>) -> MonsterKind {
        self.variant.equivalent_mons(self, ctx)
    }

    // ===== raw terms, read by the variants and the stat deriver =====

    pub(crate) fn raw_long_name(&self) -> &'static str {
        self.long_name
    }

    pub(crate) fn raw_description(&self) -> &'static str {
        self.description
    }

    pub(crate) fn raw_untransform_message(&self) -> &'static str {
        self.untransform_message
    }

    pub(crate) fn raw_uc_attack(&self) -> &'static str {
        self.uc_attack
    }

    pub(crate) fn raw_equivalent_mons(&self) -> MonsterKind {
        self.equivalent_mons
    }

    pub(crate) fn raw_resists(&self) -> ResistFlags {
        self.resists
    }

    /// Resistances granted by the form, after per-form adjustments.
    pub fn resists(&self, ctx: &FormContext<'_>) -> ResistFlags {
        self.variant.resists(self, ctx)
    }

    /// Whether the form replaces the character's anatomy.
    pub fn changed_physiology(&self) -> bool {
        self.variant.changes_physiology()
    }

    /// `(flat, power-scaled, level-scaled)` AC terms.
    pub fn ac_terms(&self) -> (i32, i32, i32) {
        (self.flat_ac, self.power_ac, self.xl_ac)
    }

    pub fn stealth_mod(&self) -> i32 {
        self.stealth_mod
    }

    pub fn base_unarmed_damage(&self) -> i32 {
        self.base_unarmed_damage
    }

    pub fn uc_brand(&self) -> Brand {
        self.uc_brand
    }

    pub fn can_fly(&self) -> Capability {
        self.can_fly
    }

    pub fn can_swim(&self) -> Capability {
        self.can_swim
    }

    pub fn enables_flight(&self) -> bool {
        self.can_fly.enables()
    }

    pub fn forbids_flight(&self) -> bool {
        self.can_fly.forbids()
    }

    pub fn forbids_swimming(&self) -> bool {
        self.can_swim.forbids()
    }
}

/// Builder for form definitions.
///
/// Starts from the values of the "no form" entry: nothing blocked, no stat
/// changes, every capability deferred to the baseline.
#[derive(Clone, Debug)]
pub struct FormDefinitionBuilder {
    def: FormDefinition,
}

impl FormDefinitionBuilder {
    pub fn new(id: FormId) -> Self {
        Self {
            def: FormDefinition {
                id,
                variant: FormVariant::Plain,
                short_name: "",
                wiz_name: "",
                long_name: "",
                description: "",
                untransform_message: "",
                blocked_slots: EquipSlots::empty(),
                size: None,
                hand_name: "",
                foot_name: "",
                str_mod: 0,
                dex_mod: 0,
                hp_mod: 10,
                stealth_mod: 0,
                resists: ResistFlags::empty(),
                flat_ac: 0,
                power_ac: 0,
                xl_ac: 0,
                can_cast: true,
                spellcasting_penalty: 0,
                unarmed_hit_bonus: 0,
                base_unarmed_damage: 0,
                uc_brand: Brand::Normal,
                uc_colour: Colour::LightGrey,
                uc_attack: "",
                uc_attack_verbs: AttackVerbs::DEFAULT,
                can_fly: Capability::Default,
                can_swim: Capability::Default,
                can_bleed: Capability::Default,
                breathes: true,
                keeps_mutations: true,
                shout_verb: "",
                shout_volume_modifier: 0,
                duration: DurationSpec::new(0, super::DurationScaling::None, 0),
                equivalent_mons: MonsterKind::Player,
            },
        }
    }

    pub fn variant(mut self, variant: FormVariant) -> Self {
        self.def.variant = variant;
        self
    }

    /// Short, long and debug names.
    pub fn names(
        mut self,
        short_name: &'static str,
        long_name: &'static str,
        wiz_name: &'static str,
    ) -> Self {
        self.def.short_name = short_name;
        self.def.long_name = long_name;
        self.def.wiz_name = wiz_name;
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.def.description = description;
        self
    }

    pub fn untransform_message(mut self, message: &'static str) -> Self {
        self.def.untransform_message = message;
        self
    }

    pub fn blocks(mut self, slots: EquipSlots) -> Self {
        self.def.blocked_slots = slots;
        self
    }

    pub fn resists(mut self, resists: ResistFlags) -> Self {
        self.def.resists = resists;
        self
    }

    pub fn duration(mut self, duration: DurationSpec) -> Self {
        self.def.duration = duration;
        self
    }

    pub fn stat_mods(mut self, str_mod: i32, dex_mod: i32) -> Self {
        self.def.str_mod = str_mod;
        self.def.dex_mod = dex_mod;
        self
    }

    pub fn size(mut self, size: SizeCategory) -> Self {
        self.def.size = Some(size);
        self
    }

    pub fn hp_mod(mut self, hp_mod: i32) -> Self {
        self.def.hp_mod = hp_mod;
        self
    }

    pub fn stealth_mod(mut self, stealth_mod: i32) -> Self {
        self.def.stealth_mod = stealth_mod;
        self
    }

    /// Flat, power-scaled (per 100 power) and level-scaled (per 100 levels)
    /// AC terms.
    pub fn ac(mut self, flat_ac: i32, power_ac: i32, xl_ac: i32) -> Self {
        self.def.flat_ac = flat_ac;
        self.def.power_ac = power_ac;
        self.def.xl_ac = xl_ac;
        self
    }

    pub fn casting(mut self, can_cast: bool, spellcasting_penalty: i32) -> Self {
        self.def.can_cast = can_cast;
        self.def.spellcasting_penalty = spellcasting_penalty;
        self
    }

    /// Unarmed accuracy bonus and base damage.
    pub fn unarmed(mut self, hit_bonus: i32, base_damage: i32) -> Self {
        self.def.unarmed_hit_bonus = hit_bonus;
        self.def.base_unarmed_damage = base_damage;
        self
    }

    pub fn attack(
        mut self,
        brand: Brand,
        colour: Colour,
        name: &'static str,
        verbs: AttackVerbs,
    ) -> Self {
        self.def.uc_brand = brand;
        self.def.uc_colour = colour;
        self.def.uc_attack = name;
        self.def.uc_attack_verbs = verbs;
        self
    }

    pub fn capabilities(mut self, fly: Capability, swim: Capability, bleed: Capability) -> Self {
        self.def.can_fly = fly;
        self.def.can_swim = swim;
        self.def.can_bleed = bleed;
        self
    }

    pub fn physiology(mut self, breathes: bool, keeps_mutations: bool) -> Self {
        self.def.breathes = breathes;
        self.def.keeps_mutations = keeps_mutations;
        self
    }

    pub fn shout(mut self, verb: &'static str, volume_modifier: i32) -> Self {
        self.def.shout_verb = verb;
        self.def.shout_volume_modifier = volume_modifier;
        self
    }

    pub fn body_parts(mut self, hand_name: &'static str, foot_name: &'static str) -> Self {
        self.def.hand_name = hand_name;
        self.def.foot_name = foot_name;
        self
    }

    pub fn equivalent_mons(mut self, mons: MonsterKind) -> Self {
        self.def.equivalent_mons = mons;
        self
    }

    pub fn build(self) -> FormDefinition {
        self.def
    }
}
