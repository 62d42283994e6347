//! Effective capabilities of a form on a given body.
//!
//! The resolver only answers for what the form itself grants or removes.
//! Flight from items, spells and similar sources is the caller's business,
//! except where the terrain check needs to know the character is already
//! aloft.

use crate::env::{ItemDescriptor, TerrainFeature};
use crate::form::{EquipSlot, EquipSlots, FormContext, FormDefinition, SizeCategory};

/// Combines a form's overrides with the character's baseline.
#[derive(Clone, Copy, Debug)]
pub struct CapabilityResolver<'a> {
    def: &'a FormDefinition,
    ctx: FormContext<'a>,
}

impl<'a> CapabilityResolver<'a> {
    pub fn new(def: &'a FormDefinition, ctx: FormContext<'a>) -> Self {
        Self { def, ctx }
    }

    pub fn definition(&self) -> &'a FormDefinition {
        self.def
    }

    /// Body size while in the form; forms without a size keep the species'.
    pub fn size(&self) -> SizeCategory {
        self.def.size.unwrap_or(self.ctx.baseline.size)
    }

    // ===== tri-state capabilities =====

    pub fn can_fly(&self) -> bool {
        self.def.can_fly().resolve(self.ctx.baseline.can_fly)
    }

    /// Giant bodies wade through deep water even without a swimming baseline.
    pub fn can_swim(&self) -> bool {
        let innate = self.ctx.baseline.can_swim || self.size() >= SizeCategory::Giant;
        self.def.can_swim().resolve(innate)
    }

    pub fn can_bleed(&self) -> bool {
        self.def.can_bleed.resolve(self.ctx.baseline.can_bleed)
    }

    // ===== slot-derived capabilities =====

    pub fn can_wield(&self) -> bool {
        self.def.slot_available(EquipSlot::Weapon)
    }

    /// True if at least one armour slot remains usable.
    pub fn can_wear(&self) -> bool {
        !self.def.all_blocked(EquipSlots::ARMOUR)
    }

    pub fn can_use_wand(&self) -> bool {
        !self.def.all_blocked(EquipSlots::HANDS)
    }

    pub fn can_wear_item(&self, item: &ItemDescriptor) -> bool {
        self.def.can_wear_item(item)
    }

    // ===== physiology =====

    pub fn can_cast(&self) -> bool {
        self.def.can_cast
    }

    pub fn keeps_mutations(&self) -> bool {
        self.def.keeps_mutations
    }

    pub fn changed_physiology(&self) -> bool {
        self.def.changed_physiology()
    }

    pub fn breathes(&self) -> bool {
        self.def.breathes
    }

    pub fn likes_water(&self) -> bool {
        self.can_swim()
    }

    /// Lava affinity survives only forms that keep the species' anatomy.
    pub fn likes_lava(&self) -> bool {
        self.ctx.baseline.likes_lava && !self.changed_physiology()
    }

    /// Whether standing on `feature` would harm the character in this form.
    pub fn feat_dangerous(&self, feature: TerrainFeature) -> bool {
        let aloft = self.can_fly() || (self.ctx.baseline.airborne && !self.def.forbids_flight());
        if aloft {
            return false;
        }
        match feature {
            TerrainFeature::Lava => !self.likes_lava(),
            TerrainFeature::DeepWater => !self.likes_water() && !self.ctx.baseline.water_walk,
            TerrainFeature::Floor | TerrainFeature::ShallowWater => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ArmourKind, BaselineProfile};
    use crate::form::{FormId, FormRegistry};

    fn resolver<'a>(id: FormId, baseline: &'a BaselineProfile) -> CapabilityResolver<'a> {
        CapabilityResolver::new(FormRegistry::global().lookup(id), FormContext::new(baseline))
    }

    #[test]
    fn forbid_beats_a_swimming_baseline() {
        let merfolk = BaselineProfile::builder().swims(true).build();
        assert!(!resolver(FormId::Statue, &merfolk).can_swim());
        assert!(resolver(FormId::None, &merfolk).can_swim());
        assert!(resolver(FormId::IceBeast, &BaselineProfile::default()).can_swim());
    }

    #[test]
    fn bleeding_follows_the_form_override() {
        let human = BaselineProfile::default();
        let vampire = BaselineProfile::builder().vampire(true).bleeds(false).build();

        assert!(!resolver(FormId::Statue, &human).can_bleed());
        assert!(!resolver(FormId::Lich, &human).can_bleed());
        assert!(resolver(FormId::Pig, &human).can_bleed());
        assert!(!resolver(FormId::Pig, &vampire).can_bleed());
        assert!(resolver(FormId::Spider, &vampire).can_bleed());
        assert!(!resolver(FormId::None, &vampire).can_bleed());
    }

    #[test]
    fn flight_follows_the_form_override() {
        let human = BaselineProfile::default();
        let djinni = BaselineProfile::builder().flies(true).build();

        assert!(resolver(FormId::Bat, &human).can_fly());
        assert!(!resolver(FormId::Pig, &human).can_fly());
        assert!(resolver(FormId::Pig, &djinni).can_fly());
        assert!(!resolver(FormId::Tree, &djinni).can_fly());
    }

    #[test]
    fn giant_forms_wade() {
        let human = BaselineProfile::default();
        assert!(resolver(FormId::Dragon, &human).can_swim());
        assert!(!resolver(FormId::Pig, &human).can_swim());
    }

    #[test]
    fn slot_derived_capabilities() {
        let human = BaselineProfile::default();

        let blades = resolver(FormId::BladeHands, &human);
        assert!(!blades.can_wield());
        assert!(blades.can_wear());
        assert!(!blades.can_use_wand());

        let wisp = resolver(FormId::Wisp, &human);
        assert!(!wisp.can_wear());

        let statue = resolver(FormId::Statue, &human);
        assert!(statue.can_wield());
        assert!(statue.can_use_wand());
    }

    #[test]
    fn tree_wears_hats() {
        let human = BaselineProfile::default();
        let tree = resolver(FormId::Tree, &human);
        assert!(tree.can_wear_item(&ItemDescriptor::armour(EquipSlot::Helmet, ArmourKind::Hat)));
        assert!(
            !tree.can_wear_item(&ItemDescriptor::armour(EquipSlot::Helmet, ArmourKind::Helmet))
        );
    }

    #[test]
    fn deep_water_and_lava() {
        let human = BaselineProfile::default();
        assert!(resolver(FormId::Statue, &human).feat_dangerous(TerrainFeature::DeepWater));
        assert!(!resolver(FormId::IceBeast, &human).feat_dangerous(TerrainFeature::DeepWater));
        assert!(!resolver(FormId::Dragon, &human).feat_dangerous(TerrainFeature::Lava));
        assert!(resolver(FormId::Pig, &human).feat_dangerous(TerrainFeature::Lava));
        assert!(!resolver(FormId::Pig, &human).feat_dangerous(TerrainFeature::ShallowWater));
    }

    #[test]
    fn outside_flight_helps_unless_forbidden() {
        let levitating = BaselineProfile::builder().airborne(true).build();
        assert!(!resolver(FormId::Statue, &levitating).feat_dangerous(TerrainFeature::DeepWater));
        assert!(resolver(FormId::Tree, &levitating).feat_dangerous(TerrainFeature::DeepWater));
    }

    #[test]
    fn lava_affinity_needs_unchanged_anatomy() {
        let lava_born = BaselineProfile::builder().likes_lava(true).build();
        assert!(resolver(FormId::Lich, &lava_born).likes_lava());
        assert!(!resolver(FormId::Pig, &lava_born).likes_lava());
    }
}
