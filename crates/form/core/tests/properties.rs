//! Property-based tests for the form rules and the controller.

use form_core::rules::ac_bonus;
use form_core::{
    ArmourKind, BaselineProfile, Capability, DurationModel, Env, EquipSlot, EquipSlots,
    FormConfig, FormEnv, FormId, FormRegistry, ItemDescriptor, MemoryEquipment, MessageLog,
    PcgRng, TerrainFeature, TransformAction, TransformationController,
};
use proptest::prelude::*;

prop_compose! {
    fn any_form()(index in 0u8..15) -> FormId {
        FormId::try_from(index).unwrap()
    }
}

prop_compose! {
    fn any_terrain()(variant in 0u8..4) -> TerrainFeature {
        match variant {
            0 => TerrainFeature::Floor,
            1 => TerrainFeature::ShallowWater,
            2 => TerrainFeature::DeepWater,
            _ => TerrainFeature::Lava,
        }
    }
}

fn any_capability() -> impl Strategy<Value = Capability> {
    prop_oneof![
        Just(Capability::Default),
        Just(Capability::Enable),
        Just(Capability::Forbid),
    ]
}

fn env<'a>(
    baseline: &'a BaselineProfile,
    terrain: &'a TerrainFeature,
    config: &'a FormConfig,
) -> FormEnv<'a> {
    Env::with_all(baseline, terrain, config, &PcgRng).into_form_env()
}

fn fully_equipped() -> MemoryEquipment {
    let mut equipment = MemoryEquipment::new();
    equipment.wear(ItemDescriptor::weapon());
    equipment.wear(ItemDescriptor::armour(EquipSlot::Cloak, ArmourKind::Cloak));
    equipment.wear(ItemDescriptor::armour(EquipSlot::Helmet, ArmourKind::Helmet));
    equipment.wear(ItemDescriptor::armour(EquipSlot::Gloves, ArmourKind::Gloves));
    equipment.wear(ItemDescriptor::armour(EquipSlot::Boots, ArmourKind::Boots));
    equipment.wear(ItemDescriptor::armour(EquipSlot::BodyArmour, ArmourKind::Body));
    equipment.wear(ItemDescriptor::ring(EquipSlot::LeftRing));
    equipment.wear(ItemDescriptor::amulet());
    equipment
}

proptest! {
    #[test]
    fn ac_bonus_never_drops_with_more_power_or_level(
        flat in -50i32..50,
        power_ac in 0i32..500,
        xl_ac in 0i32..100,
        level in 1i32..28,
        power in 0i32..200,
        extra in 0i32..200,
    ) {
        let terms = (flat, power_ac, xl_ac);
        prop_assert!(ac_bonus(terms, power, level) <= ac_bonus(terms, power + extra, level));
        prop_assert!(ac_bonus(terms, power, level) <= ac_bonus(terms, power, level + extra));
    }

    #[test]
    fn duration_rolls_stay_within_bounds(
        form in any_form(),
        power in 0i32..1000,
        game_seed in any::<u64>(),
        nonce in any::<u64>(),
    ) {
        let spec = FormRegistry::global().lookup(form).duration;
        let rolled = DurationModel::roll(&spec, power, &PcgRng, game_seed, nonce);
        let (low, high) = DurationModel::bounds(&spec, power);
        prop_assert!(rolled <= spec.max);
        prop_assert!(low <= rolled && rolled <= high);
    }

    #[test]
    fn capability_resolution_is_tri_state(
        capability in any_capability(),
        baseline in any::<bool>(),
    ) {
        let expected = match capability {
            Capability::Default => baseline,
            Capability::Enable => true,
            Capability::Forbid => false,
        };
        prop_assert_eq!(capability.resolve(baseline), expected);
    }

    #[test]
    fn rejected_transforms_change_nothing(
        first in any_form(),
        second in any_form(),
        terrain in any_terrain(),
        strength in 1i32..15,
        dexterity in 1i32..15,
    ) {
        let baseline = BaselineProfile::builder().stats(strength, dexterity).build();
        let config = FormConfig::default();
        let env = env(&baseline, &terrain, &config);

        let mut state = Default::default();
        let mut equipment = fully_equipped();
        let mut messages = MessageLog::new();
        let mut controller =
            TransformationController::new(&mut state, &mut equipment, &mut messages);

        let _ = controller.transform(&env, TransformAction::new(first, 20));
        let before = controller.state().clone();
        let outcome = controller.transform(&env, TransformAction::new(second, 20));
        let after = controller.state().clone();
        drop(controller);

        if outcome.is_err() {
            prop_assert_eq!(after, before.clone());
            prop_assert_eq!(equipment.melded_slots(), before.melded());
        }
    }

    #[test]
    fn every_meld_is_paired_with_an_unmeld(
        forms in prop::collection::vec(any_form(), 1..8),
        emergency in any::<bool>(),
    ) {
        let worn: EquipSlots = fully_equipped().iter().map(|(slot, _, _)| slot).collect();
        let baseline = BaselineProfile::default();
        let terrain = TerrainFeature::Floor;
        let config = FormConfig::default();
        let env = env(&baseline, &terrain, &config);

        let mut state = Default::default();
        let mut equipment = fully_equipped();
        let mut messages = MessageLog::new();
        let mut controller =
            TransformationController::new(&mut state, &mut equipment, &mut messages);

        for form in forms {
            let _ = controller.transform(&env, TransformAction::new(form, 30).involuntary());
            prop_assert_eq!(
                controller.state().melded(),
                controller.state().definition().blocked_slots & worn
            );
        }

        if emergency {
            controller.emergency_untransform(&env);
        } else if controller.state().is_transformed() {
            controller.untransform(&env, true).unwrap();
        }
        prop_assert!(controller.state().melded().is_empty());
        drop(controller);
        prop_assert!(equipment.melded_slots().is_empty());
    }

    #[test]
    fn hydra_heads_stay_in_range(
        requests in prop::collection::vec(-50i32..50, 0..10),
        starting in any::<u8>(),
    ) {
        let baseline = BaselineProfile::default();
        let terrain = TerrainFeature::Floor;
        let config = FormConfig {
            hydra_starting_heads: starting,
            ..FormConfig::default()
        };
        let env = env(&baseline, &terrain, &config);

        let mut state = Default::default();
        let mut equipment = MemoryEquipment::new();
        let mut messages = MessageLog::new();
        let mut controller =
            TransformationController::new(&mut state, &mut equipment, &mut messages);

        controller
            .transform(&env, TransformAction::new(FormId::Hydra, 10))
            .unwrap();
        for heads in requests {
            let set = controller.set_hydra_form_heads(&env, heads).unwrap();
            prop_assert!((1..=20).contains(&set));
            prop_assert_eq!(controller.hydra_form_heads(), Some(set));
        }

        controller
            .transform(&env, TransformAction::new(FormId::Spider, 10))
            .unwrap();
        prop_assert_eq!(controller.hydra_form_heads(), None);
    }
}
