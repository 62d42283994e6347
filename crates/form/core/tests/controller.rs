use form_core::rules::ac_bonus;
use form_core::{
    ArmourKind, BaselineProfile, DurationStatus, Env, EquipSlot, EquipSlots, EquipmentError,
    EquipmentStore, FormConfig, FormEnv, FormId, FormView, ItemDescriptor, MemoryEquipment,
    MessageChannel, MessageLog, PcgRng, RngOracle, Stat, TerrainFeature, TransformAction,
    TransformError, TransformationController, TransitionPhase,
};
use std::panic::{AssertUnwindSafe, catch_unwind};

/// Always draws the largest legal value.
struct MaxRng;

impl RngOracle for MaxRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        u32::MAX
    }

    fn random2(&self, _seed: u64, n: i32) -> i32 {
        (n - 1).max(0)
    }
}

/// Fails every draw.
struct BrokenRng;

impl RngOracle for BrokenRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        panic!("rng unavailable")
    }
}

fn env<'a>(
    baseline: &'a BaselineProfile,
    terrain: &'a TerrainFeature,
    config: &'a FormConfig,
) -> FormEnv<'a> {
    Env::with_all(baseline, terrain, config, &PcgRng).into_form_env()
}

fn armoured() -> MemoryEquipment {
    let mut equipment = MemoryEquipment::new();
    equipment.wear(ItemDescriptor::weapon());
    equipment.wear(ItemDescriptor::armour(EquipSlot::BodyArmour, ArmourKind::Body));
    equipment.wear(ItemDescriptor::armour(EquipSlot::Gloves, ArmourKind::Gloves));
    equipment.wear(ItemDescriptor::armour(EquipSlot::Boots, ArmourKind::Boots));
    equipment.wear(ItemDescriptor::amulet());
    equipment
}

#[test]
fn ac_bonus_scales_with_power() {
    assert_eq!(ac_bonus((5, 200, 0), 50, 10), 105);
    assert_eq!(ac_bonus((5, 200, 0), 0, 10), 5);
}

#[test]
fn statue_melds_body_armour_and_untransform_restores_it() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();

    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);
    let report = controller
        .transform(&env, TransformAction::new(FormId::Statue, 50))
        .expect("statue form should be allowed on open floor");
    assert!(report.applied);
    assert_eq!(report.previous, FormId::None);
    assert_eq!(
        report.melded,
        EquipSlots::BODY_ARMOUR | EquipSlots::GLOVES | EquipSlots::BOOTS
    );
    assert!(report.unmelded.is_empty());
    assert!(report.duration > 0 && report.duration <= 100);

    let report = controller.untransform(&env, false).expect("statue should end");
    assert_eq!(report.previous, FormId::Statue);
    assert_eq!(
        report.unmelded,
        EquipSlots::BODY_ARMOUR | EquipSlots::GLOVES | EquipSlots::BOOTS
    );
    assert!(report.reenter_cell);
    drop(controller);

    assert!(equipment.melded_slots().is_empty());
    assert!(state.melded().is_empty());
    assert_eq!(state.form(), FormId::None);
    assert_eq!(state.nonce(), 2);
    assert_eq!(
        messages.entries().last(),
        Some(&(
            MessageChannel::Untransform,
            "You revert to your normal fleshy form.".to_owned()
        ))
    );
}

#[test]
fn switching_forms_only_unmelds_what_the_new_form_frees() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller
        .transform(&env, TransformAction::new(FormId::Spider, 20))
        .expect("spider form");
    let report = controller
        .transform(&env, TransformAction::new(FormId::Statue, 20))
        .expect("spider to statue");

    assert_eq!(report.previous, FormId::Spider);
    assert_eq!(report.unmelded, EquipSlots::WEAPON);
    assert!(report.melded.is_empty());
    drop(controller);

    assert_eq!(
        equipment.melded_slots(),
        EquipSlots::BODY_ARMOUR | EquipSlots::GLOVES | EquipSlots::BOOTS
    );
    assert!(!equipment.is_melded(EquipSlot::Amulet));
    assert_eq!(
        messages.last(),
        Some("Your body reshapes itself as you turn into a living statue of rough stone.")
    );
}

#[test]
fn same_form_is_rejected_without_changes() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller
        .transform(&env, TransformAction::new(FormId::Spider, 20))
        .expect("spider form");
    let before = controller.state().clone();

    let error = controller
        .transform(&env, TransformAction::new(FormId::Spider, 80))
        .expect_err("repeating the active form must fail");
    assert_eq!(error.phase, TransitionPhase::PreValidate);
    assert!(matches!(error.error, TransformError::AlreadyActive { .. }));
    assert_eq!(controller.state(), &before);
}

#[test]
fn transform_to_no_form_is_invalid() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let error = controller
        .transform(&env, TransformAction::new(FormId::None, 10))
        .expect_err("no form is not a transform target");
    assert!(matches!(error.error, TransformError::InvalidTarget { .. }));

    let error = controller
        .untransform(&env, true)
        .expect_err("nothing to untransform");
    assert!(matches!(error.error, TransformError::NotTransformed { .. }));
    drop(controller);
    assert!(messages.is_empty());
}

#[test]
fn dangerous_terrain_blocks_the_transform() {
    let baseline = BaselineProfile::default();
    let config = FormConfig::default();
    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let lava = TerrainFeature::Lava;
    let error = controller
        .transform(&env(&baseline, &lava, &config), TransformAction::new(FormId::Spider, 10))
        .expect_err("spiders burn in lava");
    assert!(matches!(
        error.error,
        TransformError::DangerousFeature { feature: TerrainFeature::Lava, .. }
    ));

    // Dragons fly, so lava underneath is harmless.
    controller
        .transform(&env(&baseline, &lava, &config), TransformAction::new(FormId::Dragon, 10))
        .expect("dragon form over lava");

    let deep = TerrainFeature::DeepWater;
    let error = controller
        .transform(&env(&baseline, &deep, &config), TransformAction::new(FormId::Statue, 10))
        .expect_err("statues sink");
    assert!(matches!(error.error, TransformError::DangerousFeature { .. }));
    assert_eq!(controller.current_form(), FormId::Dragon);
}

#[test]
fn stat_safety_applies_to_voluntary_transforms_only() {
    let baseline = BaselineProfile::builder().stats(10, 2).build();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let error = controller
        .transform(&env, TransformAction::new(FormId::Statue, 10))
        .expect_err("statue form would drop dexterity to zero");
    assert!(matches!(
        error.error,
        TransformError::StatUnsafe { stat: Stat::Dexterity, .. }
    ));

    let report = controller
        .transform(&env, TransformAction::new(FormId::Statue, 10).involuntary())
        .expect("forced transforms ignore stat safety");
    assert!(report.applied);
}

#[test]
fn dry_run_changes_nothing() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let report = controller
        .transform(&env, TransformAction::new(FormId::Bat, 30).dry_run())
        .expect("bat form is allowed");
    assert!(!report.applied);
    assert_eq!(report.form, FormId::Bat);
    drop(controller);

    assert_eq!(state, Default::default());
    assert!(equipment.melded_slots().is_empty());
    assert!(messages.is_empty());
}

#[test]
fn refused_meld_rolls_back_every_slot() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    equipment.fuse(EquipSlot::BodyArmour);
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let error = controller
        .transform(&env, TransformAction::new(FormId::Statue, 10))
        .expect_err("body armour refuses to meld");
    assert_eq!(error.phase, TransitionPhase::Apply);
    assert!(matches!(
        error.error,
        TransformError::Equipment {
            error: EquipmentError::Refused(EquipSlot::BodyArmour),
            ..
        }
    ));
    drop(controller);

    assert!(equipment.melded_slots().is_empty());
    assert_eq!(state.form(), FormId::None);
    assert_eq!(state.nonce(), 0);
    assert!(messages.is_empty());
}

#[test]
fn hydra_heads_clamp_and_vanish_on_exit() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig {
        hydra_starting_heads: 3,
        ..FormConfig::default()
    };
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let error = controller
        .set_hydra_form_heads(&env, 4)
        .expect_err("no hydra form yet");
    assert!(matches!(error.error, TransformError::HydraFormInactive { .. }));

    controller
        .transform(&env, TransformAction::new(FormId::Hydra, 40))
        .expect("hydra form");
    assert_eq!(controller.hydra_form_heads(), Some(3));

    assert_eq!(controller.set_hydra_form_heads(&env, 20), Ok(20));
    assert_eq!(controller.set_hydra_form_heads(&env, 21), Ok(20));
    assert_eq!(controller.set_hydra_form_heads(&env, -4), Ok(1));
    assert_eq!(controller.set_hydra_form_heads(&env, 7), Ok(7));
    assert_eq!(controller.hydra_form_heads(), Some(7));

    controller.untransform(&env, true).expect("leave hydra form");
    assert_eq!(controller.hydra_form_heads(), None);
    drop(controller);

    assert!(
        messages
            .texts()
            .any(|text| text == "You turn into a 3-headed hydra.")
    );
}

#[test]
fn hydra_view_names_the_head_count() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);
    controller
        .transform(&env, TransformAction::new(FormId::Hydra, 40))
        .expect("hydra form");
    controller.set_hydra_form_heads(&env, 5).expect("five heads");
    drop(controller);

    let view = FormView::new(&state, &baseline);
    assert_eq!(view.long_name(), "5-headed hydra form");
    assert_eq!(view.description(), "a 5-headed hydra");
    assert!(view.can_swim());
    assert!(!view.can_wield());
}

#[test]
fn merfolk_swimming_melds_boots_and_survives_compatible_forms() {
    let baseline = BaselineProfile::builder().swims(true).build();
    let terrain = TerrainFeature::ShallowWater;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    assert_eq!(controller.merfolk_start_swimming(&env), Ok(true));
    assert_eq!(controller.merfolk_start_swimming(&env), Ok(false));
    assert!(controller.state().is_swimming());
    assert_eq!(controller.state().melded(), EquipSlots::BOOTS);

    // Ice beasts swim, so the tail stays.
    let report = controller
        .transform(&env, TransformAction::new(FormId::IceBeast, 20))
        .expect("ice beast form");
    assert!(!report.stopped_swimming);
    assert!(controller.state().is_swimming());
    assert!(!report.melded.contains(EquipSlots::BOOTS));

    // Statues cannot swim; boots stay melded because statues block them.
    let report = controller
        .transform(&env, TransformAction::new(FormId::Statue, 20))
        .expect("statue form in shallow water");
    assert!(report.stopped_swimming);
    assert!(!controller.state().is_swimming());
    assert!(controller.state().melded().contains(EquipSlots::BOOTS));

    assert_eq!(controller.merfolk_stop_swimming(&env), Ok(false));
    let error = controller
        .merfolk_start_swimming(&env)
        .expect_err("statues cannot swim");
    assert!(matches!(error.error, TransformError::SwimmingUnavailable { .. }));

    controller.untransform(&env, false).expect("leave statue form");
    drop(controller);

    assert!(equipment.melded_slots().is_empty());
    assert!(
        messages
            .entries()
            .iter()
            .any(|(channel, text)| *channel == MessageChannel::Status
                && text == "Your tail turns into legs as you leave the water.")
    );
}

#[test]
fn stop_swimming_unmelds_boots() {
    let baseline = BaselineProfile::builder().swims(true).build();
    let terrain = TerrainFeature::DeepWater;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller.merfolk_start_swimming(&env).expect("start swimming");
    assert_eq!(controller.merfolk_stop_swimming(&env), Ok(true));
    drop(controller);

    assert!(!equipment.is_melded(EquipSlot::Boots));
    assert!(state.melded().is_empty());
    assert_eq!(
        messages.texts().collect::<Vec<_>>(),
        vec![
            "Your legs become a tail as you enter the water.",
            "Your tail turns into legs as you leave the water.",
        ]
    );
}

#[test]
fn emergency_untransform_resumes_swimming_in_water() {
    let baseline = BaselineProfile::builder().swims(true).build();
    let terrain = TerrainFeature::DeepWater;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller
        .transform(&env, TransformAction::new(FormId::IceBeast, 30))
        .expect("ice beasts swim in deep water");
    let nonce = controller.state().nonce();

    let report = controller.emergency_untransform(&env);
    assert_eq!(report.previous, FormId::IceBeast);
    assert!(report.resumed_swimming);
    assert!(!report.reenter_cell);
    assert!(
        report
            .unmelded
            .contains(EquipSlots::BODY_ARMOUR | EquipSlots::BOOTS)
    );
    assert_eq!(controller.current_form(), FormId::None);
    assert_eq!(controller.state().nonce(), nonce + 1);
    drop(controller);

    assert!(state.is_swimming());
    assert_eq!(state.melded(), EquipSlots::BOOTS);
    assert_eq!(equipment.melded_slots(), EquipSlots::BOOTS);
    let texts: Vec<_> = messages.texts().collect();
    assert_eq!(
        texts[texts.len() - 2..],
        [
            "You quickly transform back into your natural form.",
            "Your legs become a tail as you enter the water.",
        ]
    );
}

#[test]
fn emergency_untransform_without_form_is_quiet() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let report = controller.emergency_untransform(&env);
    assert_eq!(report.previous, FormId::None);
    assert!(!report.resumed_swimming);
    drop(controller);
    assert!(messages.is_empty());
}

#[test]
fn duration_ticks_down_and_refresh_keeps_the_longer_roll() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::with_game_seed(7);
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    assert_eq!(controller.tick_duration(5), DurationStatus::Inactive);

    let report = controller
        .transform(&env, TransformAction::new(FormId::Spider, 10))
        .expect("spider form");
    let rolled = report.duration;
    assert!((10..=60).contains(&rolled));

    let refreshed = controller
        .refresh_duration(&env, 5)
        .expect("spider form is below its maximum");
    assert!(refreshed >= rolled);
    assert_eq!(controller.state().power(), 10);

    assert_eq!(
        controller.tick_duration(1),
        DurationStatus::Remaining(refreshed - 1)
    );
    assert_eq!(controller.tick_duration(u32::MAX), DurationStatus::Expired);
    assert_eq!(controller.current_form(), FormId::Spider);
}

#[test]
fn failed_command_keeps_the_nonce() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller
        .refresh_duration(&env, 10)
        .expect_err("nothing to refresh");
    assert_eq!(controller.state().nonce(), 0);

    let missing = FormEnv::empty();
    let error = controller
        .transform(&missing, TransformAction::new(FormId::Pig, 10))
        .expect_err("oracles are required");
    assert!(matches!(error.error, TransformError::Oracle(_)));
    assert_eq!(controller.state().nonce(), 0);
}

#[test]
fn involuntary_transform_still_respects_terrain() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Lava;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let error = controller
        .transform(&env, TransformAction::new(FormId::Spider, 10).involuntary())
        .expect_err("spiders burn in lava even when forced");
    assert_eq!(error.phase, TransitionPhase::PreValidate);
    assert!(matches!(
        error.error,
        TransformError::DangerousFeature { feature: TerrainFeature::Lava, .. }
    ));
    drop(controller);

    assert_eq!(state, Default::default());
    assert!(equipment.melded_slots().is_empty());
    assert!(messages.is_empty());
}

#[test]
fn refresh_stops_at_the_maximum_duration() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = Env::with_all(&baseline, &terrain, &config, &MaxRng).into_form_env();

    let mut state = Default::default();
    let mut equipment = MemoryEquipment::new();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    let report = controller
        .transform(&env, TransformAction::new(FormId::Spider, 10))
        .expect("spider form");
    assert_eq!(report.duration, 19);

    assert_eq!(controller.refresh_duration(&env, 30), Ok(39));
    assert_eq!(controller.refresh_duration(&env, 1000), Ok(60));
    let nonce = controller.state().nonce();

    let error = controller
        .refresh_duration(&env, 1000)
        .expect_err("spider form is already at its maximum");
    assert!(matches!(error.error, TransformError::DurationAtMaximum { .. }));
    assert_eq!(controller.state().nonce(), nonce);
    assert_eq!(controller.state().duration(), 60);
    assert_eq!(controller.state().power(), 1000);
}

#[test]
fn huge_power_rolls_are_capped() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;

    for seed in 0..16 {
        let config = FormConfig::with_game_seed(seed);
        let env = env(&baseline, &terrain, &config);

        let mut state = Default::default();
        let mut equipment = armoured();
        let mut messages = MessageLog::new();
        let mut controller =
            TransformationController::new(&mut state, &mut equipment, &mut messages);

        let report = controller
            .transform(&env, TransformAction::new(FormId::Pig, i32::MAX))
            .expect("pig form at any power");
        assert!(report.duration <= 100);
        assert_eq!(controller.current_form(), FormId::Pig);
        assert!(controller.state().melded().contains(EquipSlots::BODY_ARMOUR));
    }
}

#[test]
fn duration_is_rolled_before_anything_melds() {
    let baseline = BaselineProfile::default();
    let terrain = TerrainFeature::Floor;
    let config = FormConfig::default();
    let env = Env::with_all(&baseline, &terrain, &config, &BrokenRng).into_form_env();

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();

    let outcome = catch_unwind(AssertUnwindSafe(|| {
        let mut controller =
            TransformationController::new(&mut state, &mut equipment, &mut messages);
        let _ = controller.transform(&env, TransformAction::new(FormId::Pig, 20));
    }));
    assert!(outcome.is_err());

    assert_eq!(state.form(), FormId::None);
    assert!(state.melded().is_empty());
    assert!(equipment.melded_slots().is_empty());
    assert!(messages.is_empty());
}

#[test]
fn emergency_untransform_keeps_an_ongoing_swim() {
    let baseline = BaselineProfile::builder().swims(true).build();
    let terrain = TerrainFeature::DeepWater;
    let config = FormConfig::default();
    let env = env(&baseline, &terrain, &config);

    let mut state = Default::default();
    let mut equipment = armoured();
    let mut messages = MessageLog::new();
    let mut controller = TransformationController::new(&mut state, &mut equipment, &mut messages);

    controller.merfolk_start_swimming(&env).expect("start swimming");
    let nonce = controller.state().nonce();

    let report = controller.emergency_untransform(&env);
    assert_eq!(report.previous, FormId::None);
    assert!(report.unmelded.is_empty());
    assert!(!report.stopped_swimming);
    assert!(!report.resumed_swimming);
    assert_eq!(controller.state().nonce(), nonce + 1);
    drop(controller);

    assert!(state.is_swimming());
    assert_eq!(state.melded(), EquipSlots::BOOTS);
    assert_eq!(equipment.melded_slots(), EquipSlots::BOOTS);
    assert_eq!(
        messages.texts().collect::<Vec<_>>(),
        vec!["Your legs become a tail as you enter the water."]
    );
}
