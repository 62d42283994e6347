//! Concrete body-state transitions.

use tracing::debug;

use crate::config::clamp_hydra_heads;
use crate::env::{EquipmentStore, FormEnv, MessageChannel};
use crate::error::ErrorContext;
use crate::form::{EquipSlots, FormContext, FormId, FormRegistry};
use crate::rules::{CapabilityResolver, DurationModel, check_stat_safety};
use crate::state::ActiveFormState;

use super::errors::TransformError;
use super::meld::{MeldBatch, MeldPlan, meld_mask};
use super::transition::{FormTransition, TransitionTarget};

pub(super) const START_SWIMMING_MESSAGE: &str = "Your legs become a tail as you enter the water.";
pub(super) const STOP_SWIMMING_MESSAGE: &str = "Your tail turns into legs as you leave the water.";

fn error_context(state: &ActiveFormState) -> ErrorContext {
    ErrorContext::new(state.form, state.nonce)
}

fn require_transformed(state: &ActiveFormState) -> Result<(), TransformError> {
    if state.is_transformed() {
        Ok(())
    } else {
        Err(TransformError::not_transformed(error_context(state)))
    }
}

fn ensure_consistent(state: &ActiveFormState) -> Result<(), TransformError> {
    if state.is_consistent() {
        Ok(())
    } else {
        Err(TransformError::inconsistent_state(error_context(state)))
    }
}

/// Applies `plan` to the equipment, rolling back on failure.
fn apply_plan(
    target: &mut TransitionTarget<'_>,
    plan: &MeldPlan,
) -> Result<(), TransformError> {
    if plan.is_empty() {
        return Ok(());
    }
    debug!(meld = ?plan.meld, unmeld = ?plan.unmeld, "applying meld plan");
    MeldBatch::new(&mut *target.equipment)
        .apply(plan)
        .map_err(|error| TransformError::equipment(error, error_context(&*target.state)))
}

// ============================================================================
// Transform
// ============================================================================

/// Request to enter a form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformAction {
    pub form: FormId,
    pub power: i32,
    /// Forced on the character; skips the stat safety check.
    pub involuntary: bool,
    /// Validate only; nothing is applied.
    pub dry_run: bool,
}

impl TransformAction {
    pub fn new(form: FormId, power: i32) -> Self {
        Self {
            form,
            power,
            involuntary: false,
            dry_run: false,
        }
    }

    pub fn involuntary(mut self) -> Self {
        self.involuntary = true;
        self
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }
}

/// What a transform did (or, for a dry run, would be allowed to do).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransformReport {
    pub previous: FormId,
    pub form: FormId,
    /// False for dry runs.
    pub applied: bool,
    pub duration: u32,
    pub melded: EquipSlots,
    pub unmelded: EquipSlots,
    /// Swimming ended because the new form cannot swim.
    pub stopped_swimming: bool,
}

impl TransformReport {
    pub(super) fn checked(previous: FormId, form: FormId) -> Self {
        Self {
            previous,
            form,
            applied: false,
            duration: 0,
            melded: EquipSlots::empty(),
            unmelded: EquipSlots::empty(),
            stopped_swimming: false,
        }
    }
}

impl FormTransition for TransformAction {
    type Error = TransformError;
    type Output = TransformReport;

    fn pre_validate(
        &self,
        state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        let context = error_context(state).with_requested(self.form);
        if self.form.is_none() {
            return Err(TransformError::invalid_target(context));
        }
        if self.form == state.form {
            return Err(TransformError::already_active(context));
        }

        let baseline = env.baseline()?.profile();
        let ctx = FormContext::new(&baseline);
        let next = FormRegistry::global().lookup(self.form);

        let feature = env.terrain()?.feature_here();
        if CapabilityResolver::new(next, ctx).feat_dangerous(feature) {
            return Err(TransformError::dangerous_feature(feature, context));
        }

        if !self.involuntary {
            let floor = env.config()?.stat_floor();
            check_stat_safety(state.definition(), next, &ctx, floor)
                .map_err(|stat| TransformError::stat_unsafe(stat, context))?;
        }

        debug!(from = %state.form, to = %self.form, power = self.power, "transform validated");
        Ok(())
    }

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        let baseline = env.baseline()?.profile();
        let config = env.config()?;
        let rng = env.rng()?;

        let def = FormRegistry::global().lookup(self.form);
        let ctx = FormContext::new(&baseline);
        let previous = target.state.form;

        // Everything derived from the oracles is settled before the first meld.
        let duration = DurationModel::roll(
            &def.duration,
            self.power,
            rng,
            config.game_seed(),
            target.state.nonce,
        );
        let hydra_heads = (self.form == FormId::Hydra)
            .then(|| clamp_hydra_heads(i32::from(config.hydra_starting_heads())));

        let swimming = target.state.swimming && CapabilityResolver::new(def, ctx).can_swim();
        let stopped_swimming = target.state.swimming && !swimming;
        let plan = MeldPlan::compute(
            target.state.melded,
            meld_mask(def, swimming),
            &*target.equipment,
        );
        apply_plan(target, &plan)?;

        let state = &mut *target.state;
        state.form = self.form;
        state.power = self.power;
        state.hydra_heads = hydra_heads;
        state.duration = duration;
        state.swimming = swimming;
        state.melded = plan.held_after(state.melded);

        let message = def.transform_message(previous, &ctx.with_hydra_heads(hydra_heads));
        target.messages.emit(MessageChannel::Transform, &message);
        if stopped_swimming {
            target
                .messages
                .emit(MessageChannel::Status, STOP_SWIMMING_MESSAGE);
        }

        Ok(TransformReport {
            previous,
            form: self.form,
            applied: true,
            duration,
            melded: plan.meld,
            unmelded: plan.unmeld,
            stopped_swimming,
        })
    }

    fn post_validate(&self, state: &ActiveFormState, _env: &FormEnv<'_>) -> Result<(), Self::Error> {
        ensure_consistent(state)
    }
}

// ============================================================================
// Untransform
// ============================================================================

/// Request to return to the natural form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UntransformAction {
    /// Do not force the character to re-enter its current cell.
    pub skip_move: bool,
}

/// What an untransform did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UntransformReport {
    pub previous: FormId,
    pub unmelded: EquipSlots,
    /// The caller should re-run the effects of entering the current cell.
    pub reenter_cell: bool,
    pub stopped_swimming: bool,
    pub resumed_swimming: bool,
}

impl FormTransition for UntransformAction {
    type Error = TransformError;
    type Output = UntransformReport;

    fn pre_validate(
        &self,
        state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        _env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        require_transformed(state)
    }

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        let baseline = env.baseline()?.profile();
        let registry = FormRegistry::global();
        let natural = registry.lookup(FormId::None);
        let previous = target.state.form;

        let swimming = target.state.swimming
            && CapabilityResolver::new(natural, FormContext::new(&baseline)).can_swim();
        let plan = MeldPlan::compute(
            target.state.melded,
            meld_mask(natural, swimming),
            &*target.equipment,
        );
        apply_plan(target, &plan)?;

        let message = target
            .state
            .definition()
            .untransform_message(&target.state.context(&baseline));
        let stopped_swimming = target.state.swimming && !swimming;

        let state = &mut *target.state;
        state.clear_form();
        state.swimming = swimming;
        state.melded = plan.held_after(state.melded);

        target.messages.emit(MessageChannel::Untransform, &message);
        if stopped_swimming {
            target
                .messages
                .emit(MessageChannel::Status, STOP_SWIMMING_MESSAGE);
        }

        Ok(UntransformReport {
            previous,
            unmelded: plan.unmeld,
            reenter_cell: !self.skip_move,
            stopped_swimming,
            resumed_swimming: false,
        })
    }

    fn post_validate(&self, state: &ActiveFormState, _env: &FormEnv<'_>) -> Result<(), Self::Error> {
        ensure_consistent(state)
    }
}

// ============================================================================
// Duration refresh
// ============================================================================

/// Re-rolls the active form's duration, keeping the longer of the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefreshDurationAction {
    pub power: i32,
}

impl FormTransition for RefreshDurationAction {
    type Error = TransformError;
    type Output = u32;

    fn pre_validate(
        &self,
        state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        _env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        require_transformed(state)?;
        if state.duration >= state.definition().duration.max {
            return Err(TransformError::duration_at_maximum(error_context(state)));
        }
        Ok(())
    }

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        let config = env.config()?;
        let rng = env.rng()?;

        let state = &mut *target.state;
        let rolled = DurationModel::roll(
            &state.definition().duration,
            self.power,
            rng,
            config.game_seed(),
            state.nonce,
        );
        state.duration = state.duration.max(rolled);
        state.power = state.power.max(self.power);

        debug!(form = %state.form, rolled, duration = state.duration, "duration refreshed");
        Ok(state.duration)
    }
}

// ============================================================================
// Hydra heads
// ============================================================================

/// Sets the hydra head count, clamped to the legal range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SetHydraHeadsAction {
    pub heads: i32,
}

impl FormTransition for SetHydraHeadsAction {
    type Error = TransformError;
    type Output = u8;

    fn pre_validate(
        &self,
        state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        _env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        if state.form == FormId::Hydra {
            Ok(())
        } else {
            Err(TransformError::hydra_form_inactive(
                error_context(state).with_requested(FormId::Hydra),
            ))
        }
    }

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        _env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        let heads = clamp_hydra_heads(self.heads);
        target.state.hydra_heads = Some(heads);
        debug!(requested = self.heads, heads, "hydra heads set");
        Ok(heads)
    }

    fn post_validate(&self, state: &ActiveFormState, _env: &FormEnv<'_>) -> Result<(), Self::Error> {
        ensure_consistent(state)
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Enters the water: a tail replaces the legs and boots meld.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartSwimmingAction;

impl FormTransition for StartSwimmingAction {
    type Error = TransformError;
    /// False if the character was already swimming.
    type Output = bool;

    fn pre_validate(
        &self,
        state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        let baseline = env.baseline()?.profile();
        let resolver = CapabilityResolver::new(state.definition(), state.context(&baseline));
        if resolver.can_swim() {
            Ok(())
        } else {
            Err(TransformError::swimming_unavailable(error_context(state)))
        }
    }

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        _env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        if target.state.swimming {
            return Ok(false);
        }
        let def = target.state.definition();
        let plan = MeldPlan::compute(
            target.state.melded,
            meld_mask(def, true),
            &*target.equipment,
        );
        apply_plan(target, &plan)?;

        target.state.swimming = true;
        target.state.melded = plan.held_after(target.state.melded);
        target
            .messages
            .emit(MessageChannel::Status, START_SWIMMING_MESSAGE);
        Ok(true)
    }
}

/// Leaves the water; boots unmeld unless the form itself blocks them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSwimmingAction;

impl FormTransition for StopSwimmingAction {
    type Error = TransformError;
    /// False if the character was not swimming.
    type Output = bool;

    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        _env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error> {
        if !target.state.swimming {
            return Ok(false);
        }
        let def = target.state.definition();
        let plan = MeldPlan::compute(
            target.state.melded,
            meld_mask(def, false),
            &*target.equipment,
        );
        apply_plan(target, &plan)?;

        target.state.swimming = false;
        target.state.melded = plan.held_after(target.state.melded);
        target
            .messages
            .emit(MessageChannel::Status, STOP_SWIMMING_MESSAGE);
        Ok(true)
    }
}
