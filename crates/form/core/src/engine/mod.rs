//! Transformation lifecycle.
//!
//! The [`TransformationController`] is the only writer of an
//! [`ActiveFormState`]. Every command runs through the three-phase pipeline
//! (`pre_validate → apply → post_validate`): all checks happen before the
//! first mutation, and a failure in `apply` rolls back equipment changes
//! before the state is touched.
//!
//! The one exception is [`emergency_untransform`](TransformationController::emergency_untransform),
//! which skips validation entirely and cannot fail.

mod actions;
mod errors;
mod meld;
mod transition;

pub use actions::{
    RefreshDurationAction, SetHydraHeadsAction, StartSwimmingAction, StopSwimmingAction,
    TransformAction, TransformReport, UntransformAction, UntransformReport,
};
pub use errors::{TransformError, TransitionPhase, TransitionPhaseError};
pub use meld::{MeldBatch, MeldPlan, meld_mask};
pub use transition::{FormTransition, TransitionTarget};

use tracing::{info, warn};

use crate::env::{EquipmentStore, FormEnv, MessageChannel, MessageSink};
use crate::error::RuleError;
use crate::form::{EquipSlot, EquipSlots, FormId};
use crate::state::ActiveFormState;

use actions::START_SWIMMING_MESSAGE;
use transition::drive_transition;

const EMERGENCY_UNTRANSFORM_MESSAGE: &str = "You quickly transform back into your natural form.";

/// Result type of controller commands.
pub type TransitionResult<T> = Result<T, TransitionPhaseError<TransformError>>;

/// Remaining time of the active form after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationStatus {
    /// No form is active.
    Inactive,
    Remaining(u32),
    /// The form ran out; the caller should untransform.
    Expired,
}

/// Validates, applies and reverses form transitions for one character.
pub struct TransformationController<'a> {
    target: TransitionTarget<'a>,
}

impl<'a> TransformationController<'a> {
    pub fn new(
        state: &'a mut ActiveFormState,
        equipment: &'a mut dyn EquipmentStore,
        messages: &'a mut dyn MessageSink,
    ) -> Self {
        Self {
            target: TransitionTarget {
                state,
                equipment,
                messages,
            },
        }
    }

    pub fn state(&self) -> &ActiveFormState {
        &*self.target.state
    }

    /// Runs `transition` and advances the nonce once it has committed.
    pub fn execute<T>(&mut self, transition: &T, env: &FormEnv<'_>) -> TransitionResult<T::Output>
    where
        T: FormTransition<Error = TransformError>,
    {
        let form = self.target.state.form;
        match drive_transition(transition, &mut self.target, env) {
            Ok(output) => {
                self.target.state.nonce += 1;
                Ok(output)
            }
            Err(error) => {
                warn!(
                    %form,
                    phase = error.phase.as_str(),
                    code = error.error.error_code(),
                    "transition rejected: {}",
                    error.error
                );
                Err(error)
            }
        }
    }

    /// Enters a form.
    ///
    /// A dry run only validates; on success it reports the form that would be
    /// entered and changes nothing.
    pub fn transform(
        &mut self,
        env: &FormEnv<'_>,
        action: TransformAction,
    ) -> TransitionResult<TransformReport> {
        if action.dry_run {
            action
                .pre_validate(&*self.target.state, &*self.target.equipment, env)
                .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;
            return Ok(TransformReport::checked(self.target.state.form, action.form));
        }

        let report = self.execute(&action, env)?;
        info!(
            from = %report.previous,
            to = %report.form,
            duration = report.duration,
            "transformed"
        );
        Ok(report)
    }

    /// Returns to the natural form.
    ///
    /// `skip_move` suppresses the forced re-entry of the current cell.
    pub fn untransform(
        &mut self,
        env: &FormEnv<'_>,
        skip_move: bool,
    ) -> TransitionResult<UntransformReport> {
        let report = self.execute(&UntransformAction { skip_move }, env)?;
        info!(from = %report.previous, "untransformed");
        Ok(report)
    }

    /// Returns to the natural form without any validation.
    ///
    /// Items that can no longer be unmelded are skipped. If the character can
    /// swim on its own and stands in water, it resumes swimming; one that never
    /// stopped keeps its boots melded and hears nothing new.
    pub fn emergency_untransform(&mut self, env: &FormEnv<'_>) -> UntransformReport {
        let previous = self.target.state.form;
        let was_swimming = self.target.state.swimming;
        let swims_here = Self::swims_here(env);
        let keep_swimming = was_swimming && swims_here;

        let mut unmelded = EquipSlots::empty();
        let mut still_melded = EquipSlots::empty();
        for slot in self.target.state.melded.slots() {
            if keep_swimming && slot == EquipSlot::Boots {
                still_melded |= slot.flag();
                continue;
            }
            match self.target.equipment.unmeld(slot) {
                Ok(()) => unmelded |= slot.flag(),
                Err(error) => {
                    warn!(%slot, %error, "emergency untransform could not unmeld slot");
                    // A slot that reports itself unmelded owes nothing further.
                    if self.target.equipment.is_melded(slot) {
                        still_melded |= slot.flag();
                    }
                }
            }
        }

        let state = &mut *self.target.state;
        state.clear_form();
        state.swimming = keep_swimming;
        state.melded = still_melded;
        state.nonce += 1;

        if !previous.is_none() {
            self.target
                .messages
                .emit(MessageChannel::Untransform, EMERGENCY_UNTRANSFORM_MESSAGE);
        }

        let resumed_swimming = swims_here && !keep_swimming && self.resume_swimming();
        info!(from = %previous, keep_swimming, resumed_swimming, "emergency untransform");

        UntransformReport {
            previous,
            unmelded,
            reenter_cell: false,
            stopped_swimming: was_swimming && !keep_swimming,
            resumed_swimming,
        }
    }

    /// The natural body can swim and the character stands in water.
    fn swims_here(env: &FormEnv<'_>) -> bool {
        let in_water = env
            .terrain()
            .map(|terrain| terrain.feature_here().is_water())
            .unwrap_or(false);
        let can_swim = env
            .baseline()
            .map(|baseline| baseline.profile().can_swim)
            .unwrap_or(false);
        in_water && can_swim
    }

    fn resume_swimming(&mut self) -> bool {
        let boots = EquipSlot::Boots;
        let equipment = &mut *self.target.equipment;
        if equipment.is_occupied(boots) && !equipment.is_melded(boots) {
            match equipment.meld(boots) {
                Ok(()) => self.target.state.melded |= boots.flag(),
                Err(error) => warn!(%error, "boots could not meld while resuming swimming"),
            }
        }
        self.target.state.swimming = true;
        self.target
            .messages
            .emit(MessageChannel::Status, START_SWIMMING_MESSAGE);
        true
    }

    /// Re-rolls the active form's duration at `power`, keeping the longer one.
    pub fn refresh_duration(&mut self, env: &FormEnv<'_>, power: i32) -> TransitionResult<u32> {
        self.execute(&RefreshDurationAction { power }, env)
    }

    /// Counts `elapsed` ticks off the active form.
    pub fn tick_duration(&mut self, elapsed: u32) -> DurationStatus {
        let state = &mut *self.target.state;
        if !state.is_transformed() {
            return DurationStatus::Inactive;
        }
        state.duration = state.duration.saturating_sub(elapsed);
        match state.duration {
            0 => DurationStatus::Expired,
            remaining => DurationStatus::Remaining(remaining),
        }
    }

    /// Sets the hydra head count, clamped to `[1, MAX_HYDRA_HEADS]`.
    pub fn set_hydra_form_heads(&mut self, env: &FormEnv<'_>, heads: i32) -> TransitionResult<u8> {
        self.execute(&SetHydraHeadsAction { heads }, env)
    }

    /// Current head count; `None` unless the hydra form is active.
    pub fn hydra_form_heads(&self) -> Option<u8> {
        self.target.state.hydra_heads
    }

    /// Starts swimming. Returns false if the character already was.
    pub fn merfolk_start_swimming(&mut self, env: &FormEnv<'_>) -> TransitionResult<bool> {
        self.execute(&StartSwimmingAction, env)
    }

    /// Stops swimming. Returns false if the character was not swimming.
    pub fn merfolk_stop_swimming(&mut self, env: &FormEnv<'_>) -> TransitionResult<bool> {
        self.execute(&StopSwimmingAction, env)
    }

    pub fn current_form(&self) -> FormId {
        self.target.state.form
    }
}
