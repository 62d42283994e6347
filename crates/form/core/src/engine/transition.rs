//! Transition trait and the three-phase driver.

use crate::env::{EquipmentStore, FormEnv, MessageSink};
use crate::state::ActiveFormState;

use super::errors::{TransitionPhase, TransitionPhaseError};

/// Everything a transition may mutate.
pub struct TransitionTarget<'a> {
    pub state: &'a mut ActiveFormState,
    pub equipment: &'a mut dyn EquipmentStore,
    pub messages: &'a mut dyn MessageSink,
}

/// A request that changes the character's body state.
///
/// Validation happens entirely in `pre_validate`, against the state before
/// any mutation. `apply` either completes or leaves the target untouched.
pub trait FormTransition {
    type Error;
    type Output;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(
        &self,
        _state: &ActiveFormState,
        _equipment: &dyn EquipmentStore,
        _env: &FormEnv<'_>,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the transition. Implementations should assume that
    /// `pre_validate` has already run successfully.
    fn apply(
        &self,
        target: &mut TransitionTarget<'_>,
        env: &FormEnv<'_>,
    ) -> Result<Self::Output, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &ActiveFormState, _env: &FormEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Runs a transition through the three-phase pipeline.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the state and equipment
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
pub(super) fn drive_transition<T>(
    transition: &T,
    target: &mut TransitionTarget<'_>,
    env: &FormEnv<'_>,
) -> Result<T::Output, TransitionPhaseError<T::Error>>
where
    T: FormTransition,
{
    transition
        .pre_validate(target.state, target.equipment, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let output = transition
        .apply(target, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(target.state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(output)
}
