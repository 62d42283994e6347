//! Per-character form state.
//!
//! The state is owned by the character and mutated exclusively through the
//! [`TransformationController`](crate::engine::TransformationController).
//! Definitions are never stored here, only the identifier that selects one
//! from the registry.

use crate::config::FormConfig;
use crate::env::BaselineProfile;
use crate::form::{EquipSlots, FormContext, FormDefinition, FormId, FormRegistry};

/// Active form and the auxiliary state that only exists alongside it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveFormState {
    pub(crate) form: FormId,

    /// Power the active form was entered (or last refreshed) with.
    pub(crate) power: i32,

    /// Present exactly while the hydra form is active.
    pub(crate) hydra_heads: Option<u8>,

    /// Merfolk-style swimming; independent of the form itself.
    pub(crate) swimming: bool,

    /// Slots the controller has melded and still owes an unmeld for.
    pub(crate) melded: EquipSlots,

    /// Remaining ticks before the form expires; 0 while no form is active.
    pub(crate) duration: u32,

    /// Committed transition counter, mixed into every roll.
    pub(crate) nonce: u64,
}

impl ActiveFormState {
    /// Fresh state with no form active.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn form(&self) -> FormId {
        self.form
    }

    #[inline]
    pub fn is_transformed(&self) -> bool {
        !self.form.is_none()
    }

    pub fn definition(&self) -> &'static FormDefinition {
        FormRegistry::global().lookup(self.form)
    }

    pub fn power(&self) -> i32 {
        self.power
    }

    pub fn hydra_heads(&self) -> Option<u8> {
        self.hydra_heads
    }

    pub fn is_swimming(&self) -> bool {
        self.swimming
    }

    pub fn melded(&self) -> EquipSlots {
        self.melded
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Query context for the active form on `baseline`.
    pub fn context<'a>(&self, baseline: &'a BaselineProfile) -> FormContext<'a> {
        FormContext::new(baseline).with_hydra_heads(self.hydra_heads)
    }

    /// Checks the invariants tying auxiliary state to the active form.
    pub fn is_consistent(&self) -> bool {
        let heads_ok = match (self.form, self.hydra_heads) {
            (FormId::Hydra, Some(heads)) => {
                (FormConfig::MIN_HYDRA_HEADS..=FormConfig::MAX_HYDRA_HEADS).contains(&heads)
            }
            (FormId::Hydra, None) => false,
            (_, heads) => heads.is_none(),
        };
        let idle_ok = self.is_transformed() || (self.power == 0 && self.duration == 0);
        heads_ok && idle_ok
    }

    /// Resets to "no form", keeping the nonce and the swimming flag.
    pub(crate) fn clear_form(&mut self) {
        self.form = FormId::None;
        self.power = 0;
        self.hydra_heads = None;
        self.duration = 0;
    }
}

#[cfg(feature = "serde")]
impl ActiveFormState {
    /// Encodes the state for persistence.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decodes a persisted state; unknown form identifiers are rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }

    /// SHA-256 commitment over the encoded state.
    pub fn state_root(&self) -> [u8; 32] {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        if let Ok(bytes) = bincode::serialize(self) {
            hasher.update(&bytes);
        }
        hasher.finalize().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_has_no_form() {
        let state = ActiveFormState::new();
        assert_eq!(state.form(), FormId::None);
        assert!(!state.is_transformed());
        assert_eq!(state.hydra_heads(), None);
        assert!(state.is_consistent());
    }

    #[test]
    fn heads_outside_hydra_are_inconsistent() {
        let state = ActiveFormState {
            form: FormId::Spider,
            power: 10,
            hydra_heads: Some(3),
            ..ActiveFormState::default()
        };
        assert!(!state.is_consistent());

        let state = ActiveFormState {
            form: FormId::Hydra,
            hydra_heads: Some(0),
            ..ActiveFormState::default()
        };
        assert!(!state.is_consistent());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn bincode_round_trip() {
        let state = ActiveFormState {
            form: FormId::Hydra,
            power: 40,
            hydra_heads: Some(7),
            swimming: true,
            melded: EquipSlots::BODY_ARMOUR | EquipSlots::BOOTS,
            duration: 33,
            nonce: 5,
        };
        let bytes = state.to_bytes().unwrap();
        let decoded = ActiveFormState::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.state_root(), state.state_root());
    }
}
