//! Transactional meld/unmeld batches.
//!
//! A transition computes the full set of slots to meld and unmeld up front,
//! then applies them through a [`MeldBatch`]. If the equipment store rejects
//! any step, every completed step is undone in reverse order before the error
//! is returned, so the store ends up exactly as it started.

use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::env::{EquipmentError, EquipmentStore};
use crate::form::{EquipSlot, EquipSlots, FormDefinition};

const JOURNAL_CAPACITY: usize = EquipSlot::COUNT * 2;

/// Slots a body keeps melded: everything the form blocks, plus boots while
/// a tail replaces the legs.
pub fn meld_mask(def: &FormDefinition, swimming: bool) -> EquipSlots {
    if swimming {
        def.blocked_slots | EquipSlots::BOOTS
    } else {
        def.blocked_slots
    }
}

/// Meld changes needed to go from the currently held slots to `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MeldPlan {
    pub meld: EquipSlots,
    pub unmeld: EquipSlots,
}

impl MeldPlan {
    /// Plans the move from `held` (slots the controller melded earlier) to
    /// `target`.
    ///
    /// Only occupied slots that nothing else has melded are newly melded, so
    /// every meld in the plan pairs with exactly one later unmeld.
    pub fn compute(held: EquipSlots, target: EquipSlots, equipment: &dyn EquipmentStore) -> Self {
        let meld = (target - held)
            .slots()
            .filter(|&slot| equipment.is_occupied(slot) && !equipment.is_melded(slot))
            .collect();
        Self {
            meld,
            unmeld: held - target,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.meld.is_empty() && self.unmeld.is_empty()
    }

    /// Slots held after the plan is applied.
    pub fn held_after(&self, held: EquipSlots) -> EquipSlots {
        (held - self.unmeld) | self.meld
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MeldOp {
    Meld,
    Unmeld,
}

/// Applies a [`MeldPlan`] and undoes it on failure.
pub struct MeldBatch<'e> {
    equipment: &'e mut dyn EquipmentStore,
    journal: ArrayVec<(EquipSlot, MeldOp), JOURNAL_CAPACITY>,
}

impl<'e> MeldBatch<'e> {
    pub fn new(equipment: &'e mut dyn EquipmentStore) -> Self {
        Self {
            equipment,
            journal: ArrayVec::new(),
        }
    }

    /// Applies `plan`, unmelding before melding.
    ///
    /// On error the batch has already been rolled back.
    pub fn apply(mut self, plan: &MeldPlan) -> Result<(), EquipmentError> {
        let steps = plan
            .unmeld
            .slots()
            .map(|slot| (slot, MeldOp::Unmeld))
            .chain(plan.meld.slots().map(|slot| (slot, MeldOp::Meld)));

        for (slot, op) in steps {
            if let Err(error) = self.step(slot, op) {
                tracing::warn!(%slot, ?op, %error, "meld batch step failed, rolling back");
                self.rollback();
                return Err(error);
            }
        }
        Ok(())
    }

    fn step(&mut self, slot: EquipSlot, op: MeldOp) -> Result<(), EquipmentError> {
        match op {
            MeldOp::Meld => self.equipment.meld(slot)?,
            MeldOp::Unmeld => self.equipment.unmeld(slot)?,
        }
        // Each slot appears at most once per operation, so the journal never
        // overflows.
        let _ = self.journal.try_push((slot, op));
        Ok(())
    }

    fn rollback(&mut self) {
        while let Some((slot, op)) = self.journal.pop() {
            let undo = match op {
                MeldOp::Meld => self.equipment.unmeld(slot),
                MeldOp::Unmeld => self.equipment.meld(slot),
            };
            if let Err(error) = undo {
                tracing::warn!(%slot, ?op, %error, "could not undo meld step");
            }
        }
    }
}
