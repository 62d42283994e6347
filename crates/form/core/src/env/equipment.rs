//! Equipment collaborator.
//!
//! Item storage belongs to the inventory system. The controller only needs to
//! know what is worn in a slot and to meld or unmeld it; a melded item stays
//! owned and worn but contributes nothing until it is unmelded.

use crate::error::{ErrorSeverity, RuleError};
use crate::form::{EquipSlot, EquipSlots};

/// Base type of an armour piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArmourKind {
    Body,
    Cloak,
    /// Soft headgear (hats, caps).
    Hat,
    /// Rigid headgear.
    Helmet,
    Gloves,
    Boots,
    Shield,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Weapon,
    Armour(ArmourKind),
    Ring,
    Amulet,
}

/// What the rules need to know about a worn item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDescriptor {
    /// Slot the item is worn in.
    pub slot: EquipSlot,
    pub kind: ItemKind,
    /// Additional slots the item occupies (multi-slot suits).
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_slots: EquipSlots,
}

impl ItemDescriptor {
    pub fn new(slot: EquipSlot, kind: ItemKind) -> Self {
        Self {
            slot,
            kind,
            extra_slots: EquipSlots::empty(),
        }
    }

    pub fn weapon() -> Self {
        Self::new(EquipSlot::Weapon, ItemKind::Weapon)
    }

    pub fn armour(slot: EquipSlot, kind: ArmourKind) -> Self {
        Self::new(slot, ItemKind::Armour(kind))
    }

    pub fn ring(slot: EquipSlot) -> Self {
        Self::new(slot, ItemKind::Ring)
    }

    pub fn amulet() -> Self {
        Self::new(EquipSlot::Amulet, ItemKind::Amulet)
    }

    /// Marks the item as covering `slots` in addition to its own slot.
    pub fn covering(mut self, slots: EquipSlots) -> Self {
        self.extra_slots = slots;
        self
    }

    /// Every slot the item needs, including its own.
    pub fn covered_slots(&self) -> EquipSlots {
        self.extra_slots | self.slot.flag()
    }
}

/// Mutable view of the character's worn equipment.
///
/// Every `meld` issued by the controller is paired with exactly one `unmeld`
/// of the same slot on a later transition (or on rollback).
pub trait EquipmentStore {
    /// The item worn in `slot`, melded or not.
    fn item(&self, slot: EquipSlot) -> Option<ItemDescriptor>;

    fn is_occupied(&self, slot: EquipSlot) -> bool {
        self.item(slot).is_some()
    }

    fn is_melded(&self, slot: EquipSlot) -> bool;

    /// Deactivates the item in `slot` while keeping it worn.
    fn meld(&mut self, slot: EquipSlot) -> Result<(), EquipmentError>;

    /// Reactivates a previously melded item.
    fn unmeld(&mut self, slot: EquipSlot) -> Result<(), EquipmentError>;
}

/// Failures reported by the equipment collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentError {
    #[error("no item worn in slot {0}")]
    SlotEmpty(EquipSlot),

    #[error("item in slot {0} is already melded")]
    AlreadyMelded(EquipSlot),

    #[error("item in slot {0} is not melded")]
    NotMelded(EquipSlot),

    /// The item cannot be deactivated (e.g. a cursed, fused item).
    #[error("item in slot {0} refuses to meld")]
    Refused(EquipSlot),
}

impl RuleError for EquipmentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SlotEmpty(_) | Self::AlreadyMelded(_) | Self::NotMelded(_) => {
                ErrorSeverity::Internal
            }
            Self::Refused(_) => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotEmpty(_) => "EQUIPMENT_SLOT_EMPTY",
            Self::AlreadyMelded(_) => "EQUIPMENT_ALREADY_MELDED",
            Self::NotMelded(_) => "EQUIPMENT_NOT_MELDED",
            Self::Refused(_) => "EQUIPMENT_REFUSED",
        }
    }
}
