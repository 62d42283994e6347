//! In-memory collaborators.
//!
//! Used by tools and tests that drive the controller without the full game:
//! a slot table for equipment and a vector of emitted messages.

use strum::EnumCount;

use super::equipment::{EquipmentError, EquipmentStore, ItemDescriptor};
use super::messages::{MessageChannel, MessageSink};
use crate::form::{EquipSlot, EquipSlots};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct WornItem {
    item: ItemDescriptor,
    melded: bool,
}

/// Equipment slots backed by a fixed array.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryEquipment {
    slots: [Option<WornItem>; EquipSlot::COUNT],
    /// Slots whose items refuse to meld.
    fused: EquipSlots,
}

impl MemoryEquipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts `item` on in its own slot, replacing whatever was there.
    pub fn wear(&mut self, item: ItemDescriptor) -> Option<ItemDescriptor> {
        let previous = self.slots[item.slot as usize].replace(WornItem {
            item,
            melded: false,
        });
        previous.map(|worn| worn.item)
    }

    pub fn remove(&mut self, slot: EquipSlot) -> Option<ItemDescriptor> {
        self.slots[slot as usize].take().map(|worn| worn.item)
    }

    /// Makes the item in `slot` refuse every meld request.
    pub fn fuse(&mut self, slot: EquipSlot) {
        self.fused |= slot.flag();
    }

    /// Slots whose items are currently melded.
    pub fn melded_slots(&self) -> EquipSlots {
        self.iter()
            .filter(|(_, _, melded)| *melded)
            .map(|(slot, _, _)| slot)
            .collect()
    }

    /// Slots holding an item that is worn and active.
    pub fn active_slots(&self) -> EquipSlots {
        self.iter()
            .filter(|(_, _, melded)| !*melded)
            .map(|(slot, _, _)| slot)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, ItemDescriptor, bool)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, worn)| {
            let worn = (*worn)?;
            let slot = EquipSlot::from_repr(index as u8)?;
            Some((slot, worn.item, worn.melded))
        })
    }
}

impl EquipmentStore for MemoryEquipment {
    fn item(&self, slot: EquipSlot) -> Option<ItemDescriptor> {
        self.slots[slot as usize].map(|worn| worn.item)
    }

    fn is_melded(&self, slot: EquipSlot) -> bool {
        self.slots[slot as usize].is_some_and(|worn| worn.melded)
    }

    fn meld(&mut self, slot: EquipSlot) -> Result<(), EquipmentError> {
        if self.fused.contains(slot.flag()) {
            return Err(EquipmentError::Refused(slot));
        }
        let worn = self.slots[slot as usize]
            .as_mut()
            .ok_or(EquipmentError::SlotEmpty(slot))?;
        if worn.melded {
            return Err(EquipmentError::AlreadyMelded(slot));
        }
        worn.melded = true;
        Ok(())
    }

    fn unmeld(&mut self, slot: EquipSlot) -> Result<(), EquipmentError> {
        let worn = self.slots[slot as usize]
            .as_mut()
            .ok_or(EquipmentError::SlotEmpty(slot))?;
        if !worn.melded {
            return Err(EquipmentError::NotMelded(slot));
        }
        worn.melded = false;
        Ok(())
    }
}

/// Message sink that keeps everything it receives.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageLog {
    entries: Vec<(MessageChannel, String)>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(MessageChannel, String)] {
        &self.entries
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|(_, text)| text.as_str())
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, text)| text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl MessageSink for MessageLog {
    fn emit(&mut self, channel: MessageChannel, text: &str) {
        self.entries.push((channel, text.to_owned()));
    }
}
