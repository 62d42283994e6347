//! Equipment slots and the slot groups forms block.
//!
//! The core never stores items. It only reasons about which slots a form
//! blocks and asks the equipment collaborator to meld or unmeld the item worn
//! in a slot.

use bitflags::bitflags;
use strum::IntoEnumIterator;

/// A single equipment slot on the character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::EnumCount,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[repr(u8)]
pub enum EquipSlot {
    Weapon,
    Cloak,
    Helmet,
    Gloves,
    Boots,
    Shield,
    BodyArmour,
    LeftRing,
    RightRing,
    Amulet,
}

impl EquipSlot {
    /// Returns the single-bit mask for this slot.
    #[inline]
    pub const fn flag(self) -> EquipSlots {
        EquipSlots::from_bits_retain(1 << self as u16)
    }

    /// Armour-like slots, where the item's base type matters for wearability.
    pub const fn is_armour(self) -> bool {
        matches!(
            self,
            EquipSlot::Cloak
                | EquipSlot::Helmet
                | EquipSlot::Gloves
                | EquipSlot::Boots
                | EquipSlot::Shield
                | EquipSlot::BodyArmour
        )
    }

    pub const fn is_jewellery(self) -> bool {
        matches!(
            self,
            EquipSlot::LeftRing | EquipSlot::RightRing | EquipSlot::Amulet
        )
    }
}

bitflags! {
    /// Union of [`EquipSlot`] bits.
    ///
    /// Forms describe the slots they make unusable with this mask, and the
    /// controller tracks the slots it has melded with the same type.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EquipSlots: u16 {
        const WEAPON      = 1 << 0;
        const CLOAK       = 1 << 1;
        const HELMET      = 1 << 2;
        const GLOVES      = 1 << 3;
        const BOOTS       = 1 << 4;
        const SHIELD      = 1 << 5;
        const BODY_ARMOUR = 1 << 6;
        const LEFT_RING   = 1 << 7;
        const RIGHT_RING  = 1 << 8;
        const AMULET      = 1 << 9;

        /// Everything held in or worn on the hands.
        const HANDS = Self::WEAPON.bits() | Self::GLOVES.bits() | Self::SHIELD.bits();
        /// Auxiliary armour pieces.
        const AUXES = Self::CLOAK.bits() | Self::HELMET.bits() | Self::GLOVES.bits()
            | Self::BOOTS.bits();
        /// Every armour slot.
        const ARMOUR = Self::AUXES.bits() | Self::SHIELD.bits() | Self::BODY_ARMOUR.bits();
        /// Slots a rigid stone body cannot use.
        const STATUE = Self::GLOVES.bits() | Self::BOOTS.bits() | Self::BODY_ARMOUR.bits();
        /// Slots covered by multi-slot suits of armour.
        const SUIT = Self::STATUE.bits() | Self::HELMET.bits();
        /// Anything that depends on a humanoid frame.
        const PHYSICAL = Self::HANDS.bits() | Self::ARMOUR.bits();
        const RINGS = Self::LEFT_RING.bits() | Self::RIGHT_RING.bits();
        const JEWELLERY = Self::RINGS.bits() | Self::AMULET.bits();
        const ALL = Self::PHYSICAL.bits() | Self::JEWELLERY.bits();
    }
}

impl EquipSlots {
    /// Iterates over the individual slots contained in this mask.
    pub fn slots(self) -> impl Iterator<Item = EquipSlot> {
        EquipSlot::iter().filter(move |slot| self.contains(slot.flag()))
    }

    /// Returns true if every slot in `group` is set.
    #[inline]
    pub fn covers(self, group: EquipSlots) -> bool {
        self.contains(group)
    }
}

impl From<EquipSlot> for EquipSlots {
    fn from(slot: EquipSlot) -> Self {
        slot.flag()
    }
}

impl FromIterator<EquipSlot> for EquipSlots {
    fn from_iter<T: IntoIterator<Item = EquipSlot>>(iter: T) -> Self {
        iter.into_iter()
            .fold(EquipSlots::empty(), |acc, slot| acc | slot.flag())
    }
}
