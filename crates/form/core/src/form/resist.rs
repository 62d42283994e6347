//! Packed resistance flags granted by a form.
//!
//! Multi-level resistances (poison, fire, cold, negative energy) occupy a
//! signed 3-bit field each, so a single `u32` describes vulnerabilities and up
//! to three levels of resistance. The remaining resistances are single bits
//! that grant full protection.
//!
//! ```text
//! bit  0      electricity
//! bits 1..=3  poison        (3 = immune)
//! bits 4..=6  fire
//! bits 7..=9  cold
//! bits 10..=12 negative energy
//! bit  13     rot           (immune)
//! bit  14     acid
//! bit  15     sticky flame  (immune)
//! ```

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct ResistFlags: u32 {
        const RES_ELEC         = 1 << 0;
        const RES_POISON       = 1 << ResistFlags::POISON_SHIFT;
        const VUL_POISON       = 0b111 << ResistFlags::POISON_SHIFT;
        const RES_FIRE         = 1 << ResistFlags::FIRE_SHIFT;
        const VUL_FIRE         = 0b111 << ResistFlags::FIRE_SHIFT;
        const RES_COLD         = 1 << ResistFlags::COLD_SHIFT;
        const VUL_COLD         = 0b111 << ResistFlags::COLD_SHIFT;
        const RES_NEG          = 1 << ResistFlags::NEG_SHIFT;
        const RES_ROT          = 1 << 13;
        const RES_ACID         = 1 << 14;
        const RES_STICKY_FLAME = 1 << 15;

        // Field masks; keep every bit of a packed level addressable.
        const POISON_FIELD = 0b111 << ResistFlags::POISON_SHIFT;
        const FIRE_FIELD   = 0b111 << ResistFlags::FIRE_SHIFT;
        const COLD_FIELD   = 0b111 << ResistFlags::COLD_SHIFT;
        const NEG_FIELD    = 0b111 << ResistFlags::NEG_SHIFT;
    }
}

impl ResistFlags {
    const POISON_SHIFT: u32 = 1;
    const FIRE_SHIFT: u32 = 4;
    const COLD_SHIFT: u32 = 7;
    const NEG_SHIFT: u32 = 10;

    /// Largest level a packed field can hold.
    pub const MAX_LEVEL: i8 = 3;

    const fn field(level: i8, shift: u32) -> Self {
        let level = if level > Self::MAX_LEVEL {
            Self::MAX_LEVEL
        } else if level < -1 {
            -1
        } else {
            level
        };
        Self::from_bits_retain(((level as i32 & 0b111) as u32) << shift)
    }

    /// Poison resistance at `level` (-1 vulnerable, 3 immune).
    pub const fn poison(level: i8) -> Self {
        Self::field(level, Self::POISON_SHIFT)
    }

    pub const fn fire(level: i8) -> Self {
        Self::field(level, Self::FIRE_SHIFT)
    }

    pub const fn cold(level: i8) -> Self {
        Self::field(level, Self::COLD_SHIFT)
    }

    pub const fn negative(level: i8) -> Self {
        Self::field(level, Self::NEG_SHIFT)
    }

    fn level_at(self, shift: u32) -> ResistLevel {
        let raw = ((self.bits() >> shift) & 0b111) as i8;
        // Values above 4 are two's-complement negatives in 3 bits.
        ResistLevel(if raw > 4 { raw - 8 } else { raw })
    }

    pub fn poison_level(self) -> ResistLevel {
        self.level_at(Self::POISON_SHIFT)
    }

    pub fn fire_level(self) -> ResistLevel {
        self.level_at(Self::FIRE_SHIFT)
    }

    pub fn cold_level(self) -> ResistLevel {
        self.level_at(Self::COLD_SHIFT)
    }

    pub fn negative_level(self) -> ResistLevel {
        self.level_at(Self::NEG_SHIFT)
    }
}

/// Graded resistance: negative values are vulnerabilities, positive values
/// are stacked levels of resistance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResistLevel(pub i8);

impl ResistLevel {
    pub const VULNERABLE: Self = Self(-1);
    pub const NONE: Self = Self(0);
    pub const IMMUNE: Self = Self(ResistFlags::MAX_LEVEL);

    #[inline]
    pub const fn level(self) -> i8 {
        self.0
    }

    pub const fn is_vulnerable(self) -> bool {
        self.0 < 0
    }

    pub const fn is_resistant(self) -> bool {
        self.0 > 0
    }

    /// Full immunity; only meaningful for poison and negative energy, where
    /// the top level blocks the effect entirely.
    pub const fn is_immune(self) -> bool {
        self.0 >= ResistFlags::MAX_LEVEL
    }

    /// Adds a form-specific adjustment, clamped to the encodable range.
    pub fn adjusted(self, delta: i8) -> Self {
        Self(self.0.saturating_add(delta).clamp(-1, ResistFlags::MAX_LEVEL))
    }
}
