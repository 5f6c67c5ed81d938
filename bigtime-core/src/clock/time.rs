//! Tick time and change mask

use core::ops::{BitOr, BitOrAssign};

/// Hours per day
pub const HOURS_PER_DAY: u8 = 24;

/// Minutes per hour
pub const MINUTES_PER_HOUR: u8 = 60;

/// Time of day delivered with a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute of hour (0-59)
    pub minute: u8,
}

impl TickTime {
    /// Create a time, or `None` if either field is out of range
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < HOURS_PER_DAY && minute < MINUTES_PER_HOUR {
            Some(Self { hour, minute })
        } else {
            None
        }
    }
}

// Unit bits
const HOUR_BIT: u8 = 0x01;
const MINUTE_BIT: u8 = 0x02;

/// Set of time units that changed since the last tick
///
/// Rows not in the mask are left untouched by a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChangeMask(u8);

impl ChangeMask {
    /// Hour changed; redraw the hour row
    pub const HOUR: ChangeMask = ChangeMask(HOUR_BIT);

    /// Minute changed; redraw the minute row
    pub const MINUTE: ChangeMask = ChangeMask(MINUTE_BIT);

    /// No units changed
    pub const fn empty() -> Self {
        ChangeMask(0)
    }

    /// Hour and minute changed, used for the first tick after start
    pub const fn all() -> Self {
        ChangeMask(HOUR_BIT | MINUTE_BIT)
    }

    /// Parse from raw bits, dropping unknown bits
    pub const fn from_bits_truncate(bits: u8) -> Self {
        ChangeMask(bits & (HOUR_BIT | MINUTE_BIT))
    }

    /// Raw bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check if every unit in `other` is set
    pub const fn contains(self, other: ChangeMask) -> bool {
        self.0 & other.0 == other.0
    }

    /// Check if no unit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add the units in `other`
    pub fn insert(&mut self, other: ChangeMask) {
        self.0 |= other.0;
    }

    /// Units that differ between two observations
    pub fn between(previous: TickTime, next: TickTime) -> Self {
        let mut mask = ChangeMask::empty();
        if previous.hour != next.hour {
            mask.insert(ChangeMask::HOUR);
        }
        if previous.minute != next.minute {
            mask.insert(ChangeMask::MINUTE);
        }
        mask
    }
}

impl BitOr for ChangeMask {
    type Output = ChangeMask;

    fn bitor(self, rhs: ChangeMask) -> ChangeMask {
        ChangeMask(self.0 | rhs.0)
    }
}

impl BitOrAssign for ChangeMask {
    fn bitor_assign(&mut self, rhs: ChangeMask) {
        self.insert(rhs);
    }
}
