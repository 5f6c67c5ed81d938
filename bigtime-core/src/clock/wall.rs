//! Free-running wall clock
//!
//! Keeps hours, minutes and seconds for tick sources that have no RTC.
//! Each step reports which display units changed.

use super::time::{ChangeMask, TickTime, HOURS_PER_DAY, MINUTES_PER_HOUR};

/// Seconds per minute
pub const SECONDS_PER_MINUTE: u8 = 60;

/// Wall clock state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallClock {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl WallClock {
    /// Create a clock, wrapping out-of-range fields
    pub const fn new(hours: u8, minutes: u8, seconds: u8) -> Self {
        Self {
            hours: hours % HOURS_PER_DAY,
            minutes: minutes % MINUTES_PER_HOUR,
            seconds: seconds % SECONDS_PER_MINUTE,
        }
    }

    /// Current time as delivered to the renderer
    pub const fn time(&self) -> TickTime {
        TickTime {
            hour: self.hours,
            minute: self.minutes,
        }
    }

    /// Current seconds
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Advance one second
    ///
    /// Returns the units that changed; empty unless the minute rolled over.
    pub fn tick(&mut self) -> ChangeMask {
        self.seconds += 1;
        if self.seconds >= SECONDS_PER_MINUTE {
            self.seconds = 0;
            self.add_minute()
        } else {
            ChangeMask::empty()
        }
    }

    /// Advance one minute, rolling over into hours
    pub fn add_minute(&mut self) -> ChangeMask {
        self.minutes += 1;
        if self.minutes >= MINUTES_PER_HOUR {
            self.minutes = 0;
            self.hours = (self.hours + 1) % HOURS_PER_DAY;
            ChangeMask::all()
        } else {
            ChangeMask::MINUTE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seconds_only() {
        let mut clock = WallClock::new(12, 34, 56);
        assert_eq!(clock.tick(), ChangeMask::empty());
        assert_eq!(clock.seconds(), 57);
        assert_eq!(clock.time(), TickTime::new(12, 34).unwrap());
    }

    #[test]
    fn test_minute_rollover() {
        let mut clock = WallClock::new(12, 34, 59);
        assert_eq!(clock.tick(), ChangeMask::MINUTE);
        assert_eq!(clock.time(), TickTime::new(12, 35).unwrap());
        assert_eq!(clock.seconds(), 0);
    }

    #[test]
    fn test_hour_rollover() {
        let mut clock = WallClock::new(10, 59, 59);
        assert_eq!(clock.tick(), ChangeMask::all());
        assert_eq!(clock.time(), TickTime::new(11, 0).unwrap());
    }

    #[test]
    fn test_midnight_rollover() {
        let mut clock = WallClock::new(23, 59, 0);
        assert_eq!(clock.add_minute(), ChangeMask::all());
        assert_eq!(clock.time(), TickTime::new(0, 0).unwrap());
    }

    #[test]
    fn test_new_wraps_fields() {
        let clock = WallClock::new(25, 61, 60);
        assert_eq!(clock.time(), TickTime::new(1, 1).unwrap());
        assert_eq!(clock.seconds(), 0);
    }

    #[test]
    fn test_reported_mask_matches_time_difference() {
        let mut clock = WallClock::new(0, 0, 0);
        for _ in 0..(2 * 24 * 60 * 60) {
            let before = clock.time();
            let mask = clock.tick();
            assert_eq!(mask, ChangeMask::between(before, clock.time()));
        }
    }
}
