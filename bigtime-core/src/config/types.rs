//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::ClockFormat;

/// How the hour row is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HourFormat {
    /// 1-12, midnight and noon shown as 12
    #[default]
    TwelveHour,
    /// 0-23
    TwentyFourHour,
}

impl HourFormat {
    /// Format for a "24-hour mode active" flag
    pub const fn from_24h(is_24h: bool) -> Self {
        if is_24h {
            HourFormat::TwentyFourHour
        } else {
            HourFormat::TwelveHour
        }
    }
}

impl ClockFormat for HourFormat {
    fn is_24h(&self) -> bool {
        matches!(self, HourFormat::TwentyFourHour)
    }
}

/// Watch face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WatchfaceConfig {
    /// Hour display mode
    pub hour_format: HourFormat,
}

impl ClockFormat for WatchfaceConfig {
    fn is_24h(&self) -> bool {
        self.hour_format.is_24h()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_twelve_hour() {
        let config = WatchfaceConfig::default();
        assert_eq!(config.hour_format, HourFormat::TwelveHour);
        assert!(!config.is_24h());
    }

    #[test]
    fn test_from_24h_flag() {
        assert_eq!(HourFormat::from_24h(true), HourFormat::TwentyFourHour);
        assert_eq!(HourFormat::from_24h(false), HourFormat::TwelveHour);
        assert!(HourFormat::TwentyFourHour.is_24h());
        assert!(true.is_24h());
    }
}
