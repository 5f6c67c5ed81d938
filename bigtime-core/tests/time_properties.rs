//! Property-based tests for hour formatting, AM/PM styling and tick masks.

use bigtime_core::render::{compute_display_style, display_hour};
use bigtime_core::{ChangeMask, DisplayStyle, TickTime, WallClock};
use proptest::prelude::*;

proptest! {
    /// 12-hour mode always shows 1-12.
    #[test]
    fn twelve_hour_display_is_one_to_twelve(hour in 0u8..24) {
        let shown = display_hour(hour, false);
        prop_assert!((1..=12).contains(&shown), "hour {} shown as {}", hour, shown);
        prop_assert_eq!(shown % 12, hour % 12);
    }

    /// 24-hour mode shows the hour unchanged.
    #[test]
    fn twenty_four_hour_display_is_identity(hour in 0u8..24) {
        prop_assert_eq!(display_hour(hour, true), hour);
    }

    /// Hours 0-10 are normal, 11-23 inverted.
    #[test]
    fn style_splits_at_eleven(hour in 0u8..24) {
        let expected = if hour <= 10 { DisplayStyle::Normal } else { DisplayStyle::Inverted };
        prop_assert_eq!(compute_display_style(hour), expected);
    }

    /// The wall clock reports exactly the units that changed.
    #[test]
    fn wall_clock_mask_is_accurate(
        h in 0u8..24,
        m in 0u8..60,
        s in 0u8..60,
        steps in 1usize..4000,
    ) {
        let mut clock = WallClock::new(h, m, s);
        for _ in 0..steps {
            let before = clock.time();
            let mask = clock.tick();
            prop_assert_eq!(mask, ChangeMask::between(before, clock.time()));
        }
    }

    /// A minute step always flags the minute row.
    #[test]
    fn add_minute_always_flags_minute(h in 0u8..24, m in 0u8..60) {
        let mut clock = WallClock::new(h, m, 0);
        let mask = clock.add_minute();
        prop_assert!(mask.contains(ChangeMask::MINUTE));
        prop_assert_eq!(mask.contains(ChangeMask::HOUR), m == 59);
    }

    /// Out-of-range fields never produce a tick time.
    #[test]
    fn tick_time_rejects_out_of_range(h in 24u8..=255, m in 60u8..=255) {
        prop_assert!(TickTime::new(h, 0).is_none());
        prop_assert!(TickTime::new(0, m).is_none());
    }
}
