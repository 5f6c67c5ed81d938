//! Set button task
//!
//! A press advances the clock one minute. Holding the button repeats,
//! speeding up by 20% per step down to a floor.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{with_timeout, Duration, Timer};

use crate::channels::ADVANCE_MINUTE;

/// Debounce time after the falling edge
const DEBOUNCE_MS: u64 = 20;

/// Hold time before the first repeat
const REPEAT_START_MS: u64 = 500;

/// Fastest repeat interval
const REPEAT_MIN_MS: u64 = 20;

/// Button press task
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>) {
    info!("Button task started");

    loop {
        button.wait_for_falling_edge().await;

        // Debounce
        Timer::after(Duration::from_millis(DEBOUNCE_MS)).await;
        if !button.is_low() {
            continue;
        }

        ADVANCE_MINUTE.signal(());

        // Repeat until release
        let mut delay_ms = REPEAT_START_MS;
        while with_timeout(Duration::from_millis(delay_ms), button.wait_for_rising_edge())
            .await
            .is_err()
        {
            ADVANCE_MINUTE.signal(());
            delay_ms = (delay_ms * 8 / 10).max(REPEAT_MIN_MS);
        }

        trace!("Button released");
    }
}
