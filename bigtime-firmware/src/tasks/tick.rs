//! Tick task for time-based updates
//!
//! Keeps wall-clock time and sends one tick per second to the watch face,
//! tagged with the units that changed.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Duration, Ticker};

use bigtime_core::{ChangeMask, WallClock};

use crate::channels::{Tick, ADVANCE_MINUTE, TICK_CHANNEL};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Tick task - advances the clock and forwards change masks
#[embassy_executor::task]
pub async fn tick_task(mut clock: WallClock) {
    let start = clock.time();
    info!("Tick task started at {:02}:{:02}", start.hour, start.minute);

    // Avoids a blank screen on start
    TICK_CHANNEL
        .send(Tick {
            time: start,
            changed: ChangeMask::all(),
        })
        .await;

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS));

    loop {
        let changed = match select(ticker.next(), ADVANCE_MINUTE.wait()).await {
            Either::First(()) => clock.tick(),
            Either::Second(()) => {
                let time = clock.time();
                debug!("Minute advanced from {:02}:{:02}", time.hour, time.minute);
                clock.add_minute()
            }
        };

        TICK_CHANNEL
            .send(Tick {
                time: clock.time(),
                changed,
            })
            .await;
    }
}
