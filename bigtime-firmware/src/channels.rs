//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use bigtime_core::{ChangeMask, TickTime};

/// Channel capacity for ticks
///
/// Ticks queue rather than overwrite so no change mask is lost if a render
/// pass overruns a second.
const TICK_CHANNEL_SIZE: usize = 4;

/// One observation from the tick source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    /// Current time of day
    pub time: TickTime,
    /// Units that changed since the previous tick
    pub changed: ChangeMask,
}

/// Ticks from the tick task to the watch face task
pub static TICK_CHANNEL: Channel<CriticalSectionRawMutex, Tick, TICK_CHANNEL_SIZE> =
    Channel::new();

/// Signal that the set button was pressed (advance one minute)
pub static ADVANCE_MINUTE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
