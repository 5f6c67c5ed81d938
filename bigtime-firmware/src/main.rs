//! Big Time - watch face firmware
//!
//! Four large digits on a 144x168 Sharp memory LCD, hours on top and
//! minutes below. The face is white before 11:00 and black after.
//!
//! There is no RTC: time starts at `START_TIME` and is set with the button
//! (each press advances one minute, holding repeats with acceleration).
//! A jumper to ground on the format pin selects 24-hour hours.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{self, Spi};
use {defmt_rtt as _, panic_probe as _};

use bigtime_core::WallClock;

use crate::panel::MemoryLcd;

mod channels;
mod jumper;
mod panel;
mod tasks;

/// Time of day at power-on (hours, minutes, seconds)
const START_TIME: (u8, u8, u8) = (12, 0, 0);

/// Memory LCD SPI clock (panel maximum is 2 MHz)
const PANEL_SPI_HZ: u32 = 1_000_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Big Time starting...");

    let p = embassy_rp::init(Default::default());

    // Memory LCD on SPI0: SCLK=GPIO18, SI=GPIO19, SCS=GPIO17, DISP=GPIO20
    let mut spi_config = spi::Config::default();
    spi_config.frequency = PANEL_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, Level::Low);
    let disp = Output::new(p.PIN_20, Level::High);
    let panel = MemoryLcd::new(spi, cs, disp);

    info!("Panel initialized");

    // Set button on GPIO15, 12/24h jumper on GPIO14 (both active low)
    let button = Input::new(p.PIN_15, Pull::Up);
    let format_jumper = Input::new(p.PIN_14, Pull::Up);

    let (hours, minutes, seconds) = START_TIME;
    let clock = WallClock::new(hours, minutes, seconds);

    // Spawn tasks
    spawner.spawn(tasks::watchface_task(format_jumper, panel)).unwrap();
    spawner.spawn(tasks::button_task(button)).unwrap();
    spawner.spawn(tasks::tick_task(clock)).unwrap();

    info!("All tasks spawned, firmware running");
}
