//! Watch face task
//!
//! Owns the slot pool, renderer and panel. Every tick is processed to
//! completion before the next one is received, so the slot table never needs
//! a lock.

use defmt::*;
use embassy_rp::gpio::Input;

use bigtime_core::slots::TOTAL_SLOTS;
use bigtime_core::{RenderError, SlotPool, TimeRenderer};
use bigtime_display::{FramebufferCompositor, SegmentDecoder};

use crate::channels::TICK_CHANNEL;
use crate::jumper::FormatJumper;
use crate::panel::MemoryLcd;

/// Renderer with one decoded bitmap per slot
type Watchface = TimeRenderer<SegmentDecoder<TOTAL_SLOTS>, FramebufferCompositor, FormatJumper>;

/// Watch face task - renders ticks and flushes the panel
#[embassy_executor::task]
pub async fn watchface_task(format_jumper: Input<'static>, mut panel: MemoryLcd) {
    info!("Watch face task started");

    let pool = SlotPool::new(SegmentDecoder::new(), FramebufferCompositor::new());
    let mut face: Watchface = TimeRenderer::new(pool, FormatJumper::new(format_jumper));

    if let Err(e) = panel.clear() {
        warn!("Panel clear failed: {:?}", e);
    }

    let first = TICK_CHANNEL.receive().await;
    let result = face.start(first.time);
    handle_render(&mut face, result);
    flush(&mut face, &mut panel);

    loop {
        let tick = TICK_CHANNEL.receive().await;

        if !tick.changed.is_empty() {
            debug!(
                "Render {:02}:{:02} mask={=u8:#x}",
                tick.time.hour,
                tick.time.minute,
                tick.changed.bits()
            );
            let result = face.render(tick.time, tick.changed);
            handle_render(&mut face, result);
        }

        flush(&mut face, &mut panel);
    }
}

/// Decode failures are unrecoverable: release every slot and halt
fn handle_render<T>(face: &mut Watchface, result: Result<T, RenderError>) {
    if let Err(e) = result {
        error!("Render failed: {:?}", e);
        face.shutdown();
        defmt::panic!("glyph decode failed");
    }
}

/// Push dirty lines, or toggle VCOM when nothing changed
fn flush(face: &mut Watchface, panel: &mut MemoryLcd) {
    let framebuffer = face.pool_mut().compositor_mut().framebuffer_mut();
    if let Err(e) = panel.flush(framebuffer) {
        warn!("Panel flush failed: {:?}", e);
    }
}
