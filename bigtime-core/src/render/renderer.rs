//! Time renderer
//!
//! Rows are ordered on screen as:
//!
//! ```text
//!     Row 0   hours     slots 0 1
//!     Row 1   minutes   slots 2 3
//! ```
//!
//! Only rows flagged in the change mask are redrawn. A redrawn slot is always
//! unloaded and reloaded, even when it keeps the same digit.

use crate::clock::{ChangeMask, TickTime};
use crate::slots::{DisplayStyle, Glyph, SlotIndex, SlotPool};
use crate::traits::{ClockFormat, Compositor, DecodeError, GlyphDecoder};

/// Hours before this are drawn with the AM (normal) style
///
/// 11:xx is already drawn in the PM style.
pub const AM_STYLE_END_HOUR: u8 = 11;

/// Errors that can occur during a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderError {
    /// A glyph could not be decoded; the slot was left empty
    Decode(DecodeError),
}

impl From<DecodeError> for RenderError {
    fn from(e: DecodeError) -> Self {
        RenderError::Decode(e)
    }
}

/// Screen row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Row {
    /// Top row, hours
    Hour,
    /// Bottom row, minutes
    Minute,
}

impl Row {
    /// Row number (0 = top)
    pub const fn index(self) -> u8 {
        match self {
            Row::Hour => 0,
            Row::Minute => 1,
        }
    }

    /// Left slot of this row
    pub const fn left(self) -> SlotIndex {
        match self {
            Row::Hour => SlotIndex::ALL[0],
            Row::Minute => SlotIndex::ALL[2],
        }
    }

    /// Right slot of this row
    pub const fn right(self) -> SlotIndex {
        match self {
            Row::Hour => SlotIndex::ALL[1],
            Row::Minute => SlotIndex::ALL[3],
        }
    }
}

/// Display style for an hour of day (0-23)
pub const fn compute_display_style(hour: u8) -> DisplayStyle {
    if hour < AM_STYLE_END_HOUR {
        DisplayStyle::Normal
    } else {
        DisplayStyle::Inverted
    }
}

/// Hour shown on the hour row
///
/// 24-hour mode shows the hour unchanged. 12-hour mode wraps to 1-12 with
/// midnight and noon shown as 12.
pub const fn display_hour(hour: u8, use_24h: bool) -> u8 {
    if use_24h {
        return hour;
    }

    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Renders time observations into a slot pool
///
/// Holds the pool for the lifetime of the watch face. Every method runs to
/// completion synchronously; a pass is never interleaved with another.
pub struct TimeRenderer<D: GlyphDecoder, C, F> {
    pool: SlotPool<D, C>,
    clock_format: F,
}

impl<D, C, F> TimeRenderer<D, C, F>
where
    D: GlyphDecoder,
    C: Compositor<D::Bitmap>,
    F: ClockFormat,
{
    /// Create a renderer around a pool
    pub fn new(pool: SlotPool<D, C>, clock_format: F) -> Self {
        Self { pool, clock_format }
    }

    /// Draw the initial face with every row populated
    pub fn start(&mut self, time: TickTime) -> Result<DisplayStyle, RenderError> {
        self.render(time, ChangeMask::all())
    }

    /// Unload every slot
    pub fn shutdown(&mut self) {
        self.pool.unload_all();
    }

    /// Handle one tick
    ///
    /// The background always follows the AM/PM style. Rows are redrawn only
    /// when their unit is in `changed`. Returns the style applied.
    pub fn render(
        &mut self,
        time: TickTime,
        changed: ChangeMask,
    ) -> Result<DisplayStyle, RenderError> {
        let style = compute_display_style(time.hour);
        self.pool.compositor_mut().set_background(style);

        if changed.contains(ChangeMask::HOUR) {
            let hour = display_hour(time.hour, self.clock_format.is_24h());
            self.display_row(hour, Row::Hour, style)?;
        }

        if changed.contains(ChangeMask::MINUTE) {
            self.display_row(time.minute, Row::Minute, style)?;
        }

        Ok(style)
    }

    /// Display a value between 0 and 99 on a row
    ///
    /// Larger values are reduced to their last two digits. An hour below 10
    /// is a single digit in the left slot with the right slot cleared.
    /// Minutes always use both slots, so 5 shows as "05".
    pub fn display_row(
        &mut self,
        value: u8,
        row: Row,
        style: DisplayStyle,
    ) -> Result<(), RenderError> {
        let value = value % 100;
        let single_digit = row == Row::Hour && value < 10;

        let left = row.left();
        self.pool.unload(left);
        let left_glyph = if single_digit {
            Glyph::ones(value)
        } else {
            Glyph::tens(value)
        };
        self.pool.load(left, left_glyph, style)?;

        let right = row.right();
        self.pool.unload(right);
        if !single_digit {
            self.pool.load(right, Glyph::ones(value), style)?;
        }

        Ok(())
    }

    /// Get the slot pool
    pub fn pool(&self) -> &SlotPool<D, C> {
        &self.pool
    }

    /// Get the slot pool mutably
    pub fn pool_mut(&mut self) -> &mut SlotPool<D, C> {
        &mut self.pool
    }

    /// Replace the clock format query
    ///
    /// Takes effect on the next hour redraw.
    pub fn set_clock_format(&mut self, clock_format: F) {
        self.clock_format = clock_format;
    }
}
