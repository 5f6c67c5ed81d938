//! Clock format query

/// Trait for the host's 12/24-hour setting
///
/// Queried once per render pass.
pub trait ClockFormat {
    /// Check if hours are shown as 0-23
    fn is_24h(&self) -> bool;
}

impl ClockFormat for bool {
    fn is_24h(&self) -> bool {
        *self
    }
}

impl<T: ClockFormat + ?Sized> ClockFormat for &T {
    fn is_24h(&self) -> bool {
        (**self).is_24h()
    }
}
