//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod tick;
pub mod watchface;

pub use button::button_task;
pub use tick::tick_task;
pub use watchface::watchface_task;
