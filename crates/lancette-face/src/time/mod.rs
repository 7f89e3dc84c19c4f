//! Time subsystem.
//!
//! Two concerns, deliberately separate:
//! - [`ClockTime`] / [`HandAngles`]: wall-clock sampling and the cascading
//!   fraction → angle conversion
//! - [`FrameClock`]: the host-owned animation driver; the face never
//!   schedules its own redraws

mod frame_clock;
mod wall;

pub use frame_clock::{FrameClock, FrameTime};
pub use wall::{ClockTime, HandAngles};
