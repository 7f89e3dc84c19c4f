//! The clock face itself.
//!
//! - [`FaceStyle`]: the two configurable colors and the paints derived
//!   from them
//! - `hands`: hand outline construction, all proportions of the radius
//! - [`ClockFace`]: the per-frame renderer

mod hands;
mod renderer;
mod style;

pub use renderer::ClockFace;
pub use style::FaceStyle;
