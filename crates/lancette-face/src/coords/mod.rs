//! Geometry primitives.
//!
//! Responsibilities:
//! - 2D points/vectors in logical pixels
//! - surface insets and the derived face metrics (radius, center, padding)
//! - vector paths describing the hand outlines
//!
//! Geometry types live here; paint sources remain in `paint`.

mod edges;
mod path;
mod surface;
mod vec2;

pub use edges::Edges;
pub use path::{Path, PathVerb};
pub use surface::{Surface, SurfaceMetrics};
pub use vec2::Vec2;
