//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands for one frame
//! - capture the rotation active when each command was recorded
//! - provide deterministic paint order (layer + insertion order)
//! - keep shape-specific payloads isolated per shape file under
//!   `scene::shapes`

mod cmd;
mod layer;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use layer::Layer;
pub use list::{DrawItem, DrawList, Rotation};
