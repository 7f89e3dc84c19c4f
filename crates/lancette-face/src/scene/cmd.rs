use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::path::PathCmd;

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Path(PathCmd),
    Circle(CircleCmd),
}
