use super::{Edges, Vec2};

/// Fraction of the radius kept clear of the surface edge so the longest
/// hand tip stays inside the bounds through a full sweep.
const EDGE_MARGIN: f32 = 0.12;

/// Host-supplied drawing surface description in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
    pub insets: Edges,
}

impl Surface {
    #[inline]
    pub const fn new(width: f32, height: f32, insets: Edges) -> Self {
        Self { width, height, insets }
    }

    /// Surface midpoint, ignoring insets.
    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Face metrics derived from a [`Surface`].
///
/// `radius` is the scale unit: every hand dimension is expressed as a
/// fraction of it, so the whole face scales uniformly with the surface.
/// `top_padding` offsets the hand tips from the surface top edge.
///
/// Recompute on resize, not per frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct SurfaceMetrics {
    pub radius: f32,
    pub center: Vec2,
    pub top_padding: f32,
}

impl SurfaceMetrics {
    pub fn from_surface(surface: Surface) -> Self {
        let inner_w = surface.width - surface.insets.h();
        let inner_h = surface.height - surface.insets.v();

        // A surface smaller than its insets clamps to a zero radius: the
        // hands collapse onto the center and the frame still renders.
        let radius = (inner_w.min(inner_h) * 0.5).max(0.0);

        let center = surface.center();
        let top_padding = EDGE_MARGIN * radius + center.y - radius + surface.insets.top;

        Self { radius, center, top_padding }
    }

    #[inline]
    pub fn is_degenerate(self) -> bool {
        self.radius <= 0.0
    }
}
