use crate::coords::{SurfaceMetrics, Vec2};
use crate::paint::{Color, LinearGradient, Paint, Stroke};

/// Visual style of the face.
///
/// `accent` is the light color: the second hand and the bright end of the
/// blade gradients. `base` is the dark color: the gradient start and the
/// hub rings.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceStyle {
    pub accent: Color,
    pub base: Color,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            accent: Color::from_srgb_u8(0xff, 0xff, 0xff, 0xff),
            base: Color::from_srgb_u8(0x1a, 0x1a, 0x1a, 0xff),
        }
    }
}

impl FaceStyle {
    /// Blade fill: base at the hub shading to accent at the tip.
    ///
    /// The gradient is expressed in the blade's unrotated coordinates, so
    /// it rotates with the hand.
    pub(crate) fn blade_paint(&self, metrics: SurfaceMetrics, tip_y: f32) -> Paint {
        Paint::LinearGradient(LinearGradient::axial(
            metrics.center,
            Vec2::new(metrics.center.x, tip_y),
            self.base,
            self.accent,
        ))
    }

    /// Second hand fill.
    pub(crate) fn pointer_paint(&self) -> Paint {
        Paint::Solid(self.accent)
    }

    /// Hub ring stroke at the given width.
    pub(crate) fn ring_stroke(&self, width: f32) -> Stroke {
        Stroke::new(width, self.base)
    }
}
