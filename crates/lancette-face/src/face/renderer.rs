use crate::coords::{Surface, SurfaceMetrics};
use crate::scene::{DrawList, Layer};
use crate::time::ClockTime;

use super::hands;
use super::style::FaceStyle;

/// Per-frame clock face renderer.
///
/// `ClockFace` is a pure function of (time, surface metrics): every frame
/// it recomputes the hand angles and outlines from scratch and records
/// them into the caller's [`DrawList`]. The only retained state is the
/// style and the cached metrics, which change on [`resize`] only.
///
/// [`resize`]: ClockFace::resize
pub struct ClockFace {
    style: FaceStyle,
    metrics: SurfaceMetrics,
}

impl ClockFace {
    /// Creates a face with the given style. The face renders nothing
    /// useful until [`resize`] supplies a surface.
    ///
    /// [`resize`]: ClockFace::resize
    pub fn new(style: FaceStyle) -> Self {
        Self {
            style,
            metrics: SurfaceMetrics::default(),
        }
    }

    /// Recomputes the face metrics for a new surface.
    ///
    /// Call on layout/resize events, not per frame; hand paths pick up the
    /// new radius on the next [`render`].
    ///
    /// [`render`]: ClockFace::render
    pub fn resize(&mut self, surface: Surface) {
        self.metrics = SurfaceMetrics::from_surface(surface);
        if self.metrics.is_degenerate() {
            log::warn!(
                "surface {}x{} leaves no room inside its insets, face collapses",
                surface.width,
                surface.height
            );
        } else {
            log::debug!(
                "face resized: radius {:.1}, center ({:.1}, {:.1})",
                self.metrics.radius,
                self.metrics.center.x,
                self.metrics.center.y
            );
        }
    }

    #[inline]
    pub fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    #[inline]
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// Records one frame into `list`.
    ///
    /// Hands paint in order second, minute, hour; the [`Layer`] assignment
    /// puts the hour hub ring on top. Each hand brackets its commands in a
    /// rotation about the face center, and the rotation stack is balanced
    /// again when this returns.
    pub fn render(&self, time: ClockTime, list: &mut DrawList) {
        let angles = time.angles();
        self.second_hand(angles.second, list);
        self.minute_hand(angles.minute, list);
        self.hour_hand(angles.hour, list);
        debug_assert_eq!(list.rotation_depth(), 0);
    }

    fn second_hand(&self, degrees: f32, list: &mut DrawList) {
        let m = self.metrics;
        list.push_rotation(degrees, m.center);
        list.push_path(
            Layer::SecondHand,
            hands::second_pointer(m),
            self.style.pointer_paint(),
        );
        list.pop_rotation();
    }

    fn minute_hand(&self, degrees: f32, list: &mut DrawList) {
        let m = self.metrics;
        list.push_rotation(degrees, m.center);
        list.push_path(
            Layer::MinuteHand,
            hands::minute_blade(m),
            self.style.blade_paint(m, hands::minute_tip_y(m)),
        );
        list.push_ring(
            Layer::MinuteHand,
            m.center,
            hands::HUB_RADIUS * m.radius,
            self.style.ring_stroke(hands::MINUTE_RING_STROKE * m.radius),
        );
        list.pop_rotation();
    }

    fn hour_hand(&self, degrees: f32, list: &mut DrawList) {
        let m = self.metrics;
        list.push_rotation(degrees, m.center);
        list.push_path(
            Layer::HourHand,
            hands::hour_blade(m),
            self.style.blade_paint(m, hands::hour_tip_y(m)),
        );
        list.push_ring(
            Layer::HourHand,
            m.center,
            hands::HUB_RADIUS * m.radius,
            self.style.ring_stroke(hands::HOUR_RING_STROKE * m.radius),
        );
        list.pop_rotation();
    }
}
