use crate::coords::Vec2;
use crate::paint::{Paint, Stroke};
use crate::scene::{DrawCmd, DrawList, Layer};

/// Circle draw payload.
///
/// `fill` and `stroke` may each be absent; the hub rings are stroke-only.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Option<Paint>, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        layer: Layer,
        center: Vec2,
        radius: f32,
        fill: Option<Paint>,
        stroke: Option<Stroke>,
    ) {
        self.push(layer, DrawCmd::Circle(CircleCmd::new(center, radius, fill, stroke)));
    }

    /// Records a stroke-only circle.
    #[inline]
    pub fn push_ring(&mut self, layer: Layer, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_circle(layer, center, radius, None, Some(stroke));
    }
}
