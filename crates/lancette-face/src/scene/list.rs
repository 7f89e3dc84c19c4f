use crate::coords::Vec2;

use super::{DrawCmd, Layer};

/// Rotation applied to subsequently recorded commands.
///
/// `degrees` rotates clockwise about `pivot`, matching hand geometry built
/// in the unrotated twelve-o'clock position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Vec2,
}

/// A single draw item: layer + command + the rotation captured at push time.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub layer: Layer,
    /// Insertion index, for stable ordering within a layer.
    pub order: u32,
    /// `None` = unrotated surface coordinates.
    pub rotation: Option<Rotation>,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for one frame.
///
/// [`push_rotation`] / [`pop_rotation`] bracket the commands of one hand the
/// way a canvas save/rotate/restore would; calls must balance by the end of
/// the frame, which hosts can verify through [`rotation_depth`].
///
/// ```text
/// list.push_rotation(angle, center);
/// // ... push the hand's shapes ...
/// list.pop_rotation();
/// ```
///
/// [`push_rotation`]: DrawList::push_rotation
/// [`pop_rotation`]: DrawList::pop_rotation
/// [`rotation_depth`]: DrawList::rotation_depth
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    /// Stack of active rotations. The top is the current effective rotation,
    /// already composed with all parents.
    rotation_stack: Vec<Rotation>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the rotation stack. Keeps allocated
    /// capacity for reuse across frames.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.rotation_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    /// Pushes a draw command on the given layer.
    ///
    /// The item captures the current effective rotation.
    #[inline]
    pub fn push(&mut self, layer: Layer, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            layer,
            order,
            rotation: self.rotation_stack.last().copied(),
            cmd,
        });
    }

    /// Begins a rotated region. All commands pushed until [`pop_rotation`]
    /// carry a rotation of `degrees` clockwise about `pivot`.
    ///
    /// Nested rotations compose by summing angles; the face only ever
    /// rotates about the surface center, so composing across distinct
    /// pivots is not supported.
    ///
    /// Calls must be balanced with [`pop_rotation`].
    ///
    /// [`pop_rotation`]: DrawList::pop_rotation
    pub fn push_rotation(&mut self, degrees: f32, pivot: Vec2) {
        let effective = match self.rotation_stack.last() {
            None => Rotation { degrees, pivot },
            Some(&parent) => {
                debug_assert!(
                    parent.pivot == pivot,
                    "nested rotation about a different pivot"
                );
                Rotation { degrees: parent.degrees + degrees, pivot }
            }
        };
        self.rotation_stack.push(effective);
    }

    /// Ends the most recent region started by [`push_rotation`].
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_rotation`.
    ///
    /// [`push_rotation`]: DrawList::push_rotation
    #[inline]
    pub fn pop_rotation(&mut self) {
        debug_assert!(
            !self.rotation_stack.is_empty(),
            "pop_rotation called without matching push_rotation"
        );
        self.rotation_stack.pop();
    }

    /// Number of unmatched `push_rotation` calls. Zero after a well-formed
    /// frame.
    #[inline]
    pub fn rotation_depth(&self) -> usize {
        self.rotation_stack.len()
    }

    /// Items sorted back-to-front: ascending layer, insertion order within
    /// a layer.
    pub fn in_paint_order(&self) -> Vec<&DrawItem> {
        let mut sorted: Vec<&DrawItem> = self.items.iter().collect();
        sorted.sort_by_key(|item| (item.layer, item.order));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Path;
    use crate::paint::{Color, Paint};

    fn solid() -> Paint {
        Paint::Solid(Color::new(1.0, 1.0, 1.0, 1.0))
    }

    fn pivot() -> Vec2 {
        Vec2::new(50.0, 50.0)
    }

    // ── rotation stack ────────────────────────────────────────────────────

    #[test]
    fn items_capture_the_active_rotation() {
        let mut list = DrawList::new();

        list.push_path(Layer::SecondHand, Path::new(), solid());

        list.push_rotation(90.0, pivot());
        list.push_path(Layer::MinuteHand, Path::new(), solid());
        list.pop_rotation();

        assert_eq!(list.items()[0].rotation, None);
        assert_eq!(
            list.items()[1].rotation,
            Some(Rotation { degrees: 90.0, pivot: pivot() })
        );
        assert_eq!(list.rotation_depth(), 0);
    }

    #[test]
    fn nested_rotations_sum_about_a_shared_pivot() {
        let mut list = DrawList::new();

        list.push_rotation(30.0, pivot());
        list.push_rotation(15.0, pivot());
        list.push_path(Layer::HourHand, Path::new(), solid());
        list.pop_rotation();
        list.pop_rotation();

        assert_eq!(
            list.items()[0].rotation,
            Some(Rotation { degrees: 45.0, pivot: pivot() })
        );
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "pop_rotation called without matching push_rotation")]
    fn unbalanced_pop_panics_in_debug() {
        DrawList::new().pop_rotation();
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn paint_order_sorts_layers_ascending() {
        let mut list = DrawList::new();
        list.push_path(Layer::HourHand, Path::new(), solid());
        list.push_path(Layer::SecondHand, Path::new(), solid());
        list.push_path(Layer::MinuteHand, Path::new(), solid());

        let layers: Vec<Layer> = list.in_paint_order().iter().map(|i| i.layer).collect();
        assert_eq!(layers, vec![Layer::SecondHand, Layer::MinuteHand, Layer::HourHand]);
    }

    #[test]
    fn paint_order_is_stable_within_a_layer() {
        let mut list = DrawList::new();
        list.push_path(Layer::HourHand, Path::new(), solid());
        list.push_ring(Layer::HourHand, pivot(), 3.0, crate::paint::Stroke::new(1.0, Color::default()));

        let orders: Vec<u32> = list.in_paint_order().iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }

    // ── clear ─────────────────────────────────────────────────────────────

    #[test]
    fn clear_resets_items_order_and_stack() {
        let mut list = DrawList::new();
        list.push_rotation(10.0, pivot());
        list.push_path(Layer::SecondHand, Path::new(), solid());

        list.clear();

        assert!(list.items().is_empty());
        assert_eq!(list.rotation_depth(), 0);

        list.push_path(Layer::SecondHand, Path::new(), solid());
        assert_eq!(list.items()[0].order, 0);
    }
}
