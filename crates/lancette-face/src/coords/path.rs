use super::Vec2;

/// Single path verb, in surface coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic Bézier to `to`, bending through control point `ctrl`.
    QuadTo { ctrl: Vec2, to: Vec2 },
    /// Closes the current contour back to its `MoveTo`.
    Close,
}

/// Ordered verb list describing a closed or open outline.
///
/// Paths are immutable values once built; the face rebuilds them whenever
/// the radius changes rather than mutating a retained path across frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    verbs: Vec<PathVerb>,
}

impl Path {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn move_to(mut self, p: Vec2) -> Self {
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    #[inline]
    pub fn line_to(mut self, p: Vec2) -> Self {
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    #[inline]
    pub fn quad_to(mut self, ctrl: Vec2, to: Vec2) -> Self {
        self.verbs.push(PathVerb::QuadTo { ctrl, to });
        self
    }

    #[inline]
    pub fn close(mut self) -> Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    #[inline]
    pub fn verbs(&self) -> &[PathVerb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// Every coordinate the path references, control points included.
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.verbs.iter().flat_map(|verb| match *verb {
            PathVerb::MoveTo(p) | PathVerb::LineTo(p) => vec![p],
            PathVerb::QuadTo { ctrl, to } => vec![ctrl, to],
            PathVerb::Close => vec![],
        })
    }
}
