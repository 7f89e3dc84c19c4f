use crate::coords::Path;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, Layer};

/// Filled path payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub path: Path,
    pub paint: Paint,
}

impl PathCmd {
    #[inline]
    pub fn new(path: Path, paint: Paint) -> Self {
        Self { path, paint }
    }
}

impl DrawList {
    /// Records a filled path.
    #[inline]
    pub fn push_path(&mut self, layer: Layer, path: Path, paint: Paint) {
        self.push(layer, DrawCmd::Path(PathCmd::new(path, paint)));
    }
}
