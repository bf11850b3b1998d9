//! Cross-view point annotation.

use crate::cursor::Cursor;
use crate::cursor::clamp_to_axis;
use crate::enums::ViewPlane;

/// A single marked 3D voxel, shown in all three views at once.
///
/// There is at most one per session; placing a new point replaces the old
/// one everywhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkedPoint {
    index: [usize; 3],
}

impl MarkedPoint {
    /// Build the 3D point implied by a click at in-plane `(x, y)` of `view`.
    ///
    /// The two in-plane coordinates are rounded and clamped onto the view's
    /// plane axes; the missing coordinate along the view's depth axis comes
    /// from the cursor's current depth in that view.
    pub fn from_click(
        view: ViewPlane,
        x: f32,
        y: f32,
        cursor: &Cursor,
        dim: (usize, usize, usize),
    ) -> Self {
        let (ax, ay) = view.plane_axes();
        let lens = [dim.0, dim.1, dim.2];
        let mut index = [0usize; 3];
        index[ax] = clamp_to_axis(x, lens[ax]);
        index[ay] = clamp_to_axis(y, lens[ay]);
        index[view.depth_axis()] = cursor.depth(view);
        Self { index }
    }

    /// Component along each volume axis.
    pub fn position(&self) -> [usize; 3] {
        self.index
    }

    /// Projection into `view`, as (x, y) along the view's plane axes.
    pub fn in_plane(&self, view: ViewPlane) -> (usize, usize) {
        let (ax, ay) = view.plane_axes();
        (self.index[ax], self.index[ay])
    }
}
