//! The shared 3D cursor and the cross-view synchronization rule.

use crate::enums::ViewPlane;

/// The single 3D voxel index at the intersection of the three displayed
/// planes.
///
/// One component per volume axis, each kept inside its axis bounds after
/// every mutation. Storing per-axis components (rather than one depth per
/// view) makes each clamp bound the written axis's own length by
/// construction, which is what keeps clamping correct on non-cubic volumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    index: [usize; 3],
}

impl Cursor {
    /// Cursor at the midpoint of each axis.
    pub fn centered(dim: (usize, usize, usize)) -> Self {
        Self {
            index: [dim.0 / 2, dim.1 / 2, dim.2 / 2],
        }
    }

    /// Component along each volume axis.
    pub fn position(&self) -> [usize; 3] {
        self.index
    }

    /// Depth index of `view`, read along that view's depth axis.
    pub fn depth(&self, view: ViewPlane) -> usize {
        self.index[view.depth_axis()]
    }

    /// In-plane position of the cursor in `view`, as (x, y) along the view's
    /// plane axes. This is where the crosshair is drawn.
    pub fn in_plane(&self, view: ViewPlane) -> (usize, usize) {
        let (ax, ay) = view.plane_axes();
        (self.index[ax], self.index[ay])
    }

    /// Apply a click/drag at in-plane `(x, y)` of `view`.
    ///
    /// Writes the two in-plane coordinates into the components of the two
    /// *other* views' depth axes and leaves the component along `view`'s own
    /// depth axis untouched; what is visible inside a view is orthogonal to
    /// its own depth. Each written component is rounded to the nearest voxel
    /// and clamped to its axis bounds, so clicks outside the data land on
    /// the boundary.
    pub fn set_from_click(&mut self, view: ViewPlane, x: f32, y: f32, dim: (usize, usize, usize)) {
        let (ax, ay) = view.plane_axes();
        let lens = [dim.0, dim.1, dim.2];
        self.index[ax] = clamp_to_axis(x, lens[ax]);
        self.index[ay] = clamp_to_axis(y, lens[ay]);
    }

}

/// Round a continuous in-plane coordinate to a voxel index on `len` voxels.
pub(crate) fn clamp_to_axis(coordinate: f32, len: usize) -> usize {
    (coordinate.round() as i64).clamp(0, len as i64 - 1) as usize
}
