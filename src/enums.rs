/// One of the three orthogonal viewing planes.
///
/// Each plane carries a fixed assignment of volume axes: the depth axis it
/// slices along and the two axes spanning the visible plane. The assignment
/// is not configurable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewPlane {
    Axial,
    Coronal,
    Sagittal,
}

impl ViewPlane {
    pub const ALL: [ViewPlane; 3] = [ViewPlane::Axial, ViewPlane::Coronal, ViewPlane::Sagittal];

    /// Volume axis this view slices along.
    pub fn depth_axis(self) -> usize {
        match self {
            ViewPlane::Axial => 2,
            ViewPlane::Coronal => 1,
            ViewPlane::Sagittal => 0,
        }
    }

    /// Volume axes spanning the visible plane, in (x, y) order.
    ///
    /// In-plane coordinates throughout the crate follow this pair: `x` runs
    /// along the first listed axis, `y` along the second.
    pub fn plane_axes(self) -> (usize, usize) {
        match self {
            ViewPlane::Axial => (0, 1),
            ViewPlane::Coronal => (0, 2),
            ViewPlane::Sagittal => (1, 2),
        }
    }

    /// Position of this view in per-view storage such as `Session` viewports.
    pub fn index(self) -> usize {
        match self {
            ViewPlane::Axial => 0,
            ViewPlane::Coronal => 1,
            ViewPlane::Sagittal => 2,
        }
    }
}

/// Opaque colormap identifier handed through to the renderer.
///
/// The engine never evaluates the mapping; the renderer owns the lookup
/// tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Colormap {
    #[default]
    Gray,
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Jet,
}
