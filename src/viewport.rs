//! Per-view pan/zoom state.

/// Zoom factor per scroll notch.
pub const ZOOM_STEP: f32 = 1.1;

/// The visible data-coordinate rectangle of one view.
///
/// Each view owns one, mutated independently of the others. The rectangle is
/// never empty; pan and zoom both preserve that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl Viewport {
    /// Rectangle covering a full plane of the given in-plane extent.
    pub fn fit(width: usize, height: usize) -> Self {
        Self {
            x_min: 0.0,
            x_max: width as f32,
            y_min: 0.0,
            y_max: height as f32,
        }
    }

    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Shift the visible rectangle by a drag delta in data coordinates.
    ///
    /// Not clamped against the data extent: scrolling away from the slice is
    /// allowed.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.x_min += dx;
        self.x_max += dx;
        self.y_min += dy;
        self.y_max += dy;
    }

    /// Rescale around the data point `(cx, cy)` by `scale` (> 1 zooms in).
    ///
    /// The point under the cursor keeps its relative position inside the
    /// rectangle. No depth cap in either direction; the UI layer limits zoom
    /// if it wants one.
    pub fn zoom_about(&mut self, cx: f32, cy: f32, scale: f32) {
        self.x_min = cx - (cx - self.x_min) / scale;
        self.x_max = cx + (self.x_max - cx) / scale;
        self.y_min = cy - (cy - self.y_min) / scale;
        self.y_max = cy + (self.y_max - cy) / scale;
    }
}
