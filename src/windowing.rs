//! Per-slice intensity windowing.
//!
//! Each extracted plane is stretched to its own intensity range before the
//! brightness/contrast transfer is applied. The same physical intensity can
//! therefore render differently across slices; that is intended behavior,
//! not a normalization bug.

use ndarray::Array2;
use ndarray::ArrayView2;

pub const BRIGHTNESS_MIN: f32 = -1.0;
pub const BRIGHTNESS_MAX: f32 = 1.0;
pub const CONTRAST_MIN: f32 = 0.01;
pub const CONTRAST_MAX: f32 = 2.0;

/// Brightness/contrast settings, shared by all three views.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowParams {
    brightness: f32,
    contrast: f32,
}

impl Default for WindowParams {
    fn default() -> Self {
        Self {
            brightness: 0.0,
            contrast: 1.0,
        }
    }
}

impl WindowParams {
    pub fn new(brightness: f32, contrast: f32) -> Self {
        let mut params = Self::default();
        params.set_brightness(brightness);
        params.set_contrast(contrast);
        params
    }

    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    pub fn set_brightness(&mut self, brightness: f32) {
        self.brightness = brightness.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
    }

    pub fn set_contrast(&mut self, contrast: f32) {
        self.contrast = contrast.clamp(CONTRAST_MIN, CONTRAST_MAX);
    }
}

/// Map a raw plane to display intensities in [0, 1].
///
/// The plane is min-max stretched over its own values; a flat plane (all
/// values equal) maps to a constant 0.5 instead. Contrast then pivots around
/// 0.5 and brightness shifts, with the result clamped to [0, 1]:
///
/// `clamp((stretched - 0.5) * contrast + 0.5 + brightness, 0, 1)`
///
/// Deterministic and side-effect free.
pub fn normalize(plane: ArrayView2<'_, f32>, params: &WindowParams) -> Array2<f32> {
    let (lo, hi) = plane
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    let brightness = params.brightness();
    let contrast = params.contrast();
    let range = hi - lo;

    let mut out = plane.to_owned();
    out.par_mapv_inplace(|v| {
        let stretched = if hi > lo { (v - lo) / range } else { 0.5 };
        ((stretched - 0.5) * contrast + 0.5 + brightness).clamp(0.0, 1.0)
    });
    out
}
