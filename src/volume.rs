use crate::enums::ViewPlane;

use image::ImageBuffer;
use image::Luma;
use ndarray::Array3;
use ndarray::ArrayView2;
use ndarray::s;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("Volume dimensions must all be positive, got {0}x{1}x{2}")]
    EmptyDimensions(usize, usize, usize),

    #[error("Data length {got} does not match dimensions {d0}x{d1}x{d2}")]
    DataLengthMismatch {
        got: usize,
        d0: usize,
        d1: usize,
        d2: usize,
    },
}

/// A 3D scalar field, immutable once constructed.
///
/// The session shares it read-only with all three view pipelines; nothing
/// mutates it after load, so slice extraction needs no locking.
pub struct Volume {
    data: Array3<f32>,
}

impl Volume {
    /// Wrap an existing 3D array.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::EmptyDimensions`] if any dimension is zero.
    pub fn new(data: Array3<f32>) -> Result<Self, VolumeError> {
        let (d0, d1, d2) = data.dim();
        if d0 == 0 || d1 == 0 || d2 == 0 {
            return Err(VolumeError::EmptyDimensions(d0, d1, d2));
        }
        Ok(Self { data })
    }

    /// Build a volume from a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// Returns error if any dimension is zero or the buffer length does not
    /// match the dimensions.
    pub fn from_flat(dim: (usize, usize, usize), data: Vec<f32>) -> Result<Self, VolumeError> {
        let (d0, d1, d2) = dim;
        if d0 == 0 || d1 == 0 || d2 == 0 {
            return Err(VolumeError::EmptyDimensions(d0, d1, d2));
        }
        let got = data.len();
        let array = Array3::from_shape_vec(dim, data)
            .map_err(|_| VolumeError::DataLengthMismatch { got, d0, d1, d2 })?;
        Ok(Self { data: array })
    }

    /// Get the dimensions of the volume along axes (0, 1, 2)
    pub fn dim(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Length of a single volume axis.
    pub fn axis_len(&self, axis: usize) -> usize {
        self.data.shape()[axis]
    }

    /// Get a reference to the underlying data
    pub fn data(&self) -> &Array3<f32> {
        &self.data
    }

    /// Raw sample access. No bounds clamping here: this is the hot path and
    /// callers are expected to clamp; out-of-range indices panic.
    #[inline]
    pub fn sample(&self, i: usize, j: usize, k: usize) -> f32 {
        self.data[[i, j, k]]
    }

    /// Shape of the planes this view produces, as (rows, cols) along the
    /// view's in-plane axis pair.
    pub fn plane_shape(&self, view: ViewPlane) -> (usize, usize) {
        let (ax, ay) = view.plane_axes();
        (self.axis_len(ax), self.axis_len(ay))
    }

    /// Extract the 2D plane of `view` at `depth`.
    ///
    /// The depth index is clamped into the valid range of the view's own
    /// depth axis, so out-of-range requests (including negative ones) return
    /// the nearest boundary plane. The clamp bound must come from the depth
    /// axis, not the view index; the two differ on non-cubic volumes.
    pub fn plane(&self, view: ViewPlane, depth: isize) -> ArrayView2<'_, f32> {
        let depth = self.clamp_depth(view, depth);
        match view {
            ViewPlane::Axial => self.data.slice(s![.., .., depth]),
            ViewPlane::Coronal => self.data.slice(s![.., depth, ..]),
            ViewPlane::Sagittal => self.data.slice(s![depth, .., ..]),
        }
    }

    fn clamp_depth(&self, view: ViewPlane, depth: isize) -> usize {
        let len = self.axis_len(view.depth_axis());
        depth.clamp(0, len as isize - 1) as usize
    }

    /// Quantize a normalized plane (values in [0, 1]) to an 8-bit grayscale
    /// image buffer.
    pub fn plane_to_image(plane: &ArrayView2<'_, f32>) -> Option<ImageBuffer<Luma<u8>, Vec<u8>>> {
        let (height, width) = plane.dim();
        let pixel_data: Vec<u8> = plane
            .into_par_iter()
            .map(|&v| Self::normalize_to_u8(v))
            .collect();
        ImageBuffer::from_raw(width as u32, height as u32, pixel_data)
    }

    #[inline]
    fn normalize_to_u8(value: f32) -> u8 {
        (value * 255.0).clamp(0.0, 255.0) as u8
    }
}
