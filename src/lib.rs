//! # MPR navigation engine
//!
//! This crate implements the navigation core of a Multi-Planar
//! Reconstruction viewer: slicing a 3D scalar volume into the three
//! orthogonal medical views and keeping them synchronized while the user
//! navigates.
//!
//! - Axial
//! - Coronal
//! - Sagittal
//!
//! A [`Session`] owns the loaded [`Volume`] together with all mutable
//! navigation state: the shared 3D [`Cursor`], process-wide
//! [`WindowParams`], one [`Viewport`] per view and at most one
//! [`MarkedPoint`]. UI toolkits feed it [`InputEvent`]s and pull a
//! [`ViewFrame`] per view; all drawing, file-format parsing and GPU volume
//! rendering stay outside the crate.
//!
//! Clicking inside one view re-slices the *other two* views through the
//! indicated point, producing the usual crosshair navigation idiom. Slices
//! are windowed per plane (min-max stretch, then brightness/contrast), and
//! every index that can leave the volume is clamped rather than rejected.
//!
//! # Examples
//!
//! ```
//! use mpr_nav::{InputEvent, Modifier, Session, ViewPlane, Volume};
//! use ndarray::Array3;
//!
//! let mut session = Session::new();
//! let volume = Volume::new(Array3::zeros((64, 64, 40)))?;
//! session.load_volume(volume);
//!
//! session.handle_event(InputEvent::Press {
//!     view: ViewPlane::Coronal,
//!     x: 10.0,
//!     y: 5.0,
//!     modifier: Modifier::None,
//! });
//!
//! let frame = session.render(ViewPlane::Axial).expect("volume is loaded");
//! assert_eq!(frame.image.dim(), (64, 64));
//! # Ok::<(), mpr_nav::VolumeError>(())
//! ```

pub mod annotation;
pub mod cursor;
pub mod enums;
pub mod events;
pub mod session;
pub mod viewport;
pub mod volume;
pub mod windowing;

pub use annotation::MarkedPoint;
pub use cursor::Cursor;
pub use enums::{Colormap, ViewPlane};
pub use events::{InputEvent, Modifier, ScrollDirection};
pub use session::{Session, ViewFrame};
pub use viewport::{Viewport, ZOOM_STEP};
pub use volume::{Volume, VolumeError};
pub use windowing::{WindowParams, normalize};
