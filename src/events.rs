//! Input events consumed by the session dispatcher.
//!
//! One explicit enum instead of per-canvas callback wiring, so the engine
//! stays independent of any particular UI toolkit or event loop.

use crate::enums::Colormap;
use crate::enums::ViewPlane;

/// What a mouse press inside a view means.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modifier {
    /// Move the crosshair and start a crosshair drag.
    #[default]
    None,
    /// Place the marked point.
    AddPoint,
    /// Start panning the view.
    Pan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A single UI event, already translated into data coordinates of the view
/// it happened in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press {
        view: ViewPlane,
        x: f32,
        y: f32,
        modifier: Modifier,
    },
    Drag {
        view: ViewPlane,
        x: f32,
        y: f32,
    },
    Release,
    Scroll {
        view: ViewPlane,
        x: f32,
        y: f32,
        direction: ScrollDirection,
    },
    SetBrightness(f32),
    SetContrast(f32),
    SetColormap(Colormap),
}
