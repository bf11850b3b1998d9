//! Session state and event dispatch.
//!
//! The session owns every piece of mutable viewer state: the loaded volume,
//! the shared cursor, window parameters, one viewport per view and the
//! optional marked point. All mutation goes through [`Session::handle_event`]
//! on a single thread; rendering reads a consistent snapshot.

use crate::annotation::MarkedPoint;
use crate::cursor::Cursor;
use crate::enums::Colormap;
use crate::enums::ViewPlane;
use crate::events::InputEvent;
use crate::events::Modifier;
use crate::events::ScrollDirection;
use crate::viewport::Viewport;
use crate::viewport::ZOOM_STEP;
use crate::volume::Volume;
use crate::windowing::WindowParams;
use crate::windowing::normalize;

use log::debug;
use log::info;
use ndarray::Array2;

/// Everything an external renderer needs to draw one view.
///
/// The engine never touches pixels; it hands out the windowed plane, the
/// visible rectangle, the colormap identifier and the overlay coordinates.
pub struct ViewFrame {
    /// Windowed plane, values in [0, 1], rows along the view's first
    /// in-plane axis.
    pub image: Array2<f32>,
    /// Visible data-coordinate rectangle of this view.
    pub viewport: Viewport,
    pub colormap: Colormap,
    /// Cursor projection into this view, in (x, y) plane coordinates.
    pub crosshair: (usize, usize),
    /// Marked-point projection, if a point is placed.
    pub marker: Option<(usize, usize)>,
}

enum DragState {
    Idle,
    Crosshair,
    Pan { start: (f32, f32) },
}

/// One viewer session: a volume plus all navigation state.
pub struct Session {
    volume: Option<Volume>,
    cursor: Cursor,
    window: WindowParams,
    viewports: [Viewport; 3],
    marker: Option<MarkedPoint>,
    colormap: Colormap,
    drag: DragState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session; view-producing operations are no-ops until a volume is
    /// loaded.
    pub fn new() -> Self {
        Self {
            volume: None,
            cursor: Cursor::centered((1, 1, 1)),
            window: WindowParams::default(),
            viewports: [Viewport::fit(1, 1); 3],
            marker: None,
            colormap: Colormap::default(),
            drag: DragState::Idle,
        }
    }

    /// Install a volume, recentering the cursor, refitting every viewport to
    /// its plane extent and clearing the marked point.
    ///
    /// Construction errors are raised by the [`Volume`] constructors before
    /// this is called, so a failed load never disturbs the current session.
    pub fn load_volume(&mut self, volume: Volume) {
        let dim = volume.dim();
        self.cursor = Cursor::centered(dim);
        for view in ViewPlane::ALL {
            let (width, height) = volume.plane_shape(view);
            self.viewports[view.index()] = Viewport::fit(width, height);
        }
        self.marker = None;
        self.drag = DragState::Idle;
        info!("loaded volume {}x{}x{}", dim.0, dim.1, dim.2);
        self.volume = Some(volume);
    }

    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn window(&self) -> &WindowParams {
        &self.window
    }

    pub fn viewport(&self, view: ViewPlane) -> &Viewport {
        &self.viewports[view.index()]
    }

    pub fn marked_point(&self) -> Option<&MarkedPoint> {
        self.marker.as_ref()
    }

    pub fn colormap(&self) -> Colormap {
        self.colormap
    }

    /// Dispatch one input event.
    ///
    /// Pointer events are ignored while no volume is loaded; parameter
    /// events always apply.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Press {
                view,
                x,
                y,
                modifier,
            } => self.press(view, x, y, modifier),
            InputEvent::Drag { view, x, y } => self.drag_to(view, x, y),
            InputEvent::Release => self.drag = DragState::Idle,
            InputEvent::Scroll {
                view,
                x,
                y,
                direction,
            } => self.scroll(view, x, y, direction),
            InputEvent::SetBrightness(value) => self.window.set_brightness(value),
            InputEvent::SetContrast(value) => self.window.set_contrast(value),
            InputEvent::SetColormap(colormap) => self.colormap = colormap,
        }
    }

    fn press(&mut self, view: ViewPlane, x: f32, y: f32, modifier: Modifier) {
        let Some(volume) = self.volume.as_ref() else {
            debug!("pointer event ignored, no volume loaded");
            return;
        };
        let dim = volume.dim();
        match modifier {
            Modifier::None => {
                self.cursor.set_from_click(view, x, y, dim);
                self.drag = DragState::Crosshair;
            }
            Modifier::AddPoint => {
                // Wholesale replacement: one outstanding point at most.
                self.marker = Some(MarkedPoint::from_click(view, x, y, &self.cursor, dim));
            }
            Modifier::Pan => {
                self.drag = DragState::Pan { start: (x, y) };
            }
        }
    }

    fn drag_to(&mut self, view: ViewPlane, x: f32, y: f32) {
        let Some(volume) = self.volume.as_ref() else {
            return;
        };
        match self.drag {
            DragState::Crosshair => {
                self.cursor.set_from_click(view, x, y, volume.dim());
            }
            DragState::Pan { start } => {
                // The start point is not rebased: the viewport shift moves
                // data coordinates under the pointer, so the next drag event
                // already arrives relative to the shifted rectangle.
                self.viewports[view.index()].pan(start.0 - x, start.1 - y);
            }
            DragState::Idle => {}
        }
    }

    fn scroll(&mut self, view: ViewPlane, x: f32, y: f32, direction: ScrollDirection) {
        if self.volume.is_none() {
            return;
        }
        let scale = match direction {
            ScrollDirection::Up => ZOOM_STEP,
            ScrollDirection::Down => 1.0 / ZOOM_STEP,
        };
        self.viewports[view.index()].zoom_about(x, y, scale);
    }

    /// Produce the frame for one view, or `None` while no volume is loaded.
    ///
    /// Extracts the view's plane at the current cursor depth and windows it
    /// with the shared parameters.
    pub fn render(&self, view: ViewPlane) -> Option<ViewFrame> {
        let volume = self.volume.as_ref()?;
        let depth = self.cursor.depth(view) as isize;
        let image = normalize(volume.plane(view, depth), &self.window);
        Some(ViewFrame {
            image,
            viewport: self.viewports[view.index()],
            colormap: self.colormap,
            crosshair: self.cursor.in_plane(view),
            marker: self.marker.map(|point| point.in_plane(view)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn session_with_volume(dim: (usize, usize, usize)) -> Session {
        let data = Array3::from_shape_fn(dim, |(i, j, k)| (i + j + k) as f32);
        let mut session = Session::new();
        session.load_volume(Volume::new(data).expect("valid dimensions"));
        session
    }

    #[test]
    fn load_resets_navigation_state() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 1.0,
            y: 2.0,
            modifier: Modifier::AddPoint,
        });
        assert!(session.marked_point().is_some());

        let data = Array3::zeros((8, 8, 8));
        session.load_volume(Volume::new(data).expect("valid dimensions"));
        assert_eq!(session.cursor().position(), [4, 4, 4]);
        assert!(session.marked_point().is_none());
        assert_eq!(session.viewport(ViewPlane::Axial).x_max, 8.0);
    }

    #[test]
    fn viewports_fit_each_plane_shape() {
        let session = session_with_volume((64, 32, 40));
        // Axial spans axes (0, 1), coronal (0, 2), sagittal (1, 2).
        assert_eq!(session.viewport(ViewPlane::Axial).x_max, 64.0);
        assert_eq!(session.viewport(ViewPlane::Axial).y_max, 32.0);
        assert_eq!(session.viewport(ViewPlane::Coronal).y_max, 40.0);
        assert_eq!(session.viewport(ViewPlane::Sagittal).x_max, 32.0);
    }

    #[test]
    fn plain_press_moves_the_cursor() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 10.0,
            y: 5.0,
            modifier: Modifier::None,
        });
        assert_eq!(session.cursor().position(), [10, 5, 20]);
    }

    #[test]
    fn crosshair_drag_follows_the_pointer() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Coronal,
            x: 10.0,
            y: 5.0,
            modifier: Modifier::None,
        });
        session.handle_event(InputEvent::Drag {
            view: ViewPlane::Coronal,
            x: 12.0,
            y: 8.0,
        });
        assert_eq!(session.cursor().position(), [12, 32, 8]);

        session.handle_event(InputEvent::Release);
        session.handle_event(InputEvent::Drag {
            view: ViewPlane::Coronal,
            x: 50.0,
            y: 30.0,
        });
        assert_eq!(
            session.cursor().position(),
            [12, 32, 8],
            "drag after release must not move the cursor"
        );
    }

    #[test]
    fn placing_a_point_replaces_the_previous_one() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 10.0,
            y: 5.0,
            modifier: Modifier::AddPoint,
        });
        assert_eq!(session.marked_point().map(|p| p.position()), Some([10, 5, 20]));

        session.handle_event(InputEvent::Press {
            view: ViewPlane::Sagittal,
            x: 3.0,
            y: 4.0,
            modifier: Modifier::AddPoint,
        });
        assert_eq!(session.marked_point().map(|p| p.position()), Some([32, 3, 4]));
    }

    #[test]
    fn pan_drag_shifts_only_that_viewport() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 10.0,
            y: 10.0,
            modifier: Modifier::Pan,
        });
        session.handle_event(InputEvent::Drag {
            view: ViewPlane::Axial,
            x: 4.0,
            y: 12.0,
        });
        let viewport = session.viewport(ViewPlane::Axial);
        assert_eq!(viewport.x_min, 6.0);
        assert_eq!(viewport.y_min, -2.0);
        // Cursor untouched by panning.
        assert_eq!(session.cursor().position(), [32, 32, 20]);
        // Other viewports untouched.
        assert_eq!(session.viewport(ViewPlane::Coronal).x_min, 0.0);
    }

    #[test]
    fn scroll_zooms_about_the_pointer() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::Scroll {
            view: ViewPlane::Sagittal,
            x: 20.0,
            y: 10.0,
            direction: ScrollDirection::Up,
        });
        let viewport = session.viewport(ViewPlane::Sagittal);
        assert!((viewport.width() - 64.0 / ZOOM_STEP).abs() < 1e-4);
        session.handle_event(InputEvent::Scroll {
            view: ViewPlane::Sagittal,
            x: 20.0,
            y: 10.0,
            direction: ScrollDirection::Down,
        });
        let viewport = session.viewport(ViewPlane::Sagittal);
        assert!((viewport.width() - 64.0).abs() < 1e-4);
    }

    #[test]
    fn parameter_events_clamp_and_store() {
        let mut session = Session::new();
        session.handle_event(InputEvent::SetBrightness(5.0));
        session.handle_event(InputEvent::SetContrast(-1.0));
        session.handle_event(InputEvent::SetColormap(Colormap::Viridis));
        assert_eq!(session.window().brightness(), 1.0);
        assert_eq!(session.window().contrast(), 0.01);
        assert_eq!(session.colormap(), Colormap::Viridis);
    }

    #[test]
    fn pointer_events_need_a_volume() {
        let mut session = Session::new();
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 10.0,
            y: 5.0,
            modifier: Modifier::None,
        });
        assert_eq!(session.cursor().position(), [0, 0, 0]);
        assert!(session.render(ViewPlane::Axial).is_none());
    }

    #[test]
    fn render_carries_overlays_and_settings() {
        let mut session = session_with_volume((64, 64, 40));
        session.handle_event(InputEvent::SetColormap(Colormap::Magma));
        session.handle_event(InputEvent::Press {
            view: ViewPlane::Axial,
            x: 10.0,
            y: 5.0,
            modifier: Modifier::AddPoint,
        });

        let frame = session.render(ViewPlane::Axial).expect("volume loaded");
        assert_eq!(frame.image.dim(), (64, 64));
        assert_eq!(frame.colormap, Colormap::Magma);
        assert_eq!(frame.crosshair, (32, 32));
        assert_eq!(frame.marker, Some((10, 5)));
        assert!(frame.image.iter().all(|&v| (0.0..=1.0).contains(&v)));
    }
}
