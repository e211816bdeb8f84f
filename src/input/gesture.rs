use crate::controllers::interactive::data::intent::ViewerIntent;
use crate::core::viewport::viewport::Viewport;

/// Pixels of smooth-scroll travel treated as one wheel notch.
pub const PIXELS_PER_WHEEL_STEP: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Pan,
    Parameter,
}

/// Turns raw pointer positions and button states into viewer intents.
///
/// Dragging with the pan button moves the view; holding the parameter button
/// sets the Julia parameter to the point under the cursor and follows it.
#[derive(Debug, Default, Clone)]
pub struct GestureTracker {
    cursor: Option<(f64, f64)>,
    panning: bool,
    picking: bool,
}

impl GestureTracker {
    #[must_use]
    pub fn cursor(&self) -> Option<(f64, f64)> {
        self.cursor
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64, viewport: &Viewport) -> Option<ViewerIntent> {
        let previous = self.cursor.replace((x, y));

        if self.picking {
            return Some(ViewerIntent::SetParameter(viewport.window_to_plane(x, y)));
        }

        match (self.panning, previous) {
            (true, Some((px, py))) => Some(ViewerIntent::Pan {
                dx: x - px,
                dy: y - py,
            }),
            _ => None,
        }
    }

    pub fn button(&mut self, button: PointerButton, pressed: bool, viewport: &Viewport) -> Option<ViewerIntent> {
        match button {
            PointerButton::Pan => {
                self.panning = pressed;
                None
            }
            PointerButton::Parameter => {
                self.picking = pressed;
                match (pressed, self.cursor) {
                    (true, Some((x, y))) => {
                        Some(ViewerIntent::SetParameter(viewport.window_to_plane(x, y)))
                    }
                    _ => None,
                }
            }
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = None;
        self.panning = false;
        self.picking = false;
    }
}

#[must_use]
pub fn wheel_lines(lines: f64) -> ViewerIntent {
    ViewerIntent::Zoom { wheel_delta: lines }
}

#[must_use]
pub fn wheel_pixels(pixels: f64) -> ViewerIntent {
    ViewerIntent::Zoom {
        wheel_delta: pixels / PIXELS_PER_WHEEL_STEP,
    }
}
