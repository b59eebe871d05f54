/// A coordinate relative to the top-left corner of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport position of the surface, as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
}

/// Raw pointer position as delivered by the browser.
///
/// Mouse events already carry surface-local offsets. Touch points only carry
/// viewport coordinates, so they need the surface rectangle to be mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Mouse { offset_x: f64, offset_y: f64 },
    Touch { client_x: f64, client_y: f64, rect: SurfaceRect },
}

impl PointerInput {
    pub fn to_surface(self) -> Point {
        match self {
            PointerInput::Mouse { offset_x, offset_y } => Point::new(offset_x, offset_y),
            PointerInput::Touch {
                client_x,
                client_y,
                rect,
            } => Point::new(client_x - rect.left, client_y - rect.top),
        }
    }
}
