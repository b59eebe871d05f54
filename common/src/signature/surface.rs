use log::debug;

use super::input::Point;
use super::raster;
use super::SignatureError;
use crate::encoding::{to_data_uri, PNG_MIME};

/// Width of the signature canvas in the form.
pub const DEFAULT_WIDTH: u32 = 300;
/// Height of the signature canvas in the form.
pub const DEFAULT_HEIGHT: u32 = 100;

/// One continuous pen-down path.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
}

impl Stroke {
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// A path needs at least one segment before anything is visible.
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2
    }
}

/// The drawing surface.
///
/// Holds the finished strokes plus the one currently being drawn. The
/// "pen down" state is explicit: `extend_stroke` does nothing unless
/// `begin_stroke` was called and `end_stroke` has not been called since.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureSurface {
    width: u32,
    height: u32,
    strokes: Vec<Stroke>,
    current: Option<Stroke>,
}

impl Default for SignatureSurface {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl SignatureSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            strokes: Vec::new(),
            current: None,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Starts a new path at `point`. A stroke still in progress is closed first.
    pub fn begin_stroke(&mut self, point: Point) {
        self.end_stroke();
        self.current = Some(Stroke::from_points(vec![point]));
    }

    /// Adds a segment from the last point to `point`.
    ///
    /// Returns the segment start when a segment was added, `None` when no
    /// stroke is in progress.
    pub fn extend_stroke(&mut self, point: Point) -> Option<Point> {
        let stroke = self.current.as_mut()?;
        let last = stroke.points.last().copied();
        stroke.points.push(point);
        last
    }

    /// Closes the current path. Taps that never moved leave no trace.
    pub fn end_stroke(&mut self) {
        if let Some(stroke) = self.current.take() {
            if stroke.is_visible() {
                self.strokes.push(stroke);
            }
        }
    }

    /// Erases everything, including a stroke in progress. Idempotent.
    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    /// `true` when nothing visible has been drawn.
    pub fn is_blank(&self) -> bool {
        self.visible_strokes().next().is_none()
    }

    /// Finished strokes in drawing order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Finished strokes followed by the one in progress, if it has a segment.
    pub fn visible_strokes(&self) -> impl Iterator<Item = &Stroke> {
        self.strokes
            .iter()
            .chain(self.current.iter().filter(|stroke| stroke.is_visible()))
    }

    /// PNG bytes of the current contents.
    pub fn to_png(&self) -> Result<Vec<u8>, SignatureError> {
        let image = raster::render(self.width, self.height, self.visible_strokes());
        Ok(raster::encode_png(&image)?)
    }

    /// Current contents as a `data:image/png;base64,...` URI. A blank
    /// surface yields a fully transparent image of the surface size.
    pub fn export(&self) -> Result<String, SignatureError> {
        let png = self.to_png()?;
        debug!(
            "exported signature surface: {} strokes, {} bytes",
            self.strokes.len(),
            png.len()
        );
        Ok(to_data_uri(PNG_MIME, &png))
    }
}
