//! Live preview on the `<canvas>` element.
//!
//! The canvas mirrors the strokes held by `SignatureSurface`; it is never read
//! back. Every function here is a silent no-op when the element or its 2D
//! context is unavailable.

use common::signature::{Point, PointerInput, SurfaceRect, BRUSH_RADIUS};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::NodeRef;

fn context(canvas_ref: &NodeRef) -> Option<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;
    Some((canvas, context))
}

/// Draws one segment with the same brush the PNG export uses.
pub fn draw_segment(canvas_ref: &NodeRef, from: Point, to: Point) {
    if let Some((_, ctx)) = context(canvas_ref) {
        ctx.set_line_width(BRUSH_RADIUS * 2.0);
        ctx.set_line_cap("round");
        ctx.set_line_join("round");
        ctx.begin_path();
        ctx.move_to(from.x, from.y);
        ctx.line_to(to.x, to.y);
        ctx.stroke();
    }
}

pub fn clear(canvas_ref: &NodeRef) {
    if let Some((canvas, ctx)) = context(canvas_ref) {
        ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
    }
}

pub fn mouse_input(event: &MouseEvent) -> PointerInput {
    PointerInput::Mouse {
        offset_x: event.offset_x() as f64,
        offset_y: event.offset_y() as f64,
    }
}

/// Position of the first active touch, relative to the canvas bounding box.
pub fn touch_input(event: &TouchEvent, canvas_ref: &NodeRef) -> Option<PointerInput> {
    let touch = event.touches().get(0)?;
    let rect = canvas_ref
        .cast::<HtmlCanvasElement>()
        .map(|canvas| {
            let bounds = canvas.get_bounding_client_rect();
            SurfaceRect {
                left: bounds.left(),
                top: bounds.top(),
            }
        })
        .unwrap_or_default();
    Some(PointerInput::Touch {
        client_x: touch.client_x() as f64,
        client_y: touch.client_y() as f64,
        rect,
    })
}
