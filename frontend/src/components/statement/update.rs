//! Update function for the statement form.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`, mutates
//! the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits go straight into `FormState`.
//! - Pointer and touch events drive the surface's pen-down state machine and
//!   mirror each new segment onto the canvas.
//! - Submit runs the pipeline: validate → resolve signature (reading an upload
//!   asynchronously when needed) → one POST → toast, reset on success.
//!   A rejected submit (missing consent, field or signature) is an alert.

use common::model::record::FormRecord;
use common::signature::download_file_name;
use common::submission::PendingSignature;
use gloo_console as console;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::canvas;
use super::helpers::{download, notify, now_iso8601, read_upload, report, show_toast};
use super::messages::Msg;
use super::state::StatementForm;
use super::transport::post_payload;

pub fn update(component: &mut StatementForm, ctx: &Context<StatementForm>, msg: Msg) -> bool {
    match msg {
        Msg::UpdateField(field, value) => {
            if let Err(err) = component.form.set_field(field, value) {
                console::error!(err.to_string());
                return false;
            }
            true
        }
        Msg::StrokeBegin(input) => {
            component.form.surface_mut().begin_stroke(input.to_surface());
            false
        }
        Msg::StrokeMove(input) => {
            let point = input.to_surface();
            if let Some(from) = component.form.surface_mut().extend_stroke(point) {
                canvas::draw_segment(&component.canvas_ref, from, point);
            }
            false
        }
        Msg::StrokeEnd => {
            component.form.surface_mut().end_stroke();
            true
        }
        Msg::ClearSignature => {
            component.form.clear_signature();
            canvas::clear(&component.canvas_ref);
            true
        }
        Msg::DownloadSignature => {
            match component.form.surface().export() {
                Ok(uri) => download(&uri, &download_file_name(&component.form.record().nama)),
                Err(err) => {
                    console::error!(err.to_string());
                    show_toast(&err.to_string(), true);
                }
            }
            false
        }
        Msg::FileSelected(file) => {
            component.form.attach_upload(file);
            true
        }
        Msg::Submit => {
            match component.pipeline.begin(&component.form) {
                Err(err) => report(&err),
                Ok(accepted) => match accepted.signature {
                    PendingSignature::Ready(signature) => {
                        send(component, ctx, accepted.record, signature);
                    }
                    PendingSignature::Upload(file) => {
                        let record = accepted.record;
                        let link = ctx.link().clone();
                        spawn_local(async move {
                            match read_upload(file).await {
                                Ok(signature) => {
                                    link.send_message(Msg::SignatureResolved { record, signature })
                                }
                                Err(err) => link.send_message(Msg::SignatureFailed(err.to_string())),
                            }
                        });
                    }
                },
            }
            true
        }
        Msg::SignatureResolved { record, signature } => {
            send(component, ctx, record, signature);
            true
        }
        Msg::SignatureFailed(reason) => {
            console::error!(format!("Error: {}", reason));
            notify(&component.pipeline.encoding_failed(reason));
            true
        }
        Msg::Sent(outcome) => {
            if let Err(err) = &outcome {
                console::error!(format!("Error: {}", err));
            }
            let notification = component.pipeline.finish(outcome, &mut component.form);
            if !notification.is_error() {
                clear_widgets(component);
            }
            notify(&notification);
            true
        }
    }
}

/// Builds the payload and posts it; the outcome comes back as `Msg::Sent`.
fn send(
    component: &mut StatementForm,
    ctx: &Context<StatementForm>,
    record: FormRecord,
    signature: String,
) {
    let payload = component.pipeline.send(record, signature, now_iso8601());
    let target = component.target.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = post_payload(&target, &payload).await;
        link.send_message(Msg::Sent(outcome));
    });
}

/// Brings the DOM-held parts of the form in line with a freshly reset
/// `FormState`: the canvas pixels and the file input's selection.
fn clear_widgets(component: &StatementForm) {
    canvas::clear(&component.canvas_ref);
    if let Some(input) = component.file_input_ref.cast::<web_sys::HtmlInputElement>() {
        input.set_value("");
    }
}
