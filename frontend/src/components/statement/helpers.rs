//! Browser helpers for the statement form.
//!
//! - **User feedback**: modal alerts for rejected submits, transient toasts
//!   for everything else.
//! - **Field events**: turning a change/input event into a `(Field, FieldValue)`.
//! - **Files**: reading an uploaded signature into a data URI and saving the
//!   drawn signature as a download.
//! - **Time**: the ISO-8601 submission timestamp.

use common::encoding::to_data_uri;
use common::model::record::{Field, FieldValue};
use common::submission::{Notification, SubmitError};
use gloo_file::futures::read_as_bytes;
use gloo_file::FileReadError;
use js_sys::Date;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlAnchorElement, HtmlElement, HtmlInputElement, HtmlSelectElement};

/// Displays a temporary notification message at the bottom of the screen.
///
/// Creates a styled `div`, appends it to `<body>` and removes it after a few
/// seconds. Errors are shown on a red background.
pub fn show_toast(message: &str, is_error: bool) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                let html_toast: HtmlElement = toast.unchecked_into();
                let background = if is_error {
                    "rgba(185, 28, 28, 0.9)"
                } else {
                    "rgba(0, 0, 0, 0.8)"
                };
                let style = html_toast.style();
                style.set_property("position", "fixed").ok();
                style.set_property("bottom", "20px").ok();
                style.set_property("left", "50%").ok();
                style.set_property("transform", "translateX(-50%)").ok();
                style.set_property("background", background).ok();
                style.set_property("color", "#fff").ok();
                style.set_property("padding", "10px 20px").ok();
                style.set_property("border-radius", "4px").ok();
                style.set_property("z-index", "10000").ok();
                style.set_property("font-family", "Arial, sans-serif").ok();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}

/// Modal browser alert; the user has to dismiss it before continuing.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}

/// Rejected submits block on an alert, everything else is a toast.
pub fn report(error: &SubmitError) {
    if error.is_blocking() {
        alert(&error.to_string());
    } else {
        notify(&Notification::from(error));
    }
}

pub fn notify(notification: &Notification) {
    show_toast(notification.message(), notification.is_error());
}

/// Reads the `name` and value of the input or select that fired `event`.
///
/// Checkboxes yield their `checked` state, everything else its string value.
/// Returns `None` for elements whose name is not a form field.
pub fn field_change(event: &Event) -> Option<(Field, FieldValue)> {
    let target = event.target()?;
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        let field = Field::from_name(&input.name())?;
        let value = if input.type_() == "checkbox" {
            FieldValue::Flag(input.checked())
        } else {
            FieldValue::Text(input.value())
        };
        return Some((field, value));
    }
    let select = target.dyn_ref::<HtmlSelectElement>()?;
    let field = Field::from_name(&select.name())?;
    Some((field, FieldValue::Text(select.value())))
}

/// Reads an uploaded file and encodes it as a data URI carrying its MIME type.
pub async fn read_upload(file: web_sys::File) -> Result<String, FileReadError> {
    let file = gloo_file::File::from(file);
    let bytes = read_as_bytes(&file).await?;
    Ok(to_data_uri(&file.raw_mime_type(), &bytes))
}

/// Triggers a client-side save of `href` under `file_name`.
pub fn download(href: &str, file_name: &str) {
    let anchor = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.create_element("a").ok())
        .and_then(|element| element.dyn_into::<HtmlAnchorElement>().ok());
    if let Some(anchor) = anchor {
        anchor.set_href(href);
        anchor.set_download(file_name);
        anchor.click();
    }
}

/// Current time as ISO-8601, e.g. `2024-05-02T03:04:05.678Z`.
pub fn now_iso8601() -> String {
    String::from(Date::new_0().to_iso_string())
}
