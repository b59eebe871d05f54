//! The single outbound request of a submit attempt.

use common::endpoint::Target;
use common::model::payload::SubmissionPayload;
use common::submission::TransportError;
use gloo_console as console;
use gloo_net::http::Request;
use web_sys::RequestMode;

/// Posts `payload` as JSON to `target`.
///
/// A direct request goes out in `no-cors` mode: the response is opaque, so
/// only a transport failure is an error. Through the relay the response is
/// readable and a non-2xx status (the relay answers 502 when the script is
/// unreachable) is reported as a failure too.
pub async fn post_payload(
    target: &Target,
    payload: &SubmissionPayload,
) -> Result<(), TransportError> {
    let mode = if target.is_opaque() {
        RequestMode::NoCors
    } else {
        RequestMode::SameOrigin
    };

    let response = Request::post(target.url())
        .mode(mode)
        .json(payload)
        .map_err(|err| TransportError(err.to_string()))?
        .send()
        .await
        .map_err(|err| TransportError(err.to_string()))?;

    if target.is_opaque() || response.ok() {
        return Ok(());
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    console::warn!(format!("relay answered {}: {}", status, body));
    Err(TransportError(format!("{} {}", status, body).trim().to_string()))
}
