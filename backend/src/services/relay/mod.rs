//! # Relay Service Module
//!
//! Same-origin stand-in for the Apps Script endpoint. The form, when served
//! from this backend, posts to `/api/<tail>` instead of the cross-origin
//! script URL; the relay forwards the JSON body to
//! `<upstream>/macros/<tail>` and hands the upstream answer back unchanged.
//!
//! ## Sub-modules:
//! - `forward`: the handler and the outbound request.

mod forward;

use actix_web::web::{post, scope};
use actix_web::Scope;

pub use forward::Relay;

/// The base path for all relayed requests.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the relay.
///
/// # Registered Routes:
///
/// *   **`POST /{tail:.*}`**:
///     - **Handler**: `forward::process`
///     - **Description**: Forwards the request body to the script endpoint
///       with `Content-Type: application/json`. Replies with the upstream
///       status and body, or `502 Bad Gateway` when the upstream cannot be
///       reached.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/{tail:.*}", post().to(forward::process))
}
