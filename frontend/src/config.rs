//! Build-time configuration of the frontend.
//!
//! - `SURAT_SCRIPT_URL`: Apps Script deployment to submit to. Defaults to
//!   [`DEFAULT_SCRIPT_URL`].
//! - `SURAT_USE_RELAY`: `1`/`true` to post through the local relay
//!   (`/api/...`), `0`/`false` to post straight to the script. Defaults to
//!   on for debug builds.

use common::endpoint::{EndpointConfig, DEFAULT_SCRIPT_URL};

pub fn endpoint_config() -> EndpointConfig {
    EndpointConfig {
        script_url: option_env!("SURAT_SCRIPT_URL")
            .unwrap_or(DEFAULT_SCRIPT_URL)
            .to_string(),
        use_relay: option_env!("SURAT_USE_RELAY")
            .and_then(parse_flag)
            .unwrap_or(cfg!(debug_assertions)),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
