//! Resolution of the submission endpoint.
//!
//! The form posts to a Google Apps Script web app. Served from the local
//! relay (`surat-backend`) the request stays same-origin and goes through
//! `/api/<tail>`; otherwise it is sent straight to the script URL, whose
//! cross-origin response cannot be read.

/// Apps Script deployment the form submits to when nothing else is configured.
pub const DEFAULT_SCRIPT_URL: &str = "https://script.google.com/macros/s/AKfycbwQpKounVvNAmErqrJgEwa5ETXP8W_-ZCLWklgpHVjn6Iv9dT3B2MHrdNyw7QeKlVyjkw/exec";

/// Path prefix the relay listens on.
pub const RELAY_PREFIX: &str = "/api/";

/// Path segment that separates the script host from the deployment path.
pub const MACROS_SEGMENT: &str = "/macros/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub script_url: String,
    pub use_relay: bool,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            use_relay: false,
        }
    }
}

/// Where a submission is actually sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Cross-origin request straight to the script; the response is opaque.
    Direct(String),
    /// Same-origin request through the relay.
    Relay(String),
}

impl Target {
    pub fn url(&self) -> &str {
        match self {
            Target::Direct(url) | Target::Relay(url) => url,
        }
    }

    /// `true` when the response cannot be inspected and only a transport
    /// failure counts as an error.
    pub fn is_opaque(&self) -> bool {
        matches!(self, Target::Direct(_))
    }
}

impl EndpointConfig {
    pub fn resolve(&self) -> Target {
        let secure = force_https(self.script_url.trim());
        if self.use_relay {
            if let Some((_, tail)) = secure.split_once(MACROS_SEGMENT) {
                return Target::Relay(format!("{}{}", RELAY_PREFIX, tail));
            }
        }
        Target::Direct(secure)
    }
}

/// Upgrades a plain `http://` URL to `https://`; anything else is kept as is.
pub fn force_https(url: &str) -> String {
    match url.strip_prefix("http://") {
        Some(rest) => format!("https://{}", rest),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_target_is_forced_to_https() {
        let config = EndpointConfig {
            script_url: "http://script.google.com/macros/s/abc/exec".to_string(),
            use_relay: false,
        };
        let target = config.resolve();
        assert_eq!(
            target,
            Target::Direct("https://script.google.com/macros/s/abc/exec".to_string())
        );
        assert!(target.is_opaque());
    }

    #[test]
    fn relay_target_keeps_the_deployment_path() {
        let config = EndpointConfig {
            script_url: "https://script.google.com/macros/s/abc/exec".to_string(),
            use_relay: true,
        };
        let target = config.resolve();
        assert_eq!(target.url(), "/api/s/abc/exec");
        assert!(!target.is_opaque());
    }

    #[test]
    fn relay_without_macros_segment_goes_direct() {
        let config = EndpointConfig {
            script_url: "https://example.com/hook".to_string(),
            use_relay: true,
        };
        assert_eq!(config.resolve(), Target::Direct("https://example.com/hook".to_string()));
    }

    #[test]
    fn default_points_at_the_apps_script_deployment() {
        let target = EndpointConfig::default().resolve();
        assert!(target.url().starts_with("https://script.google.com/macros/s/"));
    }
}
