//! Relay configuration loaded from environment variables (a `.env` file in
//! the working directory is honoured).
//!
//! | variable             | default                      |
//! |----------------------|------------------------------|
//! | `SURAT_HOST`         | `127.0.0.1`                  |
//! | `SURAT_PORT`         | `8080`                       |
//! | `SURAT_UPSTREAM`     | `https://script.google.com`  |
//! | `SURAT_OPEN_BROWSER` | `true`                       |

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_UPSTREAM: &str = "https://script.google.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: `{value}`")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interface the server binds to.
    pub host: String,
    /// Port the server binds to.
    pub port: u16,
    /// Scheme and host of the Apps Script service; `/macros/<tail>` is appended.
    pub upstream: String,
    /// Whether to open the form in the default browser on startup.
    pub open_browser: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("SURAT_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "SURAT_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };
        let open_browser = match lookup("SURAT_OPEN_BROWSER") {
            Some(value) => parse_flag(&value).ok_or(ConfigError::Invalid {
                key: "SURAT_OPEN_BROWSER",
                value,
            })?,
            None => true,
        };
        let upstream = lookup("SURAT_UPSTREAM").unwrap_or_else(|| DEFAULT_UPSTREAM.to_string());
        if !upstream.starts_with("http://") && !upstream.starts_with("https://") {
            return Err(ConfigError::Invalid {
                key: "SURAT_UPSTREAM",
                value: upstream,
            });
        }

        Ok(Config {
            host: lookup("SURAT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            upstream: upstream.trim_end_matches('/').to_string(),
            open_browser,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(
            config,
            Config {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
                upstream: DEFAULT_UPSTREAM.to_string(),
                open_browser: true,
            }
        );
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn overrides_are_parsed() {
        let config = Config::from_lookup(lookup(&[
            ("SURAT_HOST", "0.0.0.0"),
            ("SURAT_PORT", "9000"),
            ("SURAT_UPSTREAM", "http://localhost:4000/"),
            ("SURAT_OPEN_BROWSER", "off"),
        ]))
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9000);
        assert_eq!(config.upstream, "http://localhost:4000");
        assert!(!config.open_browser);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert_eq!(
            Config::from_lookup(lookup(&[("SURAT_PORT", "eighty")])),
            Err(ConfigError::Invalid {
                key: "SURAT_PORT",
                value: "eighty".to_string()
            })
        );
        assert!(Config::from_lookup(lookup(&[("SURAT_UPSTREAM", "script.google.com")])).is_err());
        assert!(Config::from_lookup(lookup(&[("SURAT_OPEN_BROWSER", "maybe")])).is_err());
    }
}
