use actix_web::http::StatusCode;
use actix_web::web::{Bytes, Data, Path};
use actix_web::HttpResponse;
use log::{error, info};
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

const MACROS_SEGMENT: &str = "/macros/";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Shared relay state: one HTTP client and the upstream origin.
#[derive(Clone)]
pub struct Relay {
    client: reqwest::Client,
    upstream: String,
}

/// What came back from the script, ready to be replayed to the browser.
struct UpstreamReply {
    status: StatusCode,
    content_type: Option<String>,
    body: Bytes,
}

impl Relay {
    pub fn new(upstream: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            upstream: upstream.trim_end_matches('/').to_string(),
        }
    }

    fn target(&self, tail: &str) -> String {
        format!("{}{}{}", self.upstream, MACROS_SEGMENT, tail.trim_start_matches('/'))
    }

    async fn forward(&self, tail: &str, body: Bytes) -> Result<UpstreamReply, RelayError> {
        let url = self.target(tail);
        info!("relaying {} bytes to {}", body.len(), url);

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body.to_vec())
            .send()
            .await?;

        // Both sides are `http` status codes; a mismatch can only come from
        // diverging crate versions.
        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = Bytes::from(response.bytes().await?.to_vec());

        Ok(UpstreamReply {
            status,
            content_type,
            body,
        })
    }
}

/// HTTP handler wrapper that converts the relay result to an `HttpResponse`.
///
/// - On success: replays the upstream status, content type and body.
/// - On failure: returns `502 Bad Gateway` with the error message.
pub async fn process(tail: Path<String>, body: Bytes, relay: Data<Relay>) -> HttpResponse {
    match relay.forward(&tail, body).await {
        Ok(reply) => {
            let mut response = HttpResponse::build(reply.status);
            if let Some(content_type) = reply.content_type {
                response.content_type(content_type);
            }
            response.body(reply.body)
        }
        Err(e) => {
            error!("relay to {} failed: {}", relay.target(&tail), e);
            HttpResponse::BadGateway().body(e.to_string())
        }
    }
}
