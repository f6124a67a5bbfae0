//! Same-origin pass-through for the slot endpoint.
//!
//! The browser always asks the origin it was served from. When the slot
//! service lives elsewhere, the SSR server forwards `/api/time-slots/` to it and
//! only lets a well-formed slot list through.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use shared_types::SlotList;
use thiserror::Error;

use crate::config::ServerConfig;
use crate::slots::decode_slots;

#[derive(Clone, Debug)]
pub struct SlotProxy {
    client: reqwest::Client,
    upstream: String,
}

impl SlotProxy {
    /// Returns `None` when no upstream is configured.
    pub fn from_config(config: &ServerConfig) -> Result<Option<Self>, reqwest::Error> {
        let Some(upstream) = config.slot_upstream.clone() else {
            return Ok(None);
        };

        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;

        Ok(Some(Self { client, upstream }))
    }

    pub fn upstream(&self) -> &str {
        &self.upstream
    }

    pub async fn fetch(&self) -> Result<SlotList, ProxyError> {
        let response = self.client.get(&self.upstream).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ProxyError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        decode_slots(&body).map_err(|e| ProxyError::Malformed(e.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream answered with status {0}")]
    Status(u16),

    #[error("upstream body is not a slot list: {0}")]
    Malformed(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}

pub async fn time_slots(Extension(proxy): Extension<SlotProxy>) -> Result<Json<SlotList>, ProxyError> {
    match proxy.fetch().await {
        Ok(slots) => {
            tracing::debug!(count = slots.len(), "forwarded time slots");
            Ok(Json(slots))
        }
        Err(e) => {
            tracing::warn!(upstream = %proxy.upstream(), error = %e, "time slot upstream failed");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn no_upstream_means_no_proxy() {
        let config = ServerConfig {
            slot_upstream: None,
            upstream_timeout: Duration::from_secs(10),
        };

        assert!(SlotProxy::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn errors_map_to_bad_gateway() {
        let response = ProxyError::Status(500).into_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
