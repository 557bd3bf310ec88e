use crate::error::TransportError;
use crate::parse::parse_translate_response;
use crate::request::{Body, HttpRequest};
use crate::runtime;
use anyhow::Context;
use bunkai_core::types::{TranslationRequest, TranslationResponse};
use serde_json::json;
use url::Url;

/// Where the translation service lives. One endpoint, one response shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateEndpointConfig {
    pub base_url: String,
}

impl TranslateEndpointConfig {
    /// Validates the base URL once, at assembly time.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let base_url = base_url.into();
        Url::parse(&base_url).with_context(|| format!("invalid endpoint base url: {base_url}"))?;
        Ok(Self { base_url })
    }
}

pub fn build_translate_request(
    cfg: &TranslateEndpointConfig,
    req: &TranslationRequest,
) -> HttpRequest {
    let url = join_url(&cfg.base_url, "/translate");

    let payload = json!({
        "sentence": req.sentence,
        "extended": req.extended,
    });

    HttpRequest {
        method: "POST".into(),
        url,
        headers: vec![("Content-Type".into(), "application/json".into())],
        body: Body::Json(payload.to_string()),
    }
}

/// One attempt against the endpoint: build, execute, check status, decode.
/// No retry and no backoff; every failure mode maps onto `TransportError`.
pub async fn translate(
    cfg: &TranslateEndpointConfig,
    req: &TranslationRequest,
) -> Result<TranslationResponse, TransportError> {
    let http = build_translate_request(cfg, req);

    let resp = runtime::execute(&http)
        .await
        .map_err(TransportError::Network)?;

    if !(200..=299).contains(&resp.status) {
        return Err(TransportError::Status(resp.status));
    }

    parse_translate_response(&resp.body).map_err(TransportError::Decode)
}

fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
