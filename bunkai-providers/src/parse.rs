use anyhow::Context;
use bunkai_core::types::TranslationResponse;

pub fn parse_translate_response(body: &[u8]) -> anyhow::Result<TranslationResponse> {
    serde_json::from_slice(body).context("decode translate JSON")
}
