use serde::{Deserialize, Serialize};

/// Payload for one call to the translation endpoint. Built fresh per
/// submission from the current input and toggle state; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub sentence: String,
    pub extended: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    pub translation: String,
    pub breakdown: Vec<BreakdownItem>,
}

/// One morphological unit of the source sentence, in sentence order.
/// `token` and `lemma` coincide for uninflected words; display logic
/// branches on exact string inequality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownItem {
    pub token: String,
    pub lemma: String,
    pub pos: String,
    pub definition: String,
}

/// User-visible alert payloads. The surface decides how to present them;
/// no failure subtype leaks past these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EmptyInput,
    TranslationFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::EmptyInput => "Please enter some text.",
            Notice::TranslationFailed => "An error occurred while translating.",
        }
    }
}
