use crate::types::{BreakdownItem, TranslationResponse};
use serde::Serialize;

/// Fully-resolved display form of one translation response. Rendering is a
/// pure function of the response and the extended flag; surfaces only copy
/// these fields into their slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayModel {
    pub translation: String,
    pub blocks: Vec<WordBlock>,
}

/// One breakdown entry, ready for a surface to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordBlock {
    pub word: String,
    /// Present only when the dictionary form differs from the surface form.
    pub base_form: Option<String>,
    pub word_class: String,
    /// Display lines. Exactly one line unless extended mode split a
    /// multi-line definition.
    pub definition: Vec<String>,
}

pub fn render(response: &TranslationResponse, extended: bool) -> DisplayModel {
    DisplayModel {
        translation: response.translation.clone(),
        blocks: response
            .breakdown
            .iter()
            .map(|item| block_for(item, extended))
            .collect(),
    }
}

fn block_for(item: &BreakdownItem, extended: bool) -> WordBlock {
    // Exact comparison: case- and script-sensitive.
    let base_form = (item.lemma != item.token).then(|| item.lemma.clone());

    // Extended definitions may be multi-paragraph: one display line per
    // newline-separated segment, no trimming, no segments dropped. Concise
    // definitions stay a single unformatted line even if they contain '\n'.
    let definition = if extended {
        item.definition.split('\n').map(str::to_string).collect()
    } else {
        vec![item.definition.clone()]
    };

    WordBlock {
        word: item.token.clone(),
        base_form,
        word_class: item.pos.clone(),
        definition,
    }
}
