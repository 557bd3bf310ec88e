use crate::traits::{PhraseSource, Surface, Translator};
use bunkai_core::render::{DisplayModel, render};
use bunkai_core::types::{Notice, TranslationRequest};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Named user triggers. Each maps onto one controller entry point, so any
/// surface (terminal, webview, test harness) drives the same flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Translate,
    ToggleExtended,
    SamplePhrase,
}

/// What one submission amounted to. Every variant has already been surfaced
/// to the user by the time it is returned; nothing here needs re-reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// Response rendered into the surface slots.
    Rendered(DisplayModel),
    /// Input was empty or whitespace; the user was alerted, nothing sent.
    RejectedEmpty,
    /// Another submission is still in flight; this one was ignored.
    RejectedBusy,
    /// Mode toggle fired with no input; nothing to re-translate.
    Skipped,
    /// Transport failed; the user was alerted, the previous render kept.
    Failed,
}

pub struct TranslateEngine {
    translator: Arc<dyn Translator>,
    surface: Arc<dyn Surface>,
    phrases: Arc<dyn PhraseSource>,

    // Authoritative single-outstanding-request guard. The disabled controls
    // on the surface are advisory; this flag is not.
    in_flight: AtomicBool,
}

impl TranslateEngine {
    pub fn new(
        translator: Arc<dyn Translator>,
        surface: Arc<dyn Surface>,
        phrases: Arc<dyn PhraseSource>,
    ) -> Self {
        Self {
            translator,
            surface,
            phrases,
            in_flight: AtomicBool::new(false),
        }
    }

    pub async fn dispatch(&self, command: Command) -> SubmitOutcome {
        match command {
            Command::Translate => {
                let input = self.surface.input_text();
                self.submit(&input, self.surface.extended()).await
            }
            Command::ToggleExtended => {
                // Re-translate under the new mode only if there is input to
                // re-translate; toggling an empty form is a silent no-op.
                let input = self.surface.input_text();
                if input.trim().is_empty() {
                    return SubmitOutcome::Skipped;
                }
                self.submit(&input, self.surface.extended()).await
            }
            Command::SamplePhrase => {
                let phrase = self.phrases.pick();
                self.surface.set_input(&phrase);
                self.submit(&phrase, self.surface.extended()).await
            }
        }
    }

    /// Runs one submission to completion. Busy state is set before the
    /// transport await and cleared on every exit path after it; a rejected
    /// submission never touches busy state at all.
    pub async fn submit(&self, raw_input: &str, extended: bool) -> SubmitOutcome {
        let sentence = raw_input.trim();
        if sentence.is_empty() {
            self.surface.notify(Notice::EmptyInput);
            return SubmitOutcome::RejectedEmpty;
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::warn!("submit ignored: a translation is already in flight");
            return SubmitOutcome::RejectedBusy;
        }

        self.surface.set_busy(true);

        let request = TranslationRequest {
            sentence: sentence.to_string(),
            extended,
        };

        log::info!(
            "translating {} chars (extended={})",
            request.sentence.chars().count(),
            extended
        );

        let outcome = match self.translator.translate(&request).await {
            Ok(response) => {
                let model = render(&response, extended);
                self.surface.set_translation(&model.translation);
                self.surface.set_breakdown(&model.blocks);
                self.surface.scroll_to_top();
                SubmitOutcome::Rendered(model)
            }
            Err(e) => {
                log::error!("translate call failed: {e:#}");
                self.surface.notify(Notice::TranslationFailed);
                SubmitOutcome::Failed
            }
        };

        self.surface.set_busy(false);
        self.in_flight.store(false, Ordering::Release);

        outcome
    }
}
