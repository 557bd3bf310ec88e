use async_trait::async_trait;
use bunkai_core::render::WordBlock;
use bunkai_core::types::{Notice, TranslationRequest, TranslationResponse};

/// Performs the network call for one submission. Implementations make a
/// single attempt; the engine never retries and never queues.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, request: &TranslationRequest)
    -> anyhow::Result<TranslationResponse>;
}

/// The presentation capability set: named slots the engine writes into and
/// reads from. The engine owns no layout or styling.
///
/// All methods are synchronous: the engine only touches the surface outside
/// its single suspension point (the `Translator` call), so surface state
/// never changes mid-flight.
pub trait Surface: Send + Sync {
    /// Current content of the sentence input slot.
    fn input_text(&self) -> String;

    /// Current state of the extended-breakdown toggle.
    fn extended(&self) -> bool;

    /// Replaces the input slot content (used by the sample-phrase flow).
    fn set_input(&self, text: &str);

    /// Disables/enables the submit and sample-phrase controls and swaps the
    /// submit label for a busy indicator while `busy` is true.
    fn set_busy(&self, busy: bool);

    fn set_translation(&self, text: &str);

    fn set_breakdown(&self, blocks: &[WordBlock]);

    /// Blocking alert-style message.
    fn notify(&self, notice: Notice);

    /// The translation sits above a possibly long breakdown list; surfaces
    /// bring it back into view after a successful render.
    fn scroll_to_top(&self);
}

/// Supplies an example sentence for the "try me" trigger.
pub trait PhraseSource: Send + Sync {
    fn pick(&self) -> String;
}
