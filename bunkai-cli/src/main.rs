use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use bunkai_core::phrases;
use bunkai_core::render::WordBlock;
use bunkai_core::types::{Notice, TranslationRequest, TranslationResponse};
use bunkai_engine::engine::{Command, SubmitOutcome, TranslateEngine};
use bunkai_engine::traits::{PhraseSource, Surface, Translator};
use bunkai_providers::translate::{self, TranslateEndpointConfig};

struct HttpTranslator {
    endpoint: TranslateEndpointConfig,
}

#[async_trait::async_trait]
impl Translator for HttpTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> anyhow::Result<TranslationResponse> {
        Ok(translate::translate(&self.endpoint, request).await?)
    }
}

struct ThreadRngPhrases;

impl PhraseSource for ThreadRngPhrases {
    fn pick(&self) -> String {
        phrases::pick(&mut rand::thread_rng()).to_string()
    }
}

/// Stdout-backed surface. The slots the engine writes become printed
/// sections; input and toggle are plain cells the CLI fills from argv.
struct TerminalSurface {
    input: Mutex<String>,
    extended: AtomicBool,
}

impl TerminalSurface {
    fn new(input: String, extended: bool) -> Self {
        Self {
            input: Mutex::new(input),
            extended: AtomicBool::new(extended),
        }
    }

    fn input_cell(&self) -> std::sync::MutexGuard<'_, String> {
        self.input.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Surface for TerminalSurface {
    fn input_text(&self) -> String {
        self.input_cell().clone()
    }

    fn extended(&self) -> bool {
        self.extended.load(Ordering::Relaxed)
    }

    fn set_input(&self, text: &str) {
        *self.input_cell() = text.to_string();
        println!("> {text}");
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            println!("Translating...");
        }
    }

    fn set_translation(&self, text: &str) {
        println!("\nTranslation: {text}\n");
    }

    fn set_breakdown(&self, blocks: &[WordBlock]) {
        for block in blocks {
            print_block(block);
        }
    }

    fn notify(&self, notice: Notice) {
        eprintln!("{}", notice.message());
    }

    fn scroll_to_top(&self) {
        // A terminal has no fold to scroll back above.
    }
}

fn print_block(block: &WordBlock) {
    println!("Word: {}", block.word);
    if let Some(base) = &block.base_form {
        println!("Base Form: {base}");
    }
    println!("Type: {}", block.word_class);
    match block.definition.as_slice() {
        [single] => println!("Definition: {single}"),
        lines => {
            println!("Definition:");
            for line in lines {
                println!("  {line}");
            }
        }
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Usage: bunkai-cli [--extended] (--sample | SENTENCE...)
    // Endpoint comes from BUNKAI_BASE_URL.
    let mut extended = false;
    let mut sample = false;
    let mut words: Vec<String> = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--extended" => extended = true,
            "--sample" => sample = true,
            _ => words.push(arg),
        }
    }

    let base_url =
        std::env::var("BUNKAI_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:8000".into());
    let endpoint = TranslateEndpointConfig::new(base_url)?;

    let surface = Arc::new(TerminalSurface::new(words.join(" "), extended));
    let engine = TranslateEngine::new(
        Arc::new(HttpTranslator { endpoint }),
        surface,
        Arc::new(ThreadRngPhrases),
    );

    let command = if sample {
        Command::SamplePhrase
    } else {
        Command::Translate
    };

    // Rejections and failures were already reported through the surface;
    // only the exit code is left to set.
    match engine.dispatch(command).await {
        SubmitOutcome::Rendered(_) => Ok(()),
        _ => std::process::exit(1),
    }
}
