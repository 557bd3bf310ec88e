use rand::Rng;

/// Example sentences behind the "try me" trigger. Fixed pool, uniform
/// selection, repeats permitted.
pub const SAMPLE_PHRASES: [&str; 5] = [
    "これはペンです。",
    "昨日は雨が降りました。",
    "東京に行きたいです。",
    "猫が好きです。",
    "英語を話せますか？",
];

/// The RNG is injected so callers can seed it for deterministic tests.
pub fn pick(rng: &mut impl Rng) -> &'static str {
    SAMPLE_PHRASES[rng.gen_range(0..SAMPLE_PHRASES.len())]
}
