use once_cell::sync::Lazy;
use regex::Regex;

/// Anything that is neither an ASCII word character nor whitespace.
static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s]").expect("static pattern compiles"));

pub struct Normalizer;

impl Normalizer {
    /// Tokens this short carry no signal ("a", "to", "is").
    const MIN_TOKEN_LEN: usize = 3;

    /// Turns free text into comparable tokens. An empty result means no
    /// template can match.
    pub fn normalize(input: &str) -> Vec<String> {
        let lowered = input.to_lowercase();
        NON_WORD
            .replace_all(&lowered, " ")
            .split_whitespace()
            .filter(|token| token.len() >= Self::MIN_TOKEN_LEN)
            .map(str::to_owned)
            .collect()
    }
}

pub fn normalize(input: &str) -> Vec<String> {
    Normalizer::normalize(input)
}
