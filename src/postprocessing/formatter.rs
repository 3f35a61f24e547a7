//! Cleans and trims synthesized prompt text.

pub fn clean(raw: &str) -> String {
    raw.trim().to_string()
}
