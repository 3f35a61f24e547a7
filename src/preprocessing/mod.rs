pub mod flags;
pub mod normalizer;
pub mod params;

pub use flags::{
    known_models, FlagSet, ImageStyle, ModelFamily, StyleFlag, TargetModel, TextStyle, Tone,
    UnknownFlag, VideoStyle,
};
pub use normalizer::{normalize, Normalizer};
pub use params::{ParamsError, Request};

pub struct Preprocessor;

impl Preprocessor {
    /// Query tokens ready for scoring, or `None` when nothing could match:
    /// a blank query or one made only of short words and punctuation.
    pub fn process(query: &str) -> Option<Vec<String>> {
        if query.trim().is_empty() {
            return None;
        }

        let tokens = Normalizer::normalize(query);
        if tokens.is_empty() {
            return None;
        }

        Some(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_words_only_count_as_no_query() {
        assert_eq!(Preprocessor::process("is it ok?"), None);
        assert_eq!(Preprocessor::process(""), None);
        assert_eq!(
            Preprocessor::process("logo ideas"),
            Some(vec!["logo".to_string(), "ideas".to_string()])
        );
    }
}
