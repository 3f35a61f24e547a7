use serde::Serialize;
use thiserror::Error;

use super::flags::{FlagSet, StyleFlag, TargetModel, Tone, UnknownFlag};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamsError {
    #[error("Query is empty after trimming")]
    EmptyQuery,
    #[error(transparent)]
    UnknownStyle(#[from] UnknownFlag),
}

/// One generation request. Construction guarantees a non-blank query and a
/// style set drawn from the domain's vocabulary.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Request<S> {
    query: String,
    model: TargetModel,
    styles: FlagSet<S>,
    tone: Option<Tone>,
}

impl<S: StyleFlag> Request<S> {
    pub fn new(query: impl Into<String>, model: impl Into<TargetModel>) -> Result<Self, ParamsError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(ParamsError::EmptyQuery);
        }

        Ok(Self {
            query,
            model: model.into(),
            styles: FlagSet::new(),
            tone: None,
        })
    }

    /// Builds a request from the raw strings a form submits.
    pub fn parse<'a>(
        query: &str,
        model: &str,
        styles: impl IntoIterator<Item = &'a str>,
        tone: Option<&str>,
    ) -> Result<Self, ParamsError> {
        let styles = FlagSet::parse(styles)?;
        let request = Self::new(query, model)?.with_styles(styles);
        Ok(match tone {
            Some(tone) => request.with_tone(Tone::select_tone(tone)),
            None => request,
        })
    }

    pub fn with_styles(mut self, styles: impl IntoIterator<Item = S>) -> Self {
        self.styles = styles.into_iter().collect();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Raw query text, untrimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn model(&self) -> &TargetModel {
        &self.model
    }

    pub fn styles(&self) -> &FlagSet<S> {
        &self.styles
    }

    pub fn has(&self, style: S) -> bool {
        self.styles.contains(style)
    }

    pub fn tone(&self) -> Option<Tone> {
        self.tone
    }
}
