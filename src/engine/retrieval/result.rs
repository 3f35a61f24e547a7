//! A template annotated with its relevance score for one query.

use serde::Serialize;

use crate::catalog::Template;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Match<'a> {
    #[serde(flatten)]
    pub template: &'a Template,
    pub score: u32,
}

impl<'a> Match<'a> {
    pub fn id(&self) -> &'a str {
        &self.template.id
    }

    pub fn name(&self) -> &'a str {
        &self.template.name
    }
}
