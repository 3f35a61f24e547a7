//! Shared structs.

use serde::{Deserialize, Serialize};

use super::retrieval::Match;

/// Where a generation surface is in its walk through the ranked matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleState {
    pub last_query: Option<String>,
    pub match_index: usize,
}

impl CycleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The match this state points at, if the list has one there.
    pub fn selected<'m, 'a>(&self, matches: &'m [Match<'a>]) -> Option<&'m Match<'a>> {
        matches.get(self.match_index)
    }
}
