//! High-level coordinator: request → ranked matches → cycle → prompt.

use serde::Serialize;
use tracing::{debug, instrument};

use super::{
    core::advance,
    output::Synthesizer,
    retrieval::{find_best_match, Match},
    types::CycleState,
};
use crate::{
    catalog::{CatalogSet, Domain},
    config::EngineConfig,
    preprocessing::Request,
};

/// One generated prompt and the template it was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Generation<'a> {
    pub prompt: String,
    /// `None` is the "no matching template" outcome the caller surfaces.
    pub selected: Option<Match<'a>>,
    /// How many ranked matches the cycle can walk through for this query.
    pub alternatives: usize,
}

impl Generation<'_> {
    pub fn is_match(&self) -> bool {
        self.selected.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Generator {
    catalogs: CatalogSet,
    config: EngineConfig,
}

impl Generator {
    pub fn new(catalogs: CatalogSet, config: EngineConfig) -> Self {
        Self { catalogs, config }
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Drive one generation request for synthesizer `S`.
    #[instrument(skip_all, fields(domain = %S::DOMAIN, model = %request.model().label))]
    pub fn generate<S: Synthesizer>(
        &self,
        synthesizer: &S,
        state: CycleState,
        request: &Request<S::Style>,
    ) -> (CycleState, Generation<'_>) {
        let catalog = self.catalogs.get(S::DOMAIN);
        let (state, matches) = advance(state, request.query(), catalog, self.config.match_limit);
        let selected = state.selected(&matches).copied();

        debug!(
            index = state.match_index,
            alternatives = matches.len(),
            template = ?selected.map(|m| m.id()),
            "selected template"
        );

        let prompt = synthesizer.synthesize(request, selected.map(|m| m.template));
        let generation = Generation {
            prompt,
            selected,
            alternatives: matches.len(),
        };
        (state, generation)
    }

    /// The single best template for `query` using the configured threshold.
    pub fn best_match(&self, domain: Domain, query: &str) -> Option<Match<'_>> {
        find_best_match(query, self.catalogs.get(domain), self.config.match_threshold)
    }
}
