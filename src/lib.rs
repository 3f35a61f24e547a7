//! Template matching and prompt synthesis for text, image and video
//! generators.
//!
//! A query is scored against a keyword catalog, the caller cycles through
//! the ranked matches on repeated requests, and each synthesizer turns the
//! query, its options and the selected template into a model-specific prompt.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod memory;
pub mod postprocessing;
pub mod preprocessing;

use thiserror::Error;

pub use cache::SessionCache;
pub use catalog::{Catalog, CatalogError, CatalogSet, Domain, Template};
pub use config::{ConfigError, EngineConfig};
pub use engine::output::{ImageSynthesizer, Synthesizer, TextSynthesizer, VideoSynthesizer};
pub use engine::retrieval::{find_best_match, find_top_matches, Match};
pub use engine::{advance, CycleState, Generation, Generator};
pub use memory::{PromptStore, SavedPrompt, StoreError};
pub use preprocessing::{normalize, ParamsError, Request};

#[derive(Error, Debug)]
pub enum PromptcraftError {
    #[error("Request error: {0}")]
    Params(#[from] ParamsError),
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Generator over the configured catalogs, falling back to the bundled ones
/// for any domain without a path.
pub fn generator_from_env() -> Result<Generator, PromptcraftError> {
    let config = EngineConfig::from_env()?;
    let catalogs = CatalogSet::load(&config.catalogs)?;
    Ok(Generator::new(catalogs, config))
}
