//! Contract for whatever persists saved prompts.

use thiserror::Error;

use super::record::{PromptUpdate, SavedPrompt};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Prompt not found: {0}")]
    NotFound(String),
    #[error("Prompt already exists: {0}")]
    Duplicate(String),
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store backend error: {0}")]
    Backend(String),
}

pub trait PromptStore {
    fn create(&mut self, prompt: SavedPrompt) -> Result<SavedPrompt, StoreError>;

    fn get(&self, id: &str) -> Result<Option<SavedPrompt>, StoreError>;

    /// Returns the record after the update; unknown ids are `NotFound`.
    fn update(&mut self, id: &str, update: PromptUpdate) -> Result<SavedPrompt, StoreError>;

    /// `true` when a record was removed.
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;

    /// Prompts in `folder_id`, or at the root when `None`.
    fn list_by_folder(&self, folder_id: Option<&str>) -> Result<Vec<SavedPrompt>, StoreError>;
}
