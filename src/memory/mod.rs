//! Saved prompts and folders as handed to an external store.
//! The crate defines the records and the store contract; persistence
//! itself lives with the caller.

pub mod record;
pub mod store;

pub use record::{Folder, PromptUpdate, SavedPrompt};
pub use store::{PromptStore, StoreError};
