//! Public façade for the engine layer.

pub mod core;
pub mod orchestrator;
pub mod output;
pub mod retrieval;
pub mod types;

#[cfg(test)]
mod tests;

pub use self::core::advance;
pub use orchestrator::{Generation, Generator};
pub use types::CycleState;
