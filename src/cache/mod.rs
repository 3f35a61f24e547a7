//! Per-session cycling state.
//! Each session id owns one `CycleState`; sessions are kept in an LRU so
//! idle ones fall out once capacity is reached.

pub mod manager;

pub use manager::SessionCache;

#[cfg(test)]
mod tests;
