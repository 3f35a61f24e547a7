//! Final polish of a synthesized prompt before it reaches the user.

pub mod formatter;
pub mod placeholders;

pub use formatter::clean;
pub use placeholders::{fill, parse_segments, placeholder_keys, Segment};
