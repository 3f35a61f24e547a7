//! Query → ranked templates.

pub mod matcher;
pub mod result;
pub mod scorer;


pub use matcher::{find_best_match, find_top_matches, TemplateMatcher, DEFAULT_THRESHOLD};
pub use result::Match;
pub use scorer::score;
