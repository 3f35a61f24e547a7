use tracing::{debug, instrument};

use super::result::Match;
use super::scorer::score;
use crate::catalog::Template;
use crate::preprocessing::Preprocessor;

/// Minimum score `find_best_match` accepts unless told otherwise.
pub const DEFAULT_THRESHOLD: u32 = 10;

/// Ranks a catalog against free-text queries.
pub struct TemplateMatcher;

impl TemplateMatcher {
    /// The single highest-scoring template at or above `threshold`. On equal
    /// scores the template seen first in the catalog wins.
    #[instrument(skip(query, templates))]
    pub fn best<'a, I>(query: &str, templates: I, threshold: u32) -> Option<Match<'a>>
    where
        I: IntoIterator<Item = &'a Template>,
    {
        let tokens = Preprocessor::process(query)?;

        let mut best: Option<Match<'a>> = None;
        let mut highest = 0;

        for template in templates {
            let score = score(&tokens, &template.keywords);
            if score > highest && score >= threshold {
                highest = score;
                best = Some(Match { template, score });
            }
        }

        debug!(found = best.is_some(), highest, "best template match");
        best
    }

    /// Every template with a positive score, best first, at most `limit`.
    /// Equal scores keep catalog order.
    #[instrument(skip(query, templates))]
    pub fn top<'a, I>(query: &str, templates: I, limit: usize) -> Vec<Match<'a>>
    where
        I: IntoIterator<Item = &'a Template>,
    {
        let Some(tokens) = Preprocessor::process(query) else {
            return Vec::new();
        };

        let mut matches: Vec<Match<'a>> = templates
            .into_iter()
            .map(|template| Match {
                template,
                score: score(&tokens, &template.keywords),
            })
            .filter(|m| m.score > 0)
            .collect();

        // `sort_by` is stable, which keeps ties in catalog order.
        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches.truncate(limit);

        debug!(matches = matches.len(), "ranked template matches");
        matches
    }
}

pub fn find_best_match<'a, I>(query: &str, templates: I, threshold: u32) -> Option<Match<'a>>
where
    I: IntoIterator<Item = &'a Template>,
{
    TemplateMatcher::best(query, templates, threshold)
}

pub fn find_top_matches<'a, I>(query: &str, templates: I, limit: usize) -> Vec<Match<'a>>
where
    I: IntoIterator<Item = &'a Template>,
{
    TemplateMatcher::top(query, templates, limit)
}
