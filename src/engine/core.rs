//! Cycling through ranked matches for repeated generation requests.

use tracing::trace;

use super::retrieval::{find_top_matches, Match};
use super::types::CycleState;
use crate::catalog::Template;

/// Moves the cycle one step for `query` and ranks `templates`.
///
/// A query that differs from the previous one (exact comparison, before
/// trimming) starts over at index 0; the same query advances by one and
/// wraps to 0 once it runs past the available matches.
pub fn advance<'a, I>(
    state: CycleState,
    query: &str,
    templates: I,
    limit: usize,
) -> (CycleState, Vec<Match<'a>>)
where
    I: IntoIterator<Item = &'a Template>,
{
    let repeated = state.last_query.as_deref() == Some(query);
    let mut match_index = if repeated { state.match_index.saturating_add(1) } else { 0 };

    let matches = find_top_matches(query, templates, limit);
    if !matches.is_empty() && match_index >= matches.len() {
        match_index = 0;
    }

    trace!(repeated, match_index, matches = matches.len(), "advanced match cycle");

    let state = CycleState {
        last_query: Some(query.to_string()),
        match_index,
    };
    (state, matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Template> {
        ["poster", "post office", "postcard"]
            .iter()
            .enumerate()
            .map(|(i, keyword)| Template {
                id: format!("t{i}"),
                name: keyword.to_string(),
                description: String::new(),
                template: String::new(),
                keywords: vec![keyword.to_string()],
                default_llm: None,
                default_tone: None,
            })
            .collect()
    }

    fn selected_id(state: &CycleState, matches: &[Match<'_>]) -> Option<String> {
        state.selected(matches).map(|m| m.id().to_string())
    }

    #[test]
    fn repeated_query_walks_then_wraps() {
        let templates = catalog();
        let mut state = CycleState::new();
        let mut seen = Vec::new();

        for _ in 0..4 {
            let (next, matches) = advance(state, "post", &templates, 10);
            assert_eq!(matches.len(), 3);
            seen.push(next.match_index);
            state = next;
        }

        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn a_new_query_resets_to_the_top() {
        let templates = catalog();
        let (state, _) = advance(CycleState::new(), "post", &templates, 10);
        let (state, _) = advance(state, "post", &templates, 10);
        assert_eq!(state.match_index, 1);

        let (state, matches) = advance(state, "post ", &templates, 10);
        assert_eq!(state.match_index, 0);
        assert_eq!(state.last_query.as_deref(), Some("post "));
        assert_eq!(selected_id(&state, &matches), Some("t0".to_string()));
    }

    #[test]
    fn no_matches_selects_nothing() {
        let templates = catalog();
        let (state, matches) = advance(CycleState::new(), "unrelated", &templates, 10);
        assert!(matches.is_empty());
        assert_eq!(selected_id(&state, &matches), None);

        let (state, matches) = advance(state, "unrelated", &templates, 10);
        assert_eq!(state.match_index, 1);
        assert_eq!(selected_id(&state, &matches), None);
    }

    #[test]
    fn restored_state_at_the_index_ceiling_wraps() {
        let templates = catalog();
        let state = CycleState {
            last_query: Some("post".to_string()),
            match_index: usize::MAX,
        };

        let (state, matches) = advance(state, "post", &templates, 10);
        assert_eq!(state.match_index, 0);
        assert_eq!(selected_id(&state, &matches), Some("t0".to_string()));

        let stuck = CycleState {
            last_query: Some("unrelated".to_string()),
            match_index: usize::MAX,
        };
        let (stuck, _) = advance(stuck, "unrelated", &templates, 10);
        assert_eq!(stuck.match_index, usize::MAX);
    }

    #[test]
    fn limit_bounds_the_cycle() {
        let templates = catalog();
        let (state, _) = advance(CycleState::new(), "post", &templates, 2);
        let (state, _) = advance(state, "post", &templates, 2);
        let (state, matches) = advance(state, "post", &templates, 2);
        assert_eq!(matches.len(), 2);
        assert_eq!(state.match_index, 0);
    }
}
