//! Additive keyword-overlap scoring.

/// A query token equals a keyword.
pub const EXACT_MATCH_POINTS: u32 = 10;
/// A keyword strictly contains the token, or the token strictly contains a keyword.
pub const PARTIAL_MATCH_POINTS: u32 = 5;
/// A multi-word keyword occurs inside the joined query phrase.
pub const PHRASE_MATCH_POINTS: u32 = 15;

/// Scores normalized query tokens against a template's keywords.
pub fn score(query_tokens: &[String], keywords: &[String]) -> u32 {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let mut total = 0;

    for token in query_tokens {
        if keywords.iter().any(|k| k == token) {
            total += EXACT_MATCH_POINTS;
        }

        for keyword in &keywords {
            if keyword.len() > token.len() && keyword.contains(token.as_str()) {
                total += PARTIAL_MATCH_POINTS;
            } else if token.len() > keyword.len() && token.contains(keyword.as_str()) {
                total += PARTIAL_MATCH_POINTS;
            }
        }
    }

    let phrase = query_tokens.join(" ");
    for keyword in &keywords {
        if keyword.contains(' ') && phrase.contains(keyword.as_str()) {
            total += PHRASE_MATCH_POINTS;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::normalize;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn exact_and_partial_points_accumulate() {
        let tokens = normalize("write a blog post about cats");
        // blog and post are exact; "writing" contains neither "write" nor vice versa.
        assert_eq!(score(&tokens, &kw(&["blog", "post", "writing"])), 20);
    }

    #[test]
    fn superstring_and_substring_keywords_both_count() {
        let tokens = kw(&["cat", "databases"]);
        // "cats" ⊃ "cat", "database" ⊂ "databases", "data" ⊂ "databases"
        assert_eq!(score(&tokens, &kw(&["cats", "database", "data"])), 15);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(score(&kw(&["logo"]), &kw(&["LOGO"])), EXACT_MATCH_POINTS);
    }

    #[test]
    fn multi_word_keyword_earns_phrase_bonus() {
        let tokens = normalize("please review my code review checklist");
        let total = score(&tokens, &kw(&["code review"]));
        // review, code, review are strict substrings of the keyword.
        assert_eq!(total, 3 * PARTIAL_MATCH_POINTS + PHRASE_MATCH_POINTS);
    }

    #[test]
    fn empty_keywords_score_zero() {
        assert_eq!(score(&normalize("anything at all"), &[]), 0);
    }

    #[test]
    fn duplicate_keywords_are_not_deduplicated() {
        let tokens = kw(&["blogging"]);
        assert_eq!(score(&tokens, &kw(&["blog", "blog"])), 2 * PARTIAL_MATCH_POINTS);
    }

    #[test]
    fn adding_an_exact_keyword_never_lowers_the_score() {
        let tokens = normalize("design a vibrant logo for a bakery");
        let base = kw(&["brand", "icon"]);
        let mut extended = base.clone();
        extended.push("bakery".to_string());
        assert!(score(&tokens, &extended) >= score(&tokens, &base) + EXACT_MATCH_POINTS);
    }
}
