use super::*;
use crate::catalog::{CatalogSet, Domain};
use crate::config::EngineConfig;
use crate::engine::output::{ImageSynthesizer, TextSynthesizer, VideoSynthesizer};
use crate::preprocessing::{ImageStyle, Request, TextStyle, Tone, VideoStyle};

fn generator() -> Generator {
    Generator::new(CatalogSet::builtin().unwrap(), EngineConfig::default())
}

#[test]
fn end_to_end_text_generation() {
    let generator = generator();
    let request = Request::new("write a blog post about cats", "GPT-4")
        .unwrap()
        .with_styles([TextStyle::Formatted])
        .with_tone(Tone::Friendly);

    let (state, generation) = generator.generate(&TextSynthesizer, CycleState::new(), &request);

    assert_eq!(state.match_index, 0);
    let selected = generation.selected.unwrap();
    assert_eq!(selected.id(), "blog-post");
    assert!(selected.score >= 20);
    assert!(generation.prompt.starts_with("Be warm, friendly, and approachable."));
    assert!(generation.prompt.contains("Reference template (Blog Post Generator):"));
    assert!(generation.prompt.ends_with("bullet points where appropriate."));
}

#[test]
fn repeated_requests_cycle_through_alternatives() {
    let generator = generator();
    let request = Request::<VideoStyle>::new("product demo video", "Pika").unwrap();

    let (state, first) = generator.generate(&VideoSynthesizer, CycleState::new(), &request);
    let alternatives = first.alternatives;
    assert!(alternatives > 1);

    let mut ids = vec![first.selected.unwrap().id().to_string()];
    let mut state = state;
    for _ in 0..alternatives {
        let (next, generation) = generator.generate(&VideoSynthesizer, state, &request);
        ids.push(generation.selected.unwrap().id().to_string());
        state = next;
    }

    // N + 1 calls visit every match once, then come back to the first.
    assert_eq!(ids.len(), alternatives + 1);
    assert_eq!(ids.first(), ids.last());
    let mut distinct = ids[..alternatives].to_vec();
    distinct.sort();
    distinct.dedup();
    assert_eq!(distinct.len(), alternatives);
}

#[test]
fn changing_the_query_resets_the_cycle() {
    let generator = generator();
    let first = Request::<VideoStyle>::new("product demo video", "Pika").unwrap();
    let (state, _) = generator.generate(&VideoSynthesizer, CycleState::new(), &first);
    let (state, _) = generator.generate(&VideoSynthesizer, state, &first);
    assert_eq!(state.match_index, 1);

    let second = Request::<VideoStyle>::new("youtube channel intro", "Pika").unwrap();
    let (state, generation) = generator.generate(&VideoSynthesizer, state, &second);
    assert_eq!(state.match_index, 0);
    assert_eq!(generation.selected.unwrap().id(), "youtube-script");
}

#[test]
fn no_match_still_synthesizes_a_prompt() {
    let generator = generator();
    let request = Request::new("zzz qqq", "Midjourney")
        .unwrap()
        .with_styles([ImageStyle::Photorealistic]);
    let (_, generation) = generator.generate(&ImageSynthesizer, CycleState::new(), &request);

    assert!(!generation.is_match());
    assert_eq!(generation.alternatives, 0);
    assert!(generation.prompt.ends_with("--style raw --v 6 --ar 16:9"));
}

#[test]
fn catalogs_do_not_cross_domains() {
    let generator = generator();
    let request = Request::<ImageStyle>::new("write a blog post", "DALL-E 3").unwrap();
    let (_, generation) = generator.generate(&ImageSynthesizer, CycleState::new(), &request);
    assert!(generation
        .selected
        .map_or(true, |m| generator.catalogs().image.get(m.id()).is_some()));
}

#[test]
fn best_match_uses_configured_threshold() {
    let generator = generator();
    assert_eq!(
        generator.best_match(Domain::Image, "minimalist logo").map(|m| m.id()),
        Some("logo-design")
    );

    let strict = Generator::new(
        CatalogSet::builtin().unwrap(),
        EngineConfig::builder().match_threshold(1_000).build(),
    );
    assert!(strict.best_match(Domain::Image, "minimalist logo").is_none());
}
