use super::*;
use crate::catalog::CatalogSet;
use crate::config::EngineConfig;
use crate::engine::output::VideoSynthesizer;
use crate::engine::Generator;
use crate::preprocessing::{Request, VideoStyle};
use std::num::NonZeroUsize;
use std::thread;

fn generator() -> Generator {
    Generator::new(CatalogSet::builtin().unwrap(), EngineConfig::default())
}

fn request(query: &str) -> Request<VideoStyle> {
    Request::new(query, "Runway").unwrap()
}

#[test]
fn sessions_cycle_independently() {
    let generator = generator();
    let cache = SessionCache::from_config(generator.config()).unwrap();
    let request = request("product demo video");

    let a1 = cache.generate("a", &generator, &VideoSynthesizer, &request);
    let a2 = cache.generate("a", &generator, &VideoSynthesizer, &request);
    let b1 = cache.generate("b", &generator, &VideoSynthesizer, &request);

    assert_eq!(a1.selected, b1.selected);
    assert_ne!(a1.selected, a2.selected);
    assert_eq!(cache.state("a").unwrap().match_index, 1);
    assert_eq!(cache.state("b").unwrap().match_index, 0);
    assert_eq!(cache.len(), 2);
}

#[test]
fn reset_restarts_the_cycle() {
    let generator = generator();
    let cache = SessionCache::new(NonZeroUsize::new(4).unwrap());
    let request = request("product demo video");

    let first = cache.generate("s", &generator, &VideoSynthesizer, &request);
    cache.generate("s", &generator, &VideoSynthesizer, &request);
    assert!(cache.reset("s"));
    assert!(!cache.reset("s"));

    let again = cache.generate("s", &generator, &VideoSynthesizer, &request);
    assert_eq!(first.selected, again.selected);
}

#[test]
fn least_recently_used_session_is_evicted() {
    let generator = generator();
    let cache = SessionCache::new(NonZeroUsize::new(2).unwrap());
    let request = request("product demo video");

    for id in ["one", "two", "three"] {
        cache.generate(id, &generator, &VideoSynthesizer, &request);
    }
    assert_eq!(cache.len(), 2);
    assert!(cache.state("one").is_none());
    assert!(cache.state("three").is_some());
}

#[test]
fn zero_capacity_is_a_config_error() {
    let config = EngineConfig::builder().session_capacity(0).build();
    assert!(SessionCache::from_config(&config).is_err());
}

#[test]
fn concurrent_calls_on_one_session_are_serialized() {
    let generator = generator();
    let cache = SessionCache::new(NonZeroUsize::new(8).unwrap());
    let request = request("product demo video");
    let alternatives = cache
        .generate("shared", &generator, &VideoSynthesizer, &request)
        .alternatives;
    assert!(alternatives > 1);
    cache.reset("shared");

    let calls = alternatives * 4;
    thread::scope(|scope| {
        for _ in 0..calls {
            scope.spawn(|| {
                cache.generate("shared", &generator, &VideoSynthesizer, &request);
            });
        }
    });

    // Every call advanced the index exactly once.
    assert_eq!(cache.state("shared").unwrap().match_index, (calls - 1) % alternatives);
}
