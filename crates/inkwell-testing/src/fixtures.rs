//! Fake blog post data.

use std::cell::RefCell;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use inkwell_core::domain::{AuthorName, NewBlogPost};

thread_local! {
    static RNG: RefCell<StdRng> = RefCell::new(StdRng::from_entropy());
}

const FIRST_NAMES: &[&str] = &[
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack", "Kate",
    "Liam", "Mia", "Noah", "Olivia", "Peter", "Quinn", "Ruby", "Sam", "Tina", "Uma", "Victor",
    "Willow", "Xander", "Yara", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Evans", "Fisher", "Garcia", "Harris", "Johnson", "King",
    "Lopez", "Miller", "Nelson", "Oliveira", "Parker", "Roberts", "Smith", "Taylor", "Underwood",
    "Valdez", "Williams", "Young", "Zhang",
];

const CATCH_PHRASE_ADJECTIVES: &[&str] = &[
    "Adaptive", "Balanced", "Centralized", "Cross-platform", "Distributed", "Enhanced",
    "Focused", "Horizontal", "Innovative", "Managed", "Optimized", "Proactive", "Reactive",
    "Seamless", "Synergistic", "Universal",
];

const CATCH_PHRASE_DESCRIPTORS: &[&str] = &[
    "24/7", "asynchronous", "bottom-line", "client-driven", "context-sensitive", "dynamic",
    "fault-tolerant", "heuristic", "incremental", "mission-critical", "real-time", "scalable",
    "stateless", "tangible", "zero-defect",
];

const CATCH_PHRASE_NOUNS: &[&str] = &[
    "algorithm", "architecture", "benchmark", "capability", "database", "framework",
    "hierarchy", "initiative", "interface", "matrix", "middleware", "paradigm", "pipeline",
    "protocol", "toolset", "workforce",
];

const LOREM_WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in", "voluptate",
];

/// Reseed this thread's generator for deterministic fixtures.
pub fn seed_fixtures(seed: u64) {
    RNG.with(|rng| {
        *rng.borrow_mut() = StdRng::seed_from_u64(seed);
    });
}

fn pick(words: &'static [&'static str]) -> &'static str {
    RNG.with(|rng| words.choose(&mut *rng.borrow_mut()).copied().unwrap_or_default())
}

fn random_range(min: i64, max: i64) -> i64 {
    RNG.with(|rng| rng.borrow_mut().gen_range(min..=max))
}

/// Generate a fake first name.
pub fn fake_first_name() -> String {
    pick(FIRST_NAMES).to_string()
}

/// Generate a fake last name.
pub fn fake_last_name() -> String {
    pick(LAST_NAMES).to_string()
}

/// Generate a corporate catch phrase, e.g. "Seamless real-time middleware".
pub fn fake_catch_phrase() -> String {
    format!(
        "{} {} {}",
        pick(CATCH_PHRASE_ADJECTIVES),
        pick(CATCH_PHRASE_DESCRIPTORS),
        pick(CATCH_PHRASE_NOUNS)
    )
}

/// Generate a sentence of lorem ipsum, capitalized and terminated.
pub fn fake_sentence() -> String {
    let len = random_range(4, 12);
    let words: Vec<&str> = (0..len).map(|_| pick(LOREM_WORDS)).collect();
    let sentence = words.join(" ");

    let mut chars = sentence.chars();
    match chars.next() {
        Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

/// Generate a paragraph of three to six sentences.
pub fn fake_paragraph() -> String {
    let count = random_range(3, 6);
    (0..count)
        .map(|_| fake_sentence())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Generate a timestamp within the last year.
pub fn fake_past_date() -> DateTime<Utc> {
    let seconds_ago = random_range(60, 365 * 24 * 60 * 60);
    Utc::now() - Duration::seconds(seconds_ago)
}

/// Generate a complete creation payload.
pub fn generate_post() -> NewBlogPost {
    NewBlogPost {
        author: AuthorName::new(fake_first_name(), fake_last_name()),
        title: fake_catch_phrase(),
        content: fake_paragraph(),
        created: Some(fake_past_date()),
    }
}

/// Generate `count` creation payloads.
pub fn generate_posts(count: usize) -> Vec<NewBlogPost> {
    (0..count).map(|_| generate_post()).collect()
}
