// Built-in bookmarks the library starts with when `library.seed_on_start` is set.

use crate::types::bookmark::{Bookmark, PLACEHOLDER_IMAGE};

struct SeedEntry {
    title: &'static str,
    url: &'static str,
    description: &'static str,
    category: &'static str,
    ai_hint: &'static str,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        title: "GitHub",
        url: "https://github.com",
        description: "Where the world builds software.",
        category: "Development",
        ai_hint: "code repository",
    },
    SeedEntry {
        title: "Stack Overflow",
        url: "https://stackoverflow.com",
        description: "Questions and answers for programmers.",
        category: "Development",
        ai_hint: "programming questions",
    },
    SeedEntry {
        title: "The Rust Book",
        url: "https://doc.rust-lang.org/book/",
        description: "The Rust Programming Language, the official guide.",
        category: "Learning",
        ai_hint: "rust book",
    },
    SeedEntry {
        title: "Wikipedia",
        url: "https://www.wikipedia.org",
        description: "The free encyclopedia.",
        category: "Learning",
        ai_hint: "encyclopedia",
    },
    SeedEntry {
        title: "YouTube",
        url: "https://www.youtube.com",
        description: "Videos, music and live streams.",
        category: "Entertainment",
        ai_hint: "video platform",
    },
    SeedEntry {
        title: "Netflix",
        url: "https://www.netflix.com",
        description: "Films and series on demand.",
        category: "Entertainment",
        ai_hint: "streaming service",
    },
    SeedEntry {
        title: "Hacker News",
        url: "https://news.ycombinator.com",
        description: "Links and discussion for the technically curious.",
        category: "News",
        ai_hint: "tech news",
    },
];

/// Returns the seed collection with ids `"1"`..`"n"`.
pub fn seed_bookmarks() -> Vec<Bookmark> {
    SEED.iter()
        .enumerate()
        .map(|(i, entry)| Bookmark {
            id: (i + 1).to_string(),
            title: entry.title.to_string(),
            url: entry.url.to_string(),
            description: entry.description.to_string(),
            category: entry.category.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            ai_hint: entry.ai_hint.to_string(),
        })
        .collect()
}
