//! Per-bookmark image fallback state.
//!
//! Holds what a card currently displays and where it is in the fallback
//! chain. Each load failure moves one step down the chain; the cursor never
//! moves past the placeholder at the end and only resets when the bookmark's
//! url or image changes.

use std::collections::HashMap;

use serde::Serialize;

use crate::services::image_resolver::{fallback_chain, primary_image_source};

/// Image fallback state for a single bookmark.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageFallback {
    image: String,
    url: String,
    chain: Vec<String>,
    cursor: usize,
    current: String,
}

impl ImageFallback {
    pub fn new(image: &str, url: &str) -> Self {
        Self {
            image: image.to_string(),
            url: url.to_string(),
            chain: fallback_chain(url),
            cursor: 0,
            current: primary_image_source(image, url),
        }
    }

    /// The image source to display right now.
    pub fn current(&self) -> &str {
        &self.current
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    /// Returns `true` once the cursor sits on the placeholder.
    pub fn is_exhausted(&self) -> bool {
        self.cursor + 1 >= self.chain.len()
    }

    /// Handles a failed load of the current source.
    ///
    /// A failing declared image drops to the head of the chain; after that
    /// each failure advances one step. Returns `true` if the displayed source
    /// changed.
    pub fn on_load_error(&mut self) -> bool {
        let last = self.chain.len().saturating_sub(1);
        if self.current == self.chain[self.cursor] && self.cursor < last {
            self.cursor += 1;
        }
        let next = &self.chain[self.cursor];
        if *next == self.current {
            return false;
        }
        self.current = next.clone();
        true
    }

    /// Recomputes the chain when the bookmark's image or url changed.
    ///
    /// Returns `true` if the state was reset.
    pub fn refresh(&mut self, image: &str, url: &str) -> bool {
        if self.image == image && self.url == url {
            return false;
        }
        *self = Self::new(image, url);
        true
    }
}

/// Image fallback state for every bookmark that has been displayed.
#[derive(Debug, Default)]
pub struct ImageCursors {
    entries: HashMap<String, ImageFallback>,
}

impl ImageCursors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state for `id`, creating or refreshing it from the
    /// bookmark's current image and url.
    pub fn entry(&mut self, id: &str, image: &str, url: &str) -> &mut ImageFallback {
        let state = self
            .entries
            .entry(id.to_string())
            .or_insert_with(|| ImageFallback::new(image, url));
        state.refresh(image, url);
        state
    }

    pub fn get(&self, id: &str) -> Option<&ImageFallback> {
        self.entries.get(id)
    }

    pub fn remove(&mut self, id: &str) {
        self.entries.remove(id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
