//! Bookmark Manager for Markshelf.
//!
//! Implements `BookmarkManagerTrait`: the single owner of the in-memory
//! bookmark collection. The collection only changes through add, remove and
//! import; listing, category and search queries never mutate it.

use std::collections::{BTreeMap, BTreeSet};

use url::Url;
use uuid::Uuid;

use crate::managers::image_cursor::{ImageCursors, ImageFallback};
use crate::managers::seed::seed_bookmarks;
use crate::services::bookmark_import::parse_import;
use crate::types::bookmark::{Bookmark, NewBookmark, ALL_CATEGORIES, PLACEHOLDER_IMAGE};
use crate::types::errors::{BookmarkError, ImportError};

const MIN_TITLE_CHARS: usize = 2;
const NEW_BOOKMARK_HINT: &str = "new bookmark";

/// Trait defining bookmark collection operations.
pub trait BookmarkManagerTrait {
    fn add_bookmark(&mut self, new: NewBookmark) -> Result<Bookmark, BookmarkError>;
    fn remove_bookmark(&mut self, id: &str) -> Result<Bookmark, BookmarkError>;
    /// Parses a Netscape bookmarks file and appends every link it contains.
    fn import_html(&mut self, markup: &str) -> Result<Vec<Bookmark>, ImportError>;
    fn get_bookmark(&self, id: &str) -> Option<&Bookmark>;
    fn list_bookmarks(&self) -> &[Bookmark];
    /// `"All"` followed by every category in use, sorted and de-duplicated.
    fn categories(&self) -> Vec<String>;
    fn filter_bookmarks(&self, category: Option<&str>, query: &str) -> Vec<&Bookmark>;
    fn grouped_bookmarks(&self, category: Option<&str>, query: &str) -> BTreeMap<String, Vec<&Bookmark>>;
    fn image_state(&mut self, id: &str) -> Result<&ImageFallback, BookmarkError>;
    fn report_image_error(&mut self, id: &str) -> Result<&ImageFallback, BookmarkError>;
}

/// In-memory bookmark collection.
#[derive(Debug, Default)]
pub struct BookmarkManager {
    bookmarks: Vec<Bookmark>,
    images: ImageCursors,
}

impl BookmarkManager {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding the built-in seed bookmarks.
    pub fn with_seed() -> Self {
        Self {
            bookmarks: seed_bookmarks(),
            images: ImageCursors::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    fn validate(new: &NewBookmark) -> Result<(), BookmarkError> {
        if Url::parse(new.url.trim()).is_err() {
            return Err(BookmarkError::InvalidUrl(new.url.clone()));
        }
        if new.title.trim().chars().count() < MIN_TITLE_CHARS {
            return Err(BookmarkError::InvalidTitle(new.title.clone()));
        }
        if new.category.trim().is_empty() {
            return Err(BookmarkError::MissingCategory);
        }
        Ok(())
    }

    fn matches(bookmark: &Bookmark, category: Option<&str>, query: &str) -> bool {
        let in_category = match category {
            None | Some(ALL_CATEGORIES) => true,
            Some(name) => bookmark.category == name,
        };
        if !in_category {
            return false;
        }
        if query.is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        bookmark.title.to_lowercase().contains(&needle)
            || bookmark.description.to_lowercase().contains(&needle)
    }

    fn find(&self, id: &str) -> Result<&Bookmark, BookmarkError> {
        self.bookmarks
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    /// Validates and appends a manually entered bookmark.
    fn add_bookmark(&mut self, new: NewBookmark) -> Result<Bookmark, BookmarkError> {
        Self::validate(&new)?;

        let bookmark = Bookmark {
            id: Uuid::new_v4().to_string(),
            title: new.title.trim().to_string(),
            url: new.url.trim().to_string(),
            description: new.description,
            category: new.category.trim().to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            ai_hint: NEW_BOOKMARK_HINT.to_string(),
        };
        log::info!("added bookmark {} in '{}'", bookmark.id, bookmark.category);
        self.bookmarks.push(bookmark.clone());
        Ok(bookmark)
    }

    fn remove_bookmark(&mut self, id: &str) -> Result<Bookmark, BookmarkError> {
        let idx = self
            .bookmarks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| BookmarkError::NotFound(id.to_string()))?;
        self.images.remove(id);
        log::info!("removed bookmark {}", id);
        Ok(self.bookmarks.remove(idx))
    }

    /// The collection is only touched once the whole file has parsed and
    /// produced at least one link.
    fn import_html(&mut self, markup: &str) -> Result<Vec<Bookmark>, ImportError> {
        let links = parse_import(markup).map_err(|e| {
            log::warn!("bookmark import rejected: {}", e);
            e
        })?;
        if links.is_empty() {
            return Err(ImportError::NoBookmarksFound);
        }

        let imported: Vec<Bookmark> = links
            .into_iter()
            .map(|link| link.into_bookmark(format!("imported-{}", Uuid::new_v4())))
            .collect();
        self.bookmarks.extend(imported.iter().cloned());
        log::info!("imported {} bookmarks", imported.len());
        Ok(imported)
    }

    fn get_bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn categories(&self) -> Vec<String> {
        let used: BTreeSet<&str> = self.bookmarks.iter().map(|b| b.category.as_str()).collect();
        std::iter::once(ALL_CATEGORIES)
            .chain(used)
            .map(str::to_string)
            .collect()
    }

    /// Bookmarks in `category` (`None` or `"All"` for every category) whose
    /// title or description contains `query`, ignoring case.
    fn filter_bookmarks(&self, category: Option<&str>, query: &str) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| Self::matches(b, category, query))
            .collect()
    }

    /// Filtered bookmarks keyed by category. A specific category always
    /// appears as a key, even when nothing in it matches.
    fn grouped_bookmarks(&self, category: Option<&str>, query: &str) -> BTreeMap<String, Vec<&Bookmark>> {
        let mut groups: BTreeMap<String, Vec<&Bookmark>> = BTreeMap::new();
        if let Some(name) = category.filter(|c| *c != ALL_CATEGORIES) {
            groups.insert(name.to_string(), Vec::new());
        }
        for bookmark in self.filter_bookmarks(category, query) {
            groups.entry(bookmark.category.clone()).or_default().push(bookmark);
        }
        groups
    }

    fn image_state(&mut self, id: &str) -> Result<&ImageFallback, BookmarkError> {
        let (image, url) = {
            let bookmark = self.find(id)?;
            (bookmark.image.clone(), bookmark.url.clone())
        };
        let state = self.images.entry(id, &image, &url);
        Ok(&*state)
    }

    fn report_image_error(&mut self, id: &str) -> Result<&ImageFallback, BookmarkError> {
        let (image, url) = {
            let bookmark = self.find(id)?;
            (bookmark.image.clone(), bookmark.url.clone())
        };
        let state = self.images.entry(id, &image, &url);
        if state.on_load_error() {
            log::debug!("image for {} fell back to {}", id, state.current());
        }
        Ok(&*state)
    }
}
