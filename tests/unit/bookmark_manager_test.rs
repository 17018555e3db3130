//! Unit tests for the BookmarkManager public API.
//!
//! Exercises add, remove, import, listing, grouping and per-bookmark image
//! fallback state through `BookmarkManagerTrait`.

use markshelf::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use markshelf::types::bookmark::{NewBookmark, ALL_CATEGORIES, IMPORTED_CATEGORY, PLACEHOLDER_IMAGE};
use markshelf::types::errors::{BookmarkError, ImportError};

/// Helper: a valid manual bookmark in the given category.
fn new_bookmark(url: &str, title: &str, category: &str) -> NewBookmark {
    NewBookmark {
        url: url.to_string(),
        title: title.to_string(),
        description: String::new(),
        category: category.to_string(),
    }
}

const TWO_LINK_EXPORT: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>\n\
    <DL><p>\n\
        <DT><A HREF=\"https://crates.io\">Crates</A>\n\
        <DT><H3>Reading</H3>\n\
        <DL><p>\n\
            <DT><A HREF=\"https://blog.rust-lang.org\">Rust Blog</A>\n\
        </DL><p>\n\
    </DL><p>";

// ─── Construction ───

#[test]
fn test_new_is_empty_and_seed_is_not() {
    assert!(BookmarkManager::new().is_empty());
    let seeded = BookmarkManager::with_seed();
    assert_eq!(seeded.len(), 7);
    assert!(seeded.list_bookmarks().iter().all(|b| !b.category.is_empty()));
    assert_eq!(seeded.get_bookmark("1").unwrap().title, "GitHub");
}

// ─── Add / remove ───

#[test]
fn test_add_bookmark_defaults() {
    let mut mgr = BookmarkManager::new();
    let added = mgr
        .add_bookmark(new_bookmark("  https://docs.rs  ", "  Docs.rs ", "Development"))
        .unwrap();
    assert_eq!(added.url, "https://docs.rs");
    assert_eq!(added.title, "Docs.rs");
    assert_eq!(added.image, PLACEHOLDER_IMAGE);
    assert_eq!(added.ai_hint, "new bookmark");
    assert!(!added.id.is_empty());
    assert_eq!(mgr.get_bookmark(&added.id), Some(&added));
}

#[test]
fn test_add_bookmark_ids_are_unique() {
    let mut mgr = BookmarkManager::new();
    let a = mgr.add_bookmark(new_bookmark("https://a.example", "Aa", "X")).unwrap();
    let b = mgr.add_bookmark(new_bookmark("https://a.example", "Aa", "X")).unwrap();
    assert_ne!(a.id, b.id);
    assert_eq!(mgr.len(), 2);
}

#[test]
fn test_add_bookmark_validation() {
    let mut mgr = BookmarkManager::new();
    assert!(matches!(
        mgr.add_bookmark(new_bookmark("not a url", "Title", "X")),
        Err(BookmarkError::InvalidUrl(_))
    ));
    assert!(matches!(
        mgr.add_bookmark(new_bookmark("https://a.example", " a ", "X")),
        Err(BookmarkError::InvalidTitle(_))
    ));
    assert_eq!(
        mgr.add_bookmark(new_bookmark("https://a.example", "Title", "  ")),
        Err(BookmarkError::MissingCategory)
    );
    assert!(mgr.is_empty());
}

#[test]
fn test_remove_bookmark() {
    let mut mgr = BookmarkManager::with_seed();
    let removed = mgr.remove_bookmark("2").unwrap();
    assert_eq!(removed.title, "Stack Overflow");
    assert_eq!(mgr.len(), 6);
    assert!(mgr.get_bookmark("2").is_none());
    assert_eq!(mgr.remove_bookmark("2"), Err(BookmarkError::NotFound("2".to_string())));
}

// ─── Import ───

#[test]
fn test_import_appends_with_categories() {
    let mut mgr = BookmarkManager::with_seed();
    let imported = mgr.import_html(TWO_LINK_EXPORT).unwrap();
    assert_eq!(imported.len(), 2);
    assert_eq!(mgr.len(), 9);
    assert_eq!(imported[0].category, IMPORTED_CATEGORY);
    assert_eq!(imported[1].category, "Reading");
    assert_eq!(imported[1].ai_hint, "rust blog");
    assert!(imported.iter().all(|b| b.id.starts_with("imported-")));
    assert_ne!(imported[0].id, imported[1].id);
}

#[test]
fn test_import_twice_gives_fresh_ids() {
    let mut mgr = BookmarkManager::new();
    let first = mgr.import_html(TWO_LINK_EXPORT).unwrap();
    let second = mgr.import_html(TWO_LINK_EXPORT).unwrap();
    assert_eq!(mgr.len(), 4);
    assert!(first.iter().all(|a| second.iter().all(|b| a.id != b.id)));
}

#[test]
fn test_import_failures_leave_collection_untouched() {
    let mut mgr = BookmarkManager::with_seed();
    let before = mgr.list_bookmarks().to_vec();

    let truncated = &TWO_LINK_EXPORT[..TWO_LINK_EXPORT.find("crates.io").unwrap()];
    assert!(matches!(mgr.import_html(truncated), Err(ImportError::MalformedInput(_))));
    assert_eq!(
        mgr.import_html("<html><body>no list</body></html>"),
        Err(ImportError::NoBookmarksFound)
    );
    assert_eq!(mgr.import_html("<DL><p></DL>"), Err(ImportError::NoBookmarksFound));

    assert_eq!(mgr.list_bookmarks(), before.as_slice());
}

// ─── Listing ───

#[test]
fn test_categories_sorted_with_all_first() {
    let mgr = BookmarkManager::with_seed();
    assert_eq!(
        mgr.categories(),
        vec!["All", "Development", "Entertainment", "Learning", "News"]
    );
}

#[test]
fn test_filter_by_category_and_query() {
    let mgr = BookmarkManager::with_seed();
    assert_eq!(mgr.filter_bookmarks(None, "").len(), 7);
    assert_eq!(mgr.filter_bookmarks(Some(ALL_CATEGORIES), "").len(), 7);
    assert_eq!(mgr.filter_bookmarks(Some("Learning"), "").len(), 2);

    let hits = mgr.filter_bookmarks(None, "PROGRAMMERS");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Stack Overflow");

    assert!(mgr.filter_bookmarks(Some("News"), "rust").is_empty());
    assert!(mgr.filter_bookmarks(Some("Nope"), "").is_empty());
}

#[test]
fn test_grouped_keeps_selected_category_key() {
    let mgr = BookmarkManager::with_seed();
    let all = mgr.grouped_bookmarks(None, "");
    assert_eq!(all.len(), 4);
    assert_eq!(all["Development"].len(), 2);

    let empty = mgr.grouped_bookmarks(Some("News"), "zzz");
    assert_eq!(empty.len(), 1);
    assert!(empty["News"].is_empty());
}

// ─── Images ───

#[test]
fn test_image_state_and_errors() {
    let mut mgr = BookmarkManager::with_seed();
    let state = mgr.image_state("1").unwrap();
    assert_eq!(state.cursor(), 0);
    assert!(state.current().contains("domain=github.com"));

    for _ in 0..5 {
        mgr.report_image_error("1").unwrap();
    }
    let state = mgr.image_state("1").unwrap();
    assert_eq!(state.cursor(), 3);
    assert_eq!(state.current(), PLACEHOLDER_IMAGE);

    assert_eq!(
        mgr.report_image_error("missing").unwrap_err(),
        BookmarkError::NotFound("missing".to_string())
    );
}

#[test]
fn test_removed_bookmark_forgets_image_state() {
    let mut mgr = BookmarkManager::new();
    let added = mgr
        .add_bookmark(new_bookmark("https://github.com/rust-lang", "Rust org", "Dev"))
        .unwrap();
    mgr.report_image_error(&added.id).unwrap();
    mgr.remove_bookmark(&added.id).unwrap();
    assert!(mgr.image_state(&added.id).is_err());
}
