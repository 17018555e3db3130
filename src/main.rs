//! Markshelf: a personal bookmark library with favicon fallbacks and AI summaries.
//!
//! Runs a console demo of the library core. Pass a Netscape bookmarks HTML
//! file as the first argument to import it on top of the seed collection.

use markshelf::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use markshelf::services::image_resolver::{fallback_chain, primary_image_source};
use markshelf::services::url_guard::validate_summary_target;
use markshelf::types::bookmark::ALL_CATEGORIES;

fn main() {
    let _ = tracing_subscriber::fmt().with_writer(std::io::stderr).try_init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║              Markshelf v{} — Demo Mode               ║", env!("CARGO_PKG_VERSION"));
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut manager = BookmarkManager::with_seed();
    demo_import(&mut manager, std::env::args().nth(1));
    demo_categories(&manager);
    demo_images(&mut manager);
    demo_url_guard();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ {} bookmarks on the shelf", manager.len());
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_import(manager: &mut BookmarkManager, path: Option<String>) {
    section("Bookmark Import");
    let Some(path) = path else {
        println!("  No file given, showing the seed collection only");
        println!();
        return;
    };
    match std::fs::read_to_string(&path) {
        Ok(markup) => match manager.import_html(&markup) {
            Ok(imported) => println!("  Imported {} bookmark(s) from {}", imported.len(), path),
            Err(e) => println!("  ✗ {}", e.user_message()),
        },
        Err(e) => println!("  ✗ Could not read {}: {}", path, e),
    }
    println!();
}

fn demo_categories(manager: &BookmarkManager) {
    section("Categories");
    for category in manager.categories() {
        let count = manager.filter_bookmarks(Some(category.as_str()), "").len();
        println!("  {:<16} {}", category, count);
    }
    let hits = manager.filter_bookmarks(Some(ALL_CATEGORIES), "rust");
    println!("  Search 'rust': found {} result(s)", hits.len());
    println!();
}

fn demo_images(manager: &mut BookmarkManager) {
    section("Card Images");
    let entries: Vec<(String, String, String)> = manager
        .list_bookmarks()
        .iter()
        .take(4)
        .map(|b| (b.id.clone(), b.title.clone(), b.url.clone()))
        .collect();
    for (id, title, url) in entries {
        println!("  {}: {}", title, primary_image_source("", &url));
        println!("      {} fallback(s)", fallback_chain(&url).len());
        if let Ok(state) = manager.report_image_error(&id) {
            println!("      after one failed load: {}", state.current());
        }
    }
    println!();
}

fn demo_url_guard() {
    section("Summary Targets");
    for url in ["https://www.rust-lang.org", "http://localhost:8080", "http://10.0.0.5/admin", "ftp://example.com"] {
        match validate_summary_target(url) {
            Ok(_) => println!("  ✓ {}", url),
            Err(e) => println!("  ✗ {} ({})", url, e),
        }
    }
    println!();
}
