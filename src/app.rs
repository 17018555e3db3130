//! App Core for Markshelf.
//!
//! Central struct holding the bookmark collection, settings and summarizer.

use std::sync::Arc;

use crate::managers::bookmark_manager::BookmarkManager;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::summarizer::Summarizer;

/// Central application struct holding all managers and services.
///
/// The summarizer sits behind an `Arc` so a request can be awaited after the
/// caller has released its lock on the `App`.
pub struct App {
    pub settings_engine: SettingsEngine,
    pub bookmark_manager: BookmarkManager,
    pub summarizer: Arc<Summarizer>,
}

impl App {
    /// Creates a new App from the settings file at `config_path`
    /// (or the default location when `None`).
    ///
    /// A malformed settings file is reported and replaced by defaults so the
    /// library still starts.
    pub fn new(config_path: Option<String>) -> Self {
        let mut settings_engine = SettingsEngine::new(config_path);
        let settings = settings_engine.load().unwrap_or_else(|e| {
            log::warn!(
                "could not load settings from {}: {}; using defaults",
                settings_engine.get_config_path(),
                e
            );
            settings_engine.get_settings().clone()
        });

        let bookmark_manager = if settings.library.seed_on_start {
            BookmarkManager::with_seed()
        } else {
            BookmarkManager::new()
        };
        let summarizer = Arc::new(Summarizer::new(settings.summarizer.clone()));
        log::info!(
            "library started with {} bookmarks; summarizer {}",
            bookmark_manager.len(),
            if summarizer.is_configured() { "configured" } else { "not configured" }
        );

        Self {
            settings_engine,
            bookmark_manager,
            summarizer,
        }
    }

    /// Rebuilds the summarizer from the current summarizer settings.
    pub fn reload_summarizer(&mut self) {
        let settings = self.settings_engine.get_settings().summarizer.clone();
        self.summarizer = Arc::new(Summarizer::new(settings));
    }
}
