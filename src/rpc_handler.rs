//! RPC method handler for the Markshelf JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches JSON-RPC method calls to the bookmark manager,
//! the image resolver, the summarizer and the settings engine via `App`.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::app::App;
use crate::managers::bookmark_manager::BookmarkManagerTrait;
use crate::services::image_resolver::{fallback_chain, primary_image_source};
use crate::services::settings_engine::SettingsEngineTrait;
use crate::services::summarizer::Summarizer;
use crate::types::bookmark::NewBookmark;
use crate::types::notice::Notice;

fn str_param<'a>(params: &'a Value, name: &str) -> Option<&'a str> {
    params.get(name).and_then(|v| v.as_str())
}

fn to_json<T: serde::Serialize>(value: T) -> Result<Value, String> {
    serde_json::to_value(value).map_err(|e| e.to_string())
}

/// Dispatch a JSON-RPC method call to the appropriate handler.
///
/// Returns `Ok(Value)` on success or `Err(String)` with a message fit for
/// display. The `App` lock is never held across an await.
pub async fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        // ─── Bookmarks ───
        "bookmark.list" => {
            let category = str_param(params, "category");
            let query = str_param(params, "query").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.bookmark_manager.filter_bookmarks(category, query))
        }
        "bookmark.grouped" => {
            let category = str_param(params, "category");
            let query = str_param(params, "query").unwrap_or("");
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.bookmark_manager.grouped_bookmarks(category, query))
        }
        "bookmark.categories" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.bookmark_manager.categories())
        }
        "bookmark.add" => {
            let new = NewBookmark {
                url: str_param(params, "url").ok_or("missing url")?.to_string(),
                title: str_param(params, "title").ok_or("missing title")?.to_string(),
                description: str_param(params, "description").unwrap_or("").to_string(),
                category: str_param(params, "category").ok_or("missing category")?.to_string(),
            };
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let bookmark = a.bookmark_manager.add_bookmark(new).map_err(|e| e.to_string())?;
            let notice = Notice::info(
                "Bookmark Added!",
                format!("\"{}\" has been successfully added.", bookmark.title),
            );
            Ok(json!({"bookmark": bookmark, "notice": notice}))
        }
        "bookmark.delete" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.bookmark_manager.remove_bookmark(id).map_err(|e| e.to_string())?;
            let notice = Notice::info(
                "Bookmark Deleted",
                "The bookmark has been successfully removed.",
            );
            Ok(json!({"ok": true, "notice": notice}))
        }
        "bookmark.import" => {
            let html = str_param(params, "html").ok_or("missing html")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            match a.bookmark_manager.import_html(html) {
                Ok(imported) => {
                    let notice = Notice::info(
                        "Import Successful",
                        format!("Successfully imported {} bookmarks.", imported.len()),
                    );
                    Ok(json!({"imported": imported.len(), "bookmarks": imported, "notice": notice}))
                }
                Err(e) => {
                    let notice = Notice::failure("Import Failed", e.user_message());
                    Ok(json!({"imported": 0, "bookmarks": [], "notice": notice}))
                }
            }
        }

        // ─── Images ───
        "image.resolve" => {
            let url = str_param(params, "url").ok_or("missing url")?;
            let image = str_param(params, "image").unwrap_or("");
            Ok(json!({
                "primary": primary_image_source(image, url),
                "fallbacks": fallback_chain(url),
            }))
        }
        "image.current" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let state = a.bookmark_manager.image_state(id).map_err(|e| e.to_string())?;
            to_json(state)
        }
        "image.error" => {
            let id = str_param(params, "id").ok_or("missing id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let state = a.bookmark_manager.report_image_error(id).map_err(|e| e.to_string())?;
            to_json(state)
        }

        // ─── Summaries ───
        "summary.request" => {
            let url = str_param(params, "url").unwrap_or("");
            let summarizer = {
                let a = app.lock().map_err(|e| e.to_string())?;
                Arc::clone(&a.summarizer)
            };
            let outcome = summarizer.summarize_action(url).await;
            let mut response = to_json(&outcome)?;
            if let (Some(error), Value::Object(map)) = (outcome.error(), &mut response) {
                let notice = Notice::failure("Summarization Failed", error);
                map.insert("notice".to_string(), to_json(notice)?);
            }
            Ok(response)
        }
        "summary.providers" => to_json(Summarizer::available_providers()),

        // ─── Settings ───
        "settings.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            to_json(a.settings_engine.get_settings())
        }
        "settings.set" => {
            let key = str_param(params, "key").ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.set_value(key, value).map_err(|e| e.to_string())?;
            if key.starts_with("summarizer.") {
                a.reload_summarizer();
            }
            Ok(json!({"ok": true}))
        }
        "settings.reset" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.settings_engine.reset().map_err(|e| e.to_string())?;
            a.reload_summarizer();
            to_json(a.settings_engine.get_settings())
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
