// Markshelf services
// Services are the stateless core (import parsing, image resolution, URL checks)
// plus the summarizer and settings engine.

pub mod bookmark_import;
pub mod image_resolver;
pub mod outline;
pub mod settings_engine;
pub mod summarizer;
pub mod url_guard;
