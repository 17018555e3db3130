use std::fmt;

// === ImportError ===

/// Errors related to importing a Netscape bookmarks file.
#[derive(Debug, PartialEq)]
pub enum ImportError {
    /// The text could not be read as a markup tree at all.
    MalformedInput(String),
    /// The file parsed but contained no links.
    NoBookmarksFound,
}

impl ImportError {
    /// Message shown to the user when an import fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            ImportError::MalformedInput(_) => {
                "The file format is invalid. Please select a valid Netscape bookmarks HTML file."
            }
            ImportError::NoBookmarksFound => "No valid bookmarks found in the selected file.",
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MalformedInput(msg) => write!(f, "Malformed import input: {}", msg),
            ImportError::NoBookmarksFound => write!(f, "No bookmarks found in import"),
        }
    }
}

impl std::error::Error for ImportError {}

// === BookmarkError ===

/// Errors related to bookmark collection operations.
#[derive(Debug, PartialEq)]
pub enum BookmarkError {
    /// Bookmark with the given ID was not found.
    NotFound(String),
    /// The bookmark URL is not a valid absolute URL.
    InvalidUrl(String),
    /// The bookmark title is too short.
    InvalidTitle(String),
    /// The bookmark has no category.
    MissingCategory,
}

impl fmt::Display for BookmarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkError::NotFound(id) => write!(f, "Bookmark not found: {}", id),
            BookmarkError::InvalidUrl(url) => write!(f, "Invalid bookmark URL: {}", url),
            BookmarkError::InvalidTitle(title) => {
                write!(f, "Title must be at least 2 characters: {:?}", title)
            }
            BookmarkError::MissingCategory => write!(f, "Category is required"),
        }
    }
}

impl std::error::Error for BookmarkError {}

// === SummaryError ===

/// Errors related to page summarization.
#[derive(Debug, PartialEq)]
pub enum SummaryError {
    /// The target is not a syntactically valid http(s) URL.
    InvalidUrl(String),
    /// The target host is loopback, private or lacks a domain suffix.
    NotPubliclyRoutable(String),
    /// No provider endpoint or API key is configured.
    NoProvider,
    /// The provider rejected the request as malformed.
    BadRequest(String),
    /// The provider could not be reached or returned an error.
    Unavailable(String),
    /// The provider answered without a summary.
    EmptySummary,
}

impl SummaryError {
    /// Message shown to the user. Never includes upstream diagnostics.
    pub fn user_message(&self) -> &'static str {
        match self {
            SummaryError::InvalidUrl(_) => {
                "Invalid URL provided. Please ensure it is a valid, full URL."
            }
            SummaryError::NotPubliclyRoutable(_) => {
                "This URL is not publicly accessible and cannot be summarized."
            }
            SummaryError::EmptySummary => "Could not generate a summary for this URL.",
            SummaryError::BadRequest(_) => {
                "The provided URL could not be accessed or processed. It might be invalid or restricted."
            }
            SummaryError::NoProvider | SummaryError::Unavailable(_) => {
                "Failed to summarize the bookmark. The service may be temporarily unavailable."
            }
        }
    }
}

impl fmt::Display for SummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryError::InvalidUrl(url) => write!(f, "Invalid summary URL: {}", url),
            SummaryError::NotPubliclyRoutable(url) => {
                write!(f, "URL is not publicly routable: {}", url)
            }
            SummaryError::NoProvider => write!(f, "No summarization provider configured"),
            SummaryError::BadRequest(msg) => write!(f, "Summarization bad request: {}", msg),
            SummaryError::Unavailable(msg) => {
                write!(f, "Summarization unavailable: {}", msg)
            }
            SummaryError::EmptySummary => write!(f, "Provider returned no summary"),
        }
    }
}

impl std::error::Error for SummaryError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
