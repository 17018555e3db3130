use serde::{Deserialize, Serialize};

/// Fixed image used whenever no better card image can be determined.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

/// Category given to links found directly under the outermost import list.
pub const IMPORTED_CATEGORY: &str = "Imported";

/// Category given to links under a folder heading with no text.
pub const UNCATEGORIZED_CATEGORY: &str = "Uncategorized";

/// Title given to imported links whose anchor text is empty.
pub const UNTITLED_LINK: &str = "No Title";

/// Pseudo-category selecting every bookmark in listings.
pub const ALL_CATEGORIES: &str = "All";

/// Represents a saved bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub image: String,
    /// Short lowercase hint describing the card image.
    pub ai_hint: String,
}

/// A link produced by the Netscape import parser, before an id is assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImportedLink {
    pub title: String,
    pub url: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl ImportedLink {
    /// Lowercase first two words of the title.
    pub fn ai_hint(&self) -> String {
        self.title
            .split(' ')
            .take(2)
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }

    /// Turns the link into a bookmark with the given id.
    pub fn into_bookmark(self, id: String) -> Bookmark {
        let ai_hint = self.ai_hint();
        Bookmark {
            id,
            title: self.title,
            url: self.url,
            description: self.description,
            category: self.category,
            image: self.image,
            ai_hint,
        }
    }
}

/// User input for a manually added bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBookmark {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub category: String,
}
