//! Netscape bookmark file import.
//!
//! Converts a browser "Export bookmarks" HTML file into a flat list of
//! [`ImportedLink`]s. Folder headings become categories: every link takes the
//! heading of the closest enclosing folder, or `"Imported"` at the top level.

use crate::services::outline::{parse_outline, OutlineNode};
use crate::types::bookmark::{
    ImportedLink, IMPORTED_CATEGORY, PLACEHOLDER_IMAGE, UNCATEGORIZED_CATEGORY, UNTITLED_LINK,
};
use crate::types::errors::ImportError;

/// Lists nested deeper than this are rejected as malformed.
pub const MAX_LIST_DEPTH: usize = 256;

/// Work left in the walk: a `<DL>` or a `<DT>`, with the category that
/// applies to its direct links and the list depth it sits at.
enum Pending {
    List(OutlineNode, String, usize),
    Entry(OutlineNode, String, usize),
}

/// Parses a Netscape bookmarks document.
///
/// Returns an empty list (not an error) when the document has no `<DL>`.
/// Fails with [`ImportError::MalformedInput`] when the text cannot be read as
/// a tree, or when lists nest deeper than [`MAX_LIST_DEPTH`]. Ids are left to
/// the caller.
pub fn parse_import(markup: &str) -> Result<Vec<ImportedLink>, ImportError> {
    let document = parse_outline(markup)?;
    let mut links = Vec::new();
    let mut pending = Vec::new();
    if let Some(top) = document.find_first("dl") {
        pending.push(Pending::List(top, IMPORTED_CATEGORY.to_string(), 1));
    }

    // Depth-first in document order: children are pushed in reverse.
    while let Some(item) = pending.pop() {
        match item {
            Pending::List(list, category, depth) => {
                if depth > MAX_LIST_DEPTH {
                    return Err(ImportError::MalformedInput(format!(
                        "lists nested deeper than {} levels",
                        MAX_LIST_DEPTH
                    )));
                }
                for child in list.child_elements().into_iter().rev() {
                    if child.is("dl") {
                        pending.push(Pending::List(child, category.clone(), depth + 1));
                    } else if child.is("dt") {
                        pending.push(Pending::Entry(child, category.clone(), depth));
                    }
                }
            }
            Pending::Entry(entry, category, depth) => {
                if let Some(heading) = entry.find_first("h3") {
                    let text = heading.text_content();
                    let folder = match text.trim() {
                        "" => UNCATEGORIZED_CATEGORY,
                        name => name,
                    };
                    if let Some(nested) = entry.find_first("dl") {
                        pending.push(Pending::List(nested, folder.to_string(), depth + 1));
                    }
                } else if let Some(anchor) = entry.find_first("a") {
                    links.push(imported_link(&anchor, &category));
                }
            }
        }
    }

    log::debug!("parsed {} links from bookmark import", links.len());
    Ok(links)
}

fn imported_link(anchor: &OutlineNode, category: &str) -> ImportedLink {
    let text = anchor.text_content();
    let title = match text.trim() {
        "" => UNTITLED_LINK,
        title => title,
    };
    ImportedLink {
        title: title.to_string(),
        url: anchor.attr("href").unwrap_or_default(),
        description: String::new(),
        category: category.to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
    }
}
