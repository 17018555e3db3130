//! Markup tree for Netscape bookmark exports.
//!
//! Exports are HTML outlines that leave `<DT>`, `<DD>` and `<p>` unclosed, so
//! the text is handed to `html5ever` and comes back with the shape a browser
//! would build, character references decoded. [`OutlineNode`] wraps the DOM
//! handles with the few lookups the importer needs. Traversals use an explicit
//! stack and never recurse, however deep the document nests.

use std::fmt;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

use crate::types::errors::ImportError;

/// A node of a parsed document: the document itself, an element or text.
#[derive(Clone)]
pub struct OutlineNode(Handle);

impl OutlineNode {
    /// Lower-case tag name, or `None` for anything that is not an element.
    pub fn name(&self) -> Option<String> {
        match &self.0.data {
            NodeData::Element { name, .. } => Some(name.local.to_string()),
            _ => None,
        }
    }

    /// Returns `true` if this is an element with the given tag name (case-insensitive).
    pub fn is(&self, tag: &str) -> bool {
        match &self.0.data {
            NodeData::Element { name, .. } => (*name.local).eq_ignore_ascii_case(tag),
            _ => false,
        }
    }

    /// Looks up an attribute value by name (case-insensitive).
    pub fn attr(&self, key: &str) -> Option<String> {
        let NodeData::Element { attrs, .. } = &self.0.data else {
            return None;
        };
        let attrs = attrs.borrow();
        attrs
            .iter()
            .find(|attr| (*attr.name.local).eq_ignore_ascii_case(key))
            .map(|attr| attr.value.to_string())
    }

    /// Direct child elements in document order, skipping text and comments.
    pub fn child_elements(&self) -> Vec<OutlineNode> {
        self.0
            .children
            .borrow()
            .iter()
            .filter(|child| matches!(child.data, NodeData::Element { .. }))
            .cloned()
            .map(OutlineNode)
            .collect()
    }

    /// Finds the first descendant element with the given tag name in document order.
    pub fn find_first(&self, tag: &str) -> Option<OutlineNode> {
        let mut stack: Vec<Handle> = self.0.children.borrow().iter().rev().cloned().collect();
        while let Some(handle) = stack.pop() {
            let node = OutlineNode(handle);
            if node.is(tag) {
                return Some(node);
            }
            stack.extend(node.0.children.borrow().iter().rev().cloned());
        }
        None
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        let mut stack = vec![self.0.clone()];
        while let Some(handle) = stack.pop() {
            if let NodeData::Text { contents } = &handle.data {
                out.push_str(&contents.borrow());
            }
            stack.extend(handle.children.borrow().iter().rev().cloned());
        }
        out
    }
}

impl fmt::Debug for OutlineNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutlineNode")
            .field("name", &self.name())
            .field("children", &self.0.children.borrow().len())
            .finish()
    }
}

/// Parses `markup` and returns the document node.
///
/// HTML tree construction never fails on its own, so two checks run first:
/// binary content, and text that stops inside a tag or comment (a cut-off
/// download). Everything else forms a tree.
pub fn parse_outline(markup: &str) -> Result<OutlineNode, ImportError> {
    if let Some(c) = markup.chars().find(|c| is_binary_char(*c)) {
        return Err(ImportError::MalformedInput(format!(
            "binary content (U+{:04X})",
            c as u32
        )));
    }
    if let Some(pos) = unterminated_markup(markup) {
        return Err(ImportError::MalformedInput(format!(
            "input ends inside markup at byte {}",
            pos
        )));
    }

    let dom = parse_document(RcDom::default(), Default::default()).one(markup);
    Ok(OutlineNode(dom.document))
}

fn is_binary_char(c: char) -> bool {
    c.is_control() && !matches!(c, '\n' | '\r' | '\t' | '\u{0C}')
}

/// Byte offset of the last `<` that opens a tag, end tag, comment or
/// declaration, if no `>` follows it.
fn unterminated_markup(markup: &str) -> Option<usize> {
    let bytes = markup.as_bytes();
    let open = markup.rmatch_indices('<').map(|(pos, _)| pos).find(|pos| {
        bytes
            .get(pos + 1)
            .is_some_and(|b| b.is_ascii_alphabetic() || matches!(b, b'/' | b'!' | b'?'))
    })?;
    (!markup[open..].contains('>')).then_some(open)
}
