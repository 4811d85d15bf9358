// ABOUTME: Converts HTML markup into the restricted content node tree accepted by Telegraph pages.
// ABOUTME: Applies caller filters per node, keeps whitelisted tags and href/src, unwraps other tags.

//! Content conversion.
//!
//! Markup is parsed as an HTML fragment and walked depth-first. Text nodes are
//! kept verbatim, elements are mapped to [`NodeElement`]s and everything else
//! is dropped. Elements outside [`ALLOWED_TAGS`] keep their children but lose
//! their tag and attributes.
//!
//! ```
//! use telegraph_client::{content_format, ContentNode, NodeElement};
//!
//! let nodes = content_format("<p>Hello, World!</p>", &[]).unwrap();
//! assert_eq!(
//!     nodes,
//!     vec![ContentNode::from(NodeElement::new("p").with_child("Hello, World!"))]
//! );
//! ```

mod filter;
mod source;

use std::any::Any;

use scraper::{Html, Node};

use crate::error::Result;
use crate::types::{ContentNode, NodeElement, ALLOWED_ATTRS, ALLOWED_TAGS};

pub use filter::{DomNode, ExcludeTags, Filter};
pub use source::ContentSource;

/// Convert markup into page content.
///
/// Only the first node under the fragment root is converted, so the result
/// holds at most one node. An empty fragment yields an empty vector.
pub fn content_format<'a>(
    source: impl Into<ContentSource<'a>>,
    filters: &[&dyn Filter],
) -> Result<Vec<ContentNode>> {
    let markup = source.into().into_markup()?;
    let fragment = Html::parse_fragment(&markup);

    Ok(fragment
        .root_element()
        .first_child()
        .and_then(|first| dom_to_node(first, filters))
        .into_iter()
        .collect())
}

/// Like [`content_format`] for a dynamically typed source.
///
/// Fails with [`Error::InvalidInputType`](crate::Error::InvalidInputType)
/// unless `data` is one of the shapes [`ContentSource::try_from_any`] accepts.
pub fn content_format_any(
    data: Box<dyn Any>,
    filters: &[&dyn Filter],
) -> Result<Vec<ContentNode>> {
    content_format(ContentSource::try_from_any(data)?, filters)
}

fn dom_to_node(node: DomNode<'_>, filters: &[&dyn Filter]) -> Option<ContentNode> {
    if filters.iter().any(|f| f.exclude(node)) {
        return None;
    }

    let el = match node.value() {
        Node::Text(text) => return Some(ContentNode::Text(text.to_string())),
        Node::Element(el) => el,
        _ => return None,
    };

    let mut element = NodeElement::default();

    if ALLOWED_TAGS.contains(&el.name().to_lowercase().as_str()) {
        element.tag = el.name().to_string();

        // Last href/src wins.
        for (name, value) in el.attrs() {
            if ALLOWED_ATTRS.contains(&name.to_lowercase().as_str()) {
                element.attrs.clear();
                element.attrs.insert(name.to_string(), value.to_string());
            }
        }
    }

    element.children = node
        .children()
        .filter_map(|child| dom_to_node(child, filters))
        .collect();

    Some(ContentNode::Element(element))
}
