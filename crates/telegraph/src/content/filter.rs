// ABOUTME: Exclusion filters applied to parsed DOM nodes before conversion.
// ABOUTME: Any Fn(DomNode) -> bool is a filter; ExcludeTags drops elements by tag name.

use std::collections::HashSet;

use scraper::Node;

/// A node of the parsed markup tree as seen by filters.
pub type DomNode<'a> = ego_tree::NodeRef<'a, Node>;

/// Predicate deciding whether a node and its whole subtree are left out.
pub trait Filter {
    /// Returns true to exclude `node` and everything beneath it.
    fn exclude(&self, node: DomNode<'_>) -> bool;
}

impl<F> Filter for F
where
    F: Fn(DomNode<'_>) -> bool,
{
    fn exclude(&self, node: DomNode<'_>) -> bool {
        self(node)
    }
}

/// Excludes elements whose tag name is in a set (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct ExcludeTags {
    tags: HashSet<String>,
}

impl ExcludeTags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|t| t.as_ref().trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Filter for ExcludeTags {
    fn exclude(&self, node: DomNode<'_>) -> bool {
        match node.value() {
            Node::Element(el) => self.tags.contains(&el.name().to_lowercase()),
            _ => false,
        }
    }
}
