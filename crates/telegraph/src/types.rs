// ABOUTME: Data types exchanged with the Telegraph API: accounts, pages, views and content nodes.
// ABOUTME: Also holds the `{ok, error, result}` response envelope decoded by the client.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Tags allowed to appear as [`NodeElement::tag`].
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "aside",
    "b",
    "blockquote",
    "br",
    "code",
    "em",
    "figcaption",
    "figure",
    "h3",
    "h4",
    "hr",
    "i",
    "iframe",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "s",
    "strong",
    "u",
    "ul",
    "video",
];

/// Attributes kept on a [`NodeElement`].
pub const ALLOWED_ATTRS: &[&str] = &["href", "src"];

/// A node of page content: either a text node or an element.
///
/// Serializes as a bare JSON string for text and as
/// `{"tag", "attrs", "children"}` for elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentNode {
    Text(String),
    Element(NodeElement),
}

impl ContentNode {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&NodeElement> {
        match self {
            ContentNode::Element(el) => Some(el),
            ContentNode::Text(_) => None,
        }
    }

    /// Returns the text if this node is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ContentNode::Text(s) => Some(s),
            ContentNode::Element(_) => None,
        }
    }
}

impl From<String> for ContentNode {
    fn from(s: String) -> Self {
        ContentNode::Text(s)
    }
}

impl From<&str> for ContentNode {
    fn from(s: &str) -> Self {
        ContentNode::Text(s.to_string())
    }
}

impl From<NodeElement> for ContentNode {
    fn from(el: NodeElement) -> Self {
        ContentNode::Element(el)
    }
}

/// A DOM element node.
///
/// An empty `tag` marks an element whose own tag was not allowed; only its
/// children carry content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeElement {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl NodeElement {
    /// Create an element with the given tag and no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing any previous one.
    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.clear();
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: impl Into<ContentNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Returns true if the element's tag was dropped during conversion.
    pub fn is_unwrapped(&self) -> bool {
        self.tag.is_empty()
    }
}

/// A Telegraph account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Only returned by createAccount and revokeAccessToken.
    #[serde(default)]
    pub access_token: String,
    /// One-time browser authorization URL, valid for 5 minutes.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub auth_url: String,
    #[serde(default)]
    pub short_name: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub author_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,
}

/// Pages belonging to an account, most recently created first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageList {
    pub total_count: u32,
    #[serde(default)]
    pub pages: Vec<Page>,
}

/// A Telegraph page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub path: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub author_url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<ContentNode>,
    #[serde(default)]
    pub views: u64,
    /// Only returned when an access token was passed.
    #[serde(default)]
    pub can_edit: bool,
}

/// View count for a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageViews {
    pub views: u64,
}

/// Response envelope shared by every API method except upload.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    pub result: Option<T>,
}

/// One entry of a successful upload response.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadedFile {
    pub src: String,
}

/// Upload responses are either a list of files or an error object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum UploadResponse {
    Files(Vec<UploadedFile>),
    Error { error: String },
}
