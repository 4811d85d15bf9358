// ABOUTME: Main library entry point for the Telegraph publishing API client.
// ABOUTME: Re-exports the public API: Client, ClientBuilder, content conversion, types and errors.

//! Telegraph - a client for the telegra.ph publishing API.
//!
//! This crate converts HTML into the content node format Telegraph pages are
//! made of, and wraps the API methods for accounts, pages, view statistics and
//! media upload.
//!
//! # Example
//!
//! ```no_run
//! use telegraph_client::{content_format, Client, Error, PageParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Error> {
//!     let client = Client::with_token("<TOKEN>");
//!     let content = content_format("<p>Hello, World!</p>", &[])?;
//!     let page = client
//!         .create_page("Test page", &content, Some(&PageParams::default()), &[])
//!         .await?;
//!     println!("{}", page.url);
//!     Ok(())
//! }
//! ```

pub mod account;
pub mod client;
pub mod content;
pub mod error;
pub mod options;
pub mod page;
pub mod request;
pub mod types;

pub use crate::account::{AccountField, CreateAccountParams, EditAccountInfoParams};
pub use crate::client::Client;
pub use crate::content::{
    content_format, content_format_any, ContentSource, DomNode, ExcludeTags, Filter,
};
pub use crate::error::{Error, Result};
pub use crate::options::{ClientBuilder, Options, DEFAULT_API_URL, DEFAULT_UPLOAD_URL};
pub use crate::page::{PageListParams, PageParams, ViewsParams};
pub use crate::request::{with_header, Request, RequestOption};
pub use crate::types::{
    Account, ContentNode, NodeElement, Page, PageList, PageViews, ALLOWED_ATTRS, ALLOWED_TAGS,
};
