// ABOUTME: Input sources accepted by the content converter: text, bytes or a readable stream.
// ABOUTME: Every variant is read through the same Read path into UTF-8 markup.

use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::io::{self, Read};

use crate::error::{Error, Result};

/// Markup handed to [`content_format`](crate::content::content_format).
pub enum ContentSource<'a> {
    Text(Cow<'a, str>),
    Bytes(Cow<'a, [u8]>),
    Reader(Box<dyn Read + 'a>),
}

impl<'a> ContentSource<'a> {
    /// Wrap any reader as a content source.
    pub fn from_reader(reader: impl Read + 'a) -> Self {
        ContentSource::Reader(Box::new(reader))
    }

    /// Read the whole source as UTF-8 markup.
    ///
    /// Read failures and invalid UTF-8 surface as [`Error::Parse`].
    pub(crate) fn into_markup(self) -> Result<String> {
        let mut reader: Box<dyn Read + 'a> = match self {
            ContentSource::Text(Cow::Owned(text)) => return Ok(text),
            ContentSource::Text(Cow::Borrowed(text)) => Box::new(text.as_bytes()),
            ContentSource::Bytes(Cow::Owned(bytes)) => Box::new(io::Cursor::new(bytes)),
            ContentSource::Bytes(Cow::Borrowed(bytes)) => Box::new(bytes),
            ContentSource::Reader(reader) => reader,
        };

        let mut markup = String::new();
        reader.read_to_string(&mut markup).map_err(Error::Parse)?;
        Ok(markup)
    }
}

impl ContentSource<'static> {
    /// Dispatch a dynamically typed value to a source variant.
    ///
    /// Accepts `String`, `&'static str`, `Vec<u8>`, `&'static [u8]` and
    /// `Box<dyn Read>`. Anything else is [`Error::InvalidInputType`].
    pub fn try_from_any(data: Box<dyn Any>) -> Result<Self> {
        let data = match data.downcast::<String>() {
            Ok(text) => return Ok(ContentSource::Text(Cow::Owned(*text))),
            Err(data) => data,
        };
        let data = match data.downcast::<&'static str>() {
            Ok(text) => return Ok(ContentSource::Text(Cow::Borrowed(*text))),
            Err(data) => data,
        };
        let data = match data.downcast::<Vec<u8>>() {
            Ok(bytes) => return Ok(ContentSource::Bytes(Cow::Owned(*bytes))),
            Err(data) => data,
        };
        let data = match data.downcast::<&'static [u8]>() {
            Ok(bytes) => return Ok(ContentSource::Bytes(Cow::Borrowed(*bytes))),
            Err(data) => data,
        };
        match data.downcast::<Box<dyn Read>>() {
            Ok(reader) => Ok(ContentSource::Reader(*reader)),
            Err(_) => Err(Error::InvalidInputType),
        }
    }
}

impl fmt::Debug for ContentSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSource::Text(text) => f.debug_tuple("Text").field(text).finish(),
            ContentSource::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            ContentSource::Reader(_) => f.write_str("Reader(..)"),
        }
    }
}

impl<'a> From<&'a str> for ContentSource<'a> {
    fn from(text: &'a str) -> Self {
        ContentSource::Text(Cow::Borrowed(text))
    }
}

impl From<String> for ContentSource<'static> {
    fn from(text: String) -> Self {
        ContentSource::Text(Cow::Owned(text))
    }
}

impl<'a> From<&'a String> for ContentSource<'a> {
    fn from(text: &'a String) -> Self {
        ContentSource::Text(Cow::Borrowed(text.as_str()))
    }
}

impl<'a> From<&'a [u8]> for ContentSource<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        ContentSource::Bytes(Cow::Borrowed(bytes))
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for ContentSource<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        ContentSource::Bytes(Cow::Borrowed(bytes.as_slice()))
    }
}

impl From<Vec<u8>> for ContentSource<'static> {
    fn from(bytes: Vec<u8>) -> Self {
        ContentSource::Bytes(Cow::Owned(bytes))
    }
}

impl<'a> From<Box<dyn Read + 'a>> for ContentSource<'a> {
    fn from(reader: Box<dyn Read + 'a>) -> Self {
        ContentSource::Reader(reader)
    }
}
