//! Token stream types consumed by the converter.
//!
//! These types decouple the converter from any particular HTML tokenizer.
//! Anything that can produce start tags, end tags and text in document order
//! can drive a conversion by implementing [`TokenSource`].

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::vocabulary;

// Tags rarely carry more than a handful of attributes - avoid heap allocation
type Attributes = SmallVec<[(String, String); 4]>;

/// One lexical unit of a markup stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<name ...>`
    StartTag(Tag),
    /// `</name>`
    EndTag(Tag),
    /// `<name ... />`
    SelfClosingTag(Tag),
    /// A run of character data, entities already decoded
    Text(String),
    /// `<!-- ... -->`
    Comment(String),
    /// `<!DOCTYPE ...>`
    Doctype,
}

impl Token {
    /// Short name of the token kind, for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Token::StartTag(_) => "start tag",
            Token::EndTag(_) => "end tag",
            Token::SelfClosingTag(_) => "self-closing tag",
            Token::Text(_) => "text",
            Token::Comment(_) => "comment",
            Token::Doctype => "doctype",
        }
    }
}

/// A tag name together with its attributes in source order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attributes: Attributes,
}

impl Tag {
    /// Create a tag without attributes
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: SmallVec::new(),
        }
    }

    /// Create a tag with attributes
    pub fn with_attrs(name: &str, attrs: Vec<(&str, &str)>) -> Self {
        Self {
            name: name.to_string(),
            attributes: attrs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Append an attribute, keeping earlier ones with the same key
    pub fn push_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.push((key.into(), value.into()));
    }

    /// The tag name as produced by the tokenizer
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tag name (lowercase). Borrows when no case folding is needed.
    pub fn tag_name(&self) -> Cow<'_, str> {
        vocabulary::lowercase(&self.name)
    }

    pub fn has_attributes(&self) -> bool {
        !self.attributes.is_empty()
    }

    /// Iterate attribute key/value pairs in source order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Get an attribute value by name.
    ///
    /// Keys compare case-insensitively and the last occurrence wins when a
    /// key is repeated.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes()
            .filter(|(k, _)| k.eq_ignore_ascii_case(name))
            .last()
            .map(|(_, v)| v)
    }
}

/// A pull-based producer of [`Token`]s.
///
/// `Ok(None)` signals the normal end of the stream. An `Err` is a fault that
/// stops the conversion; it is handed to the caller unchanged as the source
/// of [`crate::UnhtmlError::Tokenization`].
pub trait TokenSource {
    type Error: std::error::Error + Send + Sync + 'static;

    fn next_token(&mut self) -> Result<Option<Token>, Self::Error>;
}

impl<S: TokenSource + ?Sized> TokenSource for &mut S {
    type Error = S::Error;

    fn next_token(&mut self) -> Result<Option<Token>, Self::Error> {
        (**self).next_token()
    }
}
