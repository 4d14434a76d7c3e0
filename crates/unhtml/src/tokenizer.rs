//! HTML tokenization using html5gum
//!
//! Adapts html5gum's pull tokenizer to the [`TokenSource`] trait. html5gum
//! lowercases tag and attribute names, decodes character references and, with
//! state switching enabled, reads `script`/`style`/`title` bodies as raw text
//! instead of markup.
//!
//! html5gum works on bytes. Names, attribute values and text that are not
//! valid UTF-8 are converted lossily, so bad bytes become U+FFFD instead of a
//! fault.

use std::convert::Infallible;
use std::io::Read;

use html5gum::{DefaultEmitter, HtmlString, IoReader, Tokenizer};

use crate::token::{Tag, Token, TokenSource};

/// A [`TokenSource`] backed by an html5gum token iterator
pub struct HtmlTokenizer<I> {
    tokens: I,
}

impl<I> HtmlTokenizer<I> {
    /// Wrap an html5gum tokenizer (or any iterator of its tokens)
    pub fn new(tokens: I) -> Self {
        Self { tokens }
    }
}

/// Tokenize an in-memory HTML string
pub fn tokenize_str(
    html: &str,
) -> HtmlTokenizer<impl Iterator<Item = Result<html5gum::Token, Infallible>> + '_> {
    HtmlTokenizer::new(Tokenizer::new_with_emitter(html, emitter()))
}

/// Tokenize HTML read from `reader`.
///
/// Read failures surface as faults from [`TokenSource::next_token`]. Invalid
/// UTF-8 does not: each bad sequence is replaced with U+FFFD.
pub fn tokenize_reader<R: Read>(
    reader: R,
) -> HtmlTokenizer<impl Iterator<Item = Result<html5gum::Token, std::io::Error>>> {
    HtmlTokenizer::new(Tokenizer::new_with_emitter(IoReader::new(reader), emitter()))
}

fn emitter() -> DefaultEmitter {
    let mut emitter = DefaultEmitter::default();
    emitter.switch_states(true);
    emitter
}

impl<I, E> TokenSource for HtmlTokenizer<I>
where
    I: Iterator<Item = Result<html5gum::Token, E>>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn next_token(&mut self) -> Result<Option<Token>, E> {
        loop {
            let raw = match self.tokens.next() {
                Some(raw) => raw?,
                None => return Ok(None),
            };

            let token = match raw {
                html5gum::Token::StartTag(tag) => {
                    let mut converted = Tag::new(&lossy(&tag.name));
                    for (key, value) in &tag.attributes {
                        converted.push_attr(lossy(key), lossy(value));
                    }
                    if tag.self_closing {
                        Token::SelfClosingTag(converted)
                    } else {
                        Token::StartTag(converted)
                    }
                }
                html5gum::Token::EndTag(tag) => Token::EndTag(Tag::new(&lossy(&tag.name))),
                html5gum::Token::String(text) => Token::Text(lossy(&text)),
                html5gum::Token::Comment(text) => Token::Comment(lossy(&text)),
                html5gum::Token::Doctype(_) => Token::Doctype,
                // The tokenizer has already recovered from these
                html5gum::Token::Error(err) => {
                    log::trace!("recovered html parse error: {:?}", err);
                    continue;
                }
            };

            return Ok(Some(token));
        }
    }
}

fn lossy(s: &HtmlString) -> String {
    String::from_utf8_lossy(s).into_owned()
}
