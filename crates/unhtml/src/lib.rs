//! # unhtml
//!
//! Remove HTML tags from text and do minor formatting updates.
//!
//! The converter is meant for small snippets (emails, feed entries, form
//! fields) where the input may or may not contain HTML at all. Plain text
//! passes through unchanged apart from trimming, so it is safe to run on data
//! without checking for tags first.
//!
//! ## Design
//!
//! Conversion is a single pass over a token stream:
//!
//! ```text
//! bytes ──▶ TokenSource ──tokens──▶ Converter ──text──▶ io::Write
//! ```
//!
//! - **Tokenizer agnostic**: the converter consumes anything implementing
//!   [`TokenSource`]; [`HtmlTokenizer`] adapts the `html5gum` tokenizer.
//! - **Streaming**: text is written as soon as each token is handled, nothing
//!   is buffered besides a pending link target.
//! - **Forgiving**: block tags become line breaks, list items become `* `,
//!   rules become `---`, links and images keep their URL in parentheses.
//!
//! ## Example
//!
//! ```rust
//! let text = unhtml::html_to_text_string("<p>Hello <b>World</b></p>").unwrap();
//! assert_eq!(text, "Hello World");
//! ```

mod convert;
pub mod token;
mod tokenizer;
pub mod vocabulary;

pub use convert::{convert, html_to_text, html_to_text_string, Converter};
pub use token::{Tag, Token, TokenSource};
pub use tokenizer::{tokenize_reader, tokenize_str, HtmlTokenizer};
pub use vocabulary::TagClass;

/// Error type for unhtml operations
#[derive(Debug, thiserror::Error)]
pub enum UnhtmlError {
    #[error("Tokenization error: {0}")]
    Tokenization(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UnhtmlError>;
