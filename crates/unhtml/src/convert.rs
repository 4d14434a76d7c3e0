//! Token stream to plain text conversion
//!
//! A single pass over the tokens with a handful of state: how many line
//! breaks were just written, whether we are inside a skipped element, and the
//! target of the last anchor that has not been printed yet.

use std::io::{Read, Write};

use crate::token::{Tag, Token, TokenSource};
use crate::tokenizer::{tokenize_reader, tokenize_str};
use crate::vocabulary::{self, TagClass};
use crate::{Result, UnhtmlError};

/// Two consecutive breaks make a blank line; never print more than that
const MAX_BREAKS: u8 = 2;

/// Convert the HTML in `input` to text in `out`.
///
/// Text is written as it is produced, so on error `out` may already hold a
/// partial rendering.
pub fn html_to_text<R: Read, W: Write>(input: R, out: W) -> Result<()> {
    convert(tokenize_reader(input), out).map(drop)
}

/// Convert a string of HTML into a string of plain text
pub fn html_to_text_string(html: &str) -> Result<String> {
    let buf = convert(tokenize_str(html), Vec::new())?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Drive a conversion from any [`TokenSource`], returning the sink when the
/// stream ends.
pub fn convert<S: TokenSource, W: Write>(mut source: S, out: W) -> Result<W> {
    let mut converter = Converter::new(out);
    let mut count = 0usize;

    loop {
        let token = match source.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(err) => {
                log::debug!("token source failed after {} tokens: {}", count, err);
                return Err(UnhtmlError::Tokenization(Box::new(err)));
            }
        };
        count += 1;
        log::trace!("token {}: {}", count, token.kind());
        converter.feed(token)?;
    }

    log::debug!("converted {} tokens", count);
    converter.finish()
}

/// Streaming HTML to text state machine.
///
/// Tokens are pushed with [`Converter::feed`]; [`Converter::finish`] flushes a
/// link target that is still pending and hands back the sink.
pub struct Converter<W> {
    out: W,
    /// Consecutive line breaks already written, capped at `MAX_BREAKS`
    breaks: u8,
    /// `href` of the last anchor, printed after the next text
    pending_link: Option<String>,
    /// Inside script, style, title and the like
    suppressed: bool,
    /// Inside head: no text, no links, no images
    in_head: bool,
}

impl<W: Write> Converter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            // Behave as if a blank line was just written so the document
            // does not start with empty lines
            breaks: MAX_BREAKS,
            pending_link: None,
            suppressed: false,
            in_head: false,
        }
    }

    /// Process one token
    pub fn feed(&mut self, token: Token) -> Result<()> {
        match token {
            Token::StartTag(tag) => self.start_tag(&tag),
            Token::EndTag(tag) => self.end_tag(&tag),
            Token::SelfClosingTag(tag) => self.self_closing_tag(&tag),
            Token::Text(text) => self.text(&text),
            Token::Comment(text) => {
                log::trace!("skipping comment of {} bytes", text.len());
                Ok(())
            }
            Token::Doctype => Ok(()),
        }
    }

    /// End the conversion and return the sink
    pub fn finish(mut self) -> Result<W> {
        // An anchor with no text after it still gets its target printed
        if let Some(url) = self.pending_link.take() {
            write!(self.out, " ({})", url)?;
        }
        Ok(self.out)
    }

    fn start_tag(&mut self, tag: &Tag) -> Result<()> {
        let name = tag.tag_name();

        match vocabulary::classify(&name) {
            TagClass::StrictlySuppressed => {
                log::trace!("entering <{}>", name);
                self.in_head = true;
            }
            TagClass::Suppressed => {
                if !vocabulary::is_void(&name) {
                    log::trace!("suppressing content of <{}>", name);
                    self.suppressed = true;
                }
            }
            TagClass::Handled => match &*name {
                "div" | "ul" | "tr" | "ol" | "p" | "br" | "table" => self.line_break()?,
                "h1" | "h2" | "h3" | "h4" | "h5" | "h6" | "pre" | "blockquote" => {
                    self.blank_line()?
                }
                "li" => {
                    self.line_break()?;
                    self.out.write_all(b"* ")?;
                    self.breaks = MAX_BREAKS;
                }
                "hr" => {
                    if self.breaks < MAX_BREAKS {
                        self.out.write_all(b"\n")?;
                    }
                    self.out.write_all(b"---\n")?;
                    self.breaks = 1;
                }
                "td" | "th" => self.breaks = 0,
                "a" => self.anchor(tag),
                "img" => self.image(tag)?,
                _ => {}
            },
            TagClass::Ignored => {}
        }

        Ok(())
    }

    fn end_tag(&mut self, tag: &Tag) -> Result<()> {
        let name = tag.tag_name();

        match vocabulary::classify(&name) {
            TagClass::StrictlySuppressed => self.in_head = false,
            TagClass::Suppressed => self.suppressed = false,
            TagClass::Handled => match &*name {
                "ul" | "ol" | "pre" | "table" | "blockquote" | "h1" | "h2" | "h3" | "h4"
                | "h5" | "h6" => self.blank_line()?,
                "hr" => self.line_break()?,
                _ => {}
            },
            TagClass::Ignored => {}
        }

        Ok(())
    }

    fn self_closing_tag(&mut self, tag: &Tag) -> Result<()> {
        let name = tag.tag_name();

        match &*name {
            "div" | "li" | "br" | "p" => self.line_break()?,
            "hr" => {
                self.blank_line()?;
                self.out.write_all(b"---\n\n")?;
                self.breaks = MAX_BREAKS;
            }
            "a" => self.anchor(tag),
            "img" => self.image(tag)?,
            _ => {}
        }

        Ok(())
    }

    fn text(&mut self, raw: &str) -> Result<()> {
        if self.suppressed || self.in_head {
            return Ok(());
        }

        let text = raw.trim();
        if !text.is_empty() {
            if self.breaks == 0 {
                self.out.write_all(b" ")?;
            }
            self.out.write_all(text.as_bytes())?;
        }

        if !text.is_empty() || self.pending_link.is_some() {
            self.breaks = 0;
        }

        if let Some(url) = self.pending_link.take() {
            write!(self.out, " ({})", url)?;
        }

        Ok(())
    }

    fn anchor(&mut self, tag: &Tag) {
        if tag.has_attributes() && !self.in_head {
            if let Some(href) = tag.attr("href") {
                self.pending_link = (!href.is_empty()).then(|| href.to_string());
            }
        }
        self.breaks = 0;
    }

    fn image(&mut self, tag: &Tag) -> Result<()> {
        if tag.has_attributes() && !self.in_head {
            let src = tag.attr("src").unwrap_or_default();
            let alt = tag.attr("alt").unwrap_or_default();

            if !alt.is_empty() {
                let separator = if self.breaks == 0 { " " } else { "" };
                write!(self.out, "{}{}", separator, alt)?;
                if !src.is_empty() {
                    write!(self.out, " ({})", src)?;
                }
            }
        }
        self.breaks = 0;
        Ok(())
    }

    /// Single newline unless a blank line was just written
    fn line_break(&mut self) -> Result<()> {
        if self.breaks < MAX_BREAKS {
            self.out.write_all(b"\n")?;
            self.breaks += 1;
        }
        Ok(())
    }

    /// Top up to a blank line
    fn blank_line(&mut self) -> Result<()> {
        while self.breaks < MAX_BREAKS {
            self.out.write_all(b"\n")?;
            self.breaks += 1;
        }
        Ok(())
    }
}
