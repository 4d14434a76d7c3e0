//! Tag vocabulary and classification

use std::borrow::Cow;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// How the converter treats a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagClass {
    /// No layout effect; content is emitted as usual
    Ignored,
    /// Content is dropped until the matching end tag
    Suppressed,
    /// Like `Suppressed`, and links and images are not rendered either
    StrictlySuppressed,
    /// Has an explicit layout effect
    Handled,
}

impl TagClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagClass::Ignored => "ignored",
            TagClass::Suppressed => "suppressed",
            TagClass::StrictlySuppressed => "strictly-suppressed",
            TagClass::Handled => "handled",
        }
    }
}

/// Tags that pass their content through untouched
pub const IGNORED_TAGS: &[&str] = &[
    "abbr", "acronym", "address", "area", "article", "aside", "audio", "b",
    "base", "basefont", "bdi", "bdo", "big", "body", "button", "canvas",
    "caption", "center", "cite", "code", "col", "colgroup", "datalist", "dd",
    "del", "details", "dfn", "dialog", "dir", "dl", "dt", "em", "fieldset",
    "figcaption", "figure", "font", "footer", "form", "header", "html", "i",
    "input", "ins", "kbd", "keygen", "label", "legend", "main", "map", "mark",
    "menu", "menuitem", "meter", "nav", "noframes", "noscript", "optgroup",
    "option", "output", "param", "progress", "q", "rp", "rt", "ruby", "s",
    "samp", "section", "select", "small", "source", "span", "strike",
    "strong", "sub", "summary", "sup", "tbody", "textarea", "tfoot", "thead",
    "time", "track", "tt", "u", "var", "video", "wbr",
];

/// Tags whose content never reaches the output
pub const SUPPRESSED_TAGS: &[&str] = &[
    "applet", "embed", "frame", "frameset", "iframe", "link", "meta", "object",
    "script", "style", "title",
];

/// Tags that also keep links and images out of the output
pub const STRICTLY_SUPPRESSED_TAGS: &[&str] = &["head"];

/// Tags with a layout effect
pub const HANDLED_TAGS: &[&str] = &[
    "a", "blockquote", "br", "div", "h1", "h2", "h3", "h4", "h5", "h6", "hr",
    "img", "li", "ol", "p", "pre", "table", "td", "th", "tr", "ul",
];

/// Void (self-closing) HTML elements
pub const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "command", "embed", "frame", "hr", "img",
    "input", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

static VOCABULARY: Lazy<IndexMap<&'static str, TagClass>> = Lazy::new(|| {
    let classes = [
        (IGNORED_TAGS, TagClass::Ignored),
        (SUPPRESSED_TAGS, TagClass::Suppressed),
        (STRICTLY_SUPPRESSED_TAGS, TagClass::StrictlySuppressed),
        (HANDLED_TAGS, TagClass::Handled),
    ];

    let mut map = IndexMap::new();
    for (tags, class) in classes {
        for &tag in tags {
            map.insert(tag, class);
        }
    }
    map
});

/// Lowercase a tag name, borrowing when it is lowercase already
pub(crate) fn lowercase(tag: &str) -> Cow<'_, str> {
    if tag.bytes().any(|b| b.is_ascii_uppercase()) {
        Cow::Owned(tag.to_ascii_lowercase())
    } else {
        Cow::Borrowed(tag)
    }
}

/// Classify a tag name. Unknown tags are [`TagClass::Ignored`].
pub fn classify(tag: &str) -> TagClass {
    VOCABULARY
        .get(&*lowercase(tag))
        .copied()
        .unwrap_or(TagClass::Ignored)
}

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&&*lowercase(tag))
}

/// All known tags with their class, in declaration order
pub fn entries() -> impl Iterator<Item = (&'static str, TagClass)> {
    VOCABULARY.iter().map(|(tag, class)| (*tag, *class))
}
