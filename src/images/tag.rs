// Image tag scanning in raw HTML
//
// Only a constrained subset is recognized: the first `<img>` tag with a
// quoted `src`, plus optional quoted `alt`, `width` and `height`
// attributes in any order. A caption is the first `<strong>` text of a
// block that also closes a `<center>` element.

use once_cell::sync::Lazy;
use regex::Regex;

static IMG_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<img\b[^>]*>").expect("Failed to build image tag pattern"));

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?is)\b([a-z][a-z0-9_-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("Failed to build attribute pattern")
});

static CAPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<strong>([^<]*)</strong>").expect("Failed to build caption pattern")
});

/// Attributes of an image reference found in raw markup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageTag<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl<'a> ImageTag<'a> {
    /// Find the first `<img>` tag with a `src` attribute
    pub fn find(html: &'a str) -> Option<Self> {
        let tag = IMG_TAG.find(html)?.as_str();

        let mut src = None;
        let mut alt = "";
        let mut width = None;
        let mut height = None;
        for caps in ATTRIBUTE.captures_iter(tag) {
            let Some(value) = caps.get(2).or_else(|| caps.get(3)) else {
                continue;
            };
            let value = value.as_str();
            match caps[1].to_ascii_lowercase().as_str() {
                "src" => src = src.or(Some(value.trim())),
                "alt" => alt = value,
                "width" => width = parse_dimension(value),
                "height" => height = parse_dimension(value),
                _ => {},
            }
        }

        Some(Self {
            src: src.filter(|s| !s.is_empty())?,
            alt,
            width,
            height,
        })
    }
}

/// Caption text of a centered figure block
pub fn find_caption(html: &str) -> Option<&str> {
    if !html.contains("</center>") || !html.contains("<strong>") {
        return None;
    }
    CAPTION
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Pixel dimension from an attribute value (`"320"`, `"320px"`)
fn parse_dimension(value: &str) -> Option<u32> {
    let value = value.trim();
    let digits = value.strip_suffix("px").unwrap_or(value).trim();
    digits.parse().ok().filter(|&px| px > 0)
}
