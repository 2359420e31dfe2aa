//! Paragraph nodes produced by the document walker.
use crate::formula::Formula;
use bitflags::bitflags;
use serde::Deserialize;

bitflags! {
    /// Character formatting applied to a run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RunFlags: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// WordprocessingML `w:jc` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "both",
        }
    }
}

/// Named paragraph style a paragraph is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Heading1,
    Heading2,
    Heading3,
    /// Fallback for headings deeper than level 3
    MinorHeading,
}

impl ParagraphStyle {
    /// Map a heading depth to its style.
    pub fn for_heading(depth: u8) -> Self {
        match depth {
            0 | 1 => Self::Heading1,
            2 => Self::Heading2,
            3 => Self::Heading3,
            _ => Self::MinorHeading,
        }
    }

    /// Style identifier referenced from `w:pStyle`.
    pub fn style_id(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Heading1 => "Heading1",
            Self::Heading2 => "Heading2",
            Self::Heading3 => "Heading3",
            Self::MinorHeading => "Heading5",
        }
    }

    /// UI-visible style name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Heading1 => "Heading 1",
            Self::Heading2 => "Heading 2",
            Self::Heading3 => "Heading 3",
            Self::MinorHeading => "Heading 5",
        }
    }

    /// Heading level 1-3, `None` for body text and the minor fallback.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Self::Heading1 => Some(1),
            Self::Heading2 => Some(2),
            Self::Heading3 => Some(3),
            Self::Normal | Self::MinorHeading => None,
        }
    }
}

/// A styled run of plain text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextRun {
    text: String,
    flags: RunFlags,
    /// Font family override
    font: Option<String>,
    /// Font size override in half-points
    size: Option<u32>,
    /// Line break emitted before the text
    break_before: bool,
}

impl TextRun {
    /// Create a run with the given formatting flags.
    pub fn new(text: impl Into<String>, flags: RunFlags) -> Self {
        Self {
            text: text.into(),
            flags,
            ..Default::default()
        }
    }

    /// Create an unformatted run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, RunFlags::empty())
    }

    /// Override the font family and size (half-points).
    pub fn with_font(mut self, font: impl Into<String>, size: u32) -> Self {
        self.font = Some(font.into());
        self.size = Some(size);
        self
    }

    /// Start the run on a new line.
    pub fn with_break_before(mut self) -> Self {
        self.break_before = true;
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn flags(&self) -> RunFlags {
        self.flags
    }

    #[inline]
    pub fn is_bold(&self) -> bool {
        self.flags.contains(RunFlags::BOLD)
    }

    #[inline]
    pub fn is_italic(&self) -> bool {
        self.flags.contains(RunFlags::ITALIC)
    }

    #[inline]
    pub fn font(&self) -> Option<&str> {
        self.font.as_deref()
    }

    #[inline]
    pub fn size(&self) -> Option<u32> {
        self.size
    }

    #[inline]
    pub fn has_break_before(&self) -> bool {
        self.break_before
    }
}

/// An embedded picture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRun {
    /// Image binary data
    pub data: Vec<u8>,
    /// Format name derived from the source extension (`png`, `jpeg`, ...)
    pub format: String,
    /// Display name, the file stem of the source
    pub name: String,
    /// Alternative text
    pub alt: String,
    /// Display width in pixels
    pub width: u32,
    /// Display height in pixels
    pub height: u32,
}

impl ImageRun {
    /// Width in EMUs (English Metric Units), assuming 96 DPI.
    pub fn width_emu(&self) -> i64 {
        px_to_emu(self.width)
    }

    /// Height in EMUs, assuming 96 DPI.
    pub fn height_emu(&self) -> i64 {
        px_to_emu(self.height)
    }
}

/// Convert pixels to EMUs (assuming 96 DPI).
pub fn px_to_emu(px: u32) -> i64 {
    ((px as f64) * 914400.0 / 96.0) as i64
}

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    Text(TextRun),
    /// Math span; formatting flags apply to the whole formula run
    Math {
        formula: Formula<'a>,
        flags: RunFlags,
    },
    Image(ImageRun),
}

impl Inline<'_> {
    /// Plain text of the inline, images contribute nothing
    pub fn text(&self) -> String {
        match self {
            Inline::Text(run) => run.text().to_string(),
            Inline::Math { formula, .. } => formula.plain_text(),
            Inline::Image(_) => String::new(),
        }
    }
}

/// A block-level unit of the output document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphNode<'a> {
    children: Vec<Inline<'a>>,
    style: ParagraphStyle,
    alignment: Option<Alignment>,
}

impl<'a> ParagraphNode<'a> {
    /// Create an empty paragraph with the given style.
    pub fn new(style: ParagraphStyle) -> Self {
        Self {
            children: Vec::new(),
            style,
            alignment: None,
        }
    }

    /// Create a body paragraph holding a single text run.
    pub fn from_text(run: TextRun) -> Self {
        let mut paragraph = Self::new(ParagraphStyle::Normal);
        paragraph.push(Inline::Text(run));
        paragraph
    }

    /// Set an explicit alignment, overriding the style's.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Append an inline child.
    pub fn push(&mut self, inline: Inline<'a>) {
        self.children.push(inline);
    }

    #[inline]
    pub fn children(&self) -> &[Inline<'a>] {
        &self.children
    }

    #[inline]
    pub fn style(&self) -> ParagraphStyle {
        self.style
    }

    #[inline]
    pub fn alignment(&self) -> Option<Alignment> {
        self.alignment
    }

    #[inline]
    pub fn heading_level(&self) -> Option<u8> {
        self.style.heading_level()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Concatenated plain text of all inline children.
    pub fn text(&self) -> String {
        self.children.iter().map(Inline::text).collect()
    }

    /// Detach the paragraph from the source its formulas borrow from.
    pub fn into_owned(self) -> ParagraphNode<'static> {
        ParagraphNode {
            children: self
                .children
                .into_iter()
                .map(|inline| match inline {
                    Inline::Text(run) => Inline::Text(run),
                    Inline::Math { formula, flags } => Inline::Math {
                        formula: formula.into_owned(),
                        flags,
                    },
                    Inline::Image(image) => Inline::Image(image),
                })
                .collect(),
            style: self.style,
            alignment: self.alignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::parse_formula;

    #[test]
    fn test_heading_depth_mapping() {
        assert_eq!(ParagraphStyle::for_heading(1), ParagraphStyle::Heading1);
        assert_eq!(ParagraphStyle::for_heading(3), ParagraphStyle::Heading3);
        assert_eq!(ParagraphStyle::for_heading(4), ParagraphStyle::MinorHeading);
        assert_eq!(ParagraphStyle::for_heading(6).style_id(), "Heading5");
        assert_eq!(ParagraphStyle::Heading2.heading_level(), Some(2));
        assert_eq!(ParagraphStyle::Normal.heading_level(), None);
    }

    #[test]
    fn test_alignment_values() {
        assert_eq!(Alignment::Justify.as_str(), "both");
        assert_eq!(Alignment::Center.as_str(), "center");
    }

    #[test]
    fn test_text_run_flags() {
        let run = TextRun::new("x", RunFlags::BOLD | RunFlags::ITALIC);
        assert!(run.is_bold());
        assert!(run.is_italic());
        assert!(!TextRun::plain("x").is_bold());

        let run = TextRun::plain("path").with_font("Courier New", 20).with_break_before();
        assert_eq!(run.font(), Some("Courier New"));
        assert_eq!(run.size(), Some(20));
        assert!(run.has_break_before());
    }

    #[test]
    fn test_paragraph_text() {
        let mut paragraph = ParagraphNode::new(ParagraphStyle::Normal);
        paragraph.push(Inline::Text(TextRun::plain("sum: ")));
        paragraph.push(Inline::Math {
            formula: parse_formula("a+b", false),
            flags: RunFlags::empty(),
        });
        assert_eq!(paragraph.text(), "sum: a+b");
        assert_eq!(paragraph.children().len(), 2);
        assert_eq!(paragraph.alignment(), None);
    }

    #[test]
    fn test_emu_conversion() {
        assert_eq!(px_to_emu(96), 914400);
    }
}
