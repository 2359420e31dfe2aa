//! Paragraph style definitions for generated documents.
//!
//! A `DocumentStyleConfig` is built once per conversion and read-only
//! afterwards. It can be deserialized from configuration, with every field
//! falling back to the built-in defaults.
use super::paragraph::{Alignment, ParagraphStyle};
use serde::Deserialize;

/// Formatting of one named paragraph style.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParagraphStyleDef {
    /// Font family for Latin text
    pub font: String,
    /// Font family for East Asian text
    pub east_asia_font: String,
    /// Font size in half-points (e.g., 24 = 12pt)
    pub size: u32,
    pub bold: bool,
    pub alignment: Option<Alignment>,
    /// Space before paragraph in twips
    pub space_before: Option<u32>,
    /// Space after paragraph in twips
    pub space_after: Option<u32>,
    /// Line spacing in 240ths of a line (360 = 1.5 lines)
    pub line_spacing: Option<u32>,
}

impl Default for ParagraphStyleDef {
    fn default() -> Self {
        Self::normal()
    }
}

impl ParagraphStyleDef {
    /// Body text: 12pt, justified, 1.5 line spacing.
    pub fn normal() -> Self {
        Self {
            font: "Cambria Math".to_string(),
            east_asia_font: "SimSun".to_string(),
            size: 24,
            bold: false,
            alignment: Some(Alignment::Justify),
            space_before: None,
            space_after: None,
            line_spacing: Some(360),
        }
    }

    /// Bold heading style of the given size.
    pub fn heading(size: u32) -> Self {
        Self {
            font: "SimHei".to_string(),
            east_asia_font: "SimHei".to_string(),
            size,
            bold: true,
            alignment: None,
            space_before: Some(240),
            space_after: Some(240),
            line_spacing: Some(360),
        }
    }
}

/// The fixed set of paragraph styles used by a document.
///
/// A style given in configuration replaces the built-in one as a whole; its
/// absent fields take the body-text values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentStyleConfig {
    pub normal: ParagraphStyleDef,
    pub heading1: ParagraphStyleDef,
    pub heading2: ParagraphStyleDef,
    pub heading3: ParagraphStyleDef,
    /// Headings deeper than level 3
    pub minor_heading: ParagraphStyleDef,
}

impl Default for DocumentStyleConfig {
    fn default() -> Self {
        Self {
            normal: ParagraphStyleDef::normal(),
            heading1: ParagraphStyleDef {
                alignment: Some(Alignment::Center),
                ..ParagraphStyleDef::heading(40) // 20pt
            },
            heading2: ParagraphStyleDef::heading(32),     // 16pt
            heading3: ParagraphStyleDef::heading(24),     // 12pt
            minor_heading: ParagraphStyleDef::heading(18), // 9pt
        }
    }
}

impl DocumentStyleConfig {
    /// Definition backing a paragraph style.
    pub fn get(&self, style: ParagraphStyle) -> &ParagraphStyleDef {
        match style {
            ParagraphStyle::Normal => &self.normal,
            ParagraphStyle::Heading1 => &self.heading1,
            ParagraphStyle::Heading2 => &self.heading2,
            ParagraphStyle::Heading3 => &self.heading3,
            ParagraphStyle::MinorHeading => &self.minor_heading,
        }
    }

    /// All styles paired with their definitions, `Normal` first.
    pub fn iter(&self) -> impl Iterator<Item = (ParagraphStyle, &ParagraphStyleDef)> {
        [
            ParagraphStyle::Normal,
            ParagraphStyle::Heading1,
            ParagraphStyle::Heading2,
            ParagraphStyle::Heading3,
            ParagraphStyle::MinorHeading,
        ]
        .into_iter()
        .map(move |style| (style, self.get(style)))
    }
}

#[cfg(feature = "omml")]
mod xml {
    use super::*;
    use crate::common::error::Result;
    use quick_xml::escape::escape;
    use std::fmt::Write as FmtWrite;

    impl ParagraphStyleDef {
        /// Serialize as a `w:style` element.
        pub fn to_xml(&self, xml: &mut String, style: ParagraphStyle) -> Result<()> {
            write!(
                xml,
                r#"<w:style w:type="paragraph" w:styleId="{}""#,
                style.style_id()
            )?;
            if style == ParagraphStyle::Normal {
                xml.push_str(r#" w:default="1""#);
            }
            write!(xml, r#"><w:name w:val="{}"/>"#, style.name())?;
            if style != ParagraphStyle::Normal {
                xml.push_str(r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/>"#);
            }
            xml.push_str("<w:qFormat/>");

            let has_spacing = self.space_before.is_some()
                || self.space_after.is_some()
                || self.line_spacing.is_some();
            if self.alignment.is_some() || has_spacing {
                xml.push_str("<w:pPr>");
                if has_spacing {
                    xml.push_str("<w:spacing");
                    if let Some(before) = self.space_before {
                        write!(xml, r#" w:before="{}""#, before)?;
                    }
                    if let Some(after) = self.space_after {
                        write!(xml, r#" w:after="{}""#, after)?;
                    }
                    if let Some(line) = self.line_spacing {
                        write!(xml, r#" w:line="{}" w:lineRule="auto""#, line)?;
                    }
                    xml.push_str("/>");
                }
                if let Some(alignment) = self.alignment {
                    write!(xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
                }
                xml.push_str("</w:pPr>");
            }

            xml.push_str("<w:rPr>");
            write!(
                xml,
                r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:eastAsia="{1}"/>"#,
                escape(self.font.as_str()),
                escape(self.east_asia_font.as_str())
            )?;
            if self.bold {
                xml.push_str("<w:b/>");
            }
            write!(
                xml,
                r#"<w:sz w:val="{0}"/><w:szCs w:val="{0}"/>"#,
                self.size
            )?;
            xml.push_str("</w:rPr></w:style>");
            Ok(())
        }
    }

    impl DocumentStyleConfig {
        /// Generate a complete styles.xml document.
        pub fn to_styles_xml(&self) -> Result<String> {
            let mut xml = String::with_capacity(4096);
            xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
            xml.push_str(
                r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            );
            for (style, def) in self.iter() {
                def.to_xml(&mut xml, style)?;
            }
            xml.push_str("</w:styles>");
            Ok(xml)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let styles = DocumentStyleConfig::default();
        assert_eq!(styles.normal.size, 24);
        assert_eq!(styles.normal.alignment, Some(Alignment::Justify));
        assert_eq!(styles.heading1.size, 40);
        assert_eq!(styles.heading1.alignment, Some(Alignment::Center));
        assert!(styles.heading2.bold);
        assert_eq!(styles.get(ParagraphStyle::MinorHeading).size, 18);
        assert_eq!(styles.iter().count(), 5);
    }

    #[cfg(feature = "omml")]
    #[test]
    fn test_styles_xml() {
        let xml = DocumentStyleConfig::default().to_styles_xml().unwrap();
        assert!(xml.starts_with("<?xml version"));
        assert!(xml.contains(r#"w:styleId="Normal" w:default="1""#));
        assert!(xml.contains(r#"<w:jc w:val="both"/>"#));
        assert!(xml.contains(r#"w:styleId="Heading1""#));
        assert!(xml.contains(r#"w:styleId="Heading5""#));
        assert!(xml.contains(r#"<w:sz w:val="40"/>"#));
        assert!(xml.contains(r#"w:eastAsia="SimSun""#));
        assert!(xml.ends_with("</w:styles>"));
    }

    #[cfg(feature = "omml")]
    #[test]
    fn test_font_names_are_escaped() {
        let mut def = ParagraphStyleDef::normal();
        def.font = "A&B".to_string();
        let mut xml = String::new();
        def.to_xml(&mut xml, ParagraphStyle::Normal).unwrap();
        assert!(xml.contains("A&amp;B"));
    }
}
