//! Document assembly: paragraphs in, document out.
//!
//! `DocumentAssembler` is the boundary between the conversion core and
//! whatever produces the final file. The built-in `WordprocessingAssembler`
//! renders the WordprocessingML parts of a `.docx` package; zipping them is
//! left to the caller.
use super::paragraph::{ImageRun, Inline, ParagraphNode, ParagraphStyle, RunFlags, TextRun};
use super::style::DocumentStyleConfig;
use crate::common::error::Result;
use crate::formula::omml::OmmlWriter;
use quick_xml::escape::escape;
use std::fmt::Write as FmtWrite;

/// Consumes a finished paragraph sequence.
pub trait DocumentAssembler {
    type Output;

    /// Build the output document from paragraphs in reading order.
    fn assemble(
        &mut self,
        paragraphs: &[ParagraphNode<'_>],
        styles: &DocumentStyleConfig,
    ) -> Result<Self::Output>;
}

/// A binary part referenced from the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaPart {
    /// Relationship identifier used by `r:embed`
    pub rel_id: String,
    /// Part path relative to the `word/` directory
    pub path: String,
    pub data: Vec<u8>,
}

/// WordprocessingML parts of an assembled document.
#[derive(Debug, Clone, Default)]
pub struct DocumentParts {
    /// `word/document.xml`
    pub document_xml: String,
    /// `word/styles.xml`
    pub styles_xml: String,
    /// `word/_rels/document.xml.rels`
    pub relationships_xml: String,
    /// `word/media/*`
    pub media: Vec<MediaPart>,
}

/// Renders paragraphs as WordprocessingML.
#[derive(Debug, Default)]
pub struct WordprocessingAssembler {
    media: Vec<MediaPart>,
}

impl WordprocessingAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    fn write_paragraph(&mut self, xml: &mut String, paragraph: &ParagraphNode<'_>) -> Result<()> {
        xml.push_str("<w:p>");

        let style = paragraph.style();
        if style != ParagraphStyle::Normal || paragraph.alignment().is_some() {
            xml.push_str("<w:pPr>");
            if style != ParagraphStyle::Normal {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", style.style_id())?;
            }
            if let Some(alignment) = paragraph.alignment() {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }
            xml.push_str("</w:pPr>");
        }

        for inline in paragraph.children() {
            match inline {
                Inline::Text(run) => write_text_run(xml, run)?,
                Inline::Math { formula, flags } => {
                    let mut run_properties = String::new();
                    if !flags.is_empty() {
                        run_properties.push_str("<w:rPr>");
                        write_flags(&mut run_properties, *flags);
                        run_properties.push_str("</w:rPr>");
                    }
                    OmmlWriter::new(xml)
                        .with_run_properties(&run_properties)
                        .write_formula(formula)?;
                },
                Inline::Image(image) => self.write_image(xml, image)?,
            }
        }

        xml.push_str("</w:p>");
        Ok(())
    }

    fn write_image(&mut self, xml: &mut String, image: &ImageRun) -> Result<()> {
        let index = self.media.len() + 1;
        let rel_id = format!("rIdImage{}", index);
        let name = escape(image.name.as_str());
        let descr = escape(image.alt.as_str());
        let (width, height) = (image.width_emu(), image.height_emu());

        write!(
            xml,
            r#"<w:r><w:drawing><wp:inline distT="0" distB="0" distL="0" distR="0"><wp:extent cx="{width}" cy="{height}"/><wp:effectExtent l="0" t="0" r="0" b="0"/><wp:docPr id="{index}" name="{name}" descr="{descr}"/><wp:cNvGraphicFramePr><a:graphicFrameLocks noChangeAspect="1"/></wp:cNvGraphicFramePr><a:graphic><a:graphicData uri="http://schemas.openxmlformats.org/drawingml/2006/picture"><pic:pic><pic:nvPicPr><pic:cNvPr id="{index}" name="{name}" descr="{descr}"/><pic:cNvPicPr/></pic:nvPicPr><pic:blipFill><a:blip r:embed="{rel_id}"/><a:stretch><a:fillRect/></a:stretch></pic:blipFill><pic:spPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="{width}" cy="{height}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></pic:spPr></pic:pic></a:graphicData></a:graphic></wp:inline></w:drawing></w:r>"#
        )?;

        self.media.push(MediaPart {
            rel_id,
            path: format!("media/image{}.{}", index, image.format),
            data: image.data.clone(),
        });
        Ok(())
    }

    fn relationships_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(256 + 128 * self.media.len());
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(
            r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );
        xml.push_str(r#"<Relationship Id="rIdStyles" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#);
        for part in &self.media {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="{}"/>"#,
                part.rel_id, part.path
            )?;
        }
        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

impl DocumentAssembler for WordprocessingAssembler {
    type Output = DocumentParts;

    fn assemble(
        &mut self,
        paragraphs: &[ParagraphNode<'_>],
        styles: &DocumentStyleConfig,
    ) -> Result<DocumentParts> {
        self.media.clear();

        let mut xml = String::with_capacity(1024 + 256 * paragraphs.len());
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(concat!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" "#,
            r#"xmlns:m="http://schemas.openxmlformats.org/officeDocument/2006/math" "#,
            r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
            r#"xmlns:wp="http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing" "#,
            r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
            r#"xmlns:pic="http://schemas.openxmlformats.org/drawingml/2006/picture">"#,
        ));
        xml.push_str("<w:body>");
        for paragraph in paragraphs {
            self.write_paragraph(&mut xml, paragraph)?;
        }
        xml.push_str("<w:sectPr/></w:body></w:document>");

        tracing::debug!(
            paragraphs = paragraphs.len(),
            media = self.media.len(),
            "assembled document"
        );

        Ok(DocumentParts {
            document_xml: xml,
            styles_xml: styles.to_styles_xml()?,
            relationships_xml: self.relationships_xml()?,
            media: std::mem::take(&mut self.media),
        })
    }
}

fn write_flags(xml: &mut String, flags: RunFlags) {
    if flags.contains(RunFlags::BOLD) {
        xml.push_str("<w:b/>");
    }
    if flags.contains(RunFlags::ITALIC) {
        xml.push_str("<w:i/>");
    }
}

fn write_text_run(xml: &mut String, run: &TextRun) -> Result<()> {
    xml.push_str("<w:r>");

    let has_properties = !run.flags().is_empty() || run.font().is_some() || run.size().is_some();
    if has_properties {
        xml.push_str("<w:rPr>");
        if let Some(font) = run.font() {
            let font = escape(font);
            write!(xml, "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\"/>", font)?;
        }
        write_flags(xml, run.flags());
        if let Some(size) = run.size() {
            write!(xml, "<w:sz w:val=\"{0}\"/><w:szCs w:val=\"{0}\"/>", size)?;
        }
        xml.push_str("</w:rPr>");
    }

    if run.has_break_before() {
        xml.push_str("<w:br/>");
    }
    for (i, line) in run.text().split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        if !line.is_empty() {
            write!(xml, "<w:t xml:space=\"preserve\">{}</w:t>", escape(line))?;
        }
    }

    xml.push_str("</w:r>");
    Ok(())
}
