// Image resolution for raw-markup nodes
//
// A raw-markup node is scanned for a single `<img>` tag. Its source is
// fetched through an `ImageFetcher`, and the result becomes either an image
// paragraph (plus an optional caption paragraph) or a textual placeholder.
// A failed fetch never aborts the conversion.
//
// # Architecture
//
// - `tag`: `<img>` attribute and caption scanning
// - `format`: format and display name inference from the source reference
// - `fetch`: the fetcher trait and its filesystem, data URI and HTTP impls

mod fetch;
mod format;
mod tag;

pub use fetch::{DataUriFetcher, FileFetcher, ImageFetcher, SourceFetcher};
#[cfg(feature = "http")]
pub use fetch::HttpFetcher;
pub use format::{detect_format, extension, image_format, image_name};
pub use tag::{ImageTag, find_caption};

use crate::common::{CancelToken, Result};
use crate::document::{Alignment, ImageRun, Inline, ParagraphNode, ParagraphStyle, RunFlags, TextRun};
use crate::markdown::ConvertOptions;
use tracing::{debug, warn};

/// Convert a raw-markup value into paragraphs.
///
/// Markup without an image tag becomes a plain text paragraph of the
/// trimmed value, or nothing when the value is blank. Only cancellation is
/// reported as an error.
pub async fn resolve_html<F: ImageFetcher>(
    html: &str,
    fetcher: &F,
    options: &ConvertOptions,
    cancel: Option<&CancelToken>,
) -> Result<Vec<ParagraphNode<'static>>> {
    let Some(tag) = ImageTag::find(html) else {
        let text = html.trim();
        if text.is_empty() {
            return Ok(Vec::new());
        }
        return Ok(vec![ParagraphNode::from_text(TextRun::plain(text))]);
    };

    let fetched = fetcher.fetch(tag.src).await;
    if let Some(token) = cancel {
        token.check()?;
    }

    match fetched {
        Ok(data) => {
            debug!(src = tag.src, bytes = data.len(), "fetched image");
            let mut paragraphs = vec![image_paragraph(&tag, data, options)];
            if let Some(caption) = find_caption(html) {
                paragraphs.push(caption_paragraph(caption));
            }
            Ok(paragraphs)
        },
        Err(err) => {
            warn!(src = tag.src, error = %err, "image fetch failed, emitting placeholder");
            Ok(vec![placeholder_paragraph(&tag, options)])
        },
    }
}

/// Centered paragraph holding the fetched image
pub fn image_paragraph(tag: &ImageTag<'_>, data: Vec<u8>, options: &ConvertOptions) -> ParagraphNode<'static> {
    let (default_width, default_height) = options.default_image_size;
    let image = ImageRun {
        format: image_format(tag.src, &data),
        name: image_name(tag.src),
        alt: tag.alt.to_string(),
        width: tag.width.unwrap_or(default_width),
        height: tag.height.unwrap_or(default_height),
        data,
    };

    let mut paragraph = ParagraphNode::new(ParagraphStyle::Normal).with_alignment(Alignment::Center);
    paragraph.push(Inline::Image(image));
    paragraph
}

fn caption_paragraph(caption: &str) -> ParagraphNode<'static> {
    ParagraphNode::from_text(TextRun::new(caption.trim(), RunFlags::BOLD)).with_alignment(Alignment::Center)
}

/// Centered fallback paragraph for an image that could not be fetched:
/// the alt text in brackets, then the source path in a fixed-width font.
pub fn placeholder_paragraph(tag: &ImageTag<'_>, options: &ConvertOptions) -> ParagraphNode<'static> {
    let mut paragraph = ParagraphNode::new(ParagraphStyle::Normal).with_alignment(Alignment::Center);
    paragraph.push(Inline::Text(TextRun::plain(format!(
        "[{}: {}]",
        options.placeholder_label, tag.alt
    ))));
    paragraph.push(Inline::Text(
        TextRun::plain(format!("{}: {}", options.path_label, tag.src))
            .with_font(options.fallback_font.as_str(), options.fallback_font_size)
            .with_break_before(),
    ));
    paragraph
}
