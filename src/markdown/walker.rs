//! Syntax tree to paragraph conversion.
//!
//! The walker visits the tree depth-first, exactly once per node. Text and
//! math are borrowed from the tree; the only suspension point is the image
//! fetch of a raw-markup node, awaited before the next sibling is visited.
use super::config::ConvertOptions;
use super::tree::Node;
use crate::common::{CancelToken, Result};
use crate::document::{Alignment, Inline, ParagraphNode, ParagraphStyle, RunFlags, TextRun};
use crate::formula::parse_formula;
use crate::images::{ImageFetcher, resolve_html};
use tracing::{debug, warn};

/// Converts a syntax tree into paragraph nodes.
///
/// # Examples
///
/// ```rust,ignore
/// use mathword::images::SourceFetcher;
/// use mathword::markdown::{ConvertOptions, DocumentWalker, Node};
///
/// let tree = Node::from_json(json)?;
/// let fetcher = SourceFetcher::new("docs");
/// let options = ConvertOptions::default();
/// let paragraphs = DocumentWalker::new(&fetcher, &options).walk(&tree).await?;
/// ```
pub struct DocumentWalker<'w, F> {
    fetcher: &'w F,
    options: &'w ConvertOptions,
    cancel: Option<&'w CancelToken>,
}

impl<'w, F: ImageFetcher> DocumentWalker<'w, F> {
    pub fn new(fetcher: &'w F, options: &'w ConvertOptions) -> Self {
        Self {
            fetcher,
            options,
            cancel: None,
        }
    }

    /// Abort the walk once `token` is cancelled.
    pub fn with_cancel(mut self, token: &'w CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Convert a whole tree.
    ///
    /// The children of a root node are the top-level nodes; any other node
    /// is converted as the only top-level node. The only error is
    /// `Error::Cancelled`, in which case nothing of the node in flight is
    /// kept.
    pub async fn walk<'a>(&self, tree: &'a Node) -> Result<Vec<ParagraphNode<'a>>> {
        let top_level = match tree {
            Node::Root { children } => children.as_slice(),
            node => std::slice::from_ref(node),
        };

        let mut paragraphs = Vec::with_capacity(top_level.len());
        for node in top_level {
            self.check_cancelled()?;
            let converted = self.convert_block(node).await?;
            debug!(kind = node.kind(), paragraphs = converted.len(), "converted node");
            paragraphs.extend(converted);
        }
        Ok(paragraphs)
    }

    fn check_cancelled(&self) -> Result<()> {
        match self.cancel {
            Some(token) => token.check(),
            None => Ok(()),
        }
    }

    async fn convert_block<'a>(&self, node: &'a Node) -> Result<Vec<ParagraphNode<'a>>> {
        let paragraph = match node {
            Node::Heading { depth, children } => {
                let mut paragraph = ParagraphNode::new(ParagraphStyle::for_heading(*depth));
                convert_inlines(children, RunFlags::empty(), &mut paragraph);
                paragraph
            },
            Node::Paragraph { children } => {
                let mut paragraph = ParagraphNode::new(ParagraphStyle::Normal);
                convert_inlines(children, RunFlags::empty(), &mut paragraph);
                paragraph
            },
            Node::Math { value } => {
                let mut paragraph =
                    ParagraphNode::new(ParagraphStyle::Normal).with_alignment(Alignment::Center);
                paragraph.push(Inline::Math {
                    formula: parse_formula(value, true),
                    flags: RunFlags::empty(),
                });
                paragraph
            },
            Node::Html { value } => {
                return resolve_html(value, self.fetcher, self.options, self.cancel).await;
            },
            other => {
                let text = other.text_content();
                if text.is_empty() {
                    warn!(kind = other.kind(), "dropping node without text content");
                    return Ok(Vec::new());
                }
                ParagraphNode::from_text(TextRun::plain(text))
            },
        };
        Ok(vec![paragraph])
    }
}

/// Convert inline children, applying `flags` to every produced run.
fn convert_inlines<'a>(nodes: &'a [Node], flags: RunFlags, paragraph: &mut ParagraphNode<'a>) {
    for node in nodes {
        match node {
            Node::Text { value } => paragraph.push(Inline::Text(TextRun::new(value.as_str(), flags))),
            Node::InlineMath { value } => paragraph.push(Inline::Math {
                formula: parse_formula(value, false),
                flags,
            }),
            Node::Strong { children } => convert_inlines(children, flags | RunFlags::BOLD, paragraph),
            Node::Emphasis { children } => {
                convert_inlines(children, flags | RunFlags::ITALIC, paragraph)
            },
            other => {
                let text = other.text_content();
                if !text.is_empty() {
                    paragraph.push(Inline::Text(TextRun::new(text, flags)));
                }
            },
        }
    }
}

/// Convert a syntax tree into paragraphs.
///
/// Never fails: malformed math is recovered locally and unresolvable images
/// become placeholders.
pub async fn convert<'a, F: ImageFetcher>(
    tree: &'a Node,
    fetcher: &F,
    options: &ConvertOptions,
) -> Vec<ParagraphNode<'a>> {
    // Without a cancel token the walk has no error path.
    DocumentWalker::new(fetcher, options)
        .walk(tree)
        .await
        .unwrap_or_default()
}

/// Convert a syntax tree, aborting with `Error::Cancelled` before the next
/// top-level node once `token` is cancelled.
pub async fn convert_with_cancel<'a, F: ImageFetcher>(
    tree: &'a Node,
    fetcher: &F,
    options: &ConvertOptions,
    token: &CancelToken,
) -> Result<Vec<ParagraphNode<'a>>> {
    DocumentWalker::new(fetcher, options)
        .with_cancel(token)
        .walk(tree)
        .await
}

/// Decode a syntax tree from mdast JSON and convert it.
pub async fn convert_json<F: ImageFetcher>(
    json: &str,
    fetcher: &F,
    options: &ConvertOptions,
) -> Result<Vec<ParagraphNode<'static>>> {
    let tree = Node::from_json(json)?;
    let paragraphs = convert(&tree, fetcher, options).await;
    Ok(paragraphs.into_iter().map(ParagraphNode::into_owned).collect())
}
