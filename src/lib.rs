//! Mathword - rich text with LaTeX math to word-processor documents
//!
//! This library turns a Markdown syntax tree carrying headings, emphasis,
//! inline and block math and embedded images into paragraph nodes, and
//! serializes those into WordprocessingML with native Office Math.
//!
//! # Features
//!
//! - **LaTeX math parser**: lenient recursive descent, never fails on content
//! - **Zero-copy formulas**: math leaves borrow from the source tree
//! - **OMML output**: fractions, scripts, radicals, n-ary operators, delimiters and matrices
//! - **Image resolution**: filesystem, `data:` URI and (feature `http`) remote images
//! - **Cancellation**: abort a conversion between top-level nodes
//!
//! # Example - Parsing a formula
//!
//! ```
//! use mathword::formula::{MathNode, parse_latex};
//!
//! let root = parse_latex(r"\frac{a}{b}");
//! assert!(matches!(root.group_children()[0], MathNode::Fraction { .. }));
//! ```
//!
//! # Example - Converting a document
//!
//! ```no_run
//! use mathword::document::{DocumentAssembler, WordprocessingAssembler};
//! use mathword::images::SourceFetcher;
//! use mathword::markdown::{ConvertOptions, convert_json};
//!
//! # async fn run(json: &str) -> mathword::Result<()> {
//! let options = ConvertOptions::default();
//! let paragraphs = convert_json(json, &SourceFetcher::new("."), &options).await?;
//! let parts = WordprocessingAssembler::new().assemble(&paragraphs, &options.styles)?;
//! println!("{}", parts.document_xml);
//! # Ok(())
//! # }
//! ```

/// Shared infrastructure: errors and cancellation
pub mod common;

/// Document model
///
/// Paragraph nodes, inline runs and paragraph styles, plus the assembler
/// that writes them out as WordprocessingML.
pub mod document;

/// Mathematical formula parsing and OMML serialization
pub mod formula;

/// Image tag scanning, fetching and resolution
pub mod images;

/// Markdown syntax tree conversion
pub mod markdown;

// Re-export commonly used types for convenience
pub use common::{CancelToken, Error, Result};
pub use document::{Inline, ParagraphNode, ParagraphStyle, RunFlags};
pub use formula::{Formula, MathNode, parse_formula, parse_latex};
pub use markdown::{ConvertOptions, Node, convert, convert_json, convert_with_cancel};
