//! Rich-text tree conversion.
//!
//! Converts an already-parsed Markdown syntax tree (mdast shape, with
//! `inlineMath`/`math` nodes for `$...$` and `$$...$$`) into the paragraph
//! model of [`crate::document`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mathword::images::SourceFetcher;
//! use mathword::markdown::{ConvertOptions, convert_json};
//!
//! let options = ConvertOptions::from_yaml_file("mathword.yaml")?;
//! let paragraphs = convert_json(&json, &SourceFetcher::new("docs"), &options).await?;
//! for paragraph in &paragraphs {
//!     println!("{:?}: {}", paragraph.style(), paragraph.text());
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Node`]: the input tree, decodable from JSON
//! - [`ConvertOptions`]: styles, image sizing and placeholder text
//! - [`DocumentWalker`]: the depth-first walk producing paragraphs
pub mod config;
pub mod tree;
mod walker;

pub use config::ConvertOptions;
pub use tree::Node;
pub use walker::{DocumentWalker, convert, convert_json, convert_with_cancel};
