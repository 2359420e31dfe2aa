//! Document model.
//!
//! The conversion core produces an ordered sequence of `ParagraphNode`s;
//! each holds styled text runs, math formulas or pictures. The sequence is
//! handed in full to a `DocumentAssembler`, which owns the output format.
//!
//! # Example
//!
//! ```rust,ignore
//! use mathword::document::{
//!     DocumentAssembler, DocumentStyleConfig, Inline, ParagraphNode, ParagraphStyle, TextRun,
//!     WordprocessingAssembler,
//! };
//!
//! let mut heading = ParagraphNode::new(ParagraphStyle::Heading1);
//! heading.push(Inline::Text(TextRun::plain("Results")));
//!
//! let parts = WordprocessingAssembler::new()
//!     .assemble(&[heading], &DocumentStyleConfig::default())?;
//! println!("{}", parts.document_xml);
//! # Ok::<(), mathword::common::Error>(())
//! ```
mod paragraph;
mod style;

#[cfg(feature = "omml")]
mod assembler;

pub use paragraph::{
    Alignment, ImageRun, Inline, ParagraphNode, ParagraphStyle, RunFlags, TextRun, px_to_emu,
};
pub use style::{DocumentStyleConfig, ParagraphStyleDef};

#[cfg(feature = "omml")]
pub use assembler::{DocumentAssembler, DocumentParts, MediaPart, WordprocessingAssembler};
