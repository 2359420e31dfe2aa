//! Unified error types for mathword.
//!
//! Math parsing and tree walking never fail on content; these errors surface
//! only at real I/O boundaries (input decoding, configuration, image fetching,
//! serialization) and on cancellation.

// Submodule declarations
pub mod types;
pub mod conversions;

// Re-exports
pub use types::{Error, Result};
