//! Common types shared across the formula, document, and markdown modules.

// Submodule declarations
pub mod cancel;
pub mod error;

// Re-exports for convenience
pub use cancel::CancelToken;
pub use error::{Error, Result};
