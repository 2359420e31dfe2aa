//! Configuration options for document conversion.
//!
//! This module defines the options that customize how a syntax tree is
//! turned into paragraphs: paragraph styles, image sizing and the text of
//! image placeholders.
use crate::common::{Error, Result};
use crate::document::DocumentStyleConfig;
use serde::Deserialize;
use std::path::Path;

/// Configuration options for document conversion.
///
/// # Examples
///
/// ```rust,ignore
/// use mathword::markdown::ConvertOptions;
///
/// // Create with defaults
/// let options = ConvertOptions::default();
///
/// // Or customize
/// let options = ConvertOptions::new()
///     .with_default_image_size(480, 320)
///     .with_placeholder_label("Figure");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Paragraph styles of the generated document
    pub styles: DocumentStyleConfig,
    /// Image size (width, height) in pixels when the tag gives none
    pub default_image_size: (u32, u32),
    /// Font of the source path shown when an image cannot be fetched
    pub fallback_font: String,
    /// Font size of the source path, in half-points
    pub fallback_font_size: u32,
    /// Prefix of the alt-text placeholder, rendered as `[label: alt]`
    pub placeholder_label: String,
    /// Prefix of the source path line, rendered as `label: src`
    pub path_label: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            styles: DocumentStyleConfig::default(),
            default_image_size: (360, 360),
            fallback_font: "Courier New".to_string(),
            fallback_font_size: 20, // 10pt
            placeholder_label: "Image".to_string(),
            path_label: "Image path".to_string(),
        }
    }
}

impl ConvertOptions {
    /// Create a new `ConvertOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load options from YAML; absent fields keep their defaults.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use mathword::markdown::ConvertOptions;
    ///
    /// let options = ConvertOptions::from_yaml("default_image_size: [480, 320]\n")?;
    /// assert_eq!(options.default_image_size, (480, 320));
    /// # Ok::<(), mathword::common::Error>(())
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| Error::Config(e.to_string()))
    }

    /// Load options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Set the paragraph styles.
    #[inline]
    pub fn with_styles(mut self, styles: DocumentStyleConfig) -> Self {
        self.styles = styles;
        self
    }

    /// Set the image size used when a tag has no width/height.
    #[inline]
    pub fn with_default_image_size(mut self, width: u32, height: u32) -> Self {
        self.default_image_size = (width, height);
        self
    }

    /// Set the font and size (half-points) of image source paths.
    #[inline]
    pub fn with_fallback_font(mut self, font: impl Into<String>, size: u32) -> Self {
        self.fallback_font = font.into();
        self.fallback_font_size = size;
        self
    }

    /// Set the label of image placeholders.
    #[inline]
    pub fn with_placeholder_label(mut self, label: impl Into<String>) -> Self {
        self.placeholder_label = label.into();
        self
    }

    /// Set the label of image source paths.
    #[inline]
    pub fn with_path_label(mut self, label: impl Into<String>) -> Self {
        self.path_label = label.into();
        self
    }
}
