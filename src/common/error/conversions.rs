//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! third-party error types to the unified Error type.

use super::types::Error;

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Error::XmlError(err.to_string())
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Error::Fetch(format!("invalid base64 payload: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_error_maps_to_xml() {
        let err: Error = std::fmt::Error.into();
        assert!(matches!(err, Error::XmlError(_)));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(Error::Cancelled.to_string(), "Conversion cancelled");
        assert_eq!(
            Error::Fetch("missing".to_string()).to_string(),
            "Fetch error: missing"
        );
    }
}
