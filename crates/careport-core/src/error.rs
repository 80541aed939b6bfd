// SPDX-License-Identifier: AGPL-3.0-or-later
//! Error types for the cell codec

use thiserror::Error;

/// Error type for cell parsing
#[derive(Debug, Error)]
pub enum CodecError {
    /// The cell produced a document with no block content. The only codec
    /// error that surfaces to the operator as a validation message.
    #[error("cell contains no document content")]
    EmptyContent,

    /// The cell is not machine-produced document JSON. Matched inside
    /// `parse_cell` to select the plain-text fallback.
    #[error("cell is not exported document JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CodecError>;

/// A JSON value whose `type` tag is not `"doc"`.
#[derive(Debug, Error)]
#[error("value is not a rich-text document")]
pub struct NotADocument;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_content_message() {
        assert_eq!(
            CodecError::EmptyContent.to_string(),
            "cell contains no document content"
        );
    }

    #[test]
    fn test_malformed_json_wraps_serde_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = CodecError::from(err);
        assert!(matches!(err, CodecError::MalformedJson(_)));
        assert!(err.to_string().starts_with("cell is not exported document JSON"));
    }
}
