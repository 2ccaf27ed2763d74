use thiserror::Error;

/// Represents errors that can occur when parsing a URL.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum ParseError {
    /// The grammar required a literal delimiter that was not found at the cursor.
    #[error("Expected \"{literal}\".")]
    Expected {
        /// The literal the parser was looking for.
        literal: String,
        /// Byte offset of the cursor when the failure occurred.
        position: usize,
    },
    /// A mandatory path segment matched zero characters.
    ///
    /// Only returned when [`EmptySegments::Reject`](crate::EmptySegments::Reject)
    /// is configured.
    #[error("empty path segment at offset {position}")]
    EmptySegment {
        /// Byte offset of the empty segment.
        position: usize,
    },
    /// Input remained after the root rule finished.
    ///
    /// Only returned when [`TrailingInput::Reject`](crate::TrailingInput::Reject)
    /// is configured.
    #[error("unexpected trailing input {remaining:?} at offset {position}")]
    TrailingInput {
        /// The unconsumed suffix.
        remaining: String,
        /// Byte offset where the suffix starts.
        position: usize,
    },
    /// Child and auxiliary segments were nested deeper than the configured limit.
    #[error("url nesting exceeds the limit of {limit} segments")]
    TooDeep {
        /// The configured limit.
        limit: usize,
    },
}

impl ParseError {
    pub(crate) fn expected(literal: &str, position: usize) -> Self {
        ParseError::Expected {
            literal: literal.to_owned(),
            position,
        }
    }

    /// Returns the byte offset the error refers to, if any.
    pub fn position(&self) -> Option<usize> {
        match self {
            Self::Expected { position, .. }
            | Self::EmptySegment { position }
            | Self::TrailingInput { position, .. } => Some(*position),
            Self::TooDeep { .. } => None,
        }
    }
}
