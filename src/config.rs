/// How the parser treats a mandatory path segment that matches no characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptySegments {
    /// Produce a segment with an empty path.
    #[default]
    Allow,
    /// Fail with [`ParseError::EmptySegment`](crate::ParseError::EmptySegment).
    Reject,
}

/// How the parser treats input left over once the root rule is done,
/// such as a `#fragment` or an unbalanced `)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TrailingInput {
    /// Drop it.
    #[default]
    Ignore,
    /// Fail with [`ParseError::TrailingInput`](crate::ParseError::TrailingInput).
    Reject,
}

/// Parser settings.
///
/// The default is lenient: malformed input produces degenerate trees
/// instead of errors. Nesting is still bounded by
/// [`ParserConfig::DEFAULT_MAX_DEPTH`] so deep input cannot exhaust the stack.
///
/// ```rust
/// use routeurl::{parse_with, EmptySegments, ParserConfig};
///
/// let config = ParserConfig::default().with_empty_segments(EmptySegments::Reject);
/// assert!(parse_with("a/;x", config).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Handling of zero-length mandatory path segments.
    pub empty_segments: EmptySegments,
    /// Handling of unconsumed input after the root.
    pub trailing_input: TrailingInput,
    /// Maximum nesting of child and auxiliary segments, unbounded if `None`.
    ///
    /// The parser recurses once per level, so `None` is only safe for
    /// trusted input.
    pub max_depth: Option<usize>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            empty_segments: EmptySegments::Allow,
            trailing_input: TrailingInput::Ignore,
            max_depth: Some(Self::DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParserConfig {
    /// Nesting limit used unless configured otherwise.
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Rejects empty segments and trailing input.
    pub fn strict() -> Self {
        ParserConfig {
            empty_segments: EmptySegments::Reject,
            trailing_input: TrailingInput::Reject,
            ..ParserConfig::default()
        }
    }

    /// Sets how zero-length path segments are handled.
    pub fn with_empty_segments(mut self, empty_segments: EmptySegments) -> Self {
        self.empty_segments = empty_segments;
        self
    }

    /// Sets how input left after the root is handled.
    pub fn with_trailing_input(mut self, trailing_input: TrailingInput) -> Self {
        self.trailing_input = trailing_input;
        self
    }

    /// Sets the nesting limit; `None` removes it.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}
