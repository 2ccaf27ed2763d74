use crate::config::{EmptySegments, ParserConfig, TrailingInput};
use crate::params::{ParamValue, Params};
use crate::url::{RootUrl, Url};
use crate::ParseError;

/// Characters that end a path segment, a parameter key or a matrix value.
const SEGMENT_DELIMITERS: &[char] = &['/', '(', ')', '?', ';', '=', '&', '#'];

/// Characters that end a query parameter value.
const QUERY_VALUE_DELIMITERS: &[char] = &['(', ')', '?', '&', '#'];

/// Returns the longest prefix of `s` that can form a path segment.
pub(crate) fn match_url_segment(s: &str) -> &str {
    let end = s.find(SEGMENT_DELIMITERS).unwrap_or(s.len());
    &s[..end]
}

/// Returns the longest prefix of `s` that can form a query parameter value.
pub(crate) fn match_url_query_param_value(s: &str) -> &str {
    let end = s.find(QUERY_VALUE_DELIMITERS).unwrap_or(s.len());
    &s[..end]
}

/// Parses a URL with the default, lenient configuration.
///
/// ```rust
/// let url = routeurl::parse("inbox/33;open(popup:compose)?read=1")?;
///
/// assert_eq!(url.to_string(), "inbox/33;open(popup:compose)?read=1");
/// # Ok::<(), routeurl::ParseError>(())
/// ```
pub fn parse(input: &str) -> Result<RootUrl, ParseError> {
    parse_with(input, ParserConfig::default())
}

/// Parses a URL with the given configuration.
pub fn parse_with(input: &str, config: ParserConfig) -> Result<RootUrl, ParseError> {
    Parser::with_config(input, config).parse()
}

/// A recursive-descent URL parser.
///
/// A parser owns the cursor for a single input string and is consumed by
/// [`Parser::parse`]; create a new one for every URL.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a str,
    remaining: &'a str,
    config: ParserConfig,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `input` with the default configuration.
    pub fn new(input: &'a str) -> Self {
        Self::with_config(input, ParserConfig::default())
    }

    /// Creates a parser over `input` with the given configuration.
    pub fn with_config(input: &'a str, config: ParserConfig) -> Self {
        Parser {
            input,
            remaining: input,
            config,
            depth: 0,
        }
    }

    /// The input not yet consumed.
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Byte offset of the cursor into the original input.
    pub fn position(&self) -> usize {
        self.input.len() - self.remaining.len()
    }

    /// Returns `true` if the remaining input begins with `literal`.
    pub fn peek_starts_with(&self, literal: &str) -> bool {
        self.remaining.starts_with(literal)
    }

    /// Consumes `literal`, failing if the remaining input does not begin with it.
    pub fn capture(&mut self, literal: &str) -> Result<(), ParseError> {
        match self.remaining.strip_prefix(literal) {
            Some(rest) => {
                self.remaining = rest;
                Ok(())
            }
            None => Err(ParseError::expected(literal, self.position())),
        }
    }

    /// Parses the whole input into a tree.
    pub fn parse(mut self) -> Result<RootUrl, ParseError> {
        if self.remaining.is_empty() || self.remaining == "/" {
            return Ok(RootUrl::empty());
        }

        let root = self.parse_root()?;

        if !self.remaining.is_empty() {
            match self.config.trailing_input {
                TrailingInput::Ignore => {
                    debug!(
                        "ignoring trailing input {:?} at offset {}",
                        self.remaining,
                        self.position()
                    );
                }
                TrailingInput::Reject => {
                    return Err(ParseError::TrailingInput {
                        remaining: self.remaining.to_owned(),
                        position: self.position(),
                    });
                }
            }
        }

        Ok(root)
    }

    // segment + (aux segments) + (query params)
    fn parse_root(&mut self) -> Result<RootUrl, ParseError> {
        trace!("parsing root at offset {}", self.position());

        if self.peek_starts_with("/") {
            self.capture("/")?;
        }

        let path = self.parse_path()?;

        let mut auxiliary = Vec::new();
        if self.peek_starts_with("(") {
            auxiliary = self.parse_auxiliary_routes()?;
        }

        if self.peek_starts_with(";") {
            let dropped = self.parse_matrix_params()?;
            debug!(
                "discarding matrix params on root segment {:?}: {:?}",
                path, dropped
            );
        }

        let mut child = None;
        if self.peek_starts_with("/") && !self.peek_starts_with("//") {
            self.capture("/")?;
            child = self.parse_segment()?;
        }

        let mut query_params = None;
        if self.peek_starts_with("?") {
            query_params = Some(self.parse_query_params()?);
        }

        Ok(RootUrl::from_parts(path, child, auxiliary, query_params))
    }

    // segment + (matrix params) + (aux segments)
    fn parse_segment(&mut self) -> Result<Option<Url>, ParseError> {
        if self.remaining.is_empty() {
            return Ok(None);
        }

        self.depth += 1;
        if let Some(limit) = self.config.max_depth {
            if self.depth > limit {
                return Err(ParseError::TooDeep { limit });
            }
        }

        trace!(
            "parsing segment at offset {} (depth {})",
            self.position(),
            self.depth
        );

        if self.peek_starts_with("/") {
            self.capture("/")?;
        }

        let path = self.parse_path()?;

        let mut params = Params::new();
        if self.peek_starts_with(";") {
            params = self.parse_matrix_params()?;
        }

        let mut auxiliary = Vec::new();
        if self.peek_starts_with("(") {
            auxiliary = self.parse_auxiliary_routes()?;
        }

        let mut child = None;
        if self.peek_starts_with("/") && !self.peek_starts_with("//") {
            self.capture("/")?;
            child = self.parse_segment()?;
        }

        self.depth -= 1;
        Ok(Some(Url::from_parts(path, child, auxiliary, params)))
    }

    // The mandatory segment token of the root and of every segment.
    fn parse_path(&mut self) -> Result<String, ParseError> {
        let path = match_url_segment(self.remaining);

        if path.is_empty() && self.config.empty_segments == EmptySegments::Reject {
            return Err(ParseError::EmptySegment {
                position: self.position(),
            });
        }

        self.capture(path)?;
        Ok(path.to_owned())
    }

    fn parse_matrix_params(&mut self) -> Result<Params, ParseError> {
        trace!("parsing matrix params at offset {}", self.position());

        let mut params = Params::new();
        while !self.remaining.is_empty() && self.peek_starts_with(";") {
            self.capture(";")?;
            self.parse_param(&mut params, match_url_segment)?;
        }

        Ok(params)
    }

    fn parse_query_params(&mut self) -> Result<Params, ParseError> {
        trace!("parsing query params at offset {}", self.position());

        let mut params = Params::new();
        self.capture("?")?;
        self.parse_param(&mut params, match_url_query_param_value)?;

        while !self.remaining.is_empty() && self.peek_starts_with("&") {
            self.capture("&")?;
            self.parse_param(&mut params, match_url_query_param_value)?;
        }

        Ok(params)
    }

    // key ("=" value)?
    fn parse_param(
        &mut self,
        params: &mut Params,
        match_value: fn(&str) -> &str,
    ) -> Result<(), ParseError> {
        let key = match_url_segment(self.remaining);
        self.capture(key)?;

        let mut value = ParamValue::Flag;
        if self.peek_starts_with("=") {
            self.capture("=")?;
            let matched = match_value(self.remaining);
            self.capture(matched)?;
            value = ParamValue::from(matched);
        }

        params.insert(key, value);
        Ok(())
    }

    fn parse_auxiliary_routes(&mut self) -> Result<Vec<Url>, ParseError> {
        trace!("parsing auxiliary routes at offset {}", self.position());

        let mut routes = Vec::new();
        self.capture("(")?;

        while !self.peek_starts_with(")") && !self.remaining.is_empty() {
            let start = self.position();

            if let Some(route) = self.parse_segment()? {
                routes.push(route);
            }

            if self.peek_starts_with("//") {
                self.capture("//")?;
            }

            // a route that consumed nothing can never reach the closing paren
            if self.position() == start {
                return Err(ParseError::expected(")", start));
            }
        }

        self.capture(")")?;
        Ok(routes)
    }
}
