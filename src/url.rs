use crate::params::{self, Params, DEFAULT_JOINER};
use crate::parser::parse;
use crate::ParseError;

use std::fmt;
use std::str::FromStr;

/// Behaviour shared by both kinds of URL node.
pub trait Segment: fmt::Display {
    /// The raw path token of this node.
    fn path(&self) -> &str;

    /// The segment continuing the path after this node.
    fn child(&self) -> Option<&Url>;

    /// Parallel routes attached at this node, in parse order.
    fn auxiliary(&self) -> &[Url];
}

/// A single path segment and everything nested beneath it.
///
/// ```rust
/// use routeurl::{Params, Url};
///
/// let url = Url::new("users")
///     .with_params([("sort", "name")].into_iter().collect::<Params>())
///     .with_auxiliary(vec![Url::new("sidebar")])
///     .with_child(Url::new("42"));
///
/// assert_eq!(url.to_string(), "users;sort=name(sidebar)/42");
/// assert_eq!(url.segment_to_string(), "users;sort=name");
/// ```
///
/// Rendering, comparing and dropping a tree do not recurse, so trees built
/// by hand may be arbitrarily deep.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Url {
    path: String,
    child: Option<Box<Url>>,
    auxiliary: Vec<Url>,
    params: Params,
}

impl Url {
    /// Creates a leaf segment with no parameters or auxiliary routes.
    pub fn new(path: impl Into<String>) -> Self {
        Url {
            path: path.into(),
            child: None,
            auxiliary: Vec::new(),
            params: Params::new(),
        }
    }

    /// Sets the child segment.
    pub fn with_child(mut self, child: Url) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Sets the auxiliary routes.
    pub fn with_auxiliary(mut self, auxiliary: Vec<Url>) -> Self {
        self.auxiliary = auxiliary;
        self
    }

    /// Sets the matrix parameters.
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    pub(crate) fn from_parts(
        path: String,
        child: Option<Url>,
        auxiliary: Vec<Url>,
        params: Params,
    ) -> Self {
        Url {
            path,
            child: child.map(Box::new),
            auxiliary,
            params,
        }
    }

    /// The matrix parameters attached to this segment.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Renders this segment and its matrix parameters only.
    pub fn segment_to_string(&self) -> String {
        let mut out = self.path.clone();
        write_matrix_params(&mut out, &self.params);
        out
    }
}

impl Segment for Url {
    fn path(&self) -> &str {
        &self.path
    }

    fn child(&self) -> Option<&Url> {
        self.child.as_deref()
    }

    fn auxiliary(&self) -> &[Url] {
        &self.auxiliary
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        write_url(&mut out, self);
        f.write_str(&out)
    }
}

impl PartialEq for Url {
    fn eq(&self, other: &Url) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((a, b)) = pending.pop() {
            if a.path != b.path
                || a.params != b.params
                || a.auxiliary.len() != b.auxiliary.len()
            {
                return false;
            }

            match (a.child.as_deref(), b.child.as_deref()) {
                (Some(a), Some(b)) => pending.push((a, b)),
                (None, None) => {}
                _ => return false,
            }

            pending.extend(a.auxiliary.iter().zip(&b.auxiliary));
        }

        true
    }
}

impl Eq for Url {}

impl Drop for Url {
    fn drop(&mut self) {
        let mut pending: Vec<Url> = self.auxiliary.drain(..).collect();
        pending.extend(self.child.take().map(|child| *child));

        // each node is emptied before it goes out of scope
        while let Some(mut url) = pending.pop() {
            pending.append(&mut url.auxiliary);
            pending.extend(url.child.take().map(|child| *child));
        }
    }
}

/// The outermost node of a parsed URL.
///
/// Unlike [`Url`], a root carries query parameters instead of matrix
/// parameters, and renders them last, after the whole child chain.
///
/// ```rust
/// use routeurl::{Params, RootUrl, Url};
///
/// let root = RootUrl::new("inbox")
///     .with_child(Url::new("33"))
///     .with_query_params([("read", "1")].into_iter().collect::<Params>());
///
/// assert_eq!(root.to_string(), "inbox/33?read=1");
/// assert_eq!(root.segment_to_string(), "inbox?read=1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RootUrl {
    path: String,
    child: Option<Box<Url>>,
    auxiliary: Vec<Url>,
    query_params: Option<Params>,
}

impl RootUrl {
    /// Creates a root with no child, auxiliary routes or query string.
    pub fn new(path: impl Into<String>) -> Self {
        RootUrl {
            path: path.into(),
            ..RootUrl::default()
        }
    }

    /// The root produced for an empty URL or a lone `/`.
    pub fn empty() -> Self {
        RootUrl::default()
    }

    /// Sets the child segment.
    pub fn with_child(mut self, child: Url) -> Self {
        self.child = Some(Box::new(child));
        self
    }

    /// Sets the auxiliary routes.
    pub fn with_auxiliary(mut self, auxiliary: Vec<Url>) -> Self {
        self.auxiliary = auxiliary;
        self
    }

    /// Sets the query parameters.
    ///
    /// An empty set still renders a `?`, which is distinct from having no
    /// query string at all.
    pub fn with_query_params(mut self, query_params: Params) -> Self {
        self.query_params = Some(query_params);
        self
    }

    pub(crate) fn from_parts(
        path: String,
        child: Option<Url>,
        auxiliary: Vec<Url>,
        query_params: Option<Params>,
    ) -> Self {
        RootUrl {
            path,
            child: child.map(Box::new),
            auxiliary,
            query_params,
        }
    }

    /// The query parameters, or `None` if there was no query string.
    pub fn query_params(&self) -> Option<&Params> {
        self.query_params.as_ref()
    }

    /// Returns `true` for the sentinel produced by parsing `""` or `"/"`.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
            && self.child.is_none()
            && self.auxiliary.is_empty()
            && self.query_params.is_none()
    }

    /// Renders the root path and query string only.
    pub fn segment_to_string(&self) -> String {
        let mut out = self.path.clone();
        self.write_query_params(&mut out);
        out
    }

    fn write_query_params(&self, out: &mut String) {
        if let Some(query_params) = &self.query_params {
            out.push('?');
            out.push_str(&params::serialize(Some(query_params), DEFAULT_JOINER));
        }
    }
}

impl Segment for RootUrl {
    fn path(&self) -> &str {
        &self.path
    }

    fn child(&self) -> Option<&Url> {
        self.child.as_deref()
    }

    fn auxiliary(&self) -> &[Url] {
        &self.auxiliary
    }
}

// path, auxiliary routes, child, query params
impl fmt::Display for RootUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = self.path.clone();

        if !self.auxiliary.is_empty() {
            out.push('(');
            for (i, sibling) in self.auxiliary.iter().enumerate() {
                if i > 0 {
                    out.push_str("//");
                }
                write_url(&mut out, sibling);
            }
            out.push(')');
        }

        if let Some(child) = self.child.as_deref() {
            out.push('/');
            write_url(&mut out, child);
        }

        self.write_query_params(&mut out);
        f.write_str(&out)
    }
}

impl FromStr for RootUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

fn write_matrix_params(out: &mut String, params: &Params) {
    let rendered = params::serialize(Some(params), ";");
    if !rendered.is_empty() {
        out.push(';');
        out.push_str(&rendered);
    }
}

enum Render<'a> {
    Node(&'a Url),
    Text(&'static str),
}

// path, matrix params, auxiliary routes, child
fn write_url(out: &mut String, url: &Url) {
    let mut stack = vec![Render::Node(url)];

    while let Some(step) = stack.pop() {
        let url = match step {
            Render::Text(text) => {
                out.push_str(text);
                continue;
            }
            Render::Node(url) => url,
        };

        out.push_str(&url.path);
        write_matrix_params(out, &url.params);

        // pushed in reverse of the order they are written
        if let Some(child) = url.child.as_deref() {
            stack.push(Render::Node(child));
            stack.push(Render::Text("/"));
        }

        if !url.auxiliary.is_empty() {
            stack.push(Render::Text(")"));
            for (i, sibling) in url.auxiliary.iter().enumerate().rev() {
                stack.push(Render::Node(sibling));
                if i > 0 {
                    stack.push(Render::Text("//"));
                }
            }
            stack.push(Render::Text("("));
        }
    }
}

/// Builds a linear chain of segments from plain path strings.
///
/// The first string becomes the outermost segment and the last the leaf.
/// Returns `None` if `segments` is empty.
///
/// ```rust
/// use routeurl::path_segments_to_url;
///
/// let url = path_segments_to_url(&["a", "b", "c"]).unwrap();
/// assert_eq!(url.to_string(), "a/b/c");
/// ```
pub fn path_segments_to_url<S: AsRef<str>>(segments: &[S]) -> Option<Url> {
    let (last, rest) = segments.split_last()?;

    let mut url = Url::new(last.as_ref());
    for segment in rest.iter().rev() {
        url = Url::new(segment.as_ref()).with_child(url);
    }

    Some(url)
}
