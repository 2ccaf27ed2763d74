//! A parser and serializer for hierarchical route URLs.
//!
//! A route URL is a chain of path segments. Every segment may carry matrix
//! parameters and a group of auxiliary (parallel) routes, and the URL as a
//! whole may end in a query string:
//!
//! ```text
//! inbox;sort=date(popup:compose//chat:bob)/33?read=1
//! ^^^^^ ^^^^^^^^^ ^^^^^^^^^^^^^^^^^^^^^^^^ ^^ ^^^^^^
//! path  matrix    auxiliary routes     child  query
//! ```
//!
//! Parsing produces a [`RootUrl`] owning a tree of [`Url`] segments, and
//! rendering either node with [`Display`](std::fmt::Display) produces a string
//! that parses back to the same tree.
//!
//! ```rust
//! use routeurl::{ParamValue, Segment};
//!
//! # fn main() -> Result<(), routeurl::ParseError> {
//! let root = routeurl::parse("users/42;tab=posts;edit(sidebar)?page=2")?;
//!
//! assert_eq!(root.path(), "users");
//!
//! let user = root.child().unwrap();
//! assert_eq!(user.path(), "42");
//! assert_eq!(user.params().get("tab"), Some(&ParamValue::from("posts")));
//! assert_eq!(user.params().get("edit"), Some(&ParamValue::Flag));
//! assert_eq!(user.auxiliary()[0].path(), "sidebar");
//!
//! let query = root.query_params().unwrap();
//! assert_eq!(query.get("page"), Some(&ParamValue::from("2")));
//!
//! assert_eq!(root.to_string(), "users/42;tab=posts;edit(sidebar)?page=2");
//! # Ok(())
//! # }
//! ```
//!
//! # Leniency
//!
//! By default the parser never rejects a path token: input it cannot make
//! sense of yields segments with empty paths, and anything left over after
//! the root (a `#fragment`, say) is dropped. Matrix parameters written on the
//! root segment are accepted and discarded. Use [`ParserConfig::strict`] to
//! turn the degenerate cases into errors.
//!
//! Nesting is the one thing the default does bound: input deeper than
//! [`ParserConfig::DEFAULT_MAX_DEPTH`] segments fails with
//! [`ParseError::TooDeep`].
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod config;
mod error;
pub mod params;
mod parser;
mod url;

pub use config::{EmptySegments, ParserConfig, TrailingInput};
pub use error::ParseError;
pub use params::{ParamValue, Params};
pub use parser::{parse, parse_with, Parser};
pub use url::{path_segments_to_url, RootUrl, Segment, Url};
