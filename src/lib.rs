#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]
#![cfg_attr(not(feature = "std"), no_std)]

//! A URL parser with percent-encoding, path canonicalization and
//! reference resolution in the manner of [RFC 3986].
//!
//! [RFC 3986]: https://datatracker.ietf.org/doc/html/rfc3986/
//!
//! See the documentation of [`Url`] for more details.
//!
//! # Parsing
//!
//! Parsing never rejects a URL for its structure. A missing scheme or
//! authority, extra leading slashes or an empty path simply leave the
//! corresponding components empty. The only failure is an invalid
//! percent-encoded octet in the path or the fragment, which are the only
//! components decoded during parsing.
//!
//! ```
//! use urlref::Url;
//!
//! let url = Url::parse("http:www.google.com/?q=go+language")?;
//! assert!(url.opaque_path());
//! assert_eq!(url.path(), "www.google.com/?q=go+language");
//! assert_eq!(url.raw_query(), "");
//!
//! assert_eq!(Url::parse("/a%zz").unwrap_err().escape_error().as_str(), "%zz");
//! # Ok::<_, urlref::ParseError>(())
//! ```
//!
//! # Resolution
//!
//! ```
//! use urlref::Url;
//!
//! let base = Url::parse_reference("http://foo.com/bar")?;
//! let r = Url::parse_reference("/baz")?;
//! assert_eq!(base.resolve(&r).to_string(), "http://foo.com/baz");
//! # Ok::<_, urlref::ParseError>(())
//! ```
//!
//! # Feature flags
//!
//! All features except `std` are disabled by default.
//!
//! - `std`: Enables `std` support. This includes [`Error`] implementations.
//!
//! - `impl-error`: Enables [`Error`] implementations without `std`.
//!
//! - `serde`: Enables [`serde`] support for [`Url`].
//!
//! - `log`: Emits trace records through [`log`] describing how each
//!   reference is resolved.
//!
//! [`Error`]: core::error::Error
//! [`serde`]: https://docs.rs/serde
//! [`log`]: https://docs.rs/log

extern crate alloc;

#[cfg(all(feature = "impl-error", not(feature = "std")))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;

pub mod component;
pub mod pct_enc;
pub mod resolve;

mod fmt;
mod log;
mod parse;
mod path;
mod url;

pub use component::{escape_userinfo, unescape_userinfo, Authority, Userinfo};
pub use parse::{Component, ParseError};
pub use path::canonical_path;
pub use pct_enc::{escape, unescape, EscapeError};
pub use url::{Form, Url};
