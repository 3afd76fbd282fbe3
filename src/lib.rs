//! # Media types
//!
//! A media type (historically "MIME type") describes content as a
//! `type/subtype` pair with optional parameters, e.g. `text/plain` or
//! `text/plain;charset=utf-8`. This crate models one media type expression
//! as an immutable value with a strict parser and a canonical string form.
//!
//! ```
//! let mt: mediatype::MediaType = "text/plain; charset=utf-8".parse().unwrap();
//! assert_eq!(mt, *mediatype::names::TEXT_PLAIN_UTF_8);
//! ```
//!
//! ## Inspecting media types
//!
//! ```
//! let mt = mediatype::MediaType::parse("Text/HTML;q=0.8").unwrap();
//! match (mt.type_(), mt.subtype()) {
//!     ("Text", "HTML") => {}
//!     _ => unreachable!("stored case is preserved"),
//! }
//! assert_eq!(mt.full_type(), "text/html");
//! assert_eq!(mt.get_param("Q"), Some("0.8"));
//! ```
//!
//! ## Matching against wildcards
//!
//! ```
//! use mediatype::MediaType;
//!
//! let any_image = MediaType::new("image", "*").unwrap();
//! let png = MediaType::parse("image/png").unwrap();
//! assert!(any_image.is_compatible(&png));
//! assert!(png.is_compatible(&any_image));
//! ```
//!
//! Type and subtype are compared case-insensitively, as are parameter
//! names; parameter values are case-sensitive. Parameters keep their
//! first-insertion order and the casing their name had when first seen,
//! so formatting a parsed value is deterministic:
//!
//! ```
//! let mt = mediatype::MediaType::parse("foo/bar; y=a; x=b").unwrap();
//! assert_eq!(mt.with_param("Y", "z").to_string(), "foo/bar;y=z;x=b");
//! ```

pub use self::error::{InvalidParts, ParseError, ParseErrorKind};
pub use self::media_type::MediaType;
pub use self::params::{Params, ParamsIter};

#[macro_use]
mod macros;
pub mod error;
pub mod names;
mod media_type;
mod params;
mod parse;
