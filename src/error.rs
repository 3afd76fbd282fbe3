//! Error types for parsing and constructing media types.
//!
//! Two disjoint failure kinds exist: [`ParseError`] for any grammar
//! violation found in untrusted text, and [`InvalidParts`] for misuse of
//! the programmatic constructors. Neither is ever recovered internally;
//! either a fully valid [`MediaType`](crate::MediaType) is produced or the
//! call fails.

use thiserror::Error;

/// Error returned when a media type string violates the grammar.
///
/// Carries the complete raw input alongside the reason, so the failing
/// header value shows up in logs without the caller stitching it back in.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in media type {input:?}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        ParseError {
            input: input.into(),
            kind,
        }
    }

    /// The raw input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// What went wrong.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// The specific grammar violation behind a [`ParseError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("media type must not be empty")]
    Empty,
    #[error("media type does not contain '/'")]
    MissingSlash,
    #[error("media type does not contain a subtype after '/'")]
    MissingSubtype,
    #[error("invalid type token")]
    InvalidType,
    #[error("invalid subtype token")]
    InvalidSubtype,
    #[error("wildcard type is legal only in '*/*'")]
    IllegalWildcard,
    #[error("missing '=' in parameters")]
    MissingParamEq,
    #[error("missing name in parameters")]
    MissingParamName,
    #[error("missing value in parameters")]
    MissingParamValue,
    #[error("unterminated value quotation in parameters")]
    UnterminatedQuote,
    #[error("expected ';' before next parameter")]
    ExpectedSemicolon,
}

/// Error returned when media type parts passed to a constructor violate
/// the wildcard invariant: a wildcard type is only legal together with a
/// wildcard subtype.
///
/// This is a precondition violation of the programmatic construction API,
/// deliberately distinct from [`ParseError`] which covers untrusted text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("wildcard media type is legal only as '*/*', got '*/{subtype}'")]
pub struct InvalidParts {
    subtype: String,
}

impl InvalidParts {
    pub(crate) fn new(subtype: impl Into<String>) -> Self {
        InvalidParts {
            subtype: subtype.into(),
        }
    }

    /// The concrete subtype that was combined with a wildcard type.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }
}
