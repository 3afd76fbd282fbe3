//! Strict scanner for a single media type expression.
//!
//! Quoted parameter values may legally contain `;` and `=`, so the scanner
//! walks byte positions by hand instead of splitting on delimiters; the
//! quoted branch has to skip past embedded delimiters. No backslash escape
//! processing is done inside quotes: the span between the quotes is taken
//! verbatim, which means a value can hold newlines but never an embedded
//! `"`.

use crate::error::{ParseError, ParseErrorKind};
use crate::media_type::MediaType;
use crate::params::Params;

const WILDCARD: &str = "*";

pub(crate) fn parse(input: &str) -> Result<MediaType, ParseError> {
    if input.is_empty() {
        return Err(ParseError::new(input, ParseErrorKind::Empty));
    }

    let semicolon_idx = input.find(';');
    let full_type = match semicolon_idx {
        Some(idx) => input[..idx].trim(),
        None => input.trim(),
    };
    if full_type.is_empty() {
        return Err(ParseError::new(input, ParseErrorKind::Empty));
    }

    // some legacy HTTP clients send a bare `*; q=.2` Accept header
    let full_type = if full_type == WILDCARD {
        "*/*"
    } else {
        full_type
    };

    let slash_idx = full_type
        .find('/')
        .ok_or_else(|| ParseError::new(input, ParseErrorKind::MissingSlash))?;
    if slash_idx == full_type.len() - 1 {
        return Err(ParseError::new(input, ParseErrorKind::MissingSubtype));
    }

    let type_ = require_token(&full_type[..slash_idx], input, ParseErrorKind::InvalidType)?;
    let subtype = require_token(
        &full_type[slash_idx + 1..],
        input,
        ParseErrorKind::InvalidSubtype,
    )?;

    if type_ == WILDCARD && subtype != WILDCARD {
        return Err(ParseError::new(input, ParseErrorKind::IllegalWildcard));
    }

    let params = parse_params(input, semicolon_idx)?;

    Ok(MediaType::from_valid_parts(type_, subtype, params))
}

/// Validates an HTTP token: non-empty, every byte printable ASCII
/// (33..=126) and none of the delimiter characters.
fn require_token<'a>(
    token: &'a str,
    input: &str,
    kind: ParseErrorKind,
) -> Result<&'a str, ParseError> {
    if token.is_empty() {
        return Err(ParseError::new(input, kind));
    }
    for byte in token.bytes() {
        match byte {
            b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'\'' | b'/'
            | b'[' | b']' | b'?' | b'=' => return Err(ParseError::new(input, kind)),
            33..=126 => {}
            _ => return Err(ParseError::new(input, kind)),
        }
    }
    Ok(token)
}

/// Parses the parameter tail starting at the first `;` of `input`.
///
/// All indices are byte positions into the unmodified input; every slice
/// boundary used here sits on an ASCII delimiter, so slicing stays on
/// char boundaries even for non-ASCII parameter values.
fn parse_params(input: &str, semicolon_idx: Option<usize>) -> Result<Params, ParseError> {
    let mut params = Params::new();
    let mut idx = match semicolon_idx {
        Some(idx) => idx,
        None => return Ok(params),
    };
    let bytes = input.as_bytes();

    while idx < input.len() {
        if bytes[idx] != b';' {
            return Err(ParseError::new(input, ParseErrorKind::ExpectedSemicolon));
        }

        let eq_idx = input[idx + 1..]
            .find('=')
            .map(|offset| idx + 1 + offset)
            .ok_or_else(|| ParseError::new(input, ParseErrorKind::MissingParamEq))?;

        let name = input[idx + 1..eq_idx].trim();
        if name.is_empty() {
            return Err(ParseError::new(input, ParseErrorKind::MissingParamName));
        }

        let value_start = eq_idx + 1;
        if value_start >= input.len() {
            return Err(ParseError::new(input, ParseErrorKind::MissingParamValue));
        }

        let value;
        if bytes[value_start] == b'"' {
            let quote_end = input[value_start + 1..]
                .find('"')
                .map(|offset| value_start + 1 + offset)
                .ok_or_else(|| ParseError::new(input, ParseErrorKind::UnterminatedQuote))?;
            value = &input[value_start + 1..quote_end];
            idx = quote_end + 1;
            while idx < input.len() && bytes[idx] == b' ' {
                idx += 1;
            }
        } else {
            match input[value_start..].find(';') {
                Some(offset) => {
                    value = &input[value_start..value_start + offset];
                    idx = value_start + offset;
                }
                None => {
                    value = &input[value_start..];
                    idx = input.len();
                }
            }
        }

        params.insert(name, value);
    }

    Ok(params)
}

#[cfg(test)]
mod test {
    use super::parse;
    use crate::error::ParseErrorKind;

    fn kind_of(input: &str) -> ParseErrorKind {
        assert_err!(parse(input), input).kind()
    }

    #[test]
    fn parse_charset_utf8() {
        let mt = assert_ok!(parse("text/plain; charset=utf-8"));
        assert_eq!(mt.type_(), "text");
        assert_eq!(mt.subtype(), "plain");
        let params: Vec<_> = mt.params().iter().collect();
        assert_eq!(params, [("charset", "utf-8")]);
    }

    #[test]
    fn bare_star_means_star_star() {
        let mt = assert_ok!(parse("*"));
        assert_eq!(mt.type_(), "*");
        assert_eq!(mt.subtype(), "*");
    }

    #[test]
    fn bare_star_with_params() {
        // the historical `Accept: *; q=.2` spelling
        let mt = assert_ok!(parse("*; q=.2"));
        assert_eq!(mt.type_(), "*");
        assert_eq!(mt.subtype(), "*");
        assert_eq!(mt.params().get("q"), Some(".2"));
    }

    #[test]
    fn surrounding_whitespace_around_full_type_is_trimmed() {
        let mt = assert_ok!(parse("  text/plain  "));
        assert_eq!(mt.type_(), "text");
        assert_eq!(mt.subtype(), "plain");
    }

    #[test]
    fn stored_case_is_kept() {
        let mt = assert_ok!(parse("Text/Plain; Charset=UTF-8"));
        assert_eq!(mt.type_(), "Text");
        assert_eq!(mt.subtype(), "Plain");
        let params: Vec<_> = mt.params().iter().collect();
        assert_eq!(params, [("Charset", "UTF-8")]);
    }

    #[test]
    fn quoted_value_keeps_embedded_delimiters() {
        let mt = assert_ok!(parse("x/y;a=\"p;q=r\""));
        assert_eq!(mt.params().get("a"), Some("p;q=r"));
    }

    #[test]
    fn quoted_value_keeps_newlines() {
        let mt = assert_ok!(parse("x/y;a=\"line\nbreak\""));
        assert_eq!(mt.params().get("a"), Some("line\nbreak"));
    }

    #[test]
    fn quoted_value_does_no_escape_processing() {
        let mt = assert_ok!(parse("x/y;a=\"back\\slash\""));
        assert_eq!(mt.params().get("a"), Some("back\\slash"));
    }

    #[test]
    fn empty_quoted_value_is_allowed() {
        let mt = assert_ok!(parse("x/y;a=\"\""));
        assert_eq!(mt.params().get("a"), Some(""));
    }

    #[test]
    fn spaces_after_closing_quote_are_skipped() {
        let mt = assert_ok!(parse("x/y;a=\"v\"   ;b=w"));
        assert_eq!(mt.params().get("a"), Some("v"));
        assert_eq!(mt.params().get("b"), Some("w"));
    }

    #[test]
    fn unquoted_value_is_taken_verbatim() {
        let mt = assert_ok!(parse("x/y;a= spaced "));
        assert_eq!(mt.params().get("a"), Some(" spaced "));
    }

    #[test]
    fn duplicate_names_overwrite_in_place() {
        let mt = assert_ok!(parse("x/y;A=1;b=2;a=3"));
        let params: Vec<_> = mt.params().iter().collect();
        assert_eq!(params, [("A", "3"), ("b", "2")]);
    }

    #[test]
    fn non_ascii_values_are_allowed() {
        let mt = assert_ok!(parse("x/y;a=\"Straße\""));
        assert_eq!(mt.params().get("a"), Some("Straße"));
    }

    #[test]
    fn rejects_malformed_inputs() {
        use self::ParseErrorKind::*;

        assert_eq!(kind_of(""), Empty);
        assert_eq!(kind_of("   "), Empty);
        assert_eq!(kind_of(";x=y"), Empty);
        assert_eq!(kind_of("/"), MissingSubtype);
        assert_eq!(kind_of("x/"), MissingSubtype);
        assert_eq!(kind_of("/y"), InvalidType);
        assert_eq!(kind_of("*/x"), IllegalWildcard);
        assert_eq!(kind_of("x"), MissingSlash);
        assert_eq!(kind_of("x/ y"), InvalidSubtype);
        assert_eq!(kind_of("x /y"), InvalidType);
        assert_eq!(kind_of("x/x/y"), InvalidSubtype);
        assert_eq!(kind_of("x:x/y"), InvalidType);
        assert_eq!(kind_of("x x/y"), InvalidType);
        assert_eq!(kind_of("x/y:y"), InvalidSubtype);
        assert_eq!(kind_of("x/y y"), InvalidSubtype);
        assert_eq!(kind_of("böärghh/hui"), InvalidType);
        assert_eq!(kind_of("hui/böärghh"), InvalidSubtype);
    }

    #[test]
    fn rejects_malformed_parameters() {
        use self::ParseErrorKind::*;

        assert_eq!(kind_of("x/y;"), MissingParamEq);
        assert_eq!(kind_of("x/y;a"), MissingParamEq);
        assert_eq!(kind_of("x/y;a="), MissingParamValue);
        assert_eq!(kind_of("x/y;=x"), MissingParamName);
        assert_eq!(kind_of("x/y;="), MissingParamName);
        assert_eq!(kind_of("x/y;a=\"xxx"), UnterminatedQuote);
        assert_eq!(kind_of("x/y;a=\"v\"junk"), ExpectedSemicolon);
    }

    #[test]
    fn error_carries_raw_input() {
        let err = assert_err!(parse("x/y;a=\"xxx"));
        assert_eq!(err.input(), "x/y;a=\"xxx");
    }
}
