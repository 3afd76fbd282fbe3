use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::num::ParseIntError;
use std::str::{FromStr, ParseBoolError};

use crate::error::{InvalidParts, ParseError};
use crate::params::Params;

const WILDCARD: &str = "*";

/// An immutable media type value: primary type, subtype and parameters.
///
/// Type and subtype keep the case they were constructed with but compare
/// (and hash) case-insensitively; lowercasing happens only when rendering.
/// Parameters keep first-insertion order and first-seen name casing, see
/// [`Params`]. Every "mutating" operation returns a new instance instead.
///
/// ```
/// use mediatype::MediaType;
///
/// let mt = MediaType::parse("Text/Plain;charset=utf-8").unwrap();
/// assert_eq!(mt.type_(), "Text");
/// assert_eq!(mt, MediaType::parse("text/plain; Charset=utf-8").unwrap());
/// assert_eq!(mt.to_string(), "text/plain;charset=utf-8");
/// ```
#[derive(Clone, Debug)]
pub struct MediaType {
    type_: String,
    subtype: String,
    params: Params,
}

impl MediaType {
    /// Creates a media type from a type and subtype, without parameters.
    ///
    /// `None` for either part is equivalent to the wildcard `"*"`. A
    /// wildcard type with a concrete subtype is rejected: `*/*`, `x/*`
    /// and `x/y` are legal, `*/x` is not.
    ///
    /// The parts are stored as given; no token validation is applied on
    /// this path (it is meant for programmatic construction from trusted
    /// values, use [`parse`](Self::parse) for untrusted text).
    pub fn new<'a>(
        type_: impl Into<Option<&'a str>>,
        subtype: impl Into<Option<&'a str>>,
    ) -> Result<Self, InvalidParts> {
        Self::from_parts(type_, subtype, std::iter::empty::<(&str, &str)>())
    }

    /// Creates a media type from a type, subtype and parameters.
    ///
    /// The parameters are defensively copied into a fresh [`Params`] with
    /// put semantics, in the iterator's order. Normalization and the
    /// wildcard rule match [`new`](Self::new).
    pub fn from_parts<'a, I, N, V>(
        type_: impl Into<Option<&'a str>>,
        subtype: impl Into<Option<&'a str>>,
        params: I,
    ) -> Result<Self, InvalidParts>
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let type_ = type_.into().unwrap_or(WILDCARD);
        let subtype = subtype.into().unwrap_or(WILDCARD);

        if type_ == WILDCARD && subtype != WILDCARD {
            return Err(InvalidParts::new(subtype));
        }

        let params = params
            .into_iter()
            .map(|(n, v)| (n.as_ref().to_owned(), v.as_ref().to_owned()))
            .collect();

        Ok(Self::from_valid_parts(type_, subtype, params))
    }

    /// Parses a single media type expression.
    ///
    /// See the crate docs for the accepted grammar. The bare legacy
    /// spelling `"*"` is read as `*/*`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        crate::parse::parse(input)
    }

    // Caller guarantees the wildcard rule already holds.
    pub(crate) fn from_valid_parts(type_: &str, subtype: &str, params: Params) -> Self {
        MediaType {
            type_: type_.to_owned(),
            subtype: subtype.to_owned(),
            params,
        }
    }

    /// The primary type, in stored case.
    pub fn type_(&self) -> &str {
        &self.type_
    }

    /// The subtype, in stored case.
    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    /// Read-only view of the parameters.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// True if the primary type is `*`.
    pub fn is_wildcard_type(&self) -> bool {
        self.type_ == WILDCARD
    }

    /// True if the subtype is `*`.
    ///
    /// A wildcard type implies a wildcard subtype, but not the other way
    /// around.
    pub fn is_wildcard_subtype(&self) -> bool {
        self.subtype == WILDCARD
    }

    /// The lowercased `type/subtype` pair without parameters.
    pub fn full_type(&self) -> String {
        format!(
            "{}/{}",
            self.type_.to_ascii_lowercase(),
            self.subtype.to_ascii_lowercase()
        )
    }

    /// Checks whether two media types match when parameters are ignored,
    /// treating a wildcard on either side as "any". E.g. `image/*` is
    /// compatible with `image/jpeg`, `image/png` and `*/*`. The relation
    /// is symmetric.
    pub fn is_compatible(&self, other: &MediaType) -> bool {
        self.type_ == WILDCARD
            || other.type_ == WILDCARD
            || (self.type_.eq_ignore_ascii_case(&other.type_)
                && (self.subtype == WILDCARD || other.subtype == WILDCARD))
            || (self.type_.eq_ignore_ascii_case(&other.type_)
                && self.subtype.eq_ignore_ascii_case(&other.subtype))
    }

    /// Returns an instance with the same type and subtype and no
    /// parameters. Callers must not rely on identity, only on equal value.
    pub fn without_params(&self) -> MediaType {
        if self.params.is_empty() {
            return self.clone();
        }
        MediaType {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            params: Params::new(),
        }
    }

    /// Returns an instance with the named parameters removed, ignoring
    /// ASCII case. An empty name list is a no-op yielding an equal value.
    pub fn without_params_named<I, N>(&self, names: I) -> MediaType
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        if self.params.is_empty() {
            return self.clone();
        }
        let mut params = self.params.clone();
        for name in names {
            params.remove(name.as_ref());
        }
        MediaType {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            params,
        }
    }

    /// Returns an instance with the given parameter applied with put
    /// semantics: an existing name (ignoring ASCII case) keeps its
    /// position and stored casing, only the value changes.
    pub fn with_param(&self, name: impl AsRef<str>, value: impl AsRef<str>) -> MediaType {
        self.with_params(std::iter::once((name.as_ref(), value.as_ref())))
    }

    /// Returns an instance with all given parameters applied with put
    /// semantics, in the iterator's order.
    pub fn with_params<I, N, V>(&self, additional: I) -> MediaType
    where
        I: IntoIterator<Item = (N, V)>,
        N: AsRef<str>,
        V: AsRef<str>,
    {
        let mut params = self.params.clone();
        params.extend(
            additional
                .into_iter()
                .map(|(n, v)| (n.as_ref().to_owned(), v.as_ref().to_owned())),
        );
        MediaType {
            type_: self.type_.clone(),
            subtype: self.subtype.clone(),
            params,
        }
    }

    /// Looks up a parameter value by name, ignoring ASCII case.
    ///
    /// An empty stored value reports as absent, matching the behaviour of
    /// the derived typed getters. Use [`params()`](Self::params) for raw
    /// access that keeps empty values visible.
    pub fn get_param(&self, name: &str) -> Option<&str> {
        self.params.get(name).filter(|value| !value.is_empty())
    }

    /// Looks up a parameter and converts it via [`FromStr`].
    ///
    /// Returns `Ok(None)` when the parameter is absent or empty and an
    /// error when a present value does not convert.
    pub fn get_parsed_param<T: FromStr>(&self, name: &str) -> Result<Option<T>, T::Err> {
        match self.get_param(name) {
            Some(value) => value.parse().map(Some),
            None => Ok(None),
        }
    }

    /// [`get_parsed_param`](Self::get_parsed_param) fixed to `i64`.
    pub fn get_int_param(&self, name: &str) -> Result<Option<i64>, ParseIntError> {
        self.get_parsed_param(name)
    }

    /// [`get_parsed_param`](Self::get_parsed_param) fixed to `bool`.
    pub fn get_bool_param(&self, name: &str) -> Result<Option<bool>, ParseBoolError> {
        self.get_parsed_param(name)
    }

    /// Like [`get_bool_param`](Self::get_bool_param), with a default for
    /// the absent case.
    pub fn get_bool_param_or(&self, name: &str, default: bool) -> Result<bool, ParseBoolError> {
        Ok(self.get_bool_param(name)?.unwrap_or(default))
    }
}

impl FromStr for MediaType {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        MediaType::parse(input)
    }
}

/// Type and subtype compare without ASCII case; the parameter maps compare
/// per [`Params`] equality (name case-insensitive, value case-sensitive,
/// order irrelevant).
impl PartialEq for MediaType {
    fn eq(&self, other: &MediaType) -> bool {
        self.type_.eq_ignore_ascii_case(&other.type_)
            && self.subtype.eq_ignore_ascii_case(&other.subtype)
            && self.params == other.params
    }
}

impl Eq for MediaType {}

// Lowercased to stay consistent with the case-insensitive `PartialEq`.
impl Hash for MediaType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for b in self.type_.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(b'/');
        for b in self.subtype.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        self.params.hash(state);
    }
}

/// Characters that force a parameter value into the quoted form.
const NEEDS_QUOTING: &[u8] = b"()<>@,;:\\\"/[]?= \t\r\n";

fn needs_quoting(value: &str) -> bool {
    value.bytes().any(|b| NEEDS_QUOTING.contains(&b))
}

fn fmt_lower(fter: &mut fmt::Formatter, part: &str) -> fmt::Result {
    if part.bytes().any(|b| b.is_ascii_uppercase()) {
        fter.write_str(&part.to_ascii_lowercase())
    } else {
        fter.write_str(part)
    }
}

/// Canonical header form: `lowertype/lowersubtype[;name=value]*`.
///
/// Parameter names render with their stored casing, values verbatim,
/// quoted when needed. An empty value renders as the bare name.
impl Display for MediaType {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        fmt_lower(fter, &self.type_)?;
        fter.write_str("/")?;
        fmt_lower(fter, &self.subtype)?;

        for (name, value) in self.params.iter() {
            fter.write_str(";")?;
            fter.write_str(name)?;
            if !value.is_empty() {
                fter.write_str("=")?;
                if needs_quoting(value) {
                    write!(fter, "\"{}\"", value)?;
                } else {
                    fter.write_str(value)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::MediaType;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for MediaType {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for MediaType {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = String::deserialize(deserializer)?;
            raw.parse().map_err(de::Error::custom)
        }
    }
}
