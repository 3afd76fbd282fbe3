use std::collections::hash_map::DefaultHasher;
use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::slice;

/// An ordered map of media type parameters with case-insensitive names.
///
/// Name lookup, overwrite and removal fold ASCII case (locale-independent),
/// while iteration keeps first-insertion order and each name keeps the
/// casing it had when it was first inserted. Values are case-sensitive.
///
/// ```
/// let mut params = mediatype::Params::new();
/// params.insert("Charset", "utf-8");
/// params.insert("boundary", "xyz");
/// params.insert("CHARSET", "ascii");
///
/// assert_eq!(params.get("charset"), Some("ascii"));
/// let rendered: Vec<_> = params.iter().collect();
/// assert_eq!(rendered, [("Charset", "ascii"), ("boundary", "xyz")]);
/// ```
#[derive(Clone, Default)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Params {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up a value by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Inserts a parameter.
    ///
    /// If a name equal to `name` up to ASCII case is already present, its
    /// value is replaced in place: position and the originally stored name
    /// casing stay unchanged and the replaced value is returned. Otherwise
    /// the pair is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let name = name.into();
        let value = value.into();
        match self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(&name))
        {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Removes a parameter by name, ignoring ASCII case, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self
            .entries
            .iter()
            .position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.entries.remove(idx).1)
    }

    /// Iterates entries in first-insertion order.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.entries.iter(),
        }
    }
}

/// Equal iff both maps hold the same set of pairs, comparing names without
/// ASCII case and values exactly. Order plays no role.
impl PartialEq for Params {
    fn eq(&self, other: &Params) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Eq for Params {}

// Order independent to stay consistent with `PartialEq`: the entry hashes
// are combined with a commutative operation.
impl Hash for Params {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut combined: u64 = 0;
        for (name, value) in self.iter() {
            let mut entry = DefaultHasher::new();
            for b in name.bytes() {
                entry.write_u8(b.to_ascii_lowercase());
            }
            entry.write_u8(0);
            value.hash(&mut entry);
            combined = combined.wrapping_add(entry.finish());
        }
        state.write_u64(combined);
    }
}

impl Debug for Params {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        fter.debug_map().entries(self.iter()).finish()
    }
}

impl<N, V> Extend<(N, V)> for Params
where
    N: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (N, V)>>(&mut self, iter: I) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<N, V> FromIterator<(N, V)> for Params
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        params.extend(iter);
        params
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = ParamsIter<'a>;

    fn into_iter(self) -> ParamsIter<'a> {
        self.iter()
    }
}

/// Iterator over `(name, value)` pairs in first-insertion order.
#[derive(Clone)]
pub struct ParamsIter<'a> {
    inner: slice::Iter<'a, (String, String)>,
}

impl<'a> Iterator for ParamsIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> ExactSizeIterator for ParamsIter<'a> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a> Debug for ParamsIter<'a> {
    fn fmt(&self, fter: &mut fmt::Formatter) -> fmt::Result {
        let metoo = self.clone();
        fter.debug_list().entries(metoo).finish()
    }
}
