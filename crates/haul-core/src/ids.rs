//! Stable location identifiers.
//!
//! Locations are addressed by name everywhere in the public API.  Graph
//! crates may keep dense positional slots internally, but a slot is never
//! handed out as the way to refer to a location.

use std::borrow::Borrow;
use std::fmt;

/// Unique, stable identifier of a location (a city, depot, junction, …).
///
/// Ordered lexicographically.  The shortest-path engine uses this ordering
/// to break ties between equally distant frontier entries, which keeps
/// results reproducible across runs.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LocationId(String);

impl LocationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<String> for LocationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&LocationId> for LocationId {
    fn from(id: &LocationId) -> Self {
        id.clone()
    }
}

/// Lets `HashMap<LocationId, _>` be queried with a plain `&str`.
impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LocationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
