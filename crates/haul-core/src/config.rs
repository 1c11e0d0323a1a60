//! Route query configuration.
//!
//! # Design
//!
//! A route query names a start, an end, and exactly two mandatory waypoints.
//! The composer tries both waypoint orders and keeps the cheaper one, so the
//! order of `waypoints` here does not affect the result, only which ordering
//! is reported first.
//!
//! Typically loaded from a JSON file by the application crate and then
//! overridden field by field from command-line flags.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::{CoreError, CoreResult, LocationId};

// ── FrontierStrategy ──────────────────────────────────────────────────────────

/// How the shortest-path engine selects the next location to settle.
///
/// | Strategy  | Selection cost          | Intended size            |
/// |-----------|-------------------------|--------------------------|
/// | `Rebuild` | O(V) per extraction     | up to a few hundred nodes |
/// | `Heap`    | O(log V) per extraction | anything larger          |
///
/// Both strategies break ties on `(distance, LocationId)` and therefore
/// settle locations in exactly the same order.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FrontierStrategy {
    /// Rebuild the frontier from every unvisited location after each
    /// extraction.  O(V²) total selection cost.
    #[default]
    Rebuild,
    /// Binary heap with lazy deletion of stale entries.  O((V + E) log V).
    Heap,
}

impl fmt::Display for FrontierStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontierStrategy::Rebuild => f.write_str("rebuild"),
            FrontierStrategy::Heap => f.write_str("heap"),
        }
    }
}

impl FromStr for FrontierStrategy {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rebuild" => Ok(FrontierStrategy::Rebuild),
            "heap" => Ok(FrontierStrategy::Heap),
            other => Err(CoreError::Parse(format!(
                "unknown frontier strategy {other:?}: expected \"rebuild\" or \"heap\""
            ))),
        }
    }
}

// ── RouteConfig ───────────────────────────────────────────────────────────────

/// A complete waypoint-route request.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteConfig {
    /// CSV adjacency description (`location_a,location_b,weight` rows).
    pub network_path: PathBuf,

    pub start: LocationId,

    pub end: LocationId,

    /// The two mandatory intermediate locations, in either order.
    pub waypoints: [LocationId; 2],

    /// Frontier strategy for every segment query.  Default: `Rebuild`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub frontier: FrontierStrategy,
}

impl RouteConfig {
    pub fn new(
        network_path: impl Into<PathBuf>,
        start:        impl Into<LocationId>,
        end:          impl Into<LocationId>,
        waypoints:    [LocationId; 2],
    ) -> Self {
        Self {
            network_path: network_path.into(),
            start:        start.into(),
            end:          end.into(),
            waypoints,
            frontier:     FrontierStrategy::default(),
        }
    }

    /// Reject requests that cannot describe two distinct mandatory stops.
    ///
    /// Whether the identifiers exist is checked later, against the loaded
    /// network.
    pub fn validate(&self) -> CoreResult<()> {
        let [a, b] = &self.waypoints;
        if a == b {
            return Err(CoreError::Config(format!(
                "waypoints must name two different locations, got {a} twice"
            )));
        }
        if self.network_path.as_os_str().is_empty() {
            return Err(CoreError::Config("network_path is empty".into()));
        }
        Ok(())
    }
}
