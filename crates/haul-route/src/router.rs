//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The waypoint composer calls routing via the [`Router`] trait, so callers
//! can swap in another engine (A*, a precomputed table, …) without touching
//! the composition logic.  The default [`Dijkstra`] covers regional
//! networks.
//!
//! # Cost units
//!
//! Distances are plain `f64` sums of edge weights, in whatever unit the
//! adjacency description used (miles, km, minutes).

use haul_core::{FrontierStrategy, LocationId};
use haul_network::Network;

use crate::search::shortest_path_tree;
use crate::RouteResult;

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the locations to visit in order and the
/// total distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Locations in travel order, source first and target last.
    pub locations: Vec<LocationId>,
    /// Sum of the edge weights along `locations`.
    pub distance: f64,
}

impl Route {
    /// `true` if the source and target are the same location.
    pub fn is_trivial(&self) -> bool {
        self.locations.len() <= 1
    }

    /// Number of edges traversed.
    pub fn hops(&self) -> usize {
        self.locations.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<&LocationId> {
        self.locations.first()
    }

    pub fn target(&self) -> Option<&LocationId> {
        self.locations.last()
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn steps(&self) -> impl Iterator<Item = (&LocationId, &LocationId)> + '_ {
        self.locations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Append `next`, which must start where `self` ends.  The shared
    /// junction appears once in the result.
    pub fn join(mut self, next: Route) -> Route {
        debug_assert_eq!(self.target(), next.source(), "routes do not meet");
        self.locations.extend(next.locations.into_iter().skip(1));
        self.distance += next.distance;
        self
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync`; a `Network` is immutable, so one
/// router can serve queries from any thread.
pub trait Router: Send + Sync {
    /// Compute the cheapest route from `from` to `to`.
    ///
    /// `from == to` yields a trivial one-location route with distance 0.
    fn route(&self, network: &Network, from: &str, to: &str) -> RouteResult<Route>;
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the full network, with a selectable frontier.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dijkstra {
    pub strategy: FrontierStrategy,
}

impl Dijkstra {
    pub fn new(strategy: FrontierStrategy) -> Self {
        Self { strategy }
    }
}

impl Router for Dijkstra {
    fn route(&self, network: &Network, from: &str, to: &str) -> RouteResult<Route> {
        // Both endpoints are checked before any search work.
        network.slot(to)?;
        let tree = shortest_path_tree(network, from, self.strategy)?;
        tree.route_to(to)
    }
}

/// Cheapest route from `source` to `target` with the default engine.
pub fn shortest_path(network: &Network, source: &str, target: &str) -> RouteResult<Route> {
    Dijkstra::default().route(network, source, target)
}
