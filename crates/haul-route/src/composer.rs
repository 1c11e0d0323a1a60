//! Routes that must pass through two mandatory waypoints.
//!
//! For a start `S`, end `E` and waypoints `{W1, W2}` the composer evaluates
//!
//! ```text
//! S → W1 → W2 → E
//! S → W2 → W1 → E
//! ```
//!
//! Each ordering is three independent segment queries, each with its own
//! search state.  Segment routes are joined end to start (the junction
//! location appears once) and their distances summed.  The ordering with the
//! strictly lower total wins; on a tie the first ordering is kept.
//!
//! The network is undirected, so either both orderings are reachable or
//! neither is.

use tracing::debug;

use haul_core::{FrontierStrategy, LocationId};
use haul_network::{EdgeRecord, Network};

use crate::{Dijkstra, Route, RouteResult, Router};

// ── WaypointRoute ─────────────────────────────────────────────────────────────

/// The selected waypoint route and how it was assembled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaypointRoute {
    /// Stitched route, start first and end last.
    pub route: Route,
    /// `[start, first waypoint, second waypoint, end]` of the winning order.
    pub ordering: [LocationId; 4],
    /// The three segment routes of the winning order.
    pub legs: [Route; 3],
    /// Total distance of the ordering that lost.
    pub alternative_distance: f64,
}

impl WaypointRoute {
    pub fn distance(&self) -> f64 {
        self.route.distance
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Cheapest route from `start` to `end` visiting both `waypoints`, using
/// [`Dijkstra`] with the given frontier strategy over a shared network.
pub fn route_through_waypoints(
    network:   &Network,
    start:     &str,
    end:       &str,
    waypoints: [&str; 2],
    strategy:  FrontierStrategy,
) -> RouteResult<WaypointRoute> {
    compose_with(&Dijkstra::new(strategy), network, start, end, waypoints)
}

/// Like [`route_through_waypoints`] but with any [`Router`].
pub fn compose_with<R: Router>(
    router:    &R,
    network:   &Network,
    start:     &str,
    end:       &str,
    waypoints: [&str; 2],
) -> RouteResult<WaypointRoute> {
    let [w1, w2] = waypoints;
    for id in [start, end, w1, w2] {
        network.slot(id)?;
    }
    compose(start, end, waypoints, |from, to| router.route(network, from, to))
}

/// Waypoint composition that builds a brand-new [`Network`] from the shared
/// location list and adjacency description for every segment query.
///
/// Produces the same result as [`route_through_waypoints`]; it exists for
/// callers that hold only the raw description.
pub fn route_through_waypoints_rebuilt(
    ids:       &[LocationId],
    edges:     &[EdgeRecord],
    start:     &str,
    end:       &str,
    waypoints: [&str; 2],
    strategy:  FrontierStrategy,
) -> RouteResult<WaypointRoute> {
    // One up-front build surfaces bad weights and unknown ids before searching.
    let probe = Network::from_description(ids, edges)?;
    let [w1, w2] = waypoints;
    for id in [start, end, w1, w2] {
        probe.slot(id)?;
    }
    drop(probe);

    let router = Dijkstra::new(strategy);
    compose(start, end, waypoints, |from, to| {
        let network = Network::from_description(ids, edges)?;
        router.route(&network, from, to)
    })
}

// ── Internals ─────────────────────────────────────────────────────────────────

struct Candidate {
    route:    Route,
    ordering: [LocationId; 4],
    legs:     [Route; 3],
}

fn compose<F>(start: &str, end: &str, waypoints: [&str; 2], mut segment: F) -> RouteResult<WaypointRoute>
where
    F: FnMut(&str, &str) -> RouteResult<Route>,
{
    let [w1, w2] = waypoints;
    let first  = evaluate([start, w1, w2, end], &mut segment)?;
    let second = evaluate([start, w2, w1, end], &mut segment)?;

    let (winner, loser) = if second.route.distance < first.route.distance {
        (second, first)
    } else {
        (first, second)
    };

    debug!(
        via = %format!("{} -> {}", winner.ordering[1], winner.ordering[2]),
        distance = winner.route.distance,
        alternative = loser.route.distance,
        "waypoint ordering selected"
    );

    Ok(WaypointRoute {
        route:                winner.route,
        ordering:             winner.ordering,
        legs:                 winner.legs,
        alternative_distance: loser.route.distance,
    })
}

fn evaluate<F>(order: [&str; 4], segment: &mut F) -> RouteResult<Candidate>
where
    F: FnMut(&str, &str) -> RouteResult<Route>,
{
    let [a, b, c, d] = order;
    let legs = [segment(a, b)?, segment(b, c)?, segment(c, d)?];

    let route = legs[0].clone().join(legs[1].clone()).join(legs[2].clone());

    debug!(
        ordering = %order.join(" -> "),
        distance = route.distance,
        "waypoint ordering evaluated"
    );

    Ok(Candidate {
        route,
        ordering: order.map(LocationId::from),
        legs,
    })
}
