//! Single-source shortest-path search (Dijkstra).
//!
//! # Per-query state
//!
//! Each call to [`shortest_path_tree`] allocates a fresh `SearchState`
//! (distance, visited flag and predecessor per [`Slot`]) and hands it back
//! as a [`SearchTree`].  The network itself is never touched, so any number
//! of searches can run against one `Network`.
//!
//! # Frontier strategies
//!
//! Locations move `Unvisited → Frontier → Visited`.  The next location to
//! settle is always the unvisited one with the smallest `(distance,
//! LocationId)` key, so equal distances are broken by identifier order and
//! both strategies below settle locations in exactly the same sequence.
//!
//! - [`FrontierStrategy::Rebuild`] rebuilds the frontier from every unvisited
//!   location after each extraction instead of supporting decrease-key.
//!   O(V) per extraction, O(V² + E) per query.  Fine for a regional network
//!   of a few hundred locations; past that, use `Heap`.
//! - [`FrontierStrategy::Heap`] keeps a binary heap and skips stale entries
//!   on pop.  O((V + E) log V) per query.
//!
//! Edge weights are non-negative by construction (`NetworkBuilder` rejects
//! anything else), which is what makes settling final.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::trace;

use haul_core::{FrontierStrategy, LocationId};
use haul_network::{Network, Slot};

use crate::path;
use crate::{Route, RouteResult};

// ── SearchState ───────────────────────────────────────────────────────────────

/// Working state of one search, indexed by `Slot`.
struct SearchState {
    dist:    Vec<f64>,
    visited: Vec<bool>,
    prev:    Vec<Option<Slot>>,
    settled: usize,
}

impl SearchState {
    fn new(location_count: usize, source: Slot) -> Self {
        let mut dist = vec![f64::INFINITY; location_count];
        dist[source.index()] = 0.0;
        Self {
            dist,
            visited: vec![false; location_count],
            prev:    vec![None; location_count],
            settled: 0,
        }
    }

    /// Mark `current` visited and relax every edge to an unvisited neighbor.
    fn settle(&mut self, network: &Network, current: Slot, mut on_improve: impl FnMut(Slot, f64)) {
        self.visited[current.index()] = true;
        self.settled += 1;

        let base = self.dist[current.index()];
        trace!(location = %network.id_at(current), distance = base, "settled");

        for (neighbor, weight) in network.out_edges(current) {
            if self.visited[neighbor.index()] {
                continue;
            }
            let candidate = base + weight;
            if candidate < self.dist[neighbor.index()] {
                self.dist[neighbor.index()] = candidate;
                self.prev[neighbor.index()] = Some(current);
                on_improve(neighbor, candidate);
            }
        }
    }
}

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Result of one completed search: the minimum distance from the source to
/// every location, plus a predecessor link one step back along a cheapest
/// path.
///
/// Unreachable locations keep an infinite distance and no predecessor.
pub struct SearchTree<'n> {
    network: &'n Network,
    source:  Slot,
    state:   SearchState,
}

impl<'n> SearchTree<'n> {
    pub fn network(&self) -> &'n Network {
        self.network
    }

    pub fn source(&self) -> &'n LocationId {
        self.network.id_at(self.source)
    }

    /// Distance from the source to `id` (`f64::INFINITY` when unreachable).
    pub fn distance(&self, id: &str) -> RouteResult<f64> {
        let slot = self.network.slot(id)?;
        Ok(self.dist_at(slot))
    }

    /// The location one step back along a cheapest path to `id`.
    ///
    /// `None` for the source and for unreachable locations.
    pub fn predecessor(&self, id: &str) -> RouteResult<Option<&'n LocationId>> {
        let slot = self.network.slot(id)?;
        Ok(self.prev_at(slot).map(|p| self.network.id_at(p)))
    }

    pub fn is_reachable(&self, id: &str) -> RouteResult<bool> {
        Ok(self.distance(id)?.is_finite())
    }

    /// Number of locations settled by the search (the reachable set).
    pub fn settled_count(&self) -> usize {
        self.state.settled
    }

    /// Cheapest route from the source to `target`, in travel order.
    pub fn route_to(&self, target: &str) -> RouteResult<Route> {
        path::reconstruct(self, target)
    }

    // ── Slot access (for path reconstruction) ─────────────────────────────

    pub(crate) fn source_slot(&self) -> Slot {
        self.source
    }

    #[inline]
    pub(crate) fn dist_at(&self, slot: Slot) -> f64 {
        self.state.dist[slot.index()]
    }

    #[inline]
    pub(crate) fn prev_at(&self, slot: Slot) -> Option<Slot> {
        self.state.prev[slot.index()]
    }

    /// Assemble a tree from raw parts, bypassing the search.
    #[cfg(test)]
    pub(crate) fn from_parts(
        network: &'n Network,
        source:  Slot,
        dist:    Vec<f64>,
        prev:    Vec<Option<Slot>>,
    ) -> Self {
        let n = dist.len();
        Self {
            network,
            source,
            state: SearchState { dist, visited: vec![true; n], prev, settled: n },
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Run Dijkstra from `source` over the whole network.
///
/// Fails with [`RouteError::LocationNotFound`](crate::RouteError) before any
/// search work if `source` is not in `network`.
pub fn shortest_path_tree<'n>(
    network:  &'n Network,
    source:   &str,
    strategy: FrontierStrategy,
) -> RouteResult<SearchTree<'n>> {
    let source = network.slot(source)?;
    let mut state = SearchState::new(network.location_count(), source);

    match strategy {
        FrontierStrategy::Rebuild => run_rebuild(network, &mut state),
        FrontierStrategy::Heap    => run_heap(network, source, &mut state),
    }

    Ok(SearchTree { network, source, state })
}

// ── Strategies ────────────────────────────────────────────────────────────────

fn run_rebuild(network: &Network, state: &mut SearchState) {
    let mut frontier: Vec<Slot> = Vec::with_capacity(network.location_count());

    loop {
        frontier.clear();
        frontier.extend(
            (0..network.location_count() as u32)
                .map(Slot)
                .filter(|s| !state.visited[s.index()]),
        );

        let Some(current) = frontier
            .iter()
            .copied()
            .min_by_key(|&s| (OrderedFloat(state.dist[s.index()]), network.id_at(s)))
        else {
            break;
        };

        // Everything left is in another component.
        if state.dist[current.index()].is_infinite() {
            break;
        }

        state.settle(network, current, |_, _| {});
    }
}

fn run_heap(network: &Network, source: Slot, state: &mut SearchState) {
    // Reverse makes BinaryHeap (max) behave as a min-heap on (distance, id).
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, &LocationId, Slot)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(0.0), network.id_at(source), source)));

    while let Some(Reverse((OrderedFloat(cost), _, current))) = heap.pop() {
        // Skip stale heap entries.
        if state.visited[current.index()] || cost > state.dist[current.index()] {
            continue;
        }
        state.settle(network, current, |neighbor, candidate| {
            heap.push(Reverse((OrderedFloat(candidate), network.id_at(neighbor), neighbor)));
        });
    }
}
