//! Location network representation and builder.
//!
//! # Data layout
//!
//! The frozen graph uses **Compressed Sparse Row (CSR)** format.  Given a
//! [`Slot`] `s`, its neighbors occupy the range:
//!
//! ```text
//! edge_to[ out_start[s] .. out_start[s+1] ]
//! ```
//!
//! with the matching weights at the same positions of `edge_weight`.  Each
//! undirected edge is stored once per direction, so both endpoints see the
//! same weight.  Neighbors appear in the order their edge was first added,
//! which keeps iteration deterministic.
//!
//! # Addressing
//!
//! Callers address locations by [`LocationId`].  A `Slot` is the dense
//! storage position used by the search engine's per-query arrays; it is only
//! meaningful for the `Network` that produced it.

use rustc_hash::FxHashMap;
use tracing::debug;

use haul_core::LocationId;

use crate::{NetworkError, NetworkResult};

// ── Slot ──────────────────────────────────────────────────────────────────────

/// Dense position of a location inside one [`Network`].
///
/// Obtained from [`Network::slot`]; never construct one by hand.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Slot(pub u32);

impl Slot {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// ── EdgeRecord ────────────────────────────────────────────────────────────────

/// One entry of an adjacency description: an undirected edge with its
/// weight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeRecord {
    pub a:      LocationId,
    pub b:      LocationId,
    pub weight: f64,
}

impl EdgeRecord {
    pub fn new(a: impl Into<LocationId>, b: impl Into<LocationId>, weight: f64) -> Self {
        Self { a: a.into(), b: b.into(), weight }
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

/// Immutable undirected weighted graph of locations.
///
/// Do not construct directly; use [`NetworkBuilder`] or
/// [`Network::from_description`].  Once built, a `Network` is never mutated,
/// so it can be shared by reference between any number of queries.
#[derive(Debug)]
pub struct Network {
    ids:         Vec<LocationId>,
    slots:       FxHashMap<LocationId, u32>,
    out_start:   Vec<u32>,
    edge_to:     Vec<u32>,
    edge_weight: Vec<f64>,
    pair_count:  usize,
}

impl Network {
    /// Construct an empty network with no locations.
    pub fn empty() -> Self {
        NetworkBuilder::new().build()
    }

    /// Build a network from a location list and an adjacency description.
    ///
    /// Every listed location is created even if no edge touches it; edge
    /// endpoints missing from the list are created on the fly.
    pub fn from_description(ids: &[LocationId], edges: &[EdgeRecord]) -> NetworkResult<Self> {
        let mut b = NetworkBuilder::with_capacity(ids.len());
        b.add_locations(ids.iter().cloned());
        for e in edges {
            b.add_edge(e.a.clone(), e.b.clone(), e.weight)?;
        }
        Ok(b.build())
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn location_count(&self) -> usize {
        self.ids.len()
    }

    /// Number of undirected edges (a self-loop counts once).
    pub fn edge_count(&self) -> usize {
        self.pair_count
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    // ── Lookup by identifier ──────────────────────────────────────────────

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    /// All identifiers, in the order they were first added.
    pub fn ids(&self) -> &[LocationId] {
        &self.ids
    }

    /// Iterator over every location, in insertion order.
    pub fn locations(&self) -> impl Iterator<Item = Location<'_>> + '_ {
        (0..self.ids.len()).map(|i| Location { network: self, slot: Slot(i as u32) })
    }

    /// Look up a location by identifier.
    pub fn location(&self, id: &str) -> NetworkResult<Location<'_>> {
        let slot = self.slot(id)?;
        Ok(Location { network: self, slot })
    }

    /// Weight of the edge between `a` and `b`, or `None` if they are not
    /// adjacent (or either is absent).
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.slots.get(a)?;
        let b = *self.slots.get(b)?;
        self.out_edges(Slot(*a))
            .find(|&(to, _)| to.0 == b)
            .map(|(_, w)| w)
    }

    // ── Slot access (engine hot path) ─────────────────────────────────────

    /// Resolve an identifier to its dense slot.
    pub fn slot(&self, id: &str) -> NetworkResult<Slot> {
        self.slots
            .get(id)
            .map(|&s| Slot(s))
            .ok_or_else(|| NetworkError::LocationNotFound(LocationId::from(id)))
    }

    /// Identifier stored at `slot`.
    ///
    /// # Panics
    /// Panics if `slot` did not come from this network.
    #[inline]
    pub fn id_at(&self, slot: Slot) -> &LocationId {
        &self.ids[slot.index()]
    }

    /// Neighbors of `slot` with their edge weights.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, slot: Slot) -> impl Iterator<Item = (Slot, f64)> + '_ {
        let start = self.out_start[slot.index()] as usize;
        let end   = self.out_start[slot.index() + 1] as usize;
        self.edge_to[start..end]
            .iter()
            .zip(&self.edge_weight[start..end])
            .map(|(&to, &w)| (Slot(to), w))
    }

    #[inline]
    pub fn degree(&self, slot: Slot) -> usize {
        (self.out_start[slot.index() + 1] - self.out_start[slot.index()]) as usize
    }
}

// ── Location ──────────────────────────────────────────────────────────────────

/// Borrowed view of one location: its identifier and adjacency.
///
/// Carries no search state; distances and predecessors belong to a single
/// query and live in the routing engine.
#[derive(Copy, Clone)]
pub struct Location<'a> {
    network: &'a Network,
    slot:    Slot,
}

impl<'a> Location<'a> {
    pub fn id(&self) -> &'a LocationId {
        self.network.id_at(self.slot)
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Neighbor identifiers and weights, in edge insertion order.
    pub fn neighbors(self) -> impl Iterator<Item = (&'a LocationId, f64)> + 'a {
        let network = self.network;
        network
            .out_edges(self.slot)
            .map(move |(to, w)| (network.id_at(to), w))
    }

    pub fn weight_to(&self, neighbor: &str) -> Option<f64> {
        self.network.weight(self.id().as_str(), neighbor)
    }

    pub fn degree(&self) -> usize {
        self.network.degree(self.slot)
    }
}

impl std::fmt::Debug for Location<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Location")
            .field("id", self.id())
            .field("neighbors", &self.neighbors().collect::<Vec<_>>())
            .finish()
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`Network`] incrementally, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use haul_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_edge("Mobile", "Jackson", 187.0).unwrap();
/// b.add_edge("Jackson", "Memphis", 211.0).unwrap();
/// let net = b.build();
/// assert_eq!(net.location_count(), 3);
/// assert_eq!(net.edge_count(), 2);
/// assert_eq!(net.weight("Memphis", "Jackson"), Some(211.0));
/// ```
#[derive(Debug)]
pub struct NetworkBuilder {
    ids:       Vec<LocationId>,
    slots:     FxHashMap<LocationId, u32>,
    adjacency: Vec<Vec<(u32, f64)>>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            ids:       Vec::new(),
            slots:     FxHashMap::default(),
            adjacency: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of locations.
    pub fn with_capacity(locations: usize) -> Self {
        let mut slots = FxHashMap::default();
        slots.reserve(locations);
        Self {
            ids: Vec::with_capacity(locations),
            slots,
            adjacency: Vec::with_capacity(locations),
        }
    }

    /// Add a location with no edges.  Adding an existing identifier again is
    /// a no-op; its edges are kept.
    pub fn add_location(&mut self, id: impl Into<LocationId>) -> &mut Self {
        self.ensure(id.into());
        self
    }

    pub fn add_locations<I>(&mut self, ids: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<LocationId>,
    {
        for id in ids {
            self.ensure(id.into());
        }
        self
    }

    /// Add an undirected edge, creating either endpoint if needed.
    ///
    /// Both directions get `weight`.  Adding the same pair again overwrites
    /// the weight in both directions.  Negative, NaN and infinite weights are
    /// rejected and leave the builder untouched.
    pub fn add_edge(
        &mut self,
        a:      impl Into<LocationId>,
        b:      impl Into<LocationId>,
        weight: f64,
    ) -> NetworkResult<&mut Self> {
        let (a, b) = (a.into(), b.into());
        if !weight.is_finite() || weight < 0.0 {
            return Err(NetworkError::InvalidEdgeWeight { a, b, weight });
        }
        let sa = self.ensure(a);
        let sb = self.ensure(b);
        set_weight(&mut self.adjacency[sa as usize], sb, weight);
        if sa != sb {
            set_weight(&mut self.adjacency[sb as usize], sa, weight);
        }
        Ok(self)
    }

    /// Add a zero-weight edge (travel between `a` and `b` is free).
    pub fn add_link(
        &mut self,
        a: impl Into<LocationId>,
        b: impl Into<LocationId>,
    ) -> &mut Self {
        let sa = self.ensure(a.into());
        let sb = self.ensure(b.into());
        set_weight(&mut self.adjacency[sa as usize], sb, 0.0);
        if sa != sb {
            set_weight(&mut self.adjacency[sb as usize], sa, 0.0);
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.slots.contains_key(id)
    }

    pub fn location_count(&self) -> usize { self.ids.len() }

    /// Consume the builder and produce a frozen [`Network`].
    ///
    /// Time complexity: O(V + E).
    pub fn build(self) -> Network {
        let location_count = self.ids.len();
        let directed: usize = self.adjacency.iter().map(Vec::len).sum();

        let mut out_start   = Vec::with_capacity(location_count + 1);
        let mut edge_to     = Vec::with_capacity(directed);
        let mut edge_weight = Vec::with_capacity(directed);
        let mut pair_count  = 0;

        out_start.push(0u32);
        for (from, row) in self.adjacency.iter().enumerate() {
            for &(to, w) in row {
                if from as u32 <= to {
                    pair_count += 1;
                }
                edge_to.push(to);
                edge_weight.push(w);
            }
            out_start.push(edge_to.len() as u32);
        }
        debug_assert_eq!(out_start.len(), location_count + 1);

        debug!(locations = location_count, edges = pair_count, "network built");

        Network {
            ids: self.ids,
            slots: self.slots,
            out_start,
            edge_to,
            edge_weight,
            pair_count,
        }
    }

    fn ensure(&mut self, id: LocationId) -> u32 {
        if let Some(&slot) = self.slots.get(&id) {
            return slot;
        }
        let slot = self.ids.len() as u32;
        self.ids.push(id.clone());
        self.slots.insert(id, slot);
        self.adjacency.push(Vec::new());
        slot
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Last write wins; a new neighbor keeps its first-insertion position.
fn set_weight(row: &mut Vec<(u32, f64)>, to: u32, weight: f64) {
    match row.iter_mut().find(|(t, _)| *t == to) {
        Some(entry) => entry.1 = weight,
        None => row.push((to, weight)),
    }
}
