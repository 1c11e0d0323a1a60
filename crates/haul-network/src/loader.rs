//! CSV adjacency loader.
//!
//! # CSV format
//!
//! One undirected edge per row, no header row:
//!
//! ```csv
//! Mobile, Jackson, 187
//! Jackson, Memphis, 211.5
//! Mobile, New Orleans, 144
//! ```
//!
//! Whitespace around fields is ignored.  Locations are listed in the order
//! they first appear.  A pair that appears twice keeps the weight from its
//! last row.
//!
//! Malformed rows (missing fields, non-numeric weight) are reported with the
//! 1-based line number; negative weights surface as
//! [`NetworkError::InvalidEdgeWeight`].

use std::io::Read;
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use haul_core::LocationId;

use crate::network::{EdgeRecord, Network};
use crate::{NetworkError, NetworkResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct EdgeRow {
    a:      String,
    b:      String,
    weight: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`Network`] from a CSV file.
pub fn load_network_csv(path: &Path) -> NetworkResult<Network> {
    let file = std::fs::File::open(path)
        .map_err(NetworkError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for embedded data.
pub fn load_network_reader<R: Read>(reader: R) -> NetworkResult<Network> {
    let (ids, edges) = read_description(reader)?;
    Network::from_description(&ids, &edges)
}

/// Parse the raw adjacency description without building a network.
///
/// Returns the location list (first-appearance order) and every edge row in
/// file order.  Weights are validated when the description is turned into a
/// [`Network`].
pub fn read_description<R: Read>(reader: R) -> NetworkResult<(Vec<LocationId>, Vec<EdgeRecord>)> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut ids: Vec<LocationId> = Vec::new();
    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut edges: Vec<EdgeRecord> = Vec::new();

    for result in csv_reader.deserialize::<EdgeRow>() {
        let row = result.map_err(parse_error)?;
        for name in [&row.a, &row.b] {
            if seen.insert(name.clone()) {
                ids.push(LocationId::new(name.as_str()));
            }
        }
        edges.push(EdgeRecord::new(row.a, row.b, row.weight));
    }

    debug!(locations = ids.len(), rows = edges.len(), "adjacency description read");
    Ok((ids, edges))
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_error(e: csv::Error) -> NetworkError {
    match e.position() {
        Some(pos) => NetworkError::Parse(format!("line {}: {e}", pos.line())),
        None => NetworkError::Parse(e.to_string()),
    }
}
