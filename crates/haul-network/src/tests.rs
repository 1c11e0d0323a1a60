//! Unit tests for haul-network.
//!
//! All tests use hand-built networks or inline CSV text.

#[cfg(test)]
mod helpers {
    use crate::{Network, NetworkBuilder};

    /// A–B=1, B–C=2, A–C=5, C–D=1.
    pub fn diamond() -> Network {
        let mut b = NetworkBuilder::new();
        b.add_edge("A", "B", 1.0).unwrap();
        b.add_edge("B", "C", 2.0).unwrap();
        b.add_edge("A", "C", 5.0).unwrap();
        b.add_edge("C", "D", 1.0).unwrap();
        b.build()
    }
}

// ── Builder & network structure ────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use haul_core::LocationId;

    use crate::{EdgeRecord, Network, NetworkBuilder, NetworkError};

    #[test]
    fn empty_build() {
        let net = Network::empty();
        assert_eq!(net.location_count(), 0);
        assert_eq!(net.edge_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn add_location_is_idempotent() {
        let mut b = NetworkBuilder::new();
        b.add_location("A").add_location("B").add_location("A");
        assert_eq!(b.location_count(), 2);
        let net = b.build();
        assert_eq!(net.ids(), &[LocationId::from("A"), LocationId::from("B")]);
    }

    #[test]
    fn re_adding_location_keeps_edges() {
        let mut b = NetworkBuilder::new();
        b.add_edge("A", "B", 3.0).unwrap();
        b.add_location("A");
        let net = b.build();
        assert_eq!(net.weight("A", "B"), Some(3.0));
    }

    #[test]
    fn edge_auto_creates_endpoints() {
        let mut b = NetworkBuilder::new();
        b.add_edge("X", "Y", 2.5).unwrap();
        assert!(b.contains("X"));
        assert!(b.contains("Y"));
        let net = b.build();
        assert_eq!(net.location_count(), 2);
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn edges_are_symmetric() {
        let net = super::helpers::diamond();
        for loc in net.locations() {
            for (neighbor, w) in loc.neighbors() {
                assert_eq!(net.weight(neighbor.as_str(), loc.id().as_str()), Some(w));
            }
        }
        assert_eq!(net.edge_count(), 4);
    }

    #[test]
    fn last_write_wins_both_directions() {
        let mut b = NetworkBuilder::new();
        b.add_edge("A", "B", 1.0).unwrap();
        b.add_edge("B", "A", 7.0).unwrap();
        let net = b.build();
        assert_eq!(net.weight("A", "B"), Some(7.0));
        assert_eq!(net.weight("B", "A"), Some(7.0));
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.location("A").unwrap().degree(), 1);
    }

    #[test]
    fn negative_weight_rejected() {
        let mut b = NetworkBuilder::new();
        let err = b.add_edge("A", "B", -1.0).unwrap_err();
        assert!(matches!(err, NetworkError::InvalidEdgeWeight { weight, .. } if weight == -1.0));
        // Rejected edge must not create its endpoints.
        assert_eq!(b.location_count(), 0);
    }

    #[test]
    fn non_finite_weight_rejected() {
        let mut b = NetworkBuilder::new();
        assert!(b.add_edge("A", "B", f64::NAN).is_err());
        assert!(b.add_edge("A", "B", f64::INFINITY).is_err());
    }

    #[test]
    fn link_has_zero_weight() {
        let mut b = NetworkBuilder::new();
        b.add_link("A", "B");
        let net = b.build();
        assert_eq!(net.weight("B", "A"), Some(0.0));
    }

    #[test]
    fn self_loop_stored_once() {
        let mut b = NetworkBuilder::new();
        b.add_edge("A", "A", 4.0).unwrap();
        let net = b.build();
        assert_eq!(net.edge_count(), 1);
        assert_eq!(net.location("A").unwrap().degree(), 1);
    }

    #[test]
    fn from_description_keeps_isolated_locations() {
        let ids = vec![LocationId::from("A"), LocationId::from("B"), LocationId::from("Z")];
        let edges = vec![EdgeRecord::new("A", "B", 1.0)];
        let net = Network::from_description(&ids, &edges).unwrap();
        assert_eq!(net.location_count(), 3);
        assert_eq!(net.location("Z").unwrap().degree(), 0);
    }

    #[test]
    fn from_description_rejects_negative_weight() {
        let edges = vec![EdgeRecord::new("A", "B", -0.5)];
        assert!(matches!(
            Network::from_description(&[], &edges),
            Err(NetworkError::InvalidEdgeWeight { .. })
        ));
    }
}

// ── Lookup ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lookup {
    use haul_core::LocationId;

    use crate::NetworkError;

    #[test]
    fn location_not_found() {
        let net = super::helpers::diamond();
        let err = net.location("Q").unwrap_err();
        assert!(matches!(err, NetworkError::LocationNotFound(id) if id.as_str() == "Q"));
        assert!(net.slot("Q").is_err());
        assert!(!net.contains("Q"));
    }

    #[test]
    fn ids_in_insertion_order() {
        let net = super::helpers::diamond();
        let ids: Vec<&str> = net.ids().iter().map(LocationId::as_str).collect();
        assert_eq!(ids, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn neighbors_in_insertion_order() {
        let net = super::helpers::diamond();
        let c = net.location("C").unwrap();
        let neighbors: Vec<(&str, f64)> =
            c.neighbors().map(|(id, w)| (id.as_str(), w)).collect();
        assert_eq!(neighbors, vec![("B", 2.0), ("A", 5.0), ("D", 1.0)]);
    }

    #[test]
    fn weight_absent_pair() {
        let net = super::helpers::diamond();
        assert_eq!(net.weight("A", "D"), None);
        assert_eq!(net.weight("A", "nowhere"), None);
        assert_eq!(net.location("A").unwrap().weight_to("C"), Some(5.0));
    }

    #[test]
    fn slot_roundtrip() {
        let net = super::helpers::diamond();
        for id in net.ids() {
            let slot = net.slot(id.as_str()).unwrap();
            assert_eq!(net.id_at(slot), id);
        }
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use haul_core::LocationId;

    use crate::{load_network_csv, load_network_reader, read_description, NetworkError};

    const CSV: &str = "\
Mobile, Jackson, 187
Jackson, Memphis, 211.5
Mobile, New Orleans, 144
";

    #[test]
    fn reads_locations_in_first_appearance_order() {
        let (ids, edges) = read_description(Cursor::new(CSV)).unwrap();
        let names: Vec<&str> = ids.iter().map(LocationId::as_str).collect();
        assert_eq!(names, vec!["Mobile", "Jackson", "Memphis", "New Orleans"]);
        assert_eq!(edges.len(), 3);
        assert_eq!(edges[1].weight, 211.5);
    }

    #[test]
    fn builds_symmetric_network() {
        let net = load_network_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(net.location_count(), 4);
        assert_eq!(net.weight("New Orleans", "Mobile"), Some(144.0));
    }

    #[test]
    fn duplicate_pair_last_row_wins() {
        let csv = "A,B,1\nB,A,9\n";
        let net = load_network_reader(Cursor::new(csv)).unwrap();
        assert_eq!(net.weight("A", "B"), Some(9.0));
    }

    #[test]
    fn non_numeric_weight_is_parse_error() {
        let csv = "A,B,1\nB,C,far\n";
        let err = load_network_reader(Cursor::new(csv)).unwrap_err();
        match err {
            NetworkError::Parse(msg) => assert!(msg.contains("line 2"), "got {msg}"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn missing_field_is_parse_error() {
        let csv = "A,B\n";
        assert!(matches!(
            load_network_reader(Cursor::new(csv)),
            Err(NetworkError::Parse(_))
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let csv = "A,B,-3\n";
        assert!(matches!(
            load_network_reader(Cursor::new(csv)),
            Err(NetworkError::InvalidEdgeWeight { .. })
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        let net = load_network_csv(file.path()).unwrap();
        assert_eq!(net.edge_count(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_network_csv(std::path::Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, NetworkError::Io(_)));
    }
}
