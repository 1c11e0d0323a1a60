//! Unit tests for haul-core primitives.

#[cfg(test)]
mod ids {
    use std::collections::HashMap;

    use crate::LocationId;

    #[test]
    fn display_is_raw_name() {
        assert_eq!(LocationId::new("Memphis").to_string(), "Memphis");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(LocationId::from("Atlanta") < LocationId::from("Boston"));
        assert!(LocationId::from("B") > LocationId::from("A"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut m = HashMap::new();
        m.insert(LocationId::from("Dallas"), 3);
        assert_eq!(m.get("Dallas"), Some(&3));
        assert_eq!(m.get("Denver"), None);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, FrontierStrategy, LocationId, RouteConfig};

    fn config() -> RouteConfig {
        RouteConfig::new(
            "Network.csv",
            "A",
            "D",
            [LocationId::from("B"), LocationId::from("C")],
        )
    }

    #[test]
    fn default_frontier_is_rebuild() {
        assert_eq!(config().frontier, FrontierStrategy::Rebuild);
    }

    #[test]
    fn valid_config_passes() {
        assert!(config().validate().is_ok());
    }

    #[test]
    fn duplicate_waypoints_rejected() {
        let mut c = config();
        c.waypoints = [LocationId::from("B"), LocationId::from("B")];
        assert!(matches!(c.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn empty_network_path_rejected() {
        let mut c = config();
        c.network_path = "".into();
        assert!(c.validate().is_err());
    }

    #[test]
    fn frontier_from_str() {
        assert_eq!("heap".parse::<FrontierStrategy>().unwrap(), FrontierStrategy::Heap);
        assert_eq!(" Rebuild ".parse::<FrontierStrategy>().unwrap(), FrontierStrategy::Rebuild);
        assert!(matches!(
            "fibonacci".parse::<FrontierStrategy>(),
            Err(CoreError::Parse(_))
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_without_frontier_uses_default() {
        let json = r#"{
            "network_path": "Network.csv",
            "start": "A",
            "end": "D",
            "waypoints": ["B", "C"]
        }"#;
        let c: RouteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c, config());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_frontier_lowercase() {
        let json = r#"{
            "network_path": "n.csv",
            "start": "A",
            "end": "D",
            "waypoints": ["B", "C"],
            "frontier": "heap"
        }"#;
        let c: RouteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(c.frontier, FrontierStrategy::Heap);
    }
}
