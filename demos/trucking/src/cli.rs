//! Command-line arguments and request assembly.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::debug;

use haul_core::{FrontierStrategy, LocationId, RouteConfig};
use haul_network::Network;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cheapest truck route through two mandatory stops", long_about = None)]
pub struct Cli {
    /// JSON route request; flags below override its fields.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV adjacency description (`location_a,location_b,weight` rows).
    #[arg(short, long)]
    pub network: Option<PathBuf>,

    /// Start location, by name or menu index (`#3`).
    #[arg(short, long)]
    pub start: Option<String>,

    /// End location, by name or menu index.
    #[arg(short, long)]
    pub end: Option<String>,

    /// Mandatory stop; give exactly two.
    #[arg(long = "via", value_name = "LOCATION")]
    pub via: Vec<String>,

    /// Frontier strategy: `rebuild` (O(V²)) or `heap` (O((V+E) log V)).
    #[arg(long)]
    pub frontier: Option<FrontierStrategy>,

    /// Print the numbered location menu and exit.
    #[arg(long)]
    pub list: bool,

    /// Debug logging to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Merge the optional config file with command-line overrides.
    ///
    /// Location fields are kept as typed; menu indices are resolved later by
    /// [`resolve_locations`] once the network is loaded.
    pub fn route_config(&self) -> Result<RouteConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                let config: RouteConfig = serde_json::from_str(&text)
                    .with_context(|| format!("parsing config {}", path.display()))?;
                debug!(path = %path.display(), "config loaded");
                config
            }
            None => {
                let Some(network) = &self.network else {
                    bail!("either --config or --network is required");
                };
                let (Some(start), Some(end)) = (&self.start, &self.end) else {
                    bail!("--start and --end are required without --config");
                };
                RouteConfig::new(network, start.as_str(), end.as_str(), self.waypoints()?)
            }
        };

        if let Some(network) = &self.network {
            config.network_path = network.clone();
        }
        if let Some(start) = &self.start {
            config.start = LocationId::new(start.as_str());
        }
        if let Some(end) = &self.end {
            config.end = LocationId::new(end.as_str());
        }
        if !self.via.is_empty() {
            config.waypoints = self.waypoints()?;
        }
        if let Some(frontier) = self.frontier {
            config.frontier = frontier;
        }
        Ok(config)
    }

    /// Network file from `--network`, else from the config file.
    pub fn network_path(&self) -> Result<PathBuf> {
        match &self.network {
            Some(path) => Ok(path.clone()),
            None => Ok(self.route_config()?.network_path),
        }
    }

    fn waypoints(&self) -> Result<[LocationId; 2]> {
        match self.via.as_slice() {
            [a, b] => Ok([LocationId::new(a.as_str()), LocationId::new(b.as_str())]),
            other => bail!("expected exactly two --via locations, got {}", other.len()),
        }
    }
}

/// Replace `#N` menu indices in `config` with the identifiers they point to.
pub fn resolve_locations(config: &mut RouteConfig, network: &Network) -> Result<()> {
    config.start = resolve(&config.start, network)?;
    config.end = resolve(&config.end, network)?;
    for w in &mut config.waypoints {
        *w = resolve(w, network)?;
    }
    Ok(())
}

fn resolve(token: &LocationId, network: &Network) -> Result<LocationId> {
    let Some(index) = token.as_str().strip_prefix('#') else {
        return Ok(token.clone());
    };
    let index: usize = index
        .parse()
        .with_context(|| format!("invalid menu index {token}"))?;
    network
        .ids()
        .get(index)
        .cloned()
        .with_context(|| {
            format!(
                "menu index {index} out of range (0 to {})",
                network.location_count().saturating_sub(1)
            )
        })
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use haul_core::{FrontierStrategy, LocationId, RouteConfig};
    use haul_network::NetworkBuilder;

    use super::{resolve_locations, Cli};

    fn network() -> haul_network::Network {
        let mut b = NetworkBuilder::new();
        b.add_edge("Mobile", "Jackson", 187.0).unwrap();
        b.add_edge("Jackson", "Memphis", 211.0).unwrap();
        b.build()
    }

    #[test]
    fn flags_build_a_config() {
        let cli = Cli::parse_from([
            "trucking", "-n", "net.csv", "-s", "A", "-e", "D", "--via", "B", "--via", "C",
            "--frontier", "heap",
        ]);
        let config = cli.route_config().unwrap();
        assert_eq!(config.start.as_str(), "A");
        assert_eq!(config.waypoints, [LocationId::from("B"), LocationId::from("C")]);
        assert_eq!(config.frontier, FrontierStrategy::Heap);
    }

    #[test]
    fn one_via_is_rejected() {
        let cli = Cli::parse_from(["trucking", "-n", "net.csv", "-s", "A", "-e", "D", "--via", "B"]);
        assert!(cli.route_config().is_err());
    }

    #[test]
    fn menu_indices_resolve_to_ids() {
        let net = network();
        let mut config = RouteConfig::new(
            "net.csv",
            "#0",
            "Memphis",
            [LocationId::from("#1"), LocationId::from("Mobile")],
        );
        resolve_locations(&mut config, &net).unwrap();
        assert_eq!(config.start.as_str(), "Mobile");
        assert_eq!(config.end.as_str(), "Memphis");
        assert_eq!(config.waypoints[0].as_str(), "Jackson");
    }

    #[test]
    fn out_of_range_index_is_error() {
        let net = network();
        let mut config = RouteConfig::new(
            "net.csv",
            "#9",
            "Memphis",
            [LocationId::from("Jackson"), LocationId::from("Mobile")],
        );
        assert!(resolve_locations(&mut config, &net).is_err());
    }
}
