//! trucking — cheapest truck route through two mandatory stops.
//!
//! Loads a CSV road network, then routes from a start city to an end city
//! through both mandatory stops in whichever order is cheaper.
//!
//! Run with:
//!   cargo run -p trucking -- --config demos/trucking/data/route.json
//!   cargo run -p trucking -- -n demos/trucking/data/Network.csv --list
//!   cargo run -p trucking -- -n demos/trucking/data/Network.csv \
//!       -s Atlanta -e Dallas --via "New Orleans" --via "St. Louis"

mod cli;
mod logging;

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use haul_network::load_network_csv;
use haul_route::{route_through_waypoints, WaypointRoute};

use cli::{resolve_locations, Cli};

const APPLICATION_NAME: &str = "Trucking Analysis Network";

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose)?;

    println!("{}", "-".repeat(APPLICATION_NAME.len()));
    println!("{APPLICATION_NAME}");
    println!("{}", "-".repeat(APPLICATION_NAME.len()));

    // 1. Menu only: needs nothing but the network.
    if cli.list {
        let path = cli.network_path()?;
        let network = load_network_csv(&path)
            .with_context(|| format!("loading network {}", path.display()))?;
        for (index, id) in network.ids().iter().enumerate() {
            println!("{index:>3}: {id}");
        }
        return Ok(());
    }

    // 2. Assemble the request (config file + flag overrides) and load the network.
    let mut config = cli.route_config()?;
    let network = load_network_csv(&config.network_path)
        .with_context(|| format!("loading network {}", config.network_path.display()))?;
    println!(
        "Network: {} locations, {} roads",
        network.location_count(),
        network.edge_count()
    );

    // 3. Resolve menu indices and sanity-check the request.
    resolve_locations(&mut config, &network)?;
    config.validate()?;
    let [w1, w2] = &config.waypoints;
    info!(
        start = %config.start,
        end = %config.end,
        via = %format!("{w1}, {w2}"),
        frontier = %config.frontier,
        "routing"
    );

    // 4. Compose the route.
    let t0 = Instant::now();
    let result = route_through_waypoints(
        &network,
        config.start.as_str(),
        config.end.as_str(),
        [w1.as_str(), w2.as_str()],
        config.frontier,
    )?;
    let elapsed = t0.elapsed();

    // 5. Report.
    println!();
    print_route(&result);
    println!();
    println!("Computed in {:.3} ms ({} frontier)", elapsed.as_secs_f64() * 1e3, config.frontier);

    Ok(())
}

fn print_route(result: &WaypointRoute) {
    let [start, first, second, end] = &result.ordering;
    println!("{start} to {end} via {first} then {second}");
    println!("  {}", join_ids(&result.route.locations));
    println!("  total distance: {}", result.distance());
    println!();
    println!("{:<28} {:>10}", "Leg", "Distance");
    println!("{}", "-".repeat(39));
    for leg in &result.legs {
        let (Some(from), Some(to)) = (leg.source(), leg.target()) else {
            continue;
        };
        println!("{:<28} {:>10}", format!("{from} -> {to}"), leg.distance);
    }
    println!();
    println!(
        "Visiting {second} before {first} would cost {}",
        result.alternative_distance
    );
}

fn join_ids(ids: &[haul_core::LocationId]) -> String {
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}
