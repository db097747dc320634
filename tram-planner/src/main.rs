use std::env;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use tram_planner::catalog::StopCatalog;
use tram_planner::loader::{Network, sample};
use tram_planner::network::RouteGraph;
use tram_planner::planner::Planner;
use tram_planner::zones::identify_zones;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let (Some(origin), Some(destination)) = (args.next(), args.next()) else {
        eprintln!("Usage: tram-planner <origin> <destination>");
        eprintln!();
        eprintln!("Identifiers may be a stop name or short code, in any casing.");
        eprintln!("Set TRAM_NETWORK to a network JSON file to override the");
        eprintln!("bundled Metrolink sample network.");
        return ExitCode::from(2);
    };

    // The network file path is injected configuration; the engine itself
    // never reads it.
    let network = match env::var("TRAM_NETWORK") {
        Ok(path) => match Network::from_path(&path) {
            Ok(network) => network,
            Err(e) => {
                eprintln!("Failed to load network from {path}: {e}");
                return ExitCode::FAILURE;
            }
        },
        Err(_) => sample::metrolink(),
    };

    let catalog = StopCatalog::new(network.stops());
    let graph = match RouteGraph::new(network.stops(), network.routes()) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Invalid network configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let planner = Planner::new(&graph);

    let origin = match catalog.resolve(&origin) {
        Ok(stop) => stop,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let destination = match catalog.resolve(&destination) {
        Ok(stop) => stop,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let journey = match planner.plan(origin, destination) {
        Ok(journey) => journey,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Journey: {} -> {}", journey.origin(), journey.destination());
    match journey.interchange_stop() {
        Some(change) => println!("Change trams at {change}."),
        None => println!("Direct service, no change of tram required."),
    }

    let calls: Vec<&str> = journey.calling_points().map(|s| s.name.as_str()).collect();
    println!("Calling at: {}", calls.join(", "));

    match identify_zones(&journey) {
        Ok(zones) => {
            let zones: Vec<String> = zones.iter().map(u32::to_string).collect();
            println!("Fare zones crossed: {}", zones.join(", "));
        }
        Err(e) => {
            eprintln!("Zone identification failed: {e}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
