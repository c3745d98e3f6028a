//! metro — reachability monitor demo for the rust_ev crates.
//!
//! Watches four charging stations across a 15-vertex metro road network
//! from a fixed origin, re-running the shortest-path computation every
//! five seconds as traffic conditions churn.

mod topology;

use std::thread;
use std::time::Duration;

use anyhow::Result;

use ev_core::{SimConfig, Tick, UniformSampler};
use ev_graph::{DijkstraEngine, StationStatus};
use ev_sim::{SimBuilder, SimObserver};

use topology::{SOURCE, VERTEX_COUNT};

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS:        u64 = 5;
const TICK_DURATION_SECS: u32 = 5;
const SEED:               u64 = 42;

// ── Report renderer ───────────────────────────────────────────────────────────

struct ReportPrinter {
    tick_duration_secs: u32,
}

impl SimObserver for ReportPrinter {
    fn on_report(&mut self, tick: Tick, statuses: &[StationStatus]) {
        println!();
        println!("Time: after {} seconds", tick.0 * self.tick_duration_secs as u64);
        println!("Stations reachable from vertex {}:", SOURCE.0);
        for status in statuses {
            match status {
                StationStatus::Reached { station, distance, path, traffic } => {
                    let route: Vec<String> = path.iter().map(|n| n.0.to_string()).collect();
                    let traffic = traffic.map_or("n/a", |t| t.as_str());
                    println!(
                        "  station {:>2}  distance {:>5}  traffic {:<6}  via {}",
                        station.0,
                        distance,
                        traffic,
                        route.join(" -> "),
                    );
                }
                StationStatus::Unreachable { station } => {
                    println!("  station {:>2}  unreachable", station.0);
                }
            }
        }
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        println!();
        println!("Monitor stopped after {} ticks.", final_tick.0);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== metro — rust_ev reachability monitor ===");

    let config = SimConfig {
        total_ticks:        TOTAL_TICKS,
        tick_duration_secs: TICK_DURATION_SECS,
        seed:               SEED,
    };

    let mut sampler = UniformSampler::new(config.seed);
    let (network, stations) = topology::build(&mut sampler)?;
    println!(
        "Network: {} vertices, {} roads  |  {} stations  |  origin {}",
        VERTEX_COUNT,
        network.road_count(),
        stations.count(),
        SOURCE.0,
    );

    let mut sim = SimBuilder::new(config, network, stations, SOURCE, sampler, DijkstraEngine)
        .build()?;

    let mut printer = ReportPrinter { tick_duration_secs: TICK_DURATION_SECS };

    // Pacing lives here, not in the core: step one tick, then wait.
    for i in 0..TOTAL_TICKS {
        sim.run_ticks(1, &mut printer)?;
        if i + 1 < TOTAL_TICKS {
            thread::sleep(Duration::from_secs(TICK_DURATION_SECS as u64));
        }
    }
    printer.on_sim_end(sim.current_tick());

    Ok(())
}
