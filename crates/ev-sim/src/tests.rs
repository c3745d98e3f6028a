//! Integration tests for ev-sim.

use ev_core::{NodeId, SequenceSampler, SimConfig, Tick, TrafficCondition};
use ev_graph::{DijkstraEngine, RoadNetwork, RoadNetworkBuilder, StationSet, StationStatus};

use crate::{NoopObserver, SimBuilder, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        total_ticks,
        tick_duration_secs: 5,
        seed: 42,
    }
}

/// The reference 4-vertex network; the 2-3 road is closed when
/// `last_closed` is true.  Station flags on vertices 1 and 3.
fn quad_setup(last_closed: bool) -> (RoadNetwork, StationSet) {
    let mut sampler = SequenceSampler::constant(TrafficCondition::Low);
    let mut b = RoadNetworkBuilder::new(4);
    b.add_road(NodeId(0), NodeId(1), 10, false, &mut sampler).unwrap();
    b.add_road(NodeId(1), NodeId(2), 10, false, &mut sampler).unwrap();
    b.add_road(NodeId(0), NodeId(2), 5, false, &mut sampler).unwrap();
    b.add_road(NodeId(2), NodeId(3), 100, last_closed, &mut sampler).unwrap();
    let stations = StationSet::from_nodes(4, &[NodeId(1), NodeId(3)]).unwrap();
    (b.build(), stations)
}

fn constant_sampler() -> SequenceSampler {
    SequenceSampler::constant(TrafficCondition::Medium)
}

/// Records every callback for later assertions.
#[derive(Default)]
struct RecordingObserver {
    tick_starts: Vec<Tick>,
    reports:     Vec<(Tick, Vec<StationStatus>)>,
    ended_at:    Option<Tick>,
}

impl SimObserver for RecordingObserver {
    fn on_tick_start(&mut self, tick: Tick) {
        self.tick_starts.push(tick);
    }

    fn on_report(&mut self, tick: Tick, statuses: &[StationStatus]) {
        self.reports.push((tick, statuses.to_vec()));
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.ended_at = Some(final_tick);
    }
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully() {
        let (net, stations) = quad_setup(false);
        let sim = SimBuilder::new(
            test_config(5), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();
        assert_eq!(sim.current_tick(), Tick::ZERO);
        assert_eq!(sim.stations.count(), 2);
    }

    #[test]
    fn station_flag_count_mismatch_errors() {
        let (net, _) = quad_setup(false);
        let wrong = StationSet::from_nodes(5, &[NodeId(1)]).unwrap(); // 5 ≠ 4
        let result = SimBuilder::new(
            test_config(5), net, wrong, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn source_out_of_bounds_errors() {
        let (net, stations) = quad_setup(false);
        let result = SimBuilder::new(
            test_config(5), net, stations, NodeId(9), constant_sampler(), DijkstraEngine,
        )
        .build();
        assert!(matches!(result, Err(SimError::Route(_))));
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn runs_to_end_tick_with_one_report_per_tick() {
        let (net, stations) = quad_setup(false);
        let mut sim = SimBuilder::new(
            test_config(3), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();

        let mut obs = RecordingObserver::default();
        sim.run(&mut obs).unwrap();

        assert_eq!(obs.tick_starts, vec![Tick(0), Tick(1), Tick(2)]);
        assert_eq!(obs.reports.len(), 3);
        assert_eq!(obs.ended_at, Some(Tick(3)));
        assert_eq!(sim.current_tick(), Tick(3));
        // Two flagged stations → two statuses per report, ascending.
        for (_, statuses) in &obs.reports {
            assert_eq!(statuses.len(), 2);
            assert_eq!(statuses[0].station(), NodeId(1));
            assert_eq!(statuses[1].station(), NodeId(3));
        }
    }

    #[test]
    fn run_ticks_steps_incrementally() {
        let (net, stations) = quad_setup(false);
        let mut sim = SimBuilder::new(
            test_config(10), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();

        sim.run_ticks(1, &mut NoopObserver).unwrap();
        assert_eq!(sim.current_tick(), Tick(1));

        let mut obs = RecordingObserver::default();
        sim.run_ticks(2, &mut obs).unwrap();
        assert_eq!(sim.current_tick(), Tick(3));
        assert_eq!(obs.reports.len(), 2);
        // run_ticks never fires the end-of-run hook.
        assert!(obs.ended_at.is_none());
    }

    #[test]
    fn closed_station_unreachable_open_station_reached() {
        let (net, stations) = quad_setup(true);
        let mut sim = SimBuilder::new(
            test_config(1), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();

        let mut obs = RecordingObserver::default();
        sim.run(&mut obs).unwrap();

        let statuses = &obs.reports[0].1;
        match &statuses[0] {
            StationStatus::Reached { station, distance, path, traffic } => {
                assert_eq!(*station, NodeId(1));
                assert_eq!(*distance, 10);
                assert_eq!(*path, vec![NodeId(0), NodeId(1)]);
                assert_eq!(*traffic, Some(TrafficCondition::Medium));
            }
            other => panic!("expected Reached, got {other:?}"),
        }
        assert_eq!(statuses[1], StationStatus::Unreachable { station: NodeId(3) });
    }

    #[test]
    fn reopened_road_reaches_station() {
        let (net, stations) = quad_setup(false);
        let mut sim = SimBuilder::new(
            test_config(1), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();

        let mut obs = RecordingObserver::default();
        sim.run(&mut obs).unwrap();

        match &obs.reports[0].1[1] {
            StationStatus::Reached { distance, path, .. } => {
                assert_eq!(*distance, 105);
                assert_eq!(*path, vec![NodeId(0), NodeId(2), NodeId(3)]);
            }
            other => panic!("expected Reached, got {other:?}"),
        }
    }

    #[test]
    fn traffic_refreshed_every_tick() {
        let (net, stations) = quad_setup(false);
        // 8 records per refresh against a 9-entry cycle: each tick shifts
        // the script by one, so station 1's representative record (the 3rd
        // draw of a refresh) sees cycle index 2 on tick 0 and index 1 on
        // tick 1.
        let sampler = SequenceSampler::new(vec![
            TrafficCondition::Low,
            TrafficCondition::High,
            TrafficCondition::Low,
            TrafficCondition::Low,
            TrafficCondition::Low,
            TrafficCondition::Low,
            TrafficCondition::Low,
            TrafficCondition::Low,
            TrafficCondition::Low,
        ]);
        let mut sim = SimBuilder::new(
            test_config(2), net, stations, NodeId(0), sampler, DijkstraEngine,
        )
        .build()
        .unwrap();

        let mut obs = RecordingObserver::default();
        sim.run(&mut obs).unwrap();

        let traffic_at = |tick: usize| match &obs.reports[tick].1[0] {
            StationStatus::Reached { traffic, .. } => traffic.unwrap(),
            other => panic!("expected Reached, got {other:?}"),
        };
        assert_eq!(traffic_at(0), TrafficCondition::Low);
        assert_eq!(traffic_at(1), TrafficCondition::High);
    }

    #[test]
    fn identical_seeds_give_identical_reports() {
        let run = || {
            let (net, stations) = quad_setup(false);
            let script = vec![
                TrafficCondition::Medium,
                TrafficCondition::High,
                TrafficCondition::Low,
            ];
            let mut sim = SimBuilder::new(
                test_config(4),
                net,
                stations,
                NodeId(0),
                SequenceSampler::new(script),
                DijkstraEngine,
            )
            .build()
            .unwrap();
            let mut obs = RecordingObserver::default();
            sim.run(&mut obs).unwrap();
            obs.reports
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn zero_tick_run_only_fires_end_hook() {
        let (net, stations) = quad_setup(false);
        let mut sim = SimBuilder::new(
            test_config(0), net, stations, NodeId(0), constant_sampler(), DijkstraEngine,
        )
        .build()
        .unwrap();

        let mut obs = RecordingObserver::default();
        sim.run(&mut obs).unwrap();
        assert!(obs.reports.is_empty());
        assert_eq!(obs.ended_at, Some(Tick(0)));
    }
}
