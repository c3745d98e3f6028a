//! Unit tests for ev-core primitives.

#[cfg(test)]
mod ids {
    use crate::{NodeId, RecordId, RoadId};

    #[test]
    fn index_roundtrip() {
        let id = NodeId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(NodeId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(NodeId(0) < NodeId(1));
        assert!(RoadId(100) > RoadId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(NodeId::INVALID.0, u32::MAX);
        assert_eq!(RoadId::INVALID.0, u32::MAX);
        assert_eq!(RecordId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(NodeId(7).to_string(), "NodeId(7)");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, SimConfig, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_elapsed() {
        let mut clock = SimClock::new(5); // 1 tick = 5 seconds
        assert_eq!(clock.elapsed_secs(), 0);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 5);
        clock.advance();
        assert_eq!(clock.elapsed_secs(), 10);
    }

    #[test]
    fn sim_config_end_tick() {
        let cfg = SimConfig {
            total_ticks:        5,
            tick_duration_secs: 5,
            seed:               42,
        };
        assert_eq!(cfg.end_tick(), Tick(5));
        assert_eq!(cfg.make_clock().current_tick, Tick::ZERO);
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: u64 = r1.random();
            let b: u64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn gen_range_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.gen_range(0..3usize);
            assert!(v < 3);
        }
    }
}

#[cfg(test)]
mod traffic {
    use crate::{SequenceSampler, TrafficCondition, TrafficSampler, UniformSampler};

    #[test]
    fn display() {
        assert_eq!(TrafficCondition::Low.to_string(), "low");
        assert_eq!(TrafficCondition::High.to_string(), "high");
    }

    #[test]
    fn uniform_draws_are_deterministic_per_seed() {
        let mut s1 = UniformSampler::new(7);
        let mut s2 = UniformSampler::new(7);
        for _ in 0..100 {
            assert_eq!(s1.draw(), s2.draw());
        }
    }

    #[test]
    fn uniform_eventually_hits_every_condition() {
        let mut sampler = UniformSampler::new(1);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            seen[sampler.draw() as usize] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn sequence_replays_and_cycles() {
        let mut sampler = SequenceSampler::new(vec![
            TrafficCondition::High,
            TrafficCondition::Low,
        ]);
        assert_eq!(sampler.draw(), TrafficCondition::High);
        assert_eq!(sampler.draw(), TrafficCondition::Low);
        assert_eq!(sampler.draw(), TrafficCondition::High); // wrapped
    }

    #[test]
    fn constant_sampler() {
        let mut sampler = SequenceSampler::constant(TrafficCondition::Medium);
        for _ in 0..5 {
            assert_eq!(sampler.draw(), TrafficCondition::Medium);
        }
    }

    #[test]
    #[should_panic]
    fn empty_sequence_panics() {
        SequenceSampler::new(vec![]);
    }
}
