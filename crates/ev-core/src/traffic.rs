//! Traffic conditions and the sampler capability that produces them.
//!
//! A traffic condition is a coarse categorical tag attached to each directed
//! road record.  It has no numeric effect on path cost — it is carried
//! through to station reports purely as information for the reader.
//!
//! Sampling is behind the [`TrafficSampler`] trait so the monitor core stays
//! agnostic to where the draws come from: production uses a seeded
//! [`UniformSampler`], tests use a [`SequenceSampler`] with a scripted
//! outcome list.

use std::fmt;

use crate::SimRng;

// ── TrafficCondition ──────────────────────────────────────────────────────────

/// Coarse congestion level of one directed road record.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrafficCondition {
    #[default]
    Low,
    Medium,
    High,
}

impl TrafficCondition {
    /// All variants in ascending severity order.
    pub const ALL: [TrafficCondition; 3] = [
        TrafficCondition::Low,
        TrafficCondition::Medium,
        TrafficCondition::High,
    ];

    /// Human-readable label, useful for report rendering and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TrafficCondition::Low    => "low",
            TrafficCondition::Medium => "medium",
            TrafficCondition::High   => "high",
        }
    }
}

impl fmt::Display for TrafficCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── TrafficSampler ────────────────────────────────────────────────────────────

/// Source of traffic condition draws.
///
/// Called once per directed record on every refresh, and once per physical
/// road at construction time (both directions of a new road start with the
/// same draw).
pub trait TrafficSampler {
    fn draw(&mut self) -> TrafficCondition;
}

// ── UniformSampler ────────────────────────────────────────────────────────────

/// Uniform draw over the three conditions, backed by a seeded [`SimRng`].
pub struct UniformSampler {
    rng: SimRng,
}

impl UniformSampler {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }

    pub fn from_rng(rng: SimRng) -> Self {
        Self { rng }
    }
}

impl TrafficSampler for UniformSampler {
    fn draw(&mut self) -> TrafficCondition {
        TrafficCondition::ALL[self.rng.gen_range(0..3usize)]
    }
}

// ── SequenceSampler ───────────────────────────────────────────────────────────

/// Replays a fixed sequence of conditions, cycling when exhausted.
///
/// The scripted stand-in for [`UniformSampler`]: tests that need exact,
/// reproducible traffic outcomes inject one of these.
pub struct SequenceSampler {
    seq:  Vec<TrafficCondition>,
    next: usize,
}

impl SequenceSampler {
    /// # Panics
    /// Panics if `seq` is empty — an empty script can never satisfy a draw.
    pub fn new(seq: Vec<TrafficCondition>) -> Self {
        assert!(!seq.is_empty(), "SequenceSampler needs at least one condition");
        Self { seq, next: 0 }
    }

    /// Shorthand: replay the same condition forever.
    pub fn constant(condition: TrafficCondition) -> Self {
        Self::new(vec![condition])
    }
}

impl TrafficSampler for SequenceSampler {
    fn draw(&mut self) -> TrafficCondition {
        let c = self.seq[self.next % self.seq.len()];
        self.next += 1;
        c
    }
}
