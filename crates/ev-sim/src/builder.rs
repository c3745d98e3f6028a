//! Fluent builder for constructing a [`Sim`].

use ev_core::{NodeId, SimConfig, TrafficSampler};
use ev_graph::{PathEngine, RoadNetwork, RouteError, StationSet};

use crate::{Sim, SimError, SimResult};

/// Builder for [`Sim<S, E>`] — validates the inputs a run depends on
/// before anything ticks.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, network, stations, NodeId(5),
///                               UniformSampler::new(seed), DijkstraEngine)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<S: TrafficSampler, E: PathEngine> {
    config:   SimConfig,
    network:  RoadNetwork,
    stations: StationSet,
    source:   NodeId,
    sampler:  S,
    engine:   E,
}

impl<S: TrafficSampler, E: PathEngine> SimBuilder<S, E> {
    /// Create a builder with all required inputs.
    pub fn new(
        config:   SimConfig,
        network:  RoadNetwork,
        stations: StationSet,
        source:   NodeId,
        sampler:  S,
        engine:   E,
    ) -> Self {
        Self { config, network, stations, source, sampler, engine }
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    ///
    /// Fails if the station flags don't cover exactly the network's
    /// vertices, or if the origin is out of bounds — both are caught here
    /// rather than on the first tick.
    pub fn build(self) -> SimResult<Sim<S, E>> {
        if self.stations.vertex_count() != self.network.vertex_count() {
            return Err(SimError::Config(format!(
                "station flags cover {} vertices but the network has {}",
                self.stations.vertex_count(),
                self.network.vertex_count(),
            )));
        }

        if !self.network.contains(self.source) {
            return Err(SimError::Route(RouteError::SourceOutOfBounds {
                source:       self.source,
                vertex_count: self.network.vertex_count(),
            }));
        }

        Ok(Sim {
            clock:    self.config.make_clock(),
            config:   self.config,
            network:  self.network,
            stations: self.stations,
            source:   self.source,
            sampler:  self.sampler,
            engine:   self.engine,
        })
    }
}
