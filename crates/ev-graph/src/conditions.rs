//! Per-tick traffic condition refresh.

use ev_core::{RecordId, TrafficSampler};

use crate::network::RoadNetwork;

/// Redraw the traffic condition of every directed record in the network.
///
/// Each record gets exactly one fresh draw per call, in `RecordId` order.
/// The two directions of a physical road are independent records here, so
/// their conditions diverge as soon as the draws differ.  Weights and
/// closure flags are untouched — this is the only mutation the monitor
/// performs between shortest-path recomputations.
pub fn refresh_all<S: TrafficSampler>(network: &mut RoadNetwork, sampler: &mut S) {
    for i in 0..network.record_count() {
        let condition = sampler.draw();
        network.set_traffic(RecordId(i as u32), condition);
    }
}
