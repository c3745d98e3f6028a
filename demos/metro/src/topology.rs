//! The 15-vertex metro-area topology.
//!
//! A synthetic city: vertices are intersections, stations sit at vertices
//! 1, 3, 7 and 8, and the monitored driver is parked at vertex 5.  Two
//! roads into vertex 7 start the run closed, cutting that station off
//! until an operator reopens them in the data.

use std::io::Cursor;

use ev_core::{NodeId, TrafficSampler};
use ev_graph::{load_topology_reader, GraphResult, RoadNetwork, StationSet};

pub const VERTEX_COUNT: usize = 15;

/// Fixed origin: the driver's current location.
pub const SOURCE: NodeId = NodeId(5);

/// Roads as `a,b,weight,closed` rows.
const ROADS_CSV: &str = "\
a,b,weight,closed\n\
0,12,60,false\n\
1,9,350,false\n\
1,12,700,false\n\
2,9,400,false\n\
2,3,190,false\n\
2,8,300,false\n\
3,4,260,false\n\
3,13,400,false\n\
4,5,240,false\n\
4,6,280,false\n\
5,8,70,false\n\
5,10,950,false\n\
6,13,350,false\n\
6,14,400,false\n\
7,14,50,true\n\
7,13,500,true\n\
8,11,2800,false\n\
9,13,600,false\n\
9,12,550,false\n\
10,14,850,false\n\
11,14,1700,false\n\
";

/// Build the network (drawing initial traffic from `sampler`) and the
/// station flag set.
pub fn build<S: TrafficSampler>(sampler: &mut S) -> GraphResult<(RoadNetwork, StationSet)> {
    let network = load_topology_reader(Cursor::new(ROADS_CSV), VERTEX_COUNT, sampler)?;
    let stations = StationSet::from_nodes(
        VERTEX_COUNT,
        &[NodeId(1), NodeId(3), NodeId(7), NodeId(8)],
    )?;
    Ok((network, stations))
}
