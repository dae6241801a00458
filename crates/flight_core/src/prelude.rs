//! Re-exports of the most commonly used items in `flight_core`.
pub use crate::report::{render_report, write_report, FlightPlan, Planner};

pub use crate::search;
pub use crate::search::{rank, AllPaths, FlightPath, SimplePaths, SortKey};

pub use crate::graph::node_index;
pub use crate::graph::Graph;
pub use crate::util::test_graphs::generate_simple_graph;

pub use flight_reader::{FlightData, Leg, Request};
