//! Crate to plan flights between cities.
//!
//! Every simple route between two cities is enumerated with an iterative
//! backtracking search, ranked by time or cost and the best ones reported.
//!
//! # Basic usage
//! ```
//! use flight_core::prelude::*;
//!
//! // Create a new graph, every flight goes both ways
//! let mut g = Graph::new();
//! g.add_flight("A", "B", 100, 2);
//! g.add_flight("B", "C", 50, 3);
//!
//! // Find all routes from A to C
//! let paths = AllPaths::new(&g).search("A", "C");
//!
//! // Keep the three fastest
//! let ranked = rank(paths, SortKey::Time, 3);
//! assert_eq!(ranked[0].sequence(&g), "A -> B -> C");
//! assert_eq!((ranked[0].time, ranked[0].cost), (5, 150));
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod search;
pub mod statistics;
pub mod util;
