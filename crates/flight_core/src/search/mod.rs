pub mod all_paths;
pub mod flight_path;
pub mod ranking;

pub use all_paths::{AllPaths, Frame, SimplePaths};
pub use flight_path::FlightPath;
pub use ranking::{rank, SortKey};
