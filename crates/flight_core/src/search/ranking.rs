use std::fmt::Display;

use crate::{constants::Weight, search::flight_path::FlightPath};

/// Metric used to rank routes, lowest first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    Time,
    #[default]
    Cost,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Time => "Time",
            SortKey::Cost => "Cost",
        }
    }

    pub fn weight(&self, path: &FlightPath) -> Weight {
        match self {
            SortKey::Time => path.time,
            SortKey::Cost => path.cost,
        }
    }
}

/// `T` ranks by time, any other character by cost
impl From<char> for SortKey {
    fn from(c: char) -> Self {
        match c {
            'T' => SortKey::Time,
            _ => SortKey::Cost,
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Sorts `paths` ascending by `key` and keeps the first `limit`.
///
/// The sort is stable, so paths with equal weight stay in discovery order.
pub fn rank(mut paths: Vec<FlightPath>, key: SortKey, limit: usize) -> Vec<FlightPath> {
    paths.sort_by_key(|path| key.weight(path));
    paths.truncate(limit);
    paths
}
