use std::{
    fmt::Display,
    time::{Duration, Instant},
};

use crate::graph::{Graph, NodeIndex};

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub frames_pushed: usize,
    pub max_depth: usize,
    pub paths_found: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.frames_pushed = 0;
        self.max_depth = 0;
        self.paths_found = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} paths found, {} frames pushed (max depth {}) in {:?}",
            self.paths_found, self.frames_pushed, self.max_depth, self.duration
        )
    }
}

pub fn average_out_degree(g: &Graph) -> f64 {
    if g.num_nodes() == 0 {
        return 0.0;
    }
    let mut sum = 0.0;
    for node in 0..g.num_nodes() {
        sum += g.out_degree(NodeIndex::new(node)) as f64;
    }
    sum / g.num_nodes() as f64
}

pub fn max_out_degree(g: &Graph) -> usize {
    (0..g.num_nodes())
        .map(|node| g.out_degree(NodeIndex::new(node)))
        .max()
        .unwrap_or(0)
}
