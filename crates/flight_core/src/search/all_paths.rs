//! Enumeration of all simple paths between two cities.
//!
//! The search is an iterative backtracking traversal over an explicit stack
//! of [`Frame`]s. Each frame owns a copy of the path that reached its city, so
//! sibling branches never share state. Outgoing edges are tried in insertion
//! order, which fixes the order in which paths are discovered.
use log::{debug, info};

use crate::{
    graph::{Graph, NodeIndex},
    search::flight_path::FlightPath,
    statistics::SearchStats,
};

/// Exploration state of a single city on the current branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub node: NodeIndex,
    /// Position of the next outgoing edge to try
    pub next_edge: usize,
    pub path: FlightPath,
}

impl Frame {
    fn new(node: NodeIndex, path: FlightPath) -> Self {
        Self {
            node,
            next_edge: 0,
            path,
        }
    }
}

/// Lazy iterator over all simple paths from an origin to a destination.
///
/// Paths are yielded in discovery order. Between calls to `next` the frame
/// stack can be inspected with [`SimplePaths::frames`].
pub struct SimplePaths<'a> {
    g: &'a Graph,
    destination: Option<NodeIndex>,
    stack: Vec<Frame>,
    frames_pushed: usize,
    max_depth: usize,
}

impl<'a> SimplePaths<'a> {
    pub fn new(g: &'a Graph, origin: &str, destination: &str) -> Self {
        let mut paths = SimplePaths {
            g,
            destination: g.node_index(destination),
            stack: Vec::new(),
            frames_pushed: 0,
            max_depth: 0,
        };

        // A city without outgoing flights is not a valid origin. An unknown
        // destination can never be reached.
        if let (Some(origin), Some(_)) = (g.node_index(origin), paths.destination) {
            if g.out_degree(origin) > 0 {
                paths.push(Frame::new(origin, FlightPath::new(origin)));
            }
        }

        paths
    }

    fn push(&mut self, frame: Frame) {
        self.stack.push(frame);
        self.frames_pushed += 1;
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    /// Current frame stack, bottom first
    pub fn frames(&self) -> &[Frame] {
        &self.stack
    }

    pub fn frames_pushed(&self) -> usize {
        self.frames_pushed
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl<'a> Iterator for SimplePaths<'a> {
    type Item = FlightPath;

    fn next(&mut self) -> Option<Self::Item> {
        let destination = self.destination?;

        while let Some(frame) = self.stack.last_mut() {
            if frame.node == destination {
                return self.stack.pop().map(|frame| frame.path);
            }

            let next_frame = match self.g.out_edge(frame.node, frame.next_edge) {
                Some(edge) => {
                    frame.next_edge += 1;
                    if frame.path.contains(edge.target) {
                        continue;
                    }
                    Some(Frame::new(edge.target, frame.path.extend(edge)))
                }
                None => None,
            };

            match next_frame {
                Some(next_frame) => self.push(next_frame),
                // All edges tried, backtrack
                None => {
                    self.stack.pop();
                }
            }
        }

        None
    }
}

pub struct AllPaths<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> AllPaths<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        AllPaths {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Returns every simple path from `origin` to `destination` in discovery order.
    pub fn search(&mut self, origin: &str, destination: &str) -> Vec<FlightPath> {
        self.stats.init();

        let mut simple_paths = SimplePaths::new(self.g, origin, destination);
        let paths: Vec<FlightPath> = simple_paths.by_ref().collect();

        self.stats.frames_pushed = simple_paths.frames_pushed();
        self.stats.max_depth = simple_paths.max_depth();
        self.stats.paths_found = paths.len();
        self.stats.finish();

        for path in paths.iter() {
            debug!(
                "Path found: {} (cost {}, time {})",
                path.sequence(self.g),
                path.cost,
                path.time
            );
        }
        info!("{} -> {}: {}", origin, destination, self.stats);

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        graph::Leg,
        leg,
        util::test_graphs::{generate_complex_graph, generate_simple_graph},
    };
    use proptest::prelude::*;

    fn sequences(g: &Graph, paths: &[FlightPath]) -> Vec<String> {
        paths.iter().map(|p| p.sequence(g)).collect()
    }

    #[test]
    fn single_path() {
        let g = generate_simple_graph();
        let paths = AllPaths::new(&g).search("A", "C");

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].sequence(&g), "A -> B -> C");
        assert_eq!(paths[0].time, 5);
        assert_eq!(paths[0].cost, 150);
    }

    #[test]
    fn origin_is_destination() {
        let g = generate_simple_graph();
        let paths = AllPaths::new(&g).search("B", "B");

        assert_eq!(sequences(&g, &paths), vec!["B"]);
        assert_eq!((paths[0].cost, paths[0].time), (0, 0));
    }

    #[test]
    fn unknown_origin() {
        let g = generate_simple_graph();

        assert!(AllPaths::new(&g).search("X", "C").is_empty());
        assert!(AllPaths::new(&g).search("X", "X").is_empty());
        assert!(AllPaths::new(&g).search("A", "Y").is_empty());
    }

    #[test]
    fn origin_without_outgoing_edges() {
        let mut g = Graph::new();
        g.add_edge("A", "B", 1, 1);

        assert!(AllPaths::new(&g).search("B", "B").is_empty());
        assert!(AllPaths::new(&g).search("B", "A").is_empty());
        assert_eq!(AllPaths::new(&g).search("A", "B").len(), 1);
    }

    #[test]
    fn disconnected_graph() {
        // A - B    X - Y
        let g = Graph::from_legs(&[leg!("A", "B", 1, 1), leg!("X", "Y", 1, 1)]);

        assert!(AllPaths::new(&g).search("X", "A").is_empty());
        assert!(AllPaths::new(&g).search("A", "Y").is_empty());
    }

    #[test]
    fn parallel_edges() {
        let g = Graph::from_legs(&[leg!("A", "B", 10, 1), leg!("A", "B", 20, 5)]);
        let paths = AllPaths::new(&g).search("A", "B");

        assert_eq!(sequences(&g, &paths), vec!["A -> B", "A -> B"]);
        assert_eq!(paths[0].cost, 10);
        assert_eq!(paths[1].cost, 20);
    }

    #[test]
    fn self_loop_is_ignored() {
        let g = Graph::from_legs(&[leg!("A", "A", 1, 1), leg!("A", "B", 2, 2)]);
        let paths = AllPaths::new(&g).search("A", "B");

        assert_eq!(sequences(&g, &paths), vec!["A -> B"]);
    }

    #[test]
    fn discovery_order() {
        // A - B
        // |   |
        // C - D
        let g = Graph::from_legs(&[
            leg!("A", "B", 1, 1),
            leg!("A", "C", 1, 1),
            leg!("B", "D", 1, 1),
            leg!("C", "D", 1, 1),
        ]);
        let paths = AllPaths::new(&g).search("A", "D");

        assert_eq!(sequences(&g, &paths), vec!["A -> B -> D", "A -> C -> D"]);
    }

    #[test]
    fn go_around() {
        // A - B - D
        //  \     /
        //   - C -
        // plus A - D
        let g = Graph::from_legs(&[
            leg!("A", "D", 1, 1),
            leg!("A", "B", 1, 1),
            leg!("B", "D", 1, 1),
            leg!("A", "C", 1, 1),
            leg!("C", "D", 1, 1),
        ]);
        let paths = AllPaths::new(&g).search("A", "D");

        assert_eq!(
            sequences(&g, &paths),
            vec!["A -> D", "A -> B -> D", "A -> C -> D"]
        );
    }

    #[test]
    fn complex_graph_paths_are_simple() {
        let g = generate_complex_graph();
        let paths = AllPaths::new(&g).search("A", "G");

        assert!(!paths.is_empty());
        for path in paths.iter() {
            assert_valid_path(&g, path, "A", "G");
        }
    }

    #[test]
    fn frames_can_be_inspected() {
        let g = generate_simple_graph();
        let a = g.node_index("A").unwrap();
        let b = g.node_index("B").unwrap();

        let mut paths = SimplePaths::new(&g, "A", "C");
        assert_eq!(paths.frames(), &[Frame::new(a, FlightPath::new(a))]);

        let first = paths.next().unwrap();
        assert_eq!(first.sequence(&g), "A -> B -> C");

        // C was consumed, A and B are fully advanced
        let frames = paths.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!((frames[0].node, frames[0].next_edge), (a, 1));
        assert_eq!((frames[1].node, frames[1].next_edge), (b, 2));

        assert!(paths.next().is_none());
        assert!(paths.frames().is_empty());
        assert_eq!(paths.frames_pushed(), 3);
    }

    #[test]
    fn graph_is_shared_between_searches() {
        let g = generate_complex_graph();
        let mut first = SimplePaths::new(&g, "A", "K");
        let mut second = SimplePaths::new(&g, "K", "A");

        let mut forward = Vec::new();
        let mut backward = Vec::new();
        loop {
            match (first.next(), second.next()) {
                (None, None) => break,
                (f, s) => {
                    forward.extend(f);
                    backward.extend(s);
                }
            }
        }

        assert_eq!(forward.len(), backward.len());
        assert_eq!(forward, AllPaths::new(&g).search("A", "K"));
    }

    fn assert_valid_path(g: &Graph, path: &FlightPath, origin: &str, destination: &str) {
        assert_eq!(g.city_name(path.origin()), origin);
        assert_eq!(g.city_name(path.destination()), destination);

        let mut seen = path.nodes.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), path.len(), "repeated city in {:?}", path);

        for pair in path.nodes.windows(2) {
            assert!(
                g.neighbors_outgoing(pair[0])
                    .any(|(_, edge)| edge.target == pair[1]),
                "no edge between {:?}",
                pair
            );
        }
    }

    type Route = (Vec<String>, i64, i64);

    /// All routes built by trying every ordering of distinct cities.
    fn brute_force(g: &Graph, origin: &str, destination: &str) -> Vec<Route> {
        let mut routes = Vec::new();
        if g.neighbors(origin).next().is_none() {
            return routes;
        }
        let mut cities = vec![origin.to_string()];
        brute_force_from(g, destination, &mut cities, 0, 0, &mut routes);
        routes
    }

    fn brute_force_from(
        g: &Graph,
        destination: &str,
        cities: &mut Vec<String>,
        cost: i64,
        time: i64,
        routes: &mut Vec<Route>,
    ) {
        let last = cities[cities.len() - 1].clone();
        if last == destination {
            routes.push((cities.clone(), cost, time));
            return;
        }
        for next in g.nodes().map(|c| c.name.clone()) {
            if cities.contains(&next) {
                continue;
            }
            let edges: Vec<_> = g
                .neighbors(&last)
                .filter(|e| g.city_name(e.target) == next)
                .cloned()
                .collect();
            for edge in edges {
                cities.push(next.clone());
                brute_force_from(
                    g,
                    destination,
                    cities,
                    cost + edge.cost,
                    time + edge.time,
                    routes,
                );
                cities.pop();
            }
        }
    }

    fn arb_legs() -> impl Strategy<Value = Vec<Leg>> {
        prop::collection::vec((0..5usize, 0..5usize, -5..20i32, 0..20i32), 0..9).prop_map(
            |legs| {
                legs.into_iter()
                    .map(|(o, d, cost, time)| {
                        Leg::new(&format!("C{}", o), &format!("C{}", d), cost, time)
                    })
                    .collect()
            },
        )
    }

    proptest! {
        #[test]
        fn paths_are_valid(legs in arb_legs(), o in 0..5usize, d in 0..5usize) {
            let g = Graph::from_legs(&legs);
            let (origin, destination) = (format!("C{}", o), format!("C{}", d));

            for path in AllPaths::new(&g).search(&origin, &destination).iter() {
                assert_valid_path(&g, path, &origin, &destination);
                let cities = path.cities(&g);
                prop_assert_eq!(cities[0], origin.as_str());
            }
        }

        #[test]
        fn search_is_complete(legs in arb_legs(), o in 0..5usize, d in 0..5usize) {
            let g = Graph::from_legs(&legs);
            let (origin, destination) = (format!("C{}", o), format!("C{}", d));

            let mut found: Vec<Route> = AllPaths::new(&g)
                .search(&origin, &destination)
                .iter()
                .map(|p| {
                    let cities: Vec<String> =
                        p.cities(&g).into_iter().map(String::from).collect();
                    (cities, p.cost, p.time)
                })
                .collect();
            let mut expected = brute_force(&g, &origin, &destination);

            found.sort();
            expected.sort();
            prop_assert_eq!(found, expected);
        }

        #[test]
        fn origin_is_its_own_route(legs in arb_legs(), o in 0..5usize) {
            let g = Graph::from_legs(&legs);
            let origin = format!("C{}", o);

            let paths = AllPaths::new(&g).search(&origin, &origin);
            if g.neighbors(&origin).next().is_none() {
                prop_assert!(paths.is_empty());
            } else {
                prop_assert_eq!(paths.len(), 1);
                prop_assert_eq!((paths[0].len(), paths[0].cost, paths[0].time), (1, 0, 0));
            }
        }
    }
}
