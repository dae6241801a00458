use crate::{
    constants::Weight,
    graph::{Edge, Graph, NodeIndex},
};

/// A route through distinct cities together with its accumulated cost and time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FlightPath {
    pub nodes: Vec<NodeIndex>,
    pub cost: Weight,
    pub time: Weight,
}

impl FlightPath {
    /// Path consisting of `start` only
    pub fn new(start: NodeIndex) -> Self {
        FlightPath {
            nodes: vec![start],
            cost: 0,
            time: 0,
        }
    }

    /// Returns a copy of this path extended by `edge`.
    pub fn extend(&self, edge: &Edge) -> Self {
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(edge.target);

        FlightPath {
            nodes,
            cost: self.cost + edge.cost,
            time: self.time + edge.time,
        }
    }

    pub fn contains(&self, node_idx: NodeIndex) -> bool {
        self.nodes.contains(&node_idx)
    }

    pub fn origin(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of cities on the path
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn cities<'g>(&self, g: &'g Graph) -> Vec<&'g str> {
        self.nodes.iter().map(|n| g.city_name(*n)).collect()
    }

    /// City names joined by arrows, e.g. `A -> B -> C`
    pub fn sequence(&self, g: &Graph) -> String {
        self.cities(g).join(" -> ")
    }
}
