use crate::constants::{LegWeight, Weight};
use anyhow::Context;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::{fmt, hash::Hash, path::Path};

pub use flight_reader::Leg;
use flight_reader::FlightData;

/// Default integer typer for node and edge indices
pub type DefaultIdx = u32;

pub trait IndexType: Copy + Default + Hash + Ord + fmt::Debug {
    fn new(idx: usize) -> Self;
    fn index(&self) -> usize;
    fn max() -> Self;
}

impl IndexType for u32 {
    #[inline(always)]
    fn new(x: usize) -> Self {
        x as u32
    }
    #[inline(always)]
    fn index(&self) -> usize {
        *self as usize
    }
    #[inline(always)]
    fn max() -> Self {
        ::std::u32::MAX
    }
}

/// City identifier, assigned in order of first appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex<Idx = DefaultIdx>(Idx);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(IndexType::max())
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex<Idx = DefaultIdx>(Idx);

impl<Idx: IndexType> EdgeIndex<Idx> {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(IndexType::new(x))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0.index()
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(IndexType::max())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
}

impl City {
    pub fn new(name: &str) -> Self {
        City {
            name: name.to_string(),
        }
    }
}

/// Directed flight between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge<Idx = DefaultIdx> {
    pub source: NodeIndex<Idx>,
    pub target: NodeIndex<Idx>,
    pub cost: Weight,
    pub time: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, cost: Weight, time: Weight) -> Self {
        Edge {
            source,
            target,
            cost,
            time,
        }
    }
}

#[derive(Serialize)]
struct EdgeRow<'a> {
    origin: &'a str,
    destination: &'a str,
    cost: Weight,
    time: Weight,
}

/// Adjacency list of flights keyed by city.
///
/// Outgoing edges of a city are kept in insertion order, parallel edges
/// included. This order is the order in which searches explore them.
#[derive(Clone, Debug)]
pub struct Graph<Idx = DefaultIdx> {
    pub edges_out: Vec<Vec<EdgeIndex<Idx>>>,
    pub nodes: Vec<City>,
    pub edges: Vec<Edge<Idx>>,
    node_lookup: FxHashMap<String, NodeIndex<Idx>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            edges_out: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            node_lookup: FxHashMap::default(),
        }
    }

    pub fn with_capacity(num_nodes: usize, num_edges: usize) -> Self {
        Self {
            edges_out: Vec::with_capacity(num_nodes),
            nodes: Vec::with_capacity(num_nodes),
            edges: Vec::with_capacity(num_edges),
            node_lookup: FxHashMap::with_capacity_and_hasher(num_nodes, Default::default()),
        }
    }

    /// Returns the index of `name`, adding a new city if it was not seen before.
    ///
    /// **Panics** if the Graph is at the maximum number of nodes for its index type
    pub fn add_node(&mut self, name: &str) -> NodeIndex {
        if let Some(node_idx) = self.node_lookup.get(name) {
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.nodes.len());
        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of nodes for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new node
        self.edges_out.push(Vec::new());
        self.nodes.push(City::new(name));
        self.node_lookup.insert(name.to_string(), node_idx);

        node_idx
    }

    /// Add a directed flight from `origin` to `destination`.
    ///
    /// Weights are taken as given and widened to [`Weight`], and an existing
    /// edge between the same cities is never replaced.
    ///
    /// Returns the index of the new created edge.
    pub fn add_edge(
        &mut self,
        origin: &str,
        destination: &str,
        cost: LegWeight,
        time: LegWeight,
    ) -> EdgeIndex {
        let source = self.add_node(origin);
        let target = self.add_node(destination);

        let edge_idx = EdgeIndex::new(self.edges.len());
        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out[source.index()].push(edge_idx);
        self.edges.push(Edge::new(source, target, cost.into(), time.into()));

        edge_idx
    }

    /// Add a flight in both directions with identical weights.
    pub fn add_flight(
        &mut self,
        origin: &str,
        destination: &str,
        cost: LegWeight,
        time: LegWeight,
    ) {
        self.add_edge(origin, destination, cost, time);
        self.add_edge(destination, origin, cost, time);
    }

    pub fn add_legs(&mut self, legs: &[Leg]) {
        for leg in legs {
            self.add_flight(&leg.origin, &leg.destination, leg.cost, leg.time);
        }
    }

    pub fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.node_lookup.get(name).copied()
    }

    pub fn node(&self, node_idx: NodeIndex) -> Option<&City> {
        self.nodes.get(node_idx.index())
    }

    /// Name of a city. `node_idx` must belong to this graph.
    pub fn city_name(&self, node_idx: NodeIndex) -> &str {
        &self.nodes[node_idx.index()].name
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all cities of the graph
    pub fn nodes(&self) -> impl Iterator<Item = &City> {
        self.nodes.iter()
    }

    /// Returns an iterator over all directed edges of the graph
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Outgoing edges of `city` in insertion order. Unknown cities have none.
    pub fn neighbors(&self, city: &str) -> impl Iterator<Item = &Edge> + '_ {
        let edges_out: &[EdgeIndex] = match self.node_index(city) {
            Some(node_idx) => &self.edges_out[node_idx.index()],
            None => &[],
        };
        edges_out.iter().map(move |edge_idx| &self.edges[edge_idx.index()])
    }

    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.edges_out[node_idx.index()]
            .iter()
            .map(move |edge_idx| (*edge_idx, &self.edges[edge_idx.index()]))
    }

    /// The `nth` outgoing edge of `node_idx`, if there is one.
    #[inline]
    pub fn out_edge(&self, node_idx: NodeIndex, nth: usize) -> Option<&Edge> {
        self.edges_out
            .get(node_idx.index())?
            .get(nth)
            .map(|edge_idx| &self.edges[edge_idx.index()])
    }

    pub fn out_degree(&self, node_idx: NodeIndex) -> usize {
        self.edges_out
            .get(node_idx.index())
            .map_or(0, |edges| edges.len())
    }

    pub fn from_legs(legs: &[Leg]) -> Self {
        let mut g = Graph::with_capacity(legs.len(), 2 * legs.len());
        g.add_legs(legs);
        g
    }

    pub fn from_flight_data(path: &Path) -> anyhow::Result<Self> {
        let data = FlightData::from_path(path).context("Could not read flight data")?;
        let g = Graph::from_legs(data.get_legs());

        info!(
            "Graph has {} cities and {} edges",
            g.num_nodes(),
            g.num_edges()
        );
        Ok(g)
    }

    /// Writes every directed edge as `origin,destination,cost,time`.
    pub fn export_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Could not create {}", path.display()))?;

        debug!("BEGIN writing edges");
        for edge in self.edges() {
            wtr.serialize(EdgeRow {
                origin: self.city_name(edge.source),
                destination: self.city_name(edge.target),
                cost: edge.cost,
                time: edge.time,
            })?;
        }

        wtr.flush()?;
        debug!("FINISHED writing edges");
        Ok(())
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

/// Macro to create a flight leg between two cities with cost and time
///
/// leg!("A", "B", 100, 2)
#[macro_export]
macro_rules! leg {
    ($origin:expr, $destination:expr, $cost:expr, $time:expr) => {
        $crate::graph::Leg::new($origin, $destination, $cost, $time)
    };
}
