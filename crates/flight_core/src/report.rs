//! Turns route requests into ranked, printable flight plans.
use std::{
    fmt::Display,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context;
use flight_reader::Request;
use log::debug;

use crate::{
    constants::{Weight, MAX_PLANS},
    graph::Graph,
    search::{rank, AllPaths, FlightPath, SortKey},
    statistics::SearchStats,
};

/// A ranked route with city names resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    pub rank: usize,
    pub cities: Vec<String>,
    pub time: Weight,
    pub cost: Weight,
}

impl PlanEntry {
    fn new(rank: usize, path: &FlightPath, g: &Graph) -> Self {
        PlanEntry {
            rank,
            cities: path.cities(g).into_iter().map(String::from).collect(),
            time: path.time,
            cost: path.cost,
        }
    }
}

impl Display for PlanEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Path {}: {}. Time: {} Cost: {}",
            self.rank,
            self.cities.join(" -> "),
            self.time,
            self.cost
        )
    }
}

/// Answer to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPlan {
    /// 1-based position of the request
    pub number: usize,
    pub origin: String,
    pub destination: String,
    pub sort_key: SortKey,
    pub entries: Vec<PlanEntry>,
}

impl Display for FlightPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Flight {}: {}, {} ({})",
            self.number, self.origin, self.destination, self.sort_key
        )?;

        if self.entries.is_empty() {
            return writeln!(
                f,
                "Path 1: No available flight plan from {} to {}.",
                self.origin, self.destination
            );
        }

        for entry in self.entries.iter() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Answers requests against a shared graph.
pub struct Planner<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
    max_plans: usize,
}

impl<'a> Planner<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Planner {
            g: graph,
            max_plans: MAX_PLANS,
            stats: SearchStats::default(),
        }
    }

    pub fn max_plans(mut self, max_plans: usize) -> Self {
        self.max_plans = max_plans;
        self
    }

    pub fn plan(&mut self, number: usize, request: &Request) -> FlightPlan {
        let sort_key = SortKey::from(request.sort_key);

        let mut search = AllPaths::new(self.g);
        let paths = search.search(&request.origin, &request.destination);
        self.stats = search.stats;

        let entries = rank(paths, sort_key, self.max_plans)
            .iter()
            .enumerate()
            .map(|(i, path)| PlanEntry::new(i + 1, path, self.g))
            .collect();

        FlightPlan {
            number,
            origin: request.origin.clone(),
            destination: request.destination.clone(),
            sort_key,
            entries,
        }
    }

    /// Plans all requests in order, numbering them from 1.
    pub fn plan_all(&mut self, requests: &[Request]) -> Vec<FlightPlan> {
        requests
            .iter()
            .enumerate()
            .map(|(i, request)| self.plan(i + 1, request))
            .collect()
    }
}

/// Renders all plans, separated by a blank line.
pub fn render_report(plans: &[FlightPlan]) -> String {
    plans
        .iter()
        .map(|plan| plan.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn write_report(path: &Path, plans: &[FlightPlan]) -> anyhow::Result<()> {
    let file =
        File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    debug!("BEGIN writing {} plans", plans.len());
    writer.write_all(render_report(plans).as_bytes())?;
    writer.flush()?;
    debug!("FINISHED writing plans");

    Ok(())
}
