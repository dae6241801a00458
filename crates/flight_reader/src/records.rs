use std::str::FromStr;

use anyhow::{bail, Context};

/// Field separator used by both input files
pub const SEPARATOR: char = '|';

/// Weight of a single leg as it appears in the input
pub type LegWeight = i32;

/// One line of the flight data file: an undirected connection between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub origin: String,
    pub destination: String,
    pub cost: LegWeight,
    pub time: LegWeight,
}

impl Leg {
    pub fn new(origin: &str, destination: &str, cost: LegWeight, time: LegWeight) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            cost,
            time,
        }
    }
}

/// One line of the request file: a route query and the metric to rank by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub origin: String,
    pub destination: String,
    /// First character of the sort field, `T` for time. Everything else ranks by cost.
    pub sort_key: char,
}

impl Request {
    pub fn new(origin: &str, destination: &str, sort_key: char) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            sort_key,
        }
    }
}

/// Splits a record into its fields. City names are kept verbatim, only a
/// trailing line ending is removed.
fn split_fields(s: &str, expected: usize) -> anyhow::Result<Vec<&str>> {
    let fields: Vec<&str> = s
        .trim_end_matches(|c: char| c == '\r' || c == '\n')
        .split(SEPARATOR)
        .collect();
    if fields.len() != expected {
        bail!(
            "Expected {} '{}'-separated fields but found {} in '{}'",
            expected,
            SEPARATOR,
            fields.len(),
            s
        );
    }
    Ok(fields)
}

fn parse_weight(field: &str, name: &str) -> anyhow::Result<LegWeight> {
    field
        .trim()
        .parse::<LegWeight>()
        .with_context(|| format!("Failed to parse {} '{}'", name, field))
}

impl FromStr for Leg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s, 4)?;
        Ok(Leg {
            origin: fields[0].to_string(),
            destination: fields[1].to_string(),
            cost: parse_weight(fields[2], "cost")?,
            time: parse_weight(fields[3], "time")?,
        })
    }
}

impl FromStr for Request {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s, 3)?;
        let Some(sort_key) = fields[2].chars().next() else {
            bail!("Missing sort key in '{}'", s);
        };
        Ok(Request {
            origin: fields[0].to_string(),
            destination: fields[1].to_string(),
            sort_key,
        })
    }
}
