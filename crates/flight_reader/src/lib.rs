//! Reader for the line based flight data and request files.
//!
//! Both files share the same layout: the first line holds the number of
//! records, followed by exactly that many `|`-separated records.
//! ```text
//! 2
//! Dallas|Austin|98|47
//! Austin|Houston|95|39
//! ```
use anyhow::{bail, Context};
use log::{debug, info};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

mod records;
pub use records::{Leg, LegWeight, Request, SEPARATOR};

/// Parsed content of a flight data file.
pub struct FlightData {
    legs: Vec<Leg>,
}

impl FlightData {
    pub fn get_legs(&self) -> &Vec<Leg> {
        &self.legs
    }

    pub fn from_reader<R: BufRead>(reader: R) -> anyhow::Result<FlightData> {
        let legs = read_records(reader)?;
        Ok(FlightData { legs })
    }

    pub fn from_path(path: &Path) -> anyhow::Result<FlightData> {
        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", path.display());

        let file = File::open(path)
            .with_context(|| format!("Could not open flight data file {}", path.display()))?;
        let data = FlightData::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid flight data file {}", path.display()))?;

        info!(
            "FINISHED parsing {} legs. Took {:?}",
            data.legs.len(),
            now.elapsed()
        );
        Ok(data)
    }
}

/// Reads all requests from a request file.
pub fn read_requests(path: &Path) -> anyhow::Result<Vec<Request>> {
    let now = std::time::Instant::now();
    info!("BEGIN parsing {}", path.display());

    let file = File::open(path)
        .with_context(|| format!("Could not open request file {}", path.display()))?;
    let requests: Vec<Request> = read_records(BufReader::new(file))
        .with_context(|| format!("Invalid request file {}", path.display()))?;

    info!(
        "FINISHED parsing {} requests. Took {:?}",
        requests.len(),
        now.elapsed()
    );
    Ok(requests)
}

/// Reads a count header followed by that many records. Lines after the
/// declared records are ignored.
pub fn read_records<R, T>(reader: R) -> anyhow::Result<Vec<T>>
where
    R: BufRead,
    T: FromStr<Err = anyhow::Error>,
{
    let mut lines = reader.lines();

    let Some(header) = lines.next() else {
        bail!("File is empty");
    };
    let header = header.context("Failed to read line 1")?;
    let count: usize = header
        .trim()
        .parse()
        .with_context(|| format!("Line 1: invalid record count '{}'", header.trim()))?;
    debug!("Expecting {} records", count);

    let mut records = Vec::with_capacity(count);
    for i in 0..count {
        let line_no = i + 2;
        let Some(line) = lines.next() else {
            bail!(
                "Expected {} records but file ends after {}",
                count,
                records.len()
            );
        };
        let line = line.with_context(|| format!("Failed to read line {}", line_no))?;
        let record = line
            .parse::<T>()
            .with_context(|| format!("Line {}: malformed record", line_no))?;
        records.push(record);
    }

    Ok(records)
}
