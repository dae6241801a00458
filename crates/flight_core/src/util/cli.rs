use std::path::PathBuf;

use clap::Parser;

use crate::constants::MAX_PLANS;

#[derive(Parser)]
#[command(author = "Daniel Holzner", version, about, long_about = None)]
struct Cli {
    /// Path to the flight data file
    #[arg(default_value = "flight_data.txt")]
    flight_data: PathBuf,

    /// Path to the requested flights file
    #[arg(default_value = "requested_flights.txt")]
    requests: PathBuf,

    /// Where to write the flight plans
    #[arg(short, long, value_name = "file", default_value = "output.txt")]
    output: PathBuf,

    /// Number of ranked routes reported per request
    #[arg(short, long, value_name = "n", default_value_t = MAX_PLANS)]
    max_plans: usize,

    /// Also write the flight graph as csv to this file
    #[arg(long, value_name = "file")]
    export_csv: Option<PathBuf>,

    /// Show a progress bar while answering requests
    #[arg(short, long)]
    progress: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub flight_data: PathBuf,
    pub requests: PathBuf,
    pub output: PathBuf,
    pub max_plans: usize,
    pub export_csv: Option<PathBuf>,
    pub progress: bool,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            flight_data: cli.flight_data,
            requests: cli.requests,
            output: cli.output,
            max_plans: cli.max_plans,
            export_csv: cli.export_csv,
            progress: cli.progress,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn parse_from<I, T>(args: I) -> anyhow::Result<Cfg>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Ok(Cli::try_parse_from(args)?.into())
}
