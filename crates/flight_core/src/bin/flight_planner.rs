use flight_core::{
    graph::Graph,
    report::{write_report, Planner},
    util::cli,
};
use flight_reader::read_requests;
use indicatif::ProgressBar;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();
    let now = std::time::Instant::now();

    let g = Graph::from_flight_data(&cfg.flight_data)?;
    if let Some(path) = &cfg.export_csv {
        g.export_csv(path)?;
        info!("Exported graph to {}", path.display());
    }

    let requests = read_requests(&cfg.requests)?;

    let pb = if cfg.progress {
        ProgressBar::new(requests.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let mut planner = Planner::new(&g).max_plans(cfg.max_plans);
    let mut plans = Vec::with_capacity(requests.len());
    for (i, request) in requests.iter().enumerate() {
        plans.push(planner.plan(i + 1, request));
        pb.inc(1);
    }
    pb.finish_and_clear();

    write_report(&cfg.output, &plans)?;

    println!(
        "Planned {} flights in {:?}, written to {}",
        plans.len(),
        now.elapsed(),
        cfg.output.display()
    );
    Ok(())
}
