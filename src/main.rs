use abcompute::cli::{Cli, Command, OutputFormat};
use abcompute::compute::{empirical_power, overlay_histogram, reconcile, simulate};
use abcompute::config::ExperimentFile;
use abcompute::output::{Report, SimulationReport};
use abcompute::simulation::types::SimulationStrategy;
use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn design_report(file: &ExperimentFile) -> Result<Report> {
    let reconciliation = reconcile(&file.group_a, &file.group_b, &file.experiment_config())
        .context("failed to reconcile experiment parameters")?;
    Ok(Report {
        group_a: file.group_a,
        group_b: file.group_b,
        reconciliation,
        simulation: None,
    })
}

fn simulation_report(file: &ExperimentFile) -> Result<Report> {
    let mut report = design_report(file)?;
    let sample_size = report.reconciliation.sample_size;
    let seed = file.simulation.seed;
    let strategy = file.strategy();

    let mut rng = match seed {
        Some(seed) => rngs::StdRng::seed_from_u64(seed),
        None => rngs::StdRng::from_entropy(),
    };
    let result = simulate(&file.group_a, &file.group_b, sample_size, strategy, &mut rng)
        .context("failed to simulate experiment")?;
    let histogram = overlay_histogram(&result.samples_a, &result.samples_b, file.simulation.bins)
        .context("failed to bin simulated samples")?;

    let empirical = match (file.simulation.reps, strategy) {
        (Some(reps), SimulationStrategy::TTest(variance)) => Some(
            empirical_power(
                &file.group_a,
                &file.group_b,
                sample_size,
                variance,
                file.experiment.significance_level,
                reps,
                seed.unwrap_or_else(rand::random),
            )
            .context("failed to estimate power by simulation")?,
        ),
        (Some(_), SimulationStrategy::Proportion) => {
            tracing::warn!("--reps needs a t-test strategy; skipping simulated power");
            None
        }
        (None, _) => None,
    };

    report.simulation = Some(SimulationReport {
        seed,
        sample_size,
        summary: result.summary,
        histogram,
        empirical_power: empirical,
    });
    Ok(report)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let report = match &cli.command {
        Command::Reconcile(args) => design_report(&args.resolve()?)?,
        Command::Simulate(args) => simulation_report(&args.resolve()?)?,
    };

    match cli.format {
        OutputFormat::Text => print!("{}", report.to_text()?),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }
    Ok(())
}
