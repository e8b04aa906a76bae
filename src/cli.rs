//! CLI argument parsing for abcompute

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::ExperimentFile;
use crate::config::types::{ControlledKind, StrategyKind};
use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "abcompute")]
#[command(version)]
#[command(about = "Effect size, power analysis and simulated A/B experiments", long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(long = "format", value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Print solver and simulation diagnostics to stderr
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Derive sample size or power from the group parameters
    Reconcile(ExperimentArgs),
    /// Reconcile, then simulate the experiment with the derived sample size
    Simulate(SimulateArgs),
}

/// Experiment parameters; flags override values from `--config`
#[derive(Args, Debug, Default)]
pub struct ExperimentArgs {
    /// TOML experiment file
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Mean of group A
    #[arg(long = "mean-a", value_name = "MEAN", allow_negative_numbers = true)]
    pub mean_a: Option<f64>,

    /// Standard deviation of group A
    #[arg(long = "std-a", value_name = "SD")]
    pub std_a: Option<f64>,

    /// Mean of group B
    #[arg(long = "mean-b", value_name = "MEAN", allow_negative_numbers = true)]
    pub mean_b: Option<f64>,

    /// Standard deviation of group B
    #[arg(long = "std-b", value_name = "SD")]
    pub std_b: Option<f64>,

    /// Significance level (alpha)
    #[arg(short = 'a', long = "alpha", value_name = "ALPHA")]
    pub alpha: Option<f64>,

    /// Fix the per-group sample size and solve for power
    #[arg(short = 'n', long = "sample-size", value_name = "N", conflicts_with = "power")]
    pub sample_size: Option<usize>,

    /// Fix the power and solve for the per-group sample size
    #[arg(short = 'p', long = "power", value_name = "POWER")]
    pub power: Option<f64>,

    /// Alternative hypothesis (B against A)
    #[arg(long = "hypothesis", value_enum)]
    pub hypothesis: Option<HypothesisType>,
}

#[derive(Args, Debug, Default)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub experiment: ExperimentArgs,

    /// How to summarise the simulated groups
    #[arg(short = 's', long = "strategy", value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Random seed for reproducible draws
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Number of histogram bins
    #[arg(long = "bins", value_name = "BINS")]
    pub bins: Option<usize>,

    /// Also estimate power from this many repeated t-test simulations
    #[arg(long = "reps", value_name = "REPS")]
    pub reps: Option<usize>,
}

impl ExperimentArgs {
    /// Loads the config file (or the defaults) and applies flag overrides
    pub fn resolve(&self) -> Result<ExperimentFile, AbcomputeErr> {
        let mut file = match &self.config {
            Some(path) => ExperimentFile::from_file(path)?,
            None => ExperimentFile::default(),
        };
        self.apply(&mut file);
        file.validate()?;
        Ok(file)
    }

    fn apply(&self, file: &mut ExperimentFile) {
        if let Some(mean) = self.mean_a {
            file.group_a.mean = mean;
        }
        if let Some(sd) = self.std_a {
            file.group_a.std_dev = sd;
        }
        if let Some(mean) = self.mean_b {
            file.group_b.mean = mean;
        }
        if let Some(sd) = self.std_b {
            file.group_b.std_dev = sd;
        }
        if let Some(alpha) = self.alpha {
            file.experiment.significance_level = alpha;
        }
        if let Some(n) = self.sample_size {
            file.experiment.sample_size = n;
            file.experiment.controlled = ControlledKind::SampleSize;
        }
        if let Some(power) = self.power {
            file.experiment.power = power;
            file.experiment.controlled = ControlledKind::Power;
        }
        if let Some(hypothesis) = self.hypothesis {
            file.experiment.hypothesis = hypothesis;
        }
    }
}

impl SimulateArgs {
    pub fn resolve(&self) -> Result<ExperimentFile, AbcomputeErr> {
        let mut file = match &self.experiment.config {
            Some(path) => ExperimentFile::from_file(path)?,
            None => ExperimentFile::default(),
        };
        self.experiment.apply(&mut file);
        if let Some(strategy) = self.strategy {
            file.simulation.strategy = strategy;
        }
        if let Some(seed) = self.seed {
            file.simulation.seed = Some(seed);
        }
        if let Some(bins) = self.bins {
            file.simulation.bins = bins;
        }
        if let Some(reps) = self.reps {
            file.simulation.reps = Some(reps);
        }
        file.validate()?;
        Ok(file)
    }
}
