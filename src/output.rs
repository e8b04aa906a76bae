//! Report assembly and rendering for the command line front end

use std::fmt::Write;

use serde::Serialize;

use crate::effect_size::types::GroupSpec;
use crate::reconcile::types::{ComputationTarget, Reconciliation};
use crate::simulation::histogram::OverlaidHistogram;
use crate::simulation::types::SimulationSummary;

/// Widest histogram bar, in characters
const BAR_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub seed: Option<u64>,
    pub sample_size: usize,
    pub summary: SimulationSummary,
    pub histogram: OverlaidHistogram,
    /// Share of repeated simulations rejecting the null, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empirical_power: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub group_a: GroupSpec,
    pub group_b: GroupSpec,
    pub reconciliation: Reconciliation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationReport>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> Result<String, std::fmt::Error> {
        let mut out = String::new();
        self.write_text(&mut out)?;
        Ok(out)
    }

    fn write_text(&self, out: &mut String) -> std::fmt::Result {
        let rec = &self.reconciliation;
        writeln!(out, "Experiment design")?;
        writeln!(
            out,
            "  Group A             mean {:.2}, std dev {:.2}",
            self.group_a.mean, self.group_a.std_dev
        )?;
        writeln!(
            out,
            "  Group B             mean {:.2}, std dev {:.2}",
            self.group_b.mean, self.group_b.std_dev
        )?;
        writeln!(out, "  Effect size         {:.3}", rec.effect_size)?;
        match (rec.target, rec.sample_size_exact) {
            (ComputationTarget::SampleSize, Some(exact)) => writeln!(
                out,
                "  Sample size         {} per group (solved: {:.2})",
                rec.sample_size, exact
            )?,
            _ => writeln!(out, "  Sample size         {} per group", rec.sample_size)?,
        }
        writeln!(out, "  Power               {:.2}", rec.power_display())?;
        writeln!(out, "  Significance level  {}", rec.significance_level)?;
        writeln!(out, "  Hypothesis          {:?}", rec.hypothesis)?;

        let Some(sim) = &self.simulation else {
            return Ok(());
        };
        writeln!(out)?;
        match sim.seed {
            Some(seed) => writeln!(out, "Simulation (seed {seed})")?,
            None => writeln!(out, "Simulation (unseeded)")?,
        }
        match sim.summary {
            SimulationSummary::TTest(t) => {
                writeln!(out, "  T-statistic         {:.2}", t.statistic)?;
                writeln!(out, "  P-value             {:.2}", t.p_value)?;
                writeln!(out, "  Degrees of freedom  {:.1}", t.degrees_of_freedom)?;
            }
            SimulationSummary::Proportion {
                proportion_b_greater,
            } => {
                writeln!(out, "  Share B > A         {:.2}", proportion_b_greater)?;
            }
        }
        if let Some(power) = sim.empirical_power {
            writeln!(out, "  Simulated power     {:.3}", power)?;
        }
        writeln!(out)?;
        write_histogram(out, &sim.histogram)
    }
}

fn write_histogram(out: &mut String, hist: &OverlaidHistogram) -> std::fmt::Result {
    let max_count = hist
        .counts_a
        .iter()
        .chain(&hist.counts_b)
        .copied()
        .max()
        .unwrap_or(0)
        .max(1);
    let bar = |count: usize, symbol: char| -> String {
        std::iter::repeat_n(symbol, count * BAR_WIDTH / max_count).collect()
    };

    writeln!(out, "Distribution of simulated values (A: #, B: *)")?;
    for (i, edge) in hist.edges.windows(2).enumerate() {
        writeln!(
            out,
            "  [{:>8.2}, {:>8.2})  A {:>4} {}",
            edge[0],
            edge[1],
            hist.counts_a[i],
            bar(hist.counts_a[i], '#')
        )?;
        writeln!(
            out,
            "  {:>20}  B {:>4} {}",
            "",
            hist.counts_b[i],
            bar(hist.counts_b[i], '*')
        )?;
    }
    Ok(())
}
