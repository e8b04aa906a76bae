use rand::{Rng, SeedableRng, distributions::Distribution, rngs};
use statrs::distribution::Normal;

use crate::effect_size::types::GroupSpec;
use crate::error::AbcomputeErr;
use crate::simulation::error::SimulationErr;
use crate::simulation::proportion::proportion_b_greater;
use crate::simulation::ttest::ttest_ind;
use crate::simulation::types::{
    SimulationResult, SimulationStrategy, SimulationSummary, VarianceAssumption,
};

/// Draws `n` observations for one group. A zero standard deviation gives a
/// constant sample.
pub fn draw_group<R: Rng + ?Sized>(
    group: &GroupSpec,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>, AbcomputeErr> {
    group.validate()?;
    if group.std_dev == 0. {
        return Ok(vec![group.mean; n]);
    }
    let normal = Normal::new(group.mean, group.std_dev).map_err(SimulationErr::Distribution)?;
    Ok(normal.sample_iter(rng).take(n).collect())
}

/// Draws `sample_size` observations per group from `rng` and summarises
/// them according to `strategy`
pub fn simulate<R: Rng + ?Sized>(
    group_a: &GroupSpec,
    group_b: &GroupSpec,
    sample_size: usize,
    strategy: SimulationStrategy,
    rng: &mut R,
) -> Result<SimulationResult, AbcomputeErr> {
    if sample_size == 0 {
        return Err(SimulationErr::EmptySample.into());
    }
    if let SimulationStrategy::TTest(_) = strategy
        && sample_size < 2
    {
        return Err(SimulationErr::InsufficientSamples {
            test: "t-test",
            needed: 2,
            got: sample_size,
        }
        .into());
    }

    //----------------------------------------
    // Draw both groups from the same stream
    let samples_a = draw_group(group_a, sample_size, rng)?;
    let samples_b = draw_group(group_b, sample_size, rng)?;

    //----------------------------------------
    // Summarise
    let summary = match strategy {
        SimulationStrategy::TTest(variance) => {
            SimulationSummary::TTest(ttest_ind(&samples_a, &samples_b, variance)?)
        }
        SimulationStrategy::Proportion => SimulationSummary::Proportion {
            proportion_b_greater: proportion_b_greater(&samples_a, &samples_b)?,
        },
    };
    tracing::debug!(sample_size, ?strategy, ?summary, "simulated experiment");

    Ok(SimulationResult {
        samples_a,
        samples_b,
        summary,
    })
}

/// `simulate` with a freshly seeded generator, for reproducible runs
pub fn simulate_seeded(
    group_a: &GroupSpec,
    group_b: &GroupSpec,
    sample_size: usize,
    strategy: SimulationStrategy,
    seed: u64,
) -> Result<SimulationResult, AbcomputeErr> {
    let mut rng = rngs::StdRng::seed_from_u64(seed);
    simulate(group_a, group_b, sample_size, strategy, &mut rng)
}

/// Repeats the t-test simulation `n_sims` times (simulation i seeded with
/// `seed + i`) and returns the share of runs rejecting the null at `alpha`.
/// This is a Monte Carlo estimate of the power computed in closed form by
/// `ttest_ind_power`.
pub fn empirical_power(
    group_a: &GroupSpec,
    group_b: &GroupSpec,
    sample_size: usize,
    variance: VarianceAssumption,
    alpha: f64,
    n_sims: usize,
    seed: u64,
) -> Result<f64, AbcomputeErr> {
    if n_sims == 0 {
        return Err(SimulationErr::EmptySample.into());
    }
    let rejections = (0..n_sims)
        .map(|i| {
            let res = simulate_seeded(
                group_a,
                group_b,
                sample_size,
                SimulationStrategy::TTest(variance),
                seed.wrapping_add(i as u64),
            )?;
            match res.summary {
                SimulationSummary::TTest(t) => Ok(t.p_value < alpha),
                SimulationSummary::Proportion { .. } => Ok(false),
            }
        })
        .collect::<Result<Vec<bool>, AbcomputeErr>>()?
        .into_iter()
        .filter(|&rejected| rejected)
        .count();
    let power = rejections as f64 / n_sims as f64;
    tracing::debug!(n_sims, rejections, power, "estimated power by simulation");
    Ok(power)
}
