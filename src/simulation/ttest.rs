use statrs::distribution::{ContinuousCDF, StudentsT};
use statrs::statistics::Statistics;

use crate::error::AbcomputeErr;
use crate::simulation::error::SimulationErr;
use crate::simulation::types::{TTestResult, VarianceAssumption};

/// Independent two-sample t-test of `samples_a` against `samples_b`,
/// returning the statistic for A minus B and a two-sided p-value
pub fn ttest_ind(
    samples_a: &[f64],
    samples_b: &[f64],
    variance: VarianceAssumption,
) -> Result<TTestResult, AbcomputeErr> {
    let shortest = samples_a.len().min(samples_b.len());
    if shortest < 2 {
        return Err(SimulationErr::InsufficientSamples {
            test: "t-test",
            needed: 2,
            got: shortest,
        }
        .into());
    }

    let (n_a, n_b) = (samples_a.len() as f64, samples_b.len() as f64);
    let (mean_a, mean_b) = (samples_a.mean(), samples_b.mean());
    let (var_a, var_b) = (samples_a.variance(), samples_b.variance());

    let (std_err, df) = match variance {
        VarianceAssumption::Pooled => {
            let df = n_a + n_b - 2.;
            let pooled_var = ((n_a - 1.) * var_a + (n_b - 1.) * var_b) / df;
            ((pooled_var * (1. / n_a + 1. / n_b)).sqrt(), df)
        }
        VarianceAssumption::Welch => {
            let (se2_a, se2_b) = (var_a / n_a, var_b / n_b);
            let se2 = se2_a + se2_b;
            let df = se2 * se2 / (se2_a * se2_a / (n_a - 1.) + se2_b * se2_b / (n_b - 1.));
            (se2.sqrt(), df)
        }
    };
    if !(std_err > 0. && std_err.is_finite() && df.is_finite()) {
        return Err(SimulationErr::DegenerateSamples.into());
    }

    let statistic = (mean_a - mean_b) / std_err;
    let t_dist = StudentsT::new(0., 1., df).map_err(SimulationErr::Distribution)?;
    let p_value = (2. * t_dist.sf(statistic.abs())).min(1.);

    Ok(TTestResult {
        statistic,
        p_value,
        degrees_of_freedom: df,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: [f64; 5] = [1., 2., 3., 4., 5.];
    const B: [f64; 5] = [2., 4., 6., 8., 10.];

    #[test]
    fn pooled_ttest() {
        let res = ttest_ind(&A, &B, VarianceAssumption::Pooled).expect("failed to run t-test");
        assert!((res.statistic + 1.897_366_596).abs() < 1e-9);
        assert!((res.p_value - 0.094_349_773).abs() < 1e-7);
        assert_eq!(res.degrees_of_freedom, 8.);
    }

    #[test]
    fn welch_ttest() {
        let res = ttest_ind(&A, &B, VarianceAssumption::Welch).expect("failed to run t-test");
        assert!((res.statistic + 1.897_366_596).abs() < 1e-9);
        assert!((res.degrees_of_freedom - 5.882_352_941).abs() < 1e-9);
        assert!((res.p_value - 0.107_531_195).abs() < 1e-7);
    }

    #[test]
    fn statistic_sign_is_a_minus_b() {
        let res = ttest_ind(&B, &A, VarianceAssumption::Pooled).expect("failed to run t-test");
        assert!(res.statistic > 0.);
    }

    #[test]
    fn identical_samples() {
        let res = ttest_ind(&A, &A, VarianceAssumption::Pooled).expect("failed to run t-test");
        assert_eq!(res.statistic, 0.);
        assert!((res.p_value - 1.).abs() < 1e-12);
    }

    #[test]
    fn too_few_samples() {
        if let Err(e) = ttest_ind(&[1.], &[2.], VarianceAssumption::Pooled) {
            assert_eq!(
                String::from(
                    "while simulating experiment: t-test needs at least 2 observations \
                    per group; got 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn constant_samples_are_degenerate() {
        assert!(matches!(
            ttest_ind(&[3., 3., 3.], &[5., 5., 5.], VarianceAssumption::Pooled),
            Err(AbcomputeErr::Simulation(SimulationErr::DegenerateSamples))
        ));
        assert!(matches!(
            ttest_ind(&[3., 3., 3.], &[5., 5., 5.], VarianceAssumption::Welch),
            Err(AbcomputeErr::Simulation(SimulationErr::DegenerateSamples))
        ));
    }
}
