//----------------------------------------
// reconcile mod
//----------------------------------------
pub mod types;

use crate::effect_size::{effect_size, types::GroupSpec};
use crate::error::AbcomputeErr;
use crate::power::{
    solve_power::{DEFAULT_TOL, solve_sample_size},
    ttest_power::{check_significance_level, ttest_ind_power},
};
use crate::reconcile::types::{ControlledParam, ExperimentConfig, Reconciliation};

/// Derives whichever of sample size and power the user did not fix, from
/// the groups' effect size and the significance level
pub fn reconcile(
    group_a: &GroupSpec,
    group_b: &GroupSpec,
    config: &ExperimentConfig,
) -> Result<Reconciliation, AbcomputeErr> {
    let alpha = config.significance_level;
    check_significance_level(alpha)?;
    let d = effect_size(group_a, group_b)?;

    let (sample_size, sample_size_exact, power) = match config.controlled {
        ControlledParam::SampleSize(n) => {
            let power = ttest_ind_power(d, n as f64, alpha, config.hypothesis)?;
            (n, None, power)
        }
        ControlledParam::Power(target_power) => {
            let n = solve_sample_size(d, target_power, alpha, config.hypothesis, DEFAULT_TOL)?;
            // Truncated, not rounded
            (n.trunc() as usize, Some(n), target_power)
        }
    };

    tracing::debug!(
        effect_size = d,
        sample_size,
        power,
        alpha,
        target = ?config.controlled.target(),
        "reconciled experiment parameters"
    );

    Ok(Reconciliation {
        effect_size: d,
        sample_size,
        sample_size_exact,
        power,
        significance_level: alpha,
        hypothesis: config.hypothesis,
        target: config.controlled.target(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect_size::error::EffectSizeErr;
    use crate::hypothesis_type::HypothesisType;
    use crate::power::error::PowerErr;
    use crate::reconcile::types::ComputationTarget;

    fn groups(mean_a: f64, std_a: f64, mean_b: f64, std_b: f64) -> (GroupSpec, GroupSpec) {
        (
            GroupSpec::new(mean_a, std_a).expect("failed to construct group A"),
            GroupSpec::new(mean_b, std_b).expect("failed to construct group B"),
        )
    }

    fn config(controlled: ControlledParam) -> ExperimentConfig {
        ExperimentConfig {
            significance_level: 0.05,
            controlled,
            hypothesis: HypothesisType::NotEqual,
        }
    }

    #[test]
    fn sample_size_controlled() {
        let (a, b) = groups(50., 5., 52., 5.);
        let rec = reconcile(&a, &b, &config(ControlledParam::SampleSize(10)))
            .expect("failed to reconcile");
        assert!((rec.effect_size - 0.4).abs() < 1e-12);
        assert_eq!(rec.sample_size, 10);
        assert_eq!(rec.sample_size_exact, None);
        assert_eq!(rec.target, ComputationTarget::Power);
        // Kept unrounded internally
        assert!((rec.power - 0.135_451_562).abs() < 1e-6);
        assert_eq!(rec.power_display(), 0.14);
    }

    #[test]
    fn power_controlled() {
        let (a, b) = groups(50., 5., 52., 5.);
        let rec = reconcile(&a, &b, &config(ControlledParam::Power(0.8)))
            .expect("failed to reconcile");
        assert_eq!(rec.sample_size, 99);
        let exact = rec.sample_size_exact.expect("solved sample size should be kept");
        assert!((exact - 99.080).abs() < 0.01);
        assert_eq!(rec.power, 0.8);
        assert_eq!(rec.target, ComputationTarget::SampleSize);
    }

    #[test]
    fn round_trip_is_consistent() {
        let (a, b) = groups(40., 8., 45., 10.);
        let solved = reconcile(&a, &b, &config(ControlledParam::Power(0.8)))
            .expect("failed to solve for sample size");
        let checked = reconcile(
            &a,
            &b,
            &config(ControlledParam::SampleSize(solved.sample_size)),
        )
        .expect("failed to compute power");
        assert!((checked.power - 0.8).abs() < 0.01);
        assert_eq!(checked.effect_size, solved.effect_size);
    }

    #[test]
    fn truncated_sample_size_falls_short_for_large_effects() {
        // d = 1 solves to n between 16 and 17; truncating costs about 0.02 power
        let (a, b) = groups(50., 5., 55., 5.);
        let solved = reconcile(&a, &b, &config(ControlledParam::Power(0.8)))
            .expect("failed to solve for sample size");
        assert_eq!(solved.sample_size, 16);
        let checked = reconcile(&a, &b, &config(ControlledParam::SampleSize(16)))
            .expect("failed to compute power");
        assert!((checked.power - 0.781_398).abs() < 1e-5);
        let next = reconcile(&a, &b, &config(ControlledParam::SampleSize(17)))
            .expect("failed to compute power");
        assert!((next.power - 0.807_037).abs() < 1e-5);
    }

    #[test]
    fn degenerate_groups() {
        let (a, b) = groups(50., 0., 60., 0.);
        assert!(matches!(
            reconcile(&a, &b, &config(ControlledParam::Power(0.8))),
            Err(AbcomputeErr::EffectSize(EffectSizeErr::DegenerateInput))
        ));
        assert!(matches!(
            reconcile(&a, &b, &config(ControlledParam::SampleSize(20))),
            Err(AbcomputeErr::EffectSize(EffectSizeErr::DegenerateInput))
        ));
    }

    #[test]
    fn equal_means_power_mode() {
        let (a, b) = groups(50., 5., 50., 5.);
        assert!(matches!(
            reconcile(&a, &b, &config(ControlledParam::Power(0.8))),
            Err(AbcomputeErr::Power(PowerErr::SolverNonConvergence { .. }))
        ));
    }

    #[test]
    fn single_observation() {
        let (a, b) = groups(50., 5., 52., 5.);
        assert!(matches!(
            reconcile(&a, &b, &config(ControlledParam::SampleSize(1))),
            Err(AbcomputeErr::Power(PowerErr::InsufficientSampleSize(_)))
        ));
    }

    #[test]
    fn bad_significance_level() {
        let (a, b) = groups(50., 5., 52., 5.);
        let cfg = ExperimentConfig {
            significance_level: 0.,
            ..config(ControlledParam::SampleSize(10))
        };
        assert!(matches!(
            reconcile(&a, &b, &cfg),
            Err(AbcomputeErr::Power(PowerErr::BadSignificanceLevel(_)))
        ));
    }

    #[test]
    fn one_sided_reconcile() {
        let (a, b) = groups(50., 5., 52., 5.);
        let cfg = ExperimentConfig {
            hypothesis: HypothesisType::TrtGreater,
            ..config(ControlledParam::Power(0.8))
        };
        let rec = reconcile(&a, &b, &cfg).expect("failed to reconcile");
        assert!(rec.sample_size < 99);
        assert_eq!(rec.hypothesis, HypothesisType::TrtGreater);
    }
}
