use crate::error::AbcomputeErr;
use crate::simulation::error::SimulationErr;

/// Share of index-paired draws where the group B value exceeds the group A
/// value. Ties count as "not exceeding". Always in [0, 1].
///
/// This is a one-sided overlap summary of two independent samples, not a
/// hypothesis test: it has no null distribution attached and should not be
/// read as a p-value.
pub fn proportion_b_greater(samples_a: &[f64], samples_b: &[f64]) -> Result<f64, AbcomputeErr> {
    if samples_a.len() != samples_b.len() {
        return Err(SimulationErr::MismatchedLengths {
            len_a: samples_a.len(),
            len_b: samples_b.len(),
        }
        .into());
    }
    if samples_a.is_empty() {
        return Err(SimulationErr::EmptySample.into());
    }
    let exceeding = samples_a
        .iter()
        .zip(samples_b)
        .filter(|(a, b)| b > a)
        .count();
    Ok(exceeding as f64 / samples_a.len() as f64)
}
