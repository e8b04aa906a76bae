use itertools::{Itertools, MinMaxResult};
use serde::Serialize;

use crate::error::AbcomputeErr;
use crate::simulation::error::SimulationErr;

/// Counts of both groups over one shared set of equal-width bins
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlaidHistogram {
    /// `bins + 1` increasing edges; the last bin is closed on the right
    pub edges: Vec<f64>,
    pub counts_a: Vec<usize>,
    pub counts_b: Vec<usize>,
}

pub fn overlay_histogram(
    samples_a: &[f64],
    samples_b: &[f64],
    bins: usize,
) -> Result<OverlaidHistogram, AbcomputeErr> {
    if bins == 0 {
        return Err(SimulationErr::BadBins.into());
    }
    if let Some(&bad) = samples_a.iter().chain(samples_b).find(|x| !x.is_finite()) {
        return Err(SimulationErr::NonFiniteSample(bad).into());
    }

    let (lo, hi) = match samples_a.iter().chain(samples_b).minmax() {
        MinMaxResult::NoElements => return Err(SimulationErr::EmptySample.into()),
        MinMaxResult::OneElement(&x) => (x - 0.5, x + 0.5),
        MinMaxResult::MinMax(&lo, &hi) if lo == hi => (lo - 0.5, hi + 0.5),
        MinMaxResult::MinMax(&lo, &hi) => (lo, hi),
    };
    let width = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
    edges.push(hi);

    let count = |samples: &[f64]| {
        let mut counts = vec![0_usize; bins];
        for &x in samples {
            let idx = (((x - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }
        counts
    };

    Ok(OverlaidHistogram {
        edges,
        counts_a: count(samples_a),
        counts_b: count(samples_b),
    })
}
