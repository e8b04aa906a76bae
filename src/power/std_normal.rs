use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}
