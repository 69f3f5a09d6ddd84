
use rand::SeedableRng;
use rand::distributions::{Distribution, WeightedError, WeightedIndex};
use rand::rngs::StdRng;

/// Fixed seed so repeated runs on the same distribution produce the same samples
pub const LOG_PMF_SAMPLER_SEED: u64 = 0x5eed_f1d0;

/// Draws `num_samples` values from a distribution stored as a log-PMF, using a fixed seed.
/// Each sample is an index into `log_pmf`, i.e. a fragment length for a fragment length distribution.
/// # Arguments
/// * `log_pmf` - log-probabilities; they do not need to be normalized
/// * `num_samples` - the number of samples to draw
/// # Errors
/// * if `log_pmf` is empty or has no finite entries
pub fn samples_from_log_pmf(log_pmf: &[f64], num_samples: usize) -> Result<Vec<i32>, WeightedError> {
    let mut rng = StdRng::seed_from_u64(LOG_PMF_SAMPLER_SEED);
    samples_from_log_pmf_with_rng(log_pmf, num_samples, &mut rng)
}

/// Same as `samples_from_log_pmf`, but with a caller-provided RNG.
pub fn samples_from_log_pmf_with_rng<R: rand::Rng + ?Sized>(log_pmf: &[f64], num_samples: usize, rng: &mut R) -> Result<Vec<i32>, WeightedError> {
    // shift by the max before exponentiating so tiny probabilities do not underflow together
    let max_log = log_pmf.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_log.is_finite() {
        return Err(WeightedError::AllWeightsZero);
    }

    let weights: Vec<f64> = log_pmf.iter()
        .map(|&v| if v.is_finite() { (v - max_log).exp() } else { 0.0 })
        .collect();
    let distribution = WeightedIndex::new(&weights)?;
    Ok((0..num_samples)
        .map(|_| distribution.sample(rng) as i32)
        .collect())
}
