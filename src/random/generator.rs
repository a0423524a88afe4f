use log::{debug, trace};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::{NnError, Result};
use crate::math::{Matrix, Vector};
use crate::random::config::InitConfig;

/// Seeded source of normally distributed parameters.
///
/// One engine is both seeded and sampled from, so the seed fully determines
/// the output stream. Every draw advances that stream.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    seed: u64,
    rng: StdRng,
    mean: f64,
    std_dev: f64,
}

impl RandomGenerator {
    /// Generator over normal(0, 10), seeded with `seed` or the default seed.
    pub fn new(seed: Option<u64>) -> RandomGenerator {
        let config = seed.map_or_else(InitConfig::default, InitConfig::with_seed);
        Self::build(&config)
    }

    pub fn from_config(config: &InitConfig) -> Result<RandomGenerator> {
        if !config.mean.is_finite() {
            return Err(NnError::InvalidArgument(format!(
                "mean must be finite, got {}",
                config.mean
            )));
        }
        if !(config.std_dev.is_finite() && config.std_dev > 0.0) {
            return Err(NnError::InvalidArgument(format!(
                "std_dev must be positive and finite, got {}",
                config.std_dev
            )));
        }
        Ok(Self::build(config))
    }

    fn build(config: &InitConfig) -> RandomGenerator {
        debug!(
            "random generator seeded with {} (mean {}, std_dev {})",
            config.seed, config.mean, config.std_dev
        );
        RandomGenerator {
            seed: config.seed,
            rng: StdRng::seed_from_u64(config.seed),
            mean: config.mean,
            std_dev: config.std_dev,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// `rows × cols` matrix of independent samples, drawn row by row.
    pub fn make_matrix(&mut self, rows: usize, cols: usize) -> Result<Matrix> {
        check_positive("rows", rows)?;
        check_positive("cols", cols)?;
        trace!("drawing {rows}x{cols} matrix");
        let data = (0..rows).map(|_| self.sample(cols)).collect();
        Matrix::from_data(data)
    }

    pub fn make_vector(&mut self, n: usize) -> Result<Vector> {
        check_positive("n", n)?;
        trace!("drawing vector of length {n}");
        Ok(self.sample(n))
    }

    fn sample(&mut self, n: usize) -> Vector {
        (0..n)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut self.rng);
                self.mean + self.std_dev * z
            })
            .collect()
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        RandomGenerator::new(None)
    }
}

fn check_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        Err(NnError::InvalidArgument(format!("{name} must be at least 1")))
    } else {
        Ok(())
    }
}
