use serde::{Deserialize, Serialize};

/// Seed used when the caller does not supply one.
pub const DEFAULT_SEED: u64 = 42;

/// Parameters of the initializer distribution.
///
/// The defaults describe normal(0, 10) seeded with [`DEFAULT_SEED`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitConfig {
    pub seed: u64,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_std_dev")]
    pub std_dev: f64,
}

fn default_std_dev() -> f64 {
    10.0
}

impl InitConfig {
    /// Default distribution with an explicit seed.
    pub fn with_seed(seed: u64) -> Self {
        InitConfig { seed, ..InitConfig::default() }
    }
}

impl Default for InitConfig {
    fn default() -> Self {
        InitConfig {
            seed: DEFAULT_SEED,
            mean: 0.0,
            std_dev: default_std_dev(),
        }
    }
}
