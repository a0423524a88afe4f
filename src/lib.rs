pub mod error;
pub mod math;
pub mod activation;
pub mod random;
pub mod layers;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::{Matrix, Vector};
pub use activation::Sigmoid;
pub use random::{InitConfig, RandomGenerator};
pub use layers::{Gradients, Layer};
