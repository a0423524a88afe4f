pub mod config;
pub mod generator;

pub use config::InitConfig;
pub use generator::RandomGenerator;
