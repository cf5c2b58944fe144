pub mod classifier;
pub mod tips;
