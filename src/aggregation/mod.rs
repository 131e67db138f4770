pub mod aggregator;
pub mod normalizer;
