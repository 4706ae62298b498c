pub mod generator;
pub mod pipelines;
