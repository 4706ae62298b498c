pub mod engine;
pub mod extractor;
pub mod runner;
pub mod signature;
pub mod sorter;

pub use crate::domain::model::{Group, GroupingResult, Signature, WordSet};
pub use crate::domain::ports::{ConfigProvider, GeneratorSettings, Pipeline, Storage};
pub use crate::utils::error::Result;
