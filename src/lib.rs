pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::file_pipeline::FilePipeline;
pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use self::core::{
    engine::AnagramEngine, extractor::GroupExtractor, runner::JobRunner, signature::signature,
    signature::SignatureBuilder, sorter::IndexedSorter, sorter::SortedSignatures,
};
pub use domain::model::{Group, GroupingResult, Signature, WordSet};
pub use utils::error::{AnagramError, Result};
