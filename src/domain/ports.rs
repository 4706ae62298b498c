use crate::domain::model::{Group, GroupingResult, WordSet};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where words come from and where groups go.
pub trait Storage: Send + Sync {
    /// Reads `path` line by line into a trimmed, deduplicated set.
    fn read_words(&self, path: &str) -> impl std::future::Future<Output = Result<WordSet>> + Send;

    /// Writes one line per group and flushes.
    fn write_groups(
        &self,
        path: &str,
        groups: &[Group],
    ) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Writes one word per line. Used for generated input.
    fn write_words(
        &self,
        path: &str,
        words: &[String],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    pub file: String,
    pub word_count: usize,
    pub max_word_length: usize,
    pub seed: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            file: "test.txt".to_string(),
            word_count: 300_000,
            max_word_length: 7,
            seed: None,
        }
    }
}

pub trait ConfigProvider: Send + Sync {
    /// `None` means generate a synthetic input first.
    fn input_path(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn generator_settings(&self) -> GeneratorSettings;

    /// The file that will actually be read.
    fn effective_input_path(&self) -> String {
        match self.input_path() {
            Some(path) => path.to_string(),
            None => self.generator_settings().file,
        }
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<WordSet>;
    async fn transform(&self, words: WordSet) -> Result<GroupingResult>;
    async fn load(&self, result: GroupingResult) -> Result<String>;
}
