use crate::app::generator::generate_file;
use crate::core::engine::AnagramEngine;
use crate::core::{ConfigProvider, GroupingResult, Pipeline, Storage, WordSet};
use crate::utils::error::Result;

/// Reads words from storage, groups them, writes the groups back.
pub struct FilePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    engine: AnagramEngine,
}

impl<S: Storage, C: ConfigProvider> FilePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            engine: AnagramEngine::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for FilePipeline<S, C> {
    async fn extract(&self) -> Result<WordSet> {
        if self.config.input_path().is_none() {
            generate_file(&self.storage, &self.config.generator_settings()).await?;
        }

        let input = self.config.effective_input_path();
        tracing::debug!("Reading words from: {}", input);
        self.storage.read_words(&input).await
    }

    async fn transform(&self, words: WordSet) -> Result<GroupingResult> {
        let groups = self.engine.run(&words);
        Ok(GroupingResult {
            word_count: words.len(),
            groups,
        })
    }

    async fn load(&self, result: GroupingResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        self.storage
            .write_groups(&output_path, &result.groups)
            .await?;
        Ok(output_path)
    }
}
