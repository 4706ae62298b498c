use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

/// Drives a pipeline through extract, transform and load.
pub struct JobRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> JobRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Returns the path the groups were written to.
    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting anagram search");

        tracing::debug!("Reading words");
        let words = self.pipeline.extract().await?;
        tracing::info!("Read {} distinct words", words.len());

        tracing::debug!("Grouping anagrams");
        let result = self.pipeline.transform(words).await?;
        tracing::info!(
            "Found {} groups covering {} words",
            result.groups.len(),
            result.grouped_word_count()
        );

        tracing::debug!("Writing groups");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {} ({:?})", output_path, started.elapsed());

        Ok(output_path)
    }
}
