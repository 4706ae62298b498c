use crate::core::{GeneratorSettings, Storage};
use crate::utils::error::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Random lowercase words for exercising the grouping on large inputs.
pub struct WordGenerator {
    rng: StdRng,
}

impl WordGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// A word of `a`..=`z` with length drawn uniformly from `[0, max_len)`.
    pub fn word(&mut self, max_len: usize) -> String {
        if max_len == 0 {
            return String::new();
        }
        let len = self.rng.gen_range(0..max_len);
        (0..len)
            .map(|_| char::from(b'a' + self.rng.gen_range(0..26u8)))
            .collect()
    }

    pub fn words(&mut self, count: usize, max_len: usize) -> Vec<String> {
        (0..count).map(|_| self.word(max_len)).collect()
    }
}

/// Writes `settings.word_count` random words to `settings.file`.
pub async fn generate_file<S: Storage>(storage: &S, settings: &GeneratorSettings) -> Result<()> {
    tracing::info!(
        "Generating {} test words (max length {}) into {}",
        settings.word_count,
        settings.max_word_length,
        settings.file
    );
    let words =
        WordGenerator::new(settings.seed).words(settings.word_count, settings.max_word_length);
    storage.write_words(&settings.file, &words).await
}
