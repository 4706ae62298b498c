pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, GeneratorSettings};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub const DEFAULT_OUTPUT: &str = "output.txt";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "anagrams")]
#[command(about = "Finds all anagram groups in a word list, one word per line")]
pub struct CliConfig {
    /// Input file. When omitted a test file is generated and processed
    pub input: Option<String>,

    /// Output file [default: output.txt]
    pub output: Option<String>,

    /// TOML configuration file; positional paths override it
    #[arg(short, long)]
    pub config: Option<String>,

    /// Where to write the generated test file [default: test.txt]
    #[arg(long)]
    pub generated_file: Option<String>,

    /// Number of words to generate [default: 300000]
    #[arg(long)]
    pub word_count: Option<usize>,

    /// Generated words are shorter than this [default: 7]
    #[arg(long)]
    pub max_word_length: Option<usize>,

    /// Seed for reproducible test files
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    fn generator_settings(&self) -> GeneratorSettings {
        let defaults = GeneratorSettings::default();
        GeneratorSettings {
            file: self.generated_file.clone().unwrap_or(defaults.file),
            word_count: self.word_count.unwrap_or(defaults.word_count),
            max_word_length: self.max_word_length.unwrap_or(defaults.max_word_length),
            seed: self.seed.or(defaults.seed),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}

/// Checks shared by every configuration source.
pub(crate) fn validate_settings<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validation::validate_path("output.path", config.output_path())?;

    match config.input_path() {
        Some(input) => validation::validate_path("input.path", input)?,
        None => {
            let generator = config.generator_settings();
            validation::validate_path("generator.file", &generator.file)?;
            validation::validate_positive_number("generator.word_count", generator.word_count, 1)?;
            validation::validate_positive_number(
                "generator.max_word_length",
                generator.max_word_length,
                1,
            )?;
        }
    }

    validation::validate_distinct_paths(&config.effective_input_path(), config.output_path())
}
