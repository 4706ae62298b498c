use crate::config::{validate_settings, DEFAULT_OUTPUT};
use crate::core::{ConfigProvider, GeneratorSettings};
use crate::utils::error::{AnagramError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub file: Option<String>,
    pub word_count: Option<usize>,
    pub max_word_length: Option<usize>,
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// Loads a configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| AnagramError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration text, expanding `${VAR}` first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e: toml::de::Error| {
            let message = match e.span() {
                Some(span) => format!("TOML parsing error at byte {}: {}", span.start, e.message()),
                None => format!("TOML parsing error: {}", e.message()),
            };
            AnagramError::ConfigError { message }
        })
    }

    /// Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnagramError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Positional paths and generator flags given on the command line win
    /// over the file.
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            self.input.path = Some(input.clone());
        }
        if let Some(output) = &cli.output {
            self.output.path = Some(output.clone());
        }
        if let Some(file) = &cli.generated_file {
            self.generator.file = Some(file.clone());
        }
        if cli.word_count.is_some() {
            self.generator.word_count = cli.word_count;
        }
        if cli.max_word_length.is_some() {
            self.generator.max_word_length = cli.max_word_length;
        }
        if cli.seed.is_some() {
            self.generator.seed = cli.seed;
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output.path.as_deref().unwrap_or(DEFAULT_OUTPUT)
    }

    fn generator_settings(&self) -> GeneratorSettings {
        let defaults = GeneratorSettings::default();
        GeneratorSettings {
            file: self.generator.file.clone().unwrap_or(defaults.file),
            word_count: self.generator.word_count.unwrap_or(defaults.word_count),
            max_word_length: self
                .generator
                .max_word_length
                .unwrap_or(defaults.max_word_length),
            seed: self.generator.seed.or(defaults.seed),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_settings(self)
    }
}
