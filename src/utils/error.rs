use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnagramError {
    #[error("Error reading the file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error writing the file {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Can't create dummy file {path}: {source}")]
    GenerateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AnagramError {
    pub fn read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::WriteError {
            path: path.into(),
            source,
        }
    }

    pub fn generate(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::GenerateError {
            path: path.into(),
            source,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ReadError { path, source } => {
                format!("Could not read input file '{}': {}", path, source)
            }
            Self::WriteError { path, source } => {
                format!("Could not write output file '{}': {}", path, source)
            }
            Self::GenerateError { path, source } => {
                format!("Could not create test file '{}': {}", path, source)
            }
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has an invalid value '{}': {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ReadError { .. } => "Check that the input file exists and is readable",
            Self::WriteError { .. } | Self::GenerateError { .. } => {
                "Check that the target directory exists and is writable"
            }
            Self::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            Self::InvalidConfigValueError { .. } => "Fix the setting and run again",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnagramError>;
