use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0} is not set. Please set it in your environment variables or .env file.")]
    MissingEnv(&'static str),

    #[error("Config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Quarter must be between 1 and 4 (got {0})")]
    InvalidQuarter(u32),

    #[error("Year {0} is out of the supported date range")]
    InvalidYear(i32),

    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: ureq::Error,
    },

    #[error("Invalid JSON from '{endpoint}': {source}")]
    Json {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid date '{value}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
