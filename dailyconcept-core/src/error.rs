use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Content provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Content(#[from] ContentValidationError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to generate content. Please try again.")]
    GenerationFailed,

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider did not answer within {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Provider returned status {status_code}")]
    Status { status_code: u16 },

    #[error("Provider unreachable: {reason}")]
    Network { reason: String },

    #[error("Invalid provider response: {details}")]
    InvalidResponse { details: String },

    #[error("No content provider configured")]
    NotConfigured,
}

/// Every content-contract rule a candidate broke, in check order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Content validation failed: {}", .violations.join(", "))]
pub struct ContentValidationError {
    pub violations: Vec<String>,
}

impl ContentValidationError {
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }

    pub fn mentions(&self, needle: &str) -> bool {
        self.violations.iter().any(|v| v.contains(needle))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Category {category} has no topics")]
    EmptyCategory { category: String },

    #[error("Category {category} lists unknown neighbour {neighbour}")]
    UnknownAdjacentCategory { category: String, neighbour: String },

    #[error("Duplicate topic '{topic}' in {category}")]
    DuplicateTopic { category: String, topic: String },

    #[error("Teaser for '{topic}' is {length} characters, max {max}")]
    TeaserTooLong {
        topic: String,
        length: usize,
        max: usize,
    },

    #[error("Category {category} has {count} topics, at least {min} required")]
    TooFewSeeds {
        category: String,
        count: usize,
        min: usize,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to read key {key}: {reason}")]
    ReadFailed { key: String, reason: String },

    #[error("Failed to write key {key}: {reason}")]
    WriteFailed { key: String, reason: String },

    #[error("Stored value for {key} is corrupt")]
    CorruptValue { key: String },

    #[error("Storage backend unavailable: {reason}")]
    Unavailable { reason: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration validation failed: {reason}")]
    ValidationFailed { reason: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
