use crate::error::*;
use tracing::{error, info, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn is_retryable(&self) -> bool;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::Provider(e) => {
                error!("Provider error details: {:?}", e);
            }
            CoreError::Content(e) => {
                error!("Content validation details: {:?}", e.violations);
            }
            CoreError::Catalog(e) => {
                error!("Catalog error details: {:?}", e);
            }
            CoreError::Storage(e) => {
                error!("Storage error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        match self {
            CoreError::Provider(e) => e.is_retryable(),
            CoreError::Storage(e) => e.is_retryable(),
            CoreError::Network(_) => true,
            CoreError::GenerationFailed => true,
            _ => false,
        }
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::Provider(e) => e.user_friendly_message(),
            CoreError::Content(e) => e.user_friendly_message(),
            CoreError::Catalog(e) => e.user_friendly_message(),
            CoreError::Storage(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::GenerationFailed => {
                "Failed to generate content. Please try again.".to_string()
            }
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::InvalidInput { message } => message.clone(),
            CoreError::NotFound { resource } => format!("Could not find: {}", resource),
            _ => "An unexpected error occurred. Please try again later.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::Provider(e) => e.error_code(),
            CoreError::Content(e) => e.error_code(),
            CoreError::Catalog(e) => e.error_code(),
            CoreError::Storage(e) => e.error_code(),
            CoreError::Config(e) => e.error_code(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::GenerationFailed => "GENERATION_FAILED".to_string(),
            CoreError::InvalidInput { .. } => "INVALID_INPUT".to_string(),
            CoreError::NotFound { .. } => "NOT_FOUND".to_string(),
        }
    }
}

impl ErrorExt for ProviderError {
    fn log_error(&self) -> &Self {
        error!("ProviderError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ProviderError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Timeout { .. } => true,
            ProviderError::Network { .. } => true,
            ProviderError::Status { status_code } => *status_code == 429 || *status_code >= 500,
            _ => false,
        }
    }

    // Provider details never reach the user.
    fn user_friendly_message(&self) -> String {
        "Failed to generate content. Please try again.".to_string()
    }

    fn error_code(&self) -> String {
        match self {
            ProviderError::Timeout { .. } => "PROVIDER_TIMEOUT".to_string(),
            ProviderError::Status { .. } => "PROVIDER_STATUS".to_string(),
            ProviderError::Network { .. } => "PROVIDER_NETWORK".to_string(),
            ProviderError::InvalidResponse { .. } => "PROVIDER_INVALID_RESPONSE".to_string(),
            ProviderError::NotConfigured => "PROVIDER_NOT_CONFIGURED".to_string(),
        }
    }
}

impl ErrorExt for ContentValidationError {
    fn log_error(&self) -> &Self {
        error!("ContentValidationError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ContentValidationError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_friendly_message(&self) -> String {
        "Failed to generate content. Please try again.".to_string()
    }

    fn error_code(&self) -> String {
        "CONTENT_VALIDATION_FAILED".to_string()
    }
}

impl ErrorExt for CatalogError {
    fn log_error(&self) -> &Self {
        error!("CatalogError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CatalogError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::EmptyCategory { category } => {
                format!("No topics are available for {}.", category)
            }
            _ => "The topic catalog is misconfigured.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CatalogError::EmptyCategory { .. } => "CATALOG_EMPTY_CATEGORY".to_string(),
            CatalogError::UnknownAdjacentCategory { .. } => "CATALOG_UNKNOWN_NEIGHBOUR".to_string(),
            CatalogError::DuplicateTopic { .. } => "CATALOG_DUPLICATE_TOPIC".to_string(),
            CatalogError::TeaserTooLong { .. } => "CATALOG_TEASER_TOO_LONG".to_string(),
            CatalogError::TooFewSeeds { .. } => "CATALOG_TOO_FEW_SEEDS".to_string(),
        }
    }
}

impl ErrorExt for StorageError {
    fn log_error(&self) -> &Self {
        error!("StorageError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("StorageError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        matches!(
            self,
            StorageError::Unavailable { .. } | StorageError::WriteFailed { .. }
        )
    }

    fn user_friendly_message(&self) -> String {
        match self {
            StorageError::CorruptValue { .. } => {
                "Saved data appears to be corrupted. Please clear your data.".to_string()
            }
            _ => "Could not access saved data. Please try again.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            StorageError::ReadFailed { .. } => "STORAGE_READ_FAILED".to_string(),
            StorageError::WriteFailed { .. } => "STORAGE_WRITE_FAILED".to_string(),
            StorageError::CorruptValue { .. } => "STORAGE_CORRUPT_VALUE".to_string(),
            StorageError::Unavailable { .. } => "STORAGE_UNAVAILABLE".to_string(),
        }
    }
}

impl ErrorExt for ConfigError {
    fn log_error(&self) -> &Self {
        error!("ConfigError: {}", self);
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("ConfigError (warning): {}", self);
        self
    }

    fn is_retryable(&self) -> bool {
        false
    }

    fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => {
                "Configuration file not found. Please check the installation.".to_string()
            }
            ConfigError::MissingField { field } => {
                format!("Required configuration field '{}' is missing.", field)
            }
            ConfigError::InvalidValue { field, .. } => {
                format!("Invalid value for configuration field '{}'.", field)
            }
            _ => "Configuration error occurred. Please check your settings.".to_string(),
        }
    }

    fn error_code(&self) -> String {
        match self {
            ConfigError::FileNotFound { .. } => "CONFIG_FILE_NOT_FOUND".to_string(),
            ConfigError::MissingField { .. } => "CONFIG_MISSING_FIELD".to_string(),
            ConfigError::InvalidValue { .. } => "CONFIG_INVALID_VALUE".to_string(),
            ConfigError::ValidationFailed { .. } => "CONFIG_VALIDATION_FAILED".to_string(),
            ConfigError::Parse(_) => "CONFIG_PARSE_ERROR".to_string(),
        }
    }
}

pub struct ErrorReporter {
    report_errors: bool,
    report_warnings: bool,
}

impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            report_errors: true,
            report_warnings: true,
        }
    }

    pub fn with_error_reporting(mut self, enabled: bool) -> Self {
        self.report_errors = enabled;
        self
    }

    pub fn with_warning_reporting(mut self, enabled: bool) -> Self {
        self.report_warnings = enabled;
        self
    }

    pub fn report_error(&self, error: &CoreError) {
        if self.report_errors {
            error.log_error();
            info!("Error code: {}", error.error_code());
            info!("User message: {}", error.user_friendly_message());
            if error.is_retryable() {
                info!("Error is retryable");
            }
        }
    }

    pub fn report_warning(&self, error: &CoreError) {
        if self.report_warnings {
            error.log_warn();
        }
    }
}

impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
