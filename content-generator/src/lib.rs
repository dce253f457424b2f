pub mod offline;
pub mod policy;
pub mod provider;
pub mod service;
pub mod validator;

pub use offline::{offline_generate, offline_teaser, topic_hash};
pub use policy::{FailureAction, GenerationMode};
pub use provider::{
    ConfiguredProvider, ContentProvider, HttpContentProvider, UnconfiguredProvider,
};
pub use service::{ContentGenerationService, MockDelay, DEFAULT_TIMEOUT};
pub use validator::{validate_content, validate_response, REQUIRED_FIELDS};
