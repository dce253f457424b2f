//! Which generation path runs, and what happens when the provider fails.

use dailyconcept_core::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Never call the provider.
    AlwaysMock,
    /// Call the provider; use offline content if it fails.
    ProviderThenFallback,
    /// Call the provider; surface a generation failure if it fails.
    ProviderThenFail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    Fallback,
    Fail,
}

impl GenerationMode {
    /// | use_mock | production | mode                   |
    /// |----------|------------|------------------------|
    /// | true     | any        | `AlwaysMock`           |
    /// | false    | false      | `ProviderThenFallback` |
    /// | false    | true       | `ProviderThenFail`     |
    pub fn from_flags(use_mock: bool, production: bool) -> Self {
        match (use_mock, production) {
            (true, _) => GenerationMode::AlwaysMock,
            (false, false) => GenerationMode::ProviderThenFallback,
            (false, true) => GenerationMode::ProviderThenFail,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::from_flags(config.use_mock_generation, config.production)
    }

    pub fn uses_provider(&self) -> bool {
        !matches!(self, GenerationMode::AlwaysMock)
    }

    pub fn on_provider_failure(&self) -> FailureAction {
        match self {
            GenerationMode::AlwaysMock | GenerationMode::ProviderThenFallback => {
                FailureAction::Fallback
            }
            GenerationMode::ProviderThenFail => FailureAction::Fail,
        }
    }
}
