use serde::{Deserialize, Serialize};

use crate::capabilities::{ApiBase, EndpointError};

/// Handed over by the shell when the screen becomes active.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Absolute base of the backend API, e.g. `https://api.example.com/v1/`.
    pub api_base_url: String,
}

impl ScreenConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
        }
    }

    pub fn api_base(&self) -> Result<ApiBase, EndpointError> {
        ApiBase::parse(&self.api_base_url)
    }
}

impl TryFrom<&ScreenConfig> for ApiBase {
    type Error = EndpointError;

    fn try_from(config: &ScreenConfig) -> Result<Self, Self::Error> {
        config.api_base()
    }
}
