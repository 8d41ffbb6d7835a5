#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

use crate::core::client::DEFAULT_API_BASE;
use crate::domain::model::SeoMode;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TENANT_ID: &str = "default-tenant-id";

/// The two admin-persisted settings plus the API base. Any key missing from
/// the persisted form gets its default, so an absent config file is a valid
/// config.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(default = "default_tenant_id")]
    pub tenant_id: String,

    #[serde(default)]
    pub seo_mode: SeoMode,

    #[serde(default = "default_api_base")]
    pub api_base: String,
}

impl Default for SeoConfig {
    fn default() -> Self {
        Self {
            tenant_id: default_tenant_id(),
            seo_mode: SeoMode::default(),
            api_base: default_api_base(),
        }
    }
}

fn default_tenant_id() -> String {
    DEFAULT_TENANT_ID.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl SettingsProvider for SeoConfig {
    fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    fn seo_mode(&self) -> SeoMode {
        self.seo_mode
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Validate for SeoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("tenant_id", &self.tenant_id)?;
        Ok(())
    }
}
