use crate::config::SeoConfig;
use crate::utils::error::{Result, SeoError};
use std::path::Path;

impl SeoConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SeoError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| SeoError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::SeoMode;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
tenant_id = "winery-a"
seo_mode = "yoast"
api_base = "https://api.commerce7.com/v1"
"#;

        let config = SeoConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.tenant_id, "winery-a");
        assert_eq!(config.seo_mode, SeoMode::Yoast);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let config = SeoConfig::from_toml_str("seo_mode = \"yoast\"").unwrap();
        assert_eq!(config.tenant_id, "default-tenant-id");
        assert_eq!(config.seo_mode, SeoMode::Yoast);
        assert_eq!(config.api_base, "https://api.commerce7.com/v1");
    }

    #[test]
    fn test_empty_document_is_all_defaults() {
        let config = SeoConfig::from_toml_str("").unwrap();
        assert_eq!(config.tenant_id, "default-tenant-id");
        assert_eq!(config.seo_mode, SeoMode::RankMath);
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(SeoConfig::from_toml_str("seo_mode = \"squirrly\"").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"tenant_id = \"winery-b\"\n")
            .unwrap();

        let config = SeoConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.tenant_id, "winery-b");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = SeoConfig::from_file("/nonexistent/better-seo.toml").unwrap_err();
        assert!(matches!(err, SeoError::IoError(_)));
    }
}
