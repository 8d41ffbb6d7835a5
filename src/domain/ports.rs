use crate::domain::model::{CollectionRecord, ProductRecord, SeoMode};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Outbound lookup seam. One call per render, no retries, no caching.
#[async_trait]
pub trait CommerceApi: Send + Sync {
    async fn fetch_product(&self, slug: &str, tenant_id: &str) -> Result<ProductRecord>;
    async fn fetch_collection(&self, slug: &str, tenant_id: &str) -> Result<CollectionRecord>;
}

/// Read surface over the host-persisted settings. The core never writes
/// through this.
pub trait SettingsProvider: Send + Sync {
    fn tenant_id(&self) -> &str;
    fn seo_mode(&self) -> SeoMode;
    fn api_base(&self) -> &str;
}
