use crate::domain::model::{CollectionRecord, ProductRecord};
use crate::domain::ports::CommerceApi;
use crate::utils::error::{Result, SeoError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.commerce7.com/v1";

/// A slow upstream must not hang the page render; a timed-out lookup degrades
/// like any other fetch failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Commerce7 storefront lookup client. One GET per call, `tenant` header for
/// multi-tenant scoping, no retries, no caching.
pub struct Commerce7Client {
    base_url: String,
    client: Client,
}

impl Commerce7Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    async fn get_body(&self, url: &str, tenant_id: &str) -> Result<String> {
        tracing::debug!("Commerce lookup: {}", url);
        let response = self
            .client
            .get(url)
            .header("tenant", tenant_id)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| SeoError::FetchError {
                message: e.to_string(),
            })?;

        let status = response.status();
        tracing::debug!("Commerce response status: {}", status);

        if !status.is_success() {
            return Err(SeoError::FetchError {
                message: format!("unexpected status {}", status),
            });
        }

        let body = response.text().await.map_err(|e| SeoError::FetchError {
            message: e.to_string(),
        })?;
        if body.is_empty() {
            return Err(SeoError::FetchError {
                message: "empty response body".to_string(),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl CommerceApi for Commerce7Client {
    async fn fetch_product(&self, slug: &str, tenant_id: &str) -> Result<ProductRecord> {
        let url = format!("{}/product/slug/{}/for-web", self.base_url, slug);
        let body = self.get_body(&url, tenant_id).await?;
        let wire: ProductResponse = serde_json::from_str(&body)?;
        Ok(wire.into())
    }

    async fn fetch_collection(&self, slug: &str, tenant_id: &str) -> Result<CollectionRecord> {
        // The upstream endpoint expects this exact query shape, leading `&`
        // included.
        let url = format!("{}/product/for-web?&collectionSlug={}", self.base_url, slug);
        let body = self.get_body(&url, tenant_id).await?;
        let wire: CollectionResponse = serde_json::from_str(&body)?;
        Ok(wire.into())
    }
}

// Wire shapes. Every field tolerates being absent or null; a partial payload
// still produces a record with defaults in the gaps.

#[derive(Debug, Default, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    seo: Option<SeoText>,
    #[serde(default)]
    variants: Option<Vec<VariantWire>>,
    #[serde(default)]
    wine: serde_json::Value,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SeoText {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct VariantWire {
    #[serde(default)]
    price: Option<i64>,
    #[serde(default)]
    sku: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    collection: Option<CollectionWire>,
}

#[derive(Debug, Default, Deserialize)]
struct CollectionWire {
    #[serde(default)]
    seo: Option<SeoText>,
}

impl From<ProductResponse> for ProductRecord {
    fn from(wire: ProductResponse) -> Self {
        let seo = wire.seo.unwrap_or_default();
        let first_variant = wire
            .variants
            .unwrap_or_default()
            .into_iter()
            .next()
            .unwrap_or_default();

        ProductRecord {
            title: seo.title.unwrap_or_default(),
            description: seo.description.unwrap_or_default(),
            sku: first_variant.sku.unwrap_or_default(),
            price_cents: first_variant.price,
            image_url: wire.image.unwrap_or_default(),
            wine_tags: wine_tags(wire.wine),
        }
    }
}

impl From<CollectionResponse> for CollectionRecord {
    fn from(wire: CollectionResponse) -> Self {
        let seo = wire
            .collection
            .unwrap_or_default()
            .seo
            .unwrap_or_default();

        CollectionRecord {
            title: seo.title.unwrap_or_default(),
            description: seo.description.unwrap_or_default(),
        }
    }
}

/// The upstream `wine` field arrives as either an object of attributes or an
/// array; its scalar values become the tag list in payload order.
fn wine_tags(value: serde_json::Value) -> Vec<String> {
    let scalar = |v: serde_json::Value| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    };

    match value {
        serde_json::Value::Array(items) => items.into_iter().filter_map(scalar).collect(),
        serde_json::Value::Object(map) => map.into_iter().filter_map(|(_, v)| scalar(v)).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_product_full_payload() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/product/slug/estate-cabernet/for-web")
                .header("tenant", "winery-a");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "seo": {"title": "Estate Cabernet", "description": "A bold red."},
                    "variants": [{"price": 2599, "sku": "CAB-001"}],
                    "wine": {"varietal": "Cabernet Sauvignon", "vintage": 2021},
                    "image": "https://img.example.com/cab.jpg"
                }));
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client
            .fetch_product("estate-cabernet", "winery-a")
            .await
            .unwrap();

        api_mock.assert();
        assert_eq!(record.title, "Estate Cabernet");
        assert_eq!(record.description, "A bold red.");
        assert_eq!(record.sku, "CAB-001");
        assert_eq!(record.price_cents, Some(2599));
        assert_eq!(record.image_url, "https://img.example.com/cab.jpg");
        assert_eq!(record.wine_tags, vec!["Cabernet Sauvignon", "2021"]);
    }

    #[tokio::test]
    async fn test_fetch_product_partial_payload_uses_defaults() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/slug/mystery/for-web");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"seo": {"title": "Mystery Wine"}}));
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client.fetch_product("mystery", "winery-a").await.unwrap();

        assert_eq!(record.title, "Mystery Wine");
        assert_eq!(record.description, "");
        assert_eq!(record.sku, "");
        assert_eq!(record.price_cents, None);
        assert_eq!(record.image_url, "");
        assert!(record.wine_tags.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_product_null_fields_use_defaults() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/slug/nulls/for-web");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "seo": {"title": null, "description": null},
                    "variants": [{"price": null, "sku": null}],
                    "wine": null,
                    "image": null
                }));
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client.fetch_product("nulls", "winery-a").await.unwrap();

        assert_eq!(record, ProductRecord::default());
    }

    #[tokio::test]
    async fn test_fetch_product_non_2xx_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/slug/missing/for-web");
            then.status(404);
        });

        let client = Commerce7Client::new(server.base_url());
        let err = client
            .fetch_product("missing", "winery-a")
            .await
            .unwrap_err();

        assert!(matches!(err, SeoError::FetchError { .. }));
    }

    #[tokio::test]
    async fn test_fetch_product_empty_body_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/slug/empty/for-web");
            then.status(200).body("");
        });

        let client = Commerce7Client::new(server.base_url());
        let err = client.fetch_product("empty", "winery-a").await.unwrap_err();

        assert!(matches!(err, SeoError::FetchError { .. }));
    }

    #[tokio::test]
    async fn test_fetch_collection_sends_slug_as_query_param() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/product/for-web")
                .query_param("collectionSlug", "reds")
                .header("tenant", "winery-a");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "collection": {"seo": {"title": "Red Wines", "description": "All reds."}}
                }));
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client.fetch_collection("reds", "winery-a").await.unwrap();

        api_mock.assert();
        assert_eq!(record.title, "Red Wines");
        assert_eq!(record.description, "All reds.");
    }

    #[tokio::test]
    async fn test_fetch_collection_missing_nested_objects() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/for-web");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({}));
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client.fetch_collection("reds", "winery-a").await.unwrap();

        assert_eq!(record, CollectionRecord::default());
    }

    #[test]
    fn test_wine_tags_from_array() {
        let tags = wine_tags(serde_json::json!(["Merlot", "2019"]));
        assert_eq!(tags, vec!["Merlot", "2019"]);
    }

    #[test]
    fn test_wine_tags_keep_payload_key_order() {
        // Keys arrive in non-alphabetical order; the tag list must follow the
        // payload, not a sorted map.
        let wine: serde_json::Value =
            serde_json::from_str(r#"{"varietal":"Syrah","appellation":"Walla Walla"}"#).unwrap();
        assert_eq!(wine_tags(wine), vec!["Syrah", "Walla Walla"]);
    }

    #[tokio::test]
    async fn test_fetch_product_wine_tags_follow_payload_order() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/product/slug/syrah/for-web");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"wine":{"varietal":"Syrah","appellation":"Walla Walla"}}"#);
        });

        let client = Commerce7Client::new(server.base_url());
        let record = client.fetch_product("syrah", "winery-a").await.unwrap();

        assert_eq!(record.wine_tags, vec!["Syrah", "Walla Walla"]);
    }

    #[test]
    fn test_wine_tags_from_non_collection_value() {
        assert!(wine_tags(serde_json::json!("solo")).is_empty());
        assert!(wine_tags(serde_json::Value::Null).is_empty());
        assert!(wine_tags(serde_json::json!(42)).is_empty());
    }
}
