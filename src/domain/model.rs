use serde::{Deserialize, Serialize};

/// The two page kinds the storefront serves metadata for. Anything else is
/// passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Product,
    Collection,
    Other,
}

/// Which third-party SEO plugin the host cooperates with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeoMode {
    #[default]
    RankMath,
    Yoast,
}

impl std::str::FromStr for SeoMode {
    type Err = crate::utils::error::SeoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "rankmath" => Ok(SeoMode::RankMath),
            "yoast" => Ok(SeoMode::Yoast),
            other => Err(crate::utils::error::SeoError::ConfigError {
                field: "seo_mode".to_string(),
                message: format!("unknown mode '{}', expected rankmath or yoast", other),
            }),
        }
    }
}

/// Per-request page context supplied by the host. Immutable, scoped to one
/// render.
#[derive(Debug, Clone)]
pub struct PageContext {
    pub kind: PageKind,
    pub raw_request_path: String,
    pub raw_redirect_path: Option<String>,
    pub host: String,
}

/// Host-supplied site identity, used for og:site_name and the JSON-LD brand
/// block. The core never reads ambient host state, so these come in as values.
#[derive(Debug, Clone, Default)]
pub struct SiteInfo {
    pub name: String,
    pub logo_url: String,
}

/// Outcome of slug extraction. `found = false` means neither path source had a
/// usable segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSlug {
    pub value: String,
    pub found: bool,
}

/// Normalized product lookup result. Every field defaults when the upstream
/// payload omits or nulls it; partial data is valid data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductRecord {
    pub title: String,
    pub description: String,
    pub sku: String,
    pub price_cents: Option<i64>,
    pub image_url: String,
    pub wine_tags: Vec<String>,
}

/// Normalized collection lookup result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionRecord {
    pub title: String,
    pub description: String,
}

/// One head emission. Values are stored raw; escaping happens when the
/// document is serialized, except for `JsonLd` which carries its fully
/// JSON-escaped payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaTag {
    Comment(String),
    Title(String),
    Meta { name: String, content: String },
    MetaProperty { property: String, content: String },
    Link { rel: String, href: String },
    Text(String),
    JsonLd(String),
}

/// Ordered sequence of head emissions for one render. Built once by the
/// renderer, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaDocument {
    tags: Vec<MetaTag>,
}

impl MetaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, tag: MetaTag) {
        self.tags.push(tag);
    }

    pub fn tags(&self) -> &[MetaTag] {
        &self.tags
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

/// Everything the host needs back from one render: the tags to emit and the
/// side effects to apply. `slug_missing` is the admin-facing diagnostic; it
/// never blocks rendering.
#[derive(Debug, Clone)]
pub struct HeadOutput {
    pub document: MetaDocument,
    pub effects: crate::core::mode::HostEffects,
    pub slug_missing: bool,
}
