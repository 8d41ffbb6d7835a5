use crate::domain::model::{CollectionRecord, MetaDocument, MetaTag, ProductRecord, SiteInfo};
use crate::utils::escape::{escape_attr, escape_js};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const META_MARKER: &str = "better-seo meta";

/// Pieces of the canonical URL: the request host and the original (untrimmed)
/// request path.
#[derive(Debug, Clone, Copy)]
pub struct CanonicalParts<'a> {
    pub host: &'a str,
    pub request_path: &'a str,
}

impl CanonicalParts<'_> {
    pub fn url(&self) -> String {
        format!(
            "https://{}/{}",
            self.host.trim_end_matches('/'),
            self.request_path.trim_matches('/')
        )
    }
}

/// Build the full product head: marker comment, title, description, keywords,
/// canonical, Open Graph set, Twitter card, then the schema.org Product
/// JSON-LD block. Order is fixed.
pub fn render_product(
    record: &ProductRecord,
    site: &SiteInfo,
    canonical: &CanonicalParts<'_>,
) -> MetaDocument {
    let canonical_url = canonical.url();

    // Legacy implode semantics: empty components stay in place, commas and
    // all.
    let keywords = format!(
        "{},{},{}",
        record.title,
        record.sku,
        record.wine_tags.join(",")
    );

    let mut doc = MetaDocument::new();
    doc.push(MetaTag::Comment(format!(
        "{} :: VERSION {}",
        META_MARKER, VERSION
    )));
    doc.push(MetaTag::Title(record.title.clone()));
    doc.push(MetaTag::Meta {
        name: "description".to_string(),
        content: record.description.clone(),
    });
    doc.push(MetaTag::Meta {
        name: "keywords".to_string(),
        content: keywords,
    });
    doc.push(MetaTag::Link {
        rel: "canonical".to_string(),
        href: canonical_url.clone(),
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:type".to_string(),
        content: "product".to_string(),
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:title".to_string(),
        content: record.title.clone(),
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:description".to_string(),
        content: record.description.clone(),
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:image".to_string(),
        content: record.image_url.clone(),
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:url".to_string(),
        content: canonical_url,
    });
    doc.push(MetaTag::MetaProperty {
        property: "og:site_name".to_string(),
        content: site.name.clone(),
    });
    doc.push(MetaTag::Meta {
        name: "twitter:card".to_string(),
        content: "summary_large_image".to_string(),
    });
    doc.push(MetaTag::JsonLd(product_json_ld(record, site)));

    doc
}

/// Collections get only the marker comment, title and description.
pub fn render_collection(record: &CollectionRecord) -> MetaDocument {
    let mut doc = MetaDocument::new();
    doc.push(MetaTag::Comment(META_MARKER.to_string()));
    doc.push(MetaTag::Title(record.title.clone()));
    doc.push(MetaTag::Meta {
        name: "description".to_string(),
        content: record.description.clone(),
    });
    doc
}

/// Legacy behavior for a failed product lookup: an inline error string in
/// place of the metadata, nothing else.
pub fn render_product_fetch_failure(message: &str) -> MetaDocument {
    let mut doc = MetaDocument::new();
    doc.push(MetaTag::Text(format!(
        "Error from commerce lookup: {}",
        message
    )));
    doc
}

/// Offer price as a plain number: 2599 -> "25.99", 2550 -> "25.5", 2500 ->
/// "25".
fn format_price(cents: i64) -> String {
    format!("{}", cents as f64 / 100.0)
}

/// The JSON-LD block is assembled as text with each value JSON-escaped for
/// the script context; attribute escaping would be wrong here.
fn product_json_ld(record: &ProductRecord, site: &SiteInfo) -> String {
    let price = record.price_cents.map(format_price).unwrap_or_default();

    format!(
        concat!(
            "{{",
            "\"@context\":\"http://schema.org\",",
            "\"@type\":\"Product\",",
            "\"name\":\"{name}\",",
            "\"image\":\"{image}\",",
            "\"description\":\"{description}\",",
            "\"brand\":{{\"@type\":\"Brand\",\"name\":\"{brand}\",\"logo\":\"{logo}\"}},",
            "\"offers\":{{\"@type\":\"Offer\",\"priceCurrency\":\"USD\",\"price\":\"{price}\"}}",
            "}}"
        ),
        name = escape_js(&record.title),
        image = escape_js(&record.image_url),
        description = escape_js(&record.description),
        brand = escape_js(&site.name),
        logo = escape_js(&site.logo_url),
        price = price,
    )
}

impl MetaDocument {
    /// Serialize to head HTML, one emission per line. Attribute and text
    /// values are escaped here; the JSON-LD payload arrives pre-escaped for
    /// its own context.
    pub fn to_html(&self) -> String {
        let lines: Vec<String> = self
            .tags()
            .iter()
            .map(|tag| match tag {
                MetaTag::Comment(text) => format!("<!-- {} -->", escape_attr(text)),
                MetaTag::Title(text) => format!("<title>{}</title>", escape_attr(text)),
                MetaTag::Meta { name, content } => format!(
                    "<meta name=\"{}\" content=\"{}\"/>",
                    escape_attr(name),
                    escape_attr(content)
                ),
                MetaTag::MetaProperty { property, content } => format!(
                    "<meta property=\"{}\" content=\"{}\"/>",
                    escape_attr(property),
                    escape_attr(content)
                ),
                MetaTag::Link { rel, href } => format!(
                    "<link rel=\"{}\" href=\"{}\"/>",
                    escape_attr(rel),
                    escape_attr(href)
                ),
                MetaTag::Text(text) => escape_attr(text),
                MetaTag::JsonLd(json) => format!(
                    "<script type=\"application/ld+json\">{}</script>",
                    json
                ),
            })
            .collect();

        lines.join("\n")
    }
}
