use crate::core::mode::effects_for;
use crate::core::render::{
    render_collection, render_product, render_product_fetch_failure, CanonicalParts,
};
use crate::core::slug::resolve;
use crate::domain::model::{HeadOutput, MetaDocument, PageContext, PageKind, SiteInfo};
use crate::domain::ports::{CommerceApi, SettingsProvider};

/// One invocation per page render: select the variant, resolve the slug,
/// fetch by kind, render. All failures stay inside the returned output;
/// nothing here is fatal to the host.
pub struct HeadRenderer<C: CommerceApi> {
    api: C,
}

impl<C: CommerceApi> HeadRenderer<C> {
    pub fn new(api: C) -> Self {
        Self { api }
    }

    pub async fn render_head(
        &self,
        ctx: &PageContext,
        site: &SiteInfo,
        settings: &impl SettingsProvider,
    ) -> HeadOutput {
        let effects = effects_for(settings.seo_mode(), ctx.kind);
        let slug = resolve(&ctx.raw_request_path, ctx.raw_redirect_path.as_deref());

        if !slug.found {
            // Surfaced to the host as a diagnostic; rendering continues with
            // an empty document rather than a lookup for a slug we don't
            // have.
            tracing::warn!(
                "no usable slug in request path '{}' or redirect path",
                ctx.raw_request_path
            );
        }

        let document = match ctx.kind {
            PageKind::Other => MetaDocument::new(),
            _ if !slug.found => MetaDocument::new(),
            PageKind::Product => {
                match self.api.fetch_product(&slug.value, settings.tenant_id()).await {
                    Ok(record) => render_product(
                        &record,
                        site,
                        &CanonicalParts {
                            host: &ctx.host,
                            request_path: &ctx.raw_request_path,
                        },
                    ),
                    Err(e) => {
                        tracing::warn!("product lookup for '{}' failed: {}", slug.value, e);
                        render_product_fetch_failure(&e.to_string())
                    }
                }
            }
            PageKind::Collection => {
                match self
                    .api
                    .fetch_collection(&slug.value, settings.tenant_id())
                    .await
                {
                    Ok(record) => render_collection(&record),
                    Err(e) => {
                        // Collections degrade silently.
                        tracing::warn!("collection lookup for '{}' failed: {}", slug.value, e);
                        MetaDocument::new()
                    }
                }
            }
        };

        HeadOutput {
            document,
            effects,
            slug_missing: !slug.found,
        }
    }
}
