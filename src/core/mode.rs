use crate::domain::model::{PageKind, SeoMode};

/// Side effects the host must apply for the chosen variant. Plain data; the
/// core performs none of these itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostEffects {
    pub variant: SeoMode,
    /// Disable the competing plugin's own head hook on this page.
    pub suppress_competing_head: bool,
    /// Register the extra sitemap provider with the host.
    pub register_sitemap_provider: bool,
    /// Turn off the host SEO plugin's canonical tag on this page.
    pub force_canonical_off: bool,
}

/// Variant selection. Tag content is identical across variants; only the
/// required host side effects differ.
pub fn effects_for(mode: SeoMode, kind: PageKind) -> HostEffects {
    let commerce_page = matches!(kind, PageKind::Product | PageKind::Collection);

    HostEffects {
        variant: mode,
        suppress_competing_head: mode == SeoMode::RankMath && commerce_page,
        register_sitemap_provider: mode == SeoMode::RankMath,
        force_canonical_off: kind == PageKind::Product,
    }
}
