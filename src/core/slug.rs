use crate::domain::model::ResolvedSlug;

/// The storefront rewrites every product URL through a page whose own name is
/// "product", so a final segment equal to this keyword means the real slug is
/// elsewhere. A product whose slug is literally "product" therefore always
/// falls back to the redirect path; that collision is long-standing behavior
/// and is kept as is.
const DEGENERATE_SLUG: &str = "product";

/// Derive the canonical slug from the request path, falling back to the
/// redirect path when the primary source has no usable segment. Never fails;
/// `found = false` is the "no usable slug anywhere" state.
pub fn resolve(path: &str, redirect_path: Option<&str>) -> ResolvedSlug {
    let candidate = last_segment(path);
    if is_usable(&candidate) {
        return ResolvedSlug {
            value: candidate,
            found: true,
        };
    }

    let fallback = last_segment(redirect_path.unwrap_or(""));
    if is_usable(&fallback) {
        return ResolvedSlug {
            value: fallback,
            found: true,
        };
    }

    ResolvedSlug {
        value: String::new(),
        found: false,
    }
}

fn last_segment(path: &str) -> String {
    path.trim_matches('/')
        .rsplit('/')
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
        .to_string()
}

fn is_usable(segment: &str) -> bool {
    !segment.is_empty() && segment != DEGENERATE_SLUG
}
