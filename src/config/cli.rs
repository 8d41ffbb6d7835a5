use clap::Parser;

/// Stand-in host integration: render the head tags for one page from the
/// command line.
#[derive(Debug, Clone, Parser)]
#[command(name = "better-seo")]
#[command(about = "Render storefront SEO head tags for a single page")]
pub struct CliConfig {
    /// Page kind: product, collection or other
    #[arg(long, default_value = "product")]
    pub kind: String,

    /// Raw request path, e.g. /shop/product/estate-cabernet
    #[arg(long)]
    pub path: String,

    /// Raw redirect path fallback, if the server set one
    #[arg(long)]
    pub redirect_path: Option<String>,

    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Site title for og:site_name and the JSON-LD brand
    #[arg(long, default_value = "")]
    pub site_name: String,

    /// Site logo URL for the JSON-LD brand
    #[arg(long, default_value = "")]
    pub logo_url: String,

    /// Optional TOML settings file; missing keys use defaults
    #[arg(long)]
    pub config: Option<String>,

    /// Override the configured tenant id
    #[arg(long)]
    pub tenant: Option<String>,

    /// Override the configured SEO mode (rankmath or yoast)
    #[arg(long)]
    pub seo_mode: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
