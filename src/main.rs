use clap::Parser;
use better_seo::utils::{logger, validation::Validate};
use better_seo::{
    CliConfig, Commerce7Client, HeadRenderer, PageContext, PageKind, SeoConfig, SiteInfo,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting better-seo CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let mut config = match &cli.config {
        Some(path) => SeoConfig::from_file(path)?,
        None => SeoConfig::default(),
    };
    if let Some(tenant) = &cli.tenant {
        config.tenant_id = tenant.clone();
    }
    if let Some(mode) = &cli.seo_mode {
        config.seo_mode = mode.parse()?;
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let kind = match cli.kind.as_str() {
        "product" => PageKind::Product,
        "collection" => PageKind::Collection,
        _ => PageKind::Other,
    };

    let ctx = PageContext {
        kind,
        raw_request_path: cli.path.clone(),
        raw_redirect_path: cli.redirect_path.clone(),
        host: cli.host.clone(),
    };
    let site = SiteInfo {
        name: cli.site_name.clone(),
        logo_url: cli.logo_url.clone(),
    };

    let client = Commerce7Client::new(config.api_base.clone());
    let renderer = HeadRenderer::new(client);

    let output = renderer.render_head(&ctx, &site, &config).await;

    if output.slug_missing {
        tracing::warn!("No usable slug in the request or redirect path");
    }
    tracing::info!(
        "Effects for {:?}: suppress_competing_head={} register_sitemap_provider={} force_canonical_off={}",
        output.effects.variant,
        output.effects.suppress_competing_head,
        output.effects.register_sitemap_provider,
        output.effects.force_canonical_off
    );

    if output.document.is_empty() {
        tracing::info!("Nothing to emit for this page");
    } else {
        println!("{}", output.document.to_html());
    }

    Ok(())
}
