use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use wandering::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::parse();
    config.validate().context("Invalid configuration")?;

    let page = match config.article.as_deref() {
        Some(slug) => wandering::generate_article(&config, slug)
            .with_context(|| format!("Failed to generate article {}", slug))?,
        None => {
            let summary = wandering::generate_site(&config, wandering::articles())
                .context("Failed to generate site")?;
            summary.index_path().to_path_buf()
        }
    };

    println!("Generated: {}", page.display());

    if !config.no_open
        && let Err(e) = open::that(&page)
    {
        tracing::warn!(error = %e, "failed to open browser");
    }

    Ok(())
}
