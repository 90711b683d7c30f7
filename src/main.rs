use anyhow::{Context, Result};
use app_translation::config::Config;
use app_translation::i18n::{
    Catalog, FixedLanguage, HttpBundleLoader, LanguageSelector, PreferredLanguageSource,
    SelectorOptions, SystemLocale,
};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("app_translation=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let preferred_source: Box<dyn PreferredLanguageSource + Send> =
        match &config.preferred_language {
            Some(tag) => Box::new(FixedLanguage::new(Some(tag.clone()))),
            None => Box::new(SystemLocale),
        };

    let catalog = Catalog::new(HttpBundleLoader::from_config(&config));
    let mut selector = LanguageSelector::new(
        catalog,
        preferred_source,
        SelectorOptions::from_config(&config),
    )?;

    selector.subscribe(|tag| info!("Display language is now {}", tag));

    let language = match selector.detect_preferred_language() {
        Some(tag) => tag,
        None => selector.reset_to_default_language()?,
    };
    info!("Selected language {}", language);

    selector.run_pending().await;

    for key in std::env::args().skip(1) {
        let text = selector
            .lookup_text_async(&key, None)
            .await
            .with_context(|| format!("Failed to translate '{}'", key))?;
        println!("{} = {}", key, text);
    }

    let report = selector.catalog().metrics().report();
    info!(
        "Catalog: {} lookups ({:.0}% hit rate), {} bundle loads, {} failures",
        report.lookups, report.hit_rate, report.bundle_loads, report.load_failures
    );

    Ok(())
}
