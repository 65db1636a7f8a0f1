use ghashio_adapter::config::ConfigValidator;
use ghashio_adapter::infrastructure::adapters::{default_registry, fetch_reports, GHASHIO_CODE};
use ghashio_adapter::shared::LoggingUtils;
use ghashio_adapter::{AppConfig, MiningProvider};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("{:#}", e);
        eprintln!("ghashio-fetch: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    LoggingUtils::initialize(&config.logging.level, &config.logging.format)?;
    info!("Configuration loaded successfully");

    ConfigValidator::validate_config(&config)?;
    let registry = default_registry(&config)?;
    let provider = registry.get(GHASHIO_CODE)?;

    if config.accounts.is_empty() {
        warn!("No accounts configured, nothing to fetch");
        return Ok(());
    }

    info!(accounts = config.accounts.len(), provider = provider.code(), "Fetching hashrates");

    // Per-account failures end up in the reports, not in the exit status
    for report in fetch_reports(provider.as_ref(), &config.accounts).await? {
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}
