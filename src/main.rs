use clap::Parser;
use screening_offers::core::Storage;
use screening_offers::utils::{logger, validation::Validate};
use screening_offers::{
    CliConfig, InMemoryCatalog, LocalStorage, OfferComposer, OfferError, StaticVoucherCatalog,
    TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.json_logs() {
        logger::init_json_logger(config.verbose, settings.log_level());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level());
    }

    tracing::info!("Starting screening-offers for event {}", config.event_id);
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate().and_then(|_| settings.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    match run(&config.event_id, &settings).await {
        Ok(count) => {
            tracing::info!("✅ Composed {} offers", count);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Offer composition failed: {} (Severity: {:?})",
                e,
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());

            std::process::exit(e.exit_code())
        }
    }
}

async fn run(event_id: &str, settings: &TomlConfig) -> Result<usize, OfferError> {
    let storage = LocalStorage::new(".");
    let catalog_path = settings
        .catalog_path()
        .ok_or_else(|| OfferError::MissingConfigError {
            field: "catalog.path".to_string(),
        })?;

    let catalog = InMemoryCatalog::load(&storage, catalog_path).await?;
    let vouchers = StaticVoucherCatalog::with_overrides(&settings.vouchers);
    let composer = OfferComposer::new(catalog.clone(), catalog.clone(), catalog, vouchers);

    let offers = composer.compose_offers(event_id).await?;

    let json = if settings.pretty() {
        serde_json::to_vec_pretty(&offers)?
    } else {
        serde_json::to_vec(&offers)?
    };

    match settings.output_path() {
        Some(path) => {
            storage.write_file(path, &json).await?;
            tracing::info!("📁 Offers saved to: {}", path);
        }
        None => println!("{}", String::from_utf8_lossy(&json)),
    }

    Ok(offers.len())
}
