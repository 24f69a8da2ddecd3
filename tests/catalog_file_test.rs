use anyhow::Result;
use screening_offers::core::Storage;
use screening_offers::utils::validation::Validate;
use screening_offers::{
    InMemoryCatalog, LocalStorage, OfferComposer, StaticVoucherCatalog, TomlConfig,
};
use tempfile::TempDir;

const SAMPLE_CATALOG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample_catalog.json");

async fn sample_composer(
    vouchers: StaticVoucherCatalog,
) -> Result<OfferComposer<InMemoryCatalog, InMemoryCatalog, InMemoryCatalog, StaticVoucherCatalog>>
{
    let storage = LocalStorage::new(".");
    let catalog = InMemoryCatalog::load(&storage, SAMPLE_CATALOG).await?;
    Ok(OfferComposer::new(
        catalog.clone(),
        catalog.clone(),
        catalog,
        vouchers,
    ))
}

#[tokio::test]
async fn test_sample_catalog_imax_screening() -> Result<()> {
    let composer = sample_composer(StaticVoucherCatalog::default()).await?;

    let offers = composer.compose_offers("201810170930-imax").await?;

    let ids: Vec<&str> = offers.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "tt-general",
            "tt-student",
            "Offer-by-movieticket-01",
            "Offer-by-movieticket-02"
        ]
    );
    // 1900 + IMAX 500 + DolbyAtmos 200
    assert_eq!(offers[0].total_price(), 2600);
    assert_eq!(offers[1].total_price(), 2200);
    // the 2D-only movie ticket charge does not apply
    assert_eq!(offers[2].total_price(), 800);
    assert_eq!(offers[2].price_specification.price_component.len(), 2);
    Ok(())
}

#[tokio::test]
async fn test_sample_catalog_plain_screening() -> Result<()> {
    let composer = sample_composer(StaticVoucherCatalog::default()).await?;

    let offers = composer.compose_offers("201810171200-2d").await?;

    let totals: Vec<u64> = offers.iter().map(|o| o.total_price()).collect();
    assert_eq!(totals, vec![1900, 1500, 0]);
    assert_eq!(offers[2].id, "Offer-by-movieticket-01");
    assert_eq!(offers[2].name.ja, "ムビチケ一般");
    Ok(())
}

#[tokio::test]
async fn test_offers_serialize_in_wire_shape() -> Result<()> {
    let composer = sample_composer(StaticVoucherCatalog::default()).await?;
    let offers = composer.compose_offers("201810170930-imax").await?;

    let json = serde_json::to_value(&offers)?;
    let first = &json[0];

    assert_eq!(first["typeOf"], "Offer");
    assert_eq!(first["priceCurrency"], "JPY");
    assert_eq!(first["availability"], "InStock");
    assert_eq!(first["priceSpecification"]["typeOf"], "CompoundPriceSpecification");
    assert_eq!(first["priceSpecification"]["priceCurrency"], "JPY");
    assert_eq!(first["priceSpecification"]["valueAddedTaxIncluded"], true);

    let components = first["priceSpecification"]["priceComponent"]
        .as_array()
        .expect("priceComponent is an array");
    assert_eq!(components[0]["typeOf"], "UnitPriceSpecification");
    assert_eq!(components[0]["referenceQuantity"]["unitCode"], "C62");
    assert_eq!(components[0]["referenceQuantity"]["value"], 1);
    assert_eq!(components[1]["typeOf"], "VideoFormatChargeSpecification");
    assert_eq!(components[1]["appliesToVideoFormat"], "IMAX");
    assert_eq!(components[2]["typeOf"], "SoundFormatChargeSpecification");

    let movie_ticket_offer = &json[2];
    assert_eq!(
        movie_ticket_offer["priceSpecification"]["typeOf"],
        "CompoundPriceSpecification"
    );
    Ok(())
}

#[tokio::test]
async fn test_config_file_drives_voucher_names_and_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("offers.toml");
    tokio::fs::write(
        &config_path,
        format!(
            r#"
[catalog]
path = "{}"

[output]
path = "out/offers.json"
pretty = true

[vouchers]
"02" = "学生"
"#,
            SAMPLE_CATALOG.replace('\\', "/")
        ),
    )
    .await?;

    let settings = TomlConfig::from_file(&config_path)?;
    settings.validate()?;

    let composer =
        sample_composer(StaticVoucherCatalog::with_overrides(&settings.vouchers)).await?;
    let offers = composer.compose_offers("201810170930-imax").await?;
    assert_eq!(offers[3].name.ja, "ムビチケ学生");

    let storage = LocalStorage::new(temp_dir.path());
    let output_path = settings.output_path().expect("output path configured");
    storage
        .write_file(output_path, &serde_json::to_vec_pretty(&offers)?)
        .await?;

    let written: serde_json::Value =
        serde_json::from_slice(&storage.read_file(output_path).await?)?;
    assert_eq!(written.as_array().map(Vec::len), Some(4));
    Ok(())
}
