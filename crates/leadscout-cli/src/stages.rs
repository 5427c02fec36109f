//! Stage handlers for the CLI.
//!
//! Each handler builds what it needs from the loaded config and returns
//! `anyhow::Result`. `run_all` chains them; a failed stage is logged and the
//! sequence moves on to the next one.

use leadscout_core::{AppConfig, ScrapedRecord};
use leadscout_export::{export_by_country, export_csv, load_records, EnrichOptions, Enricher};
use leadscout_scraper::discovery::candidate_labels;
use leadscout_scraper::{
    discover_subdomains, DiscoveryOptions, PortalClient, ScrapeOptions, Scraper,
};

/// Longest value printed per field in the run summary.
const PREVIEW_CHARS: usize = 100;

fn build_client(config: &AppConfig) -> anyhow::Result<PortalClient> {
    PortalClient::from_config(config)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))
}

pub(crate) async fn run_discover(config: &AppConfig) -> anyhow::Result<Vec<String>> {
    let client = build_client(config)?;
    let candidates = candidate_labels();
    let hosts = discover_subdomains(
        &client,
        &candidates,
        &DiscoveryOptions::from_config(config),
    )
    .await?;
    println!(
        "discovered {} subdomains -> {}",
        hosts.len(),
        config.discovered_path().display()
    );
    Ok(hosts)
}

pub(crate) async fn run_scrape(
    config: &AppConfig,
    targets: &[String],
    limit: Option<usize>,
) -> anyhow::Result<Vec<ScrapedRecord>> {
    let client = build_client(config)?;
    let scraper = Scraper::new(&client, ScrapeOptions::from_config(config));
    let records = scraper
        .scrape(targets, limit.unwrap_or(config.scrape_limit))
        .await?;
    println!(
        "scraped {} records -> {}",
        records.len(),
        config.scraped_json_path().display()
    );
    Ok(records)
}

/// Scrapes the targets listed in the discovered-subdomains file.
pub(crate) async fn run_scrape_from_file(
    config: &AppConfig,
    limit: Option<usize>,
) -> anyhow::Result<Vec<ScrapedRecord>> {
    let path = config.discovered_path();
    let body = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let targets: Vec<String> = serde_json::from_str(&body)
        .map_err(|e| anyhow::anyhow!("malformed target list in {}: {e}", path.display()))?;
    run_scrape(config, &targets, limit).await
}

pub(crate) async fn run_export(config: &AppConfig) -> anyhow::Result<()> {
    let records = load_records(&config.scraped_json_path()).await?;
    let written = export_csv(&records, &config.scraped_csv_path())?;
    println!(
        "exported {written} rows -> {}",
        config.scraped_csv_path().display()
    );
    Ok(())
}

pub(crate) async fn run_categorize(config: &AppConfig) -> anyhow::Result<()> {
    let records = load_records(&config.scraped_json_path()).await?;
    let counts = export_by_country(&records, &config.categorized_csv_path())?;
    for (country, count) in &counts {
        println!("  {country}: {count} records");
    }
    Ok(())
}

pub(crate) async fn run_enrich(config: &AppConfig, limit: Option<usize>) -> anyhow::Result<()> {
    let records = load_records(&config.scraped_json_path()).await?;
    let client = build_client(config)?;
    let mut options = EnrichOptions::from_config(config);
    if let Some(limit) = limit {
        options.limit = limit;
    }
    let rows = Enricher::new(&client, options).enrich(&records).await?;
    println!(
        "enriched {} records -> {}",
        rows.len(),
        config.enriched_csv_path().display()
    );
    Ok(())
}

/// Full sequence: discover, scrape, export, categorize, enrich.
///
/// Stage failures are logged and skipped. Scraping needs the discovered list,
/// so a failed discovery leaves it with no targets.
pub(crate) async fn run_all(config: &AppConfig) -> anyhow::Result<()> {
    let targets = match run_discover(config).await {
        Ok(hosts) => hosts,
        Err(e) => {
            tracing::error!(stage = "discover", error = %e, "stage failed");
            Vec::new()
        }
    };

    let records = match run_scrape(config, &targets, None).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(stage = "scrape", error = %e, "stage failed");
            Vec::new()
        }
    };

    if let Err(e) = run_export(config).await {
        tracing::error!(stage = "export", error = %e, "stage failed");
    }
    if let Err(e) = run_categorize(config).await {
        tracing::error!(stage = "categorize", error = %e, "stage failed");
    }
    if let Err(e) = run_enrich(config, None).await {
        tracing::error!(stage = "enrich", error = %e, "stage failed");
    }

    if let Some(first) = records.first() {
        print_preview(first)?;
    }
    Ok(())
}

fn print_preview(record: &ScrapedRecord) -> anyhow::Result<()> {
    let value = serde_json::to_value(record)?;
    println!("\nexample record:");
    if let Some(fields) = value.as_object() {
        for (key, field) in fields {
            println!("  {key}: {}", preview(field));
        }
    }
    Ok(())
}

/// Scalars print as-is; arrays and objects are truncated with a trailing `...`.
fn preview(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            let rendered: String = value.to_string().chars().take(PREVIEW_CHARS).collect();
            format!("{rendered}...")
        }
        other => other.to_string(),
    }
}
