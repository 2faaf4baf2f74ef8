use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};

use yijing_catalog::{BuildOptions, CatalogStore, build_from_path};
use yijing_config::{YijingConfig, default_catalog_path};
use yijing_core::{CoinToss, Reading, divine};
use yijing_types::{FIGURE_LINES, HEXAGRAM_COUNT, TossOutcome, Trigram};

fn catalog_path(config: &YijingConfig, explicit: Option<PathBuf>) -> Result<PathBuf> {
    explicit
        .or_else(|| config.catalog().path())
        .or_else(default_catalog_path)
        .context("no catalog path: pass one explicitly or set [catalog] path")
}

fn open_catalog(config: &YijingConfig, explicit: Option<PathBuf>) -> Result<Arc<CatalogStore>> {
    let path = catalog_path(config, explicit)?;
    let store = CatalogStore::load(&path).with_context(|| {
        format!(
            "loading catalog {} (run `yijing build` first)",
            path.display()
        )
    })?;
    Ok(Arc::new(store))
}

pub fn build(
    config: &YijingConfig,
    manuscript: Option<PathBuf>,
    output: Option<PathBuf>,
    dry_run: bool,
) -> Result<()> {
    let settings = config.catalog();
    let Some(manuscript) = manuscript.or_else(|| settings.manuscript()) else {
        bail!("no manuscript: pass a path or set [catalog] manuscript");
    };
    let options = BuildOptions {
        expected_records: if dry_run {
            None
        } else {
            Some(settings.expected_records.unwrap_or(HEXAGRAM_COUNT))
        },
        reject_duplicate_codes: settings.reject_duplicate_codes,
    };

    let built = build_from_path(&manuscript, &options)
        .with_context(|| format!("building catalog from {}", manuscript.display()))?;
    for diagnostic in &built.diagnostics {
        eprintln!("skipped {diagnostic}");
    }
    println!(
        "{} hexagrams, {} lines, {} blocks skipped",
        built.records.len(),
        built.line_count(),
        built.diagnostics.len()
    );
    if dry_run {
        return Ok(());
    }

    let store = CatalogStore::new(built.records).context("validating catalog")?;
    let path = catalog_path(config, output)?;
    store
        .save(&path)
        .with_context(|| format!("saving catalog to {}", path.display()))?;
    println!("wrote {}", path.display());
    Ok(())
}

fn draw_outcomes(seed: Option<u64>) -> [TossOutcome; FIGURE_LINES] {
    match seed {
        Some(seed) => CoinToss::seeded(seed).draw_six(),
        None => CoinToss::new().draw_six(),
    }
}

pub fn cast(
    config: &YijingConfig,
    seed: Option<u64>,
    catalog: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let result = divine(&draw_outcomes(seed.or_else(|| config.seed())))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let catalog = open_catalog(config, catalog)?;
    let reading = Reading::interpret(&result, &catalog)?;
    println!("{reading}");
    Ok(())
}

fn qualities(upper: Trigram, lower: Trigram) -> String {
    format!("外{}内{}", upper.quality(), lower.quality())
}

pub fn show(config: &YijingConfig, query: &str, catalog: Option<PathBuf>) -> Result<()> {
    let catalog = open_catalog(config, catalog)?;
    let record = catalog.find(query)?;

    println!("{record}");
    println!(
        "上{} 下{}  {}  {}",
        record.upper,
        record.lower,
        record.code,
        qualities(record.upper, record.lower)
    );
    println!("卦辞: {}", record.judgment);
    println!("象辞: {}", record.image);
    println!("彖辞: {}", record.commentary);
    println!("卦义: {}", record.summary);
    println!("吉凶: {}", record.fortune);
    for line in &record.lines {
        println!("{}: {}", line.name, line.text);
    }
    Ok(())
}
