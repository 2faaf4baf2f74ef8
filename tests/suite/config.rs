//! Configuration driving catalog builds and casts.

use std::fs;

use yijing_catalog::{BuildOptions, CatalogStore, build_from_path};
use yijing_config::{ConfigError, YijingConfig};
use yijing_core::{CoinToss, divine};

use crate::common::write_manuscript;

#[test]
fn configured_paths_and_seed_drive_a_cast() {
    let dir = tempfile::tempdir().unwrap();
    let manuscript = write_manuscript(dir.path());
    let catalog_path = dir.path().join("catalog.json");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[catalog]\npath = {:?}\nmanuscript = {:?}\n\n[divination]\nseed = 9\n",
            catalog_path.display().to_string(),
            manuscript.display().to_string(),
        ),
    )
    .unwrap();

    let config = YijingConfig::load_from(&config_path).unwrap().unwrap();
    let settings = config.catalog();
    let options = BuildOptions {
        expected_records: settings.expected_records.or(Some(64)),
        reject_duplicate_codes: settings.reject_duplicate_codes,
    };
    let built = build_from_path(settings.manuscript().unwrap(), &options).unwrap();
    CatalogStore::new(built.records)
        .unwrap()
        .save(settings.path().unwrap())
        .unwrap();

    let store = CatalogStore::load(&catalog_path).unwrap();
    let seed = config.seed().unwrap();
    let first = divine(&CoinToss::seeded(seed).draw_six()).unwrap();
    let second = divine(&CoinToss::seeded(seed).draw_six()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        store.by_figure(&first.primary()).unwrap(),
        store.by_figure(&second.primary()).unwrap()
    );
}

#[test]
fn unreadable_config_is_an_error_not_a_default() {
    let dir = tempfile::tempdir().unwrap();
    // A directory exists but cannot be read as a file.
    let err = YijingConfig::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert_eq!(err.path(), dir.path());
}
