//! Manuscript → catalog → disk → catalog.

use std::collections::HashSet;

use yijing_catalog::{
    BlockFault, BuildError, BuildOptions, CatalogLoadError, CatalogStore, build, build_from_path,
    parse_blocks,
};
use yijing_types::{Fortune, HexagramId, Trigram};

use crate::common::{NAMES, block, catalog, manuscript, trigrams, write_manuscript};

#[test]
fn well_formed_manuscript_yields_64_records_and_384_lines() {
    let built = build(&manuscript(), &BuildOptions::complete()).unwrap();
    assert_eq!(built.records.len(), 64);
    assert_eq!(built.line_count(), 384);
    assert!(built.diagnostics.is_empty());

    let codes: HashSet<_> = built.records.iter().map(|r| r.code).collect();
    assert_eq!(codes.len(), 64);
}

#[test]
fn records_follow_king_wen_names_and_trigrams() {
    let catalog = catalog();
    for (index, (short, full)) in NAMES.iter().enumerate() {
        let id = HexagramId::new(u8::try_from(index + 1).unwrap()).unwrap();
        let record = catalog.by_id(id).unwrap();
        assert_eq!(&record.short_name, short);
        assert_eq!(&record.name, full);
        assert_eq!((record.upper, record.lower), trigrams(full));
    }

    let tai = catalog.by_name("地天泰").unwrap();
    assert_eq!(tai.code.to_string(), "111000");
    assert_eq!(catalog.by_trigrams(Trigram::Qian, Trigram::Kun).unwrap(), tai);

    let ji_ji = catalog.by_name("既济卦").unwrap();
    assert_eq!(ji_ji.code.to_string(), "101010");
}

#[test]
fn supplementary_lines_never_reach_the_catalog() {
    let catalog = catalog();
    for record in catalog.iter() {
        assert_eq!(record.lines.len(), 6);
        assert!(record.lines.iter().all(|line| !line.name.starts_with('用')));
    }
    let qian = catalog.by_id(HexagramId::new(1).unwrap()).unwrap();
    assert_eq!(qian.lines[5].name, "上九");
}

#[test]
fn fortune_and_guidance_come_from_the_application_section() {
    let catalog = catalog();
    let label = |id: u8| catalog.by_id(HexagramId::new(id).unwrap()).unwrap().fortune;
    assert_eq!(label(4), Fortune::GreatFortune);
    assert_eq!(label(5), Fortune::Fortune);
    assert_eq!(label(6), Fortune::Misfortune);
    assert_eq!(label(7), Fortune::Neutral);

    let guidance = &catalog.by_id(HexagramId::new(9).unwrap()).unwrap().guidance;
    assert_eq!(guidance.career, "事业宜守正");
    assert_eq!(guidance.wealth, "投资需谨慎");
    assert_eq!(guidance.relationship, "婚姻重沟通");
    assert_eq!(guidance.health, "注意身体");
}

#[test]
fn one_unparsable_header_costs_exactly_one_record() {
    let broken = manuscript().replace("## 第30卦 离卦(离为火)", "## 第30卦 离卦 离为火");
    let results = parse_blocks(&broken);
    assert_eq!(results.len(), 64);
    assert_eq!(results.iter().filter(|r| r.is_err()).count(), 1);

    let built = build(&broken, &BuildOptions::default()).unwrap();
    assert_eq!(built.records.len(), 63);
    assert_eq!(built.diagnostics[0].block, 30);
    assert_eq!(built.diagnostics[0].fault, BlockFault::Header);

    let err = build(&broken, &BuildOptions::complete()).unwrap_err();
    assert!(matches!(err, BuildError::Incomplete { built: 63, expected: 64, .. }));
}

#[test]
fn partial_build_cannot_become_a_store() {
    let partial: Vec<String> = (1..=10).map(block).collect();
    let built = build(&partial.join("\n---\n"), &BuildOptions::default()).unwrap();
    assert_eq!(built.records.len(), 10);

    let err = CatalogStore::new(built.records).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"catalog has 10 records, expected 64");
}

#[test]
fn saved_catalog_loads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let manuscript = write_manuscript(dir.path());
    let built = build_from_path(&manuscript, &BuildOptions::complete()).unwrap();
    let store = CatalogStore::new(built.records).unwrap();

    let path = dir.path().join("data").join("catalog.json");
    store.save(&path).unwrap();
    let loaded = CatalogStore::load(&path).unwrap();

    assert!(store.iter().eq(loaded.iter()));
    for record in loaded.iter() {
        assert_eq!(loaded.find(&record.code.to_string()).unwrap(), record);
    }
}

#[test]
fn truncated_catalog_file_fails_fast() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let mut value: serde_json::Value = serde_json::from_str(&catalog().to_json().unwrap()).unwrap();
    value["hexagrams"].as_array_mut().unwrap().truncate(40);
    std::fs::write(&path, value.to_string()).unwrap();

    assert!(matches!(
        CatalogStore::load(&path),
        Err(CatalogLoadError::CountMismatch {
            expected: 64,
            actual: 40
        })
    ));
}
