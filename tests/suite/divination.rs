//! Toss → resolve → catalog lookup, end to end.

use std::sync::Arc;
use std::thread;

use rand::SeedableRng;
use rand::rngs::StdRng;

use yijing_core::{CoinToss, DivinationResult, Reading, divine, draw_with_seed};
use yijing_types::{LinePosition, TossOutcome};

use crate::common::catalog;

fn outcomes(values: [u8; 6]) -> Vec<TossOutcome> {
    values
        .into_iter()
        .map(|v| TossOutcome::try_from(v).unwrap())
        .collect()
}

#[test]
fn stable_heaven_has_no_secondary_reading() {
    let catalog = catalog();
    let result = divine(&outcomes([7, 7, 7, 7, 7, 7])).unwrap();
    let reading = Reading::interpret(&result, &catalog).unwrap();

    assert_eq!(reading.primary.name, "乾为天");
    assert!(reading.secondary.is_none());
    assert!(reading.changing_lines.is_empty());
}

#[test]
fn all_old_yang_turns_heaven_into_earth() {
    let catalog = catalog();
    let result = divine(&outcomes([9, 9, 9, 9, 9, 9])).unwrap();
    let reading = Reading::interpret(&result, &catalog).unwrap();

    assert_eq!(reading.primary.name, "乾为天");
    assert_eq!(reading.secondary.unwrap().name, "坤为地");
    let names: Vec<_> = reading
        .changing_lines
        .iter()
        .map(|line| line.name.as_str())
        .collect();
    assert_eq!(names, ["初九", "九二", "九三", "九四", "九五", "上九"]);
}

#[test]
fn mixed_cast_resolves_oppression_changing_to_limitation() {
    let catalog = catalog();
    let result = divine(&outcomes([6, 7, 8, 9, 7, 8])).unwrap();
    let reading = Reading::interpret(&result, &catalog).unwrap();

    // Water below lake: 泽水困. Positions 1 and 4 turn it into water above lake: 水泽节.
    assert_eq!(reading.primary.short_name, "困卦");
    assert_eq!(reading.secondary.unwrap().short_name, "节卦");
    let changing: Vec<_> = reading
        .changing_lines
        .iter()
        .map(|line| (line.position.value(), line.name.as_str()))
        .collect();
    assert_eq!(changing, [(1, "初六"), (4, "九四")]);
}

#[test]
fn every_seeded_cast_resolves_against_the_catalog() {
    let catalog = catalog();
    let mut tosser = CoinToss::seeded(2024);
    for _ in 0..1_000 {
        let result = divine(&tosser.draw_six()).unwrap();
        let reading = Reading::interpret(&result, &catalog).unwrap();

        assert_eq!(reading.primary.code, result.primary().code());
        assert_eq!(reading.secondary.is_some(), result.has_changing_lines());
        assert_eq!(reading.changing_lines.len(), result.changing().len());
        for line in &reading.changing_lines {
            assert!(result.changing().contains(line.position));
            assert_eq!(line.hexagram, reading.primary.id);
        }
        if let Some(secondary) = reading.secondary {
            for position in LinePosition::ALL {
                let flipped = secondary.figure().line(position)
                    != reading.primary.figure().line(position);
                assert_eq!(flipped, result.changing().contains(position));
            }
        }
    }
}

#[test]
fn seeded_draws_are_reproducible_across_tossers() {
    let a: Vec<_> = (0..50).map(draw_with_seed).collect();
    let b: Vec<_> = (0..50).map(draw_with_seed).collect();
    assert_eq!(a, b);

    let explicit = CoinToss::with_rng(StdRng::seed_from_u64(7)).draw_six();
    let seeded = CoinToss::seeded(7).draw_six();
    assert_eq!(explicit, seeded);
}

#[test]
fn result_json_round_trips_and_reinterprets() {
    let catalog = catalog();
    let result = divine(&outcomes([8, 9, 7, 6, 8, 7])).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let restored: DivinationResult = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, result);

    let original = Reading::interpret(&result, &catalog).unwrap();
    let again = Reading::interpret(&restored, &catalog).unwrap();
    assert_eq!(original.primary, again.primary);
    assert_eq!(original.secondary, again.secondary);
}

#[test]
fn reading_text_lists_lines_top_first() {
    let catalog = catalog();
    let result = divine(&outcomes([6, 7, 8, 9, 7, 8])).unwrap();
    let text = Reading::interpret(&result, &catalog).unwrap().to_string();
    let mut lines = text.lines();

    assert_eq!(lines.next(), Some("6 阴 8 (少阴)"));
    assert_eq!(lines.nth(4), Some("1 阴 6 (老阴) ○"));
    assert!(text.contains("本卦 第47卦 困卦(泽水困) ䷮"));
    assert!(text.contains("变卦 第60卦 节卦(水泽节) ䷻"));
    assert!(text.contains("  初六: 困卦初六之辞。"));
}

#[test]
fn concurrent_divinations_share_one_catalog() {
    let catalog = Arc::new(catalog());
    let handles: Vec<_> = (0..8u64)
        .map(|seed| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let result = divine(&CoinToss::seeded(seed).draw_six()).unwrap();
                let reading = Reading::interpret(&result, &catalog).unwrap();
                (seed, reading.primary.id)
            })
        })
        .collect();

    for handle in handles {
        let (seed, id) = handle.join().unwrap();
        let expected = divine(&CoinToss::seeded(seed).draw_six()).unwrap();
        assert_eq!(catalog.by_figure(&expected.primary()).unwrap().id, id);
    }
}
