//! Shared test fixtures
//!
//! A King Wen ordered manuscript in the format the catalog builder reads,
//! with synthetic texts.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use yijing_catalog::{BuildOptions, CatalogStore, build};
use yijing_types::{Figure, Line, LinePosition, Trigram};

/// Short and full names in King Wen order.
pub const NAMES: [(&str, &str); 64] = [
    ("乾卦", "乾为天"),
    ("坤卦", "坤为地"),
    ("屯卦", "水雷屯"),
    ("蒙卦", "山水蒙"),
    ("需卦", "水天需"),
    ("讼卦", "天水讼"),
    ("师卦", "地水师"),
    ("比卦", "水地比"),
    ("小畜卦", "风天小畜"),
    ("履卦", "天泽履"),
    ("泰卦", "地天泰"),
    ("否卦", "天地否"),
    ("同人卦", "天火同人"),
    ("大有卦", "火天大有"),
    ("谦卦", "地山谦"),
    ("豫卦", "雷地豫"),
    ("随卦", "泽雷随"),
    ("蛊卦", "山风蛊"),
    ("临卦", "地泽临"),
    ("观卦", "风地观"),
    ("噬嗑卦", "火雷噬嗑"),
    ("贲卦", "山火贲"),
    ("剥卦", "山地剥"),
    ("复卦", "地雷复"),
    ("无妄卦", "天雷无妄"),
    ("大畜卦", "山天大畜"),
    ("颐卦", "山雷颐"),
    ("大过卦", "泽风大过"),
    ("坎卦", "坎为水"),
    ("离卦", "离为火"),
    ("咸卦", "泽山咸"),
    ("恒卦", "雷风恒"),
    ("遯卦", "天山遯"),
    ("大壮卦", "雷天大壮"),
    ("晋卦", "火地晋"),
    ("明夷卦", "地火明夷"),
    ("家人卦", "风火家人"),
    ("睽卦", "火泽睽"),
    ("蹇卦", "水山蹇"),
    ("解卦", "雷水解"),
    ("损卦", "山泽损"),
    ("益卦", "风雷益"),
    ("夬卦", "泽天夬"),
    ("姤卦", "天风姤"),
    ("萃卦", "泽地萃"),
    ("升卦", "地风升"),
    ("困卦", "泽水困"),
    ("井卦", "水风井"),
    ("革卦", "泽火革"),
    ("鼎卦", "火风鼎"),
    ("震卦", "震为雷"),
    ("艮卦", "艮为山"),
    ("渐卦", "风山渐"),
    ("归妹卦", "雷泽归妹"),
    ("丰卦", "雷火丰"),
    ("旅卦", "火山旅"),
    ("巽卦", "巽为风"),
    ("兑卦", "兑为泽"),
    ("涣卦", "风水涣"),
    ("节卦", "水泽节"),
    ("中孚卦", "风泽中孚"),
    ("小过卦", "雷山小过"),
    ("既济卦", "水火既济"),
    ("未济卦", "火水未济"),
];

/// `(upper, lower)` read from a full name: 地天泰 is 地 over 天, 乾为天 is 乾 doubled.
pub fn trigrams(full_name: &str) -> (Trigram, Trigram) {
    let mut chars = full_name.chars();
    let first = chars.next().unwrap_or_default();
    let second = chars.next().unwrap_or_default();
    if second == '为' {
        let doubled = Trigram::from_name(&first.to_string()).unwrap();
        return (doubled, doubled);
    }
    let by_nature = |c: char| {
        Trigram::ALL
            .into_iter()
            .find(|t| t.nature() == c.to_string())
            .unwrap()
    };
    (by_nature(first), by_nature(second))
}

fn line_name(position: LinePosition, line: Line) -> String {
    let number = if line.is_solid() { "九" } else { "六" };
    match position.value() {
        1 => format!("初{number}"),
        6 => format!("上{number}"),
        n => format!("{number}{}", ["二", "三", "四", "五"][usize::from(n) - 2]),
    }
}

pub fn block(id: u8) -> String {
    let (short, full) = NAMES[usize::from(id) - 1];
    let (upper, lower) = trigrams(full);
    let figure = Figure::from_trigrams(lower, upper);
    let glyph = char::from_u32(0x4DC0 + u32::from(id) - 1).unwrap();

    let mut text = format!("## 第{id}卦 {short}({full}) {glyph}\n\n");
    text.push_str(&format!(
        "**卦象**: 上{}{}下{}{}\n",
        upper.name(),
        upper.glyph(),
        lower.name(),
        lower.glyph()
    ));
    text.push_str(&format!("**卦辞**: {short}之辞。\n"));
    text.push_str(&format!("**象辞**: {upper}上{lower}下，{full}。\n"));
    text.push_str(&format!("**彖辞**: {short}之彖。\n\n**爻辞**:\n\n"));
    for position in LinePosition::ALL {
        let name = line_name(position, figure.line(position));
        text.push_str(&format!("**{name}**: {short}{name}之辞。\n"));
        text.push_str(&format!("- 象曰: {short}{name}之象。\n"));
        text.push_str(&format!("- 译: {short}{name}的译文。\n"));
    }
    match id {
        1 => text.push_str("**用九**: 见群龙无首，吉。\n- 象曰: 用九，天德不可为首也。\n"),
        2 => text.push_str("**用六**: 利永贞。\n- 象曰: 用六永贞，以大终也。\n"),
        _ => {}
    }
    let verdict = match id % 4 {
        0 => "大吉",
        1 => "吉",
        2 => "凶",
        _ => "平",
    };
    text.push_str(&format!(
        "\n**应用**: 事业宜守正，投资需谨慎，婚姻重沟通，注意身体。{verdict}。\n"
    ));
    text
}

pub fn manuscript() -> String {
    let blocks: Vec<String> = (1..=64).map(block).collect();
    format!("# 易经六十四卦\n\n{}", blocks.join("\n---\n\n"))
}

pub fn write_manuscript(dir: &Path) -> PathBuf {
    let path = dir.join("BOOK.md");
    std::fs::write(&path, manuscript()).unwrap();
    path
}

pub fn catalog() -> CatalogStore {
    let built = build(&manuscript(), &BuildOptions::complete()).unwrap();
    CatalogStore::new(built.records).unwrap()
}
