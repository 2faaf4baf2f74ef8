//! Synthetic manuscripts for unit tests.

use yijing_types::{Figure, Line, LinePosition, Trigram};

const ORDINALS: [&str; 6] = ["初", "二", "三", "四", "五", "上"];

/// Traditional name for a line: 初九, 六二, ..., 上六.
pub(crate) fn line_name(position: LinePosition, line: Line) -> String {
    let number = if line.is_solid() { "九" } else { "六" };
    let ordinal = ORDINALS[position.index()];
    match position.value() {
        1 | 6 => format!("{ordinal}{number}"),
        _ => format!("{number}{ordinal}"),
    }
}

/// Trigram pair for hexagram `id`; distinct for every id in 1..=64.
pub(crate) fn trigrams_for(id: u8) -> (Trigram, Trigram) {
    let index = usize::from(id - 1);
    (Trigram::ALL[index / 8], Trigram::ALL[index % 8])
}

pub(crate) fn manuscript_block(id: u8, lower: Trigram, upper: Trigram) -> String {
    let figure = Figure::from_trigrams(lower, upper);
    let glyph = char::from_u32(0x4DC0 + u32::from(id) - 1).unwrap_or('䷀');
    let mut block = format!(
        "## 第{id}卦 测{id}卦({}{}第{id}) {glyph}\n\n\
         **卦象**: 上{}{}下{}{}\n\
         **卦辞**: 第{id}卦卦辞。\n\
         **象辞**: 第{id}卦象辞。\n\
         **彖辞**: 第{id}卦彖辞。\n\n\
         **爻辞**:\n\n",
        upper.name(),
        lower.name(),
        upper.name(),
        upper.glyph(),
        lower.name(),
        lower.glyph(),
    );
    for position in LinePosition::ALL {
        let name = line_name(position, figure.line(position));
        block.push_str(&format!("**{name}**: 第{id}卦{name}爻辞。\n"));
        block.push_str(&format!("- 象曰: 第{id}卦{name}象曰。\n"));
        block.push_str(&format!("- 译: 第{id}卦{name}译文。\n"));
    }
    if id == 1 {
        block.push_str("**用九**: 见群龙无首，吉。\n");
    } else if id == 2 {
        block.push_str("**用六**: 利永贞。\n");
    }
    block.push_str("\n**应用**: 事业稳步推进，投资谨慎，感情和睦，身体康健。吉。\n");
    block
}

/// Complete 64-block manuscript with distinct codes.
pub(crate) fn manuscript() -> String {
    let mut text = String::from("# 易经六十四卦\n\n");
    let blocks: Vec<String> = (1..=64u8)
        .map(|id| {
            let (lower, upper) = trigrams_for(id);
            manuscript_block(id, lower, upper)
        })
        .collect();
    text.push_str(&blocks.join("\n---\n\n"));
    text
}
