//! Manuscript parser: `---`-delimited markdown blocks to hexagram records.
//!
//! A well-formed block looks like:
//!
//! ```text
//! ## 第1卦 乾卦(乾为天) ䷀
//!
//! **卦象**: 上乾☰下乾☰
//! **卦辞**: 元亨利贞。
//! **象辞**: 天行健，君子以自强不息。
//! **彖辞**: 大哉乾元，万物资始，乃统天。
//!
//! **爻辞**:
//!
//! **初九**: 潜龙勿用。
//! - 象曰: 潜龙勿用，阳在下也。
//! - 译: 龙潜伏在水中，暂时不要有所作为。
//! ...
//! **用九**: 见群龙无首，吉。
//!
//! **应用**: 事业上积极进取，自强不息……
//! ```
//!
//! Each block is parsed independently into `Result<HexagramRecord, ParseBlockError>`;
//! failed blocks are logged and dropped without affecting the others.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

use yijing_types::{
    FIGURE_LINES, FigureCode, HEXAGRAM_COUNT, HexagramId, HexagramRecord, LinePosition,
    LineRecord, Trigram,
};

use crate::guidance::{fortune, split_guidance};

const HEADER_MARKER: &str = "## 第";
const COMPOSITION_LABEL: &str = "卦象";
const JUDGMENT_LABEL: &str = "卦辞";
const IMAGE_LABEL: &str = "象辞";
const COMMENTARY_LABEL: &str = "彖辞";
const SUMMARY_LABEL: &str = "卦义";
const LINES_LABEL: &str = "爻辞";
const GUIDANCE_LABEL: &str = "应用";
const LINE_IMAGE_PREFIX: &str = "- 象曰";
const LINE_GLOSS_PREFIX: &str = "- 译";
/// Line names starting with this mark whole-figure entries (用九, 用六).
const SUPPLEMENTARY_MARK: char = '用';

/// Why a single block was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockFault {
    #[error("header does not match '## 第N卦 short(full) glyph'")]
    Header,
    #[error("hexagram id '{0}' is outside 1..=64")]
    HexagramId(String),
    #[error("missing **卦象** composition line")]
    MissingComposition,
    #[error("cannot find upper and lower trigrams")]
    Composition,
    #[error("unknown trigram '{0}'")]
    UnknownTrigram(String),
}

/// A block that could not be turned into a record. Recovered locally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("block {block}: {fault} (line: {line:?})")]
pub struct ParseBlockError {
    /// One-based ordinal among blocks that carry a header marker.
    pub block: usize,
    /// The offending line, trimmed.
    pub line: String,
    pub fault: BlockFault,
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to read manuscript {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("built {built} records, expected at least {expected}")]
    Incomplete {
        built: usize,
        expected: usize,
        diagnostics: Vec<ParseBlockError>,
    },
    #[error("hexagrams {first} and {second} share code {code}")]
    DuplicateCode {
        code: FigureCode,
        first: HexagramId,
        second: HexagramId,
    },
}

/// Knobs for [`build`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Minimum record count. `None` accepts any non-empty build.
    pub expected_records: Option<usize>,
    /// Fail with [`BuildError::DuplicateCode`] if two records share a code.
    pub reject_duplicate_codes: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            expected_records: None,
            reject_duplicate_codes: true,
        }
    }
}

impl BuildOptions {
    /// Require the full catalog.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            expected_records: Some(HEXAGRAM_COUNT),
            ..Self::default()
        }
    }
}

/// Output of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogBuild {
    /// Records in manuscript order.
    pub records: Vec<HexagramRecord>,
    /// Blocks that were skipped.
    pub diagnostics: Vec<ParseBlockError>,
}

impl CatalogBuild {
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.records.iter().map(|record| record.lines.len()).sum()
    }
}

struct Patterns {
    header: Regex,
    composition: Regex,
    line_entry: Regex,
}

static PATTERNS: OnceLock<Patterns> = OnceLock::new();

fn patterns() -> &'static Patterns {
    PATTERNS.get_or_init(|| Patterns {
        header: Regex::new(r"^##\s*第(\d+)卦\s+(\S+?)[(（]([^)）]+)[)）]\s*(\S*)")
            .expect("valid header regex"),
        composition: Regex::new(r"上\s*([^☰-☷]+?)\s*[☰-☷]\s*下\s*([^☰-☷]+)")
            .expect("valid composition regex"),
        line_entry: Regex::new(r"^\*\*([初上用一二三四五六九]+)\*\*[:：]\s*(.*)$")
            .expect("valid line entry regex"),
    })
}

/// Label separators, half- or full-width.
const SEPARATORS: [char; 2] = [':', '：'];

/// Unify line endings. Field text is otherwise left as written.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Blocks between `---` rules that contain a header marker.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();
    for line in text.lines() {
        if line.trim() == "---" {
            blocks.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    blocks.push(current.join("\n"));
    blocks.retain(|block| block.contains(HEADER_MARKER));
    blocks
}

/// Value after `**label**:` on a line, if the line carries that label.
fn labelled<'a>(line: &'a str, label: &str) -> Option<&'a str> {
    line.strip_prefix("**")?
        .strip_prefix(label)?
        .strip_prefix("**")?
        .trim_start()
        .strip_prefix(SEPARATORS)
        .map(str::trim)
}

/// Value after `prefix:` on a line, e.g. `- 译: ...`.
fn prefixed<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.strip_prefix(prefix)?
        .trim_start()
        .strip_prefix(SEPARATORS)
        .map(str::trim)
}

struct Block<'a> {
    ordinal: usize,
    lines: Vec<&'a str>,
}

impl<'a> Block<'a> {
    fn new(ordinal: usize, text: &'a str) -> Self {
        Self {
            ordinal,
            lines: text.lines().map(str::trim).collect(),
        }
    }

    fn fail(&self, line: &str, fault: BlockFault) -> ParseBlockError {
        ParseBlockError {
            block: self.ordinal,
            line: line.to_string(),
            fault,
        }
    }

    fn field(&self, label: &str) -> Option<&'a str> {
        self.lines.iter().copied().find_map(|line| labelled(line, label))
    }

    fn parse(&self) -> Result<HexagramRecord, ParseBlockError> {
        let header = self
            .lines
            .iter()
            .copied()
            .find(|line| line.contains(HEADER_MARKER))
            .unwrap_or_default();
        let captures = patterns()
            .header
            .captures(header)
            .ok_or_else(|| self.fail(header, BlockFault::Header))?;

        let raw_id = &captures[1];
        let id = raw_id
            .parse::<u8>()
            .ok()
            .and_then(|id| HexagramId::new(id).ok())
            .ok_or_else(|| self.fail(header, BlockFault::HexagramId(raw_id.to_string())))?;
        let short_name = captures[2].to_string();
        let name = captures[3].to_string();
        let glyph = captures[4].to_string();

        let (upper, lower) = self.composition()?;
        let code = FigureCode::from_trigrams(lower, upper);

        let guidance_text = self.field(GUIDANCE_LABEL).unwrap_or_default();
        let summary = self
            .field(SUMMARY_LABEL)
            .filter(|summary| !summary.is_empty())
            .map_or_else(|| format!("{name}的卦义解读"), str::to_string);

        let lines = self.line_records(id);
        if lines.len() < FIGURE_LINES {
            warn!(
                block = self.ordinal,
                hexagram = id.value(),
                lines = lines.len(),
                "Hexagram has fewer than six line entries"
            );
        }

        Ok(HexagramRecord {
            id,
            code,
            name,
            short_name,
            glyph,
            upper,
            lower,
            judgment: self.field(JUDGMENT_LABEL).unwrap_or_default().to_string(),
            image: self.field(IMAGE_LABEL).unwrap_or_default().to_string(),
            commentary: self.field(COMMENTARY_LABEL).unwrap_or_default().to_string(),
            summary,
            fortune: fortune(guidance_text),
            guidance: split_guidance(guidance_text),
            lines,
        })
    }

    /// `(upper, lower)` from the composition line.
    fn composition(&self) -> Result<(Trigram, Trigram), ParseBlockError> {
        let line = self
            .lines
            .iter()
            .copied()
            .find(|line| labelled(line, COMPOSITION_LABEL).is_some())
            .ok_or_else(|| self.fail("", BlockFault::MissingComposition))?;
        let value = labelled(line, COMPOSITION_LABEL).unwrap_or_default();

        let (upper, lower) = match patterns().composition.captures(value) {
            Some(captures) => (
                captures[1].trim().to_string(),
                captures[2].trim().to_string(),
            ),
            // No glyph separator: split on the 上/下 tokens.
            None => {
                let (before, after) = value
                    .split_once('下')
                    .ok_or_else(|| self.fail(line, BlockFault::Composition))?;
                let upper = before.trim().strip_prefix('上').unwrap_or(before).trim();
                let lower = after
                    .split(Trigram::is_glyph)
                    .next()
                    .unwrap_or_default()
                    .trim();
                (upper.to_string(), lower.to_string())
            }
        };

        let resolve = |name: String| {
            Trigram::from_name(&name)
                .ok_or_else(|| self.fail(line, BlockFault::UnknownTrigram(name)))
        };
        Ok((resolve(upper)?, resolve(lower)?))
    }

    /// Up to six ordinary line entries, positions assigned in retained order.
    fn line_records(&self, hexagram: HexagramId) -> Vec<LineRecord> {
        let start = self
            .lines
            .iter()
            .position(|line| labelled(line, LINES_LABEL).is_some())
            .map_or(0, |index| index + 1);

        let mut records = Vec::with_capacity(FIGURE_LINES);
        let mut index = start;
        while index < self.lines.len() && records.len() < FIGURE_LINES {
            let line = self.lines[index];
            index += 1;
            if line.starts_with(&format!("**{GUIDANCE_LABEL}")) {
                break;
            }
            let Some(captures) = patterns().line_entry.captures(line) else {
                continue;
            };

            let image = self
                .lines
                .get(index)
                .and_then(|next| prefixed(next, LINE_IMAGE_PREFIX));
            if image.is_some() {
                index += 1;
            }
            let gloss = self
                .lines
                .get(index)
                .and_then(|next| prefixed(next, LINE_GLOSS_PREFIX));
            if gloss.is_some() {
                index += 1;
            }

            let name = &captures[1];
            if name.starts_with(SUPPLEMENTARY_MARK) {
                continue;
            }
            let Ok(position) = LinePosition::from_index(records.len()) else {
                break;
            };
            records.push(LineRecord {
                hexagram,
                position,
                name: name.to_string(),
                text: captures[2].trim().to_string(),
                image: image.unwrap_or_default().to_string(),
                gloss: gloss.unwrap_or_default().to_string(),
            });
        }
        records
    }
}

/// Parse every block, keeping per-block failures.
#[must_use]
pub fn parse_blocks(text: &str) -> Vec<Result<HexagramRecord, ParseBlockError>> {
    let text = normalize(text);
    split_blocks(&text)
        .iter()
        .enumerate()
        .map(|(index, block)| Block::new(index + 1, block).parse())
        .collect()
}

/// Build catalog records from manuscript text.
///
/// Malformed blocks are skipped and reported in [`CatalogBuild::diagnostics`].
/// The build fails only when fewer records than `options.expected_records`
/// (at least one) survive, or when duplicate codes are rejected and found.
pub fn build(text: &str, options: &BuildOptions) -> Result<CatalogBuild, BuildError> {
    let mut records = Vec::new();
    let mut diagnostics = Vec::new();
    for parsed in parse_blocks(text) {
        match parsed {
            Ok(record) => {
                debug!(
                    hexagram = record.id.value(),
                    code = %record.code,
                    name = %record.name,
                    lines = record.lines.len(),
                    "Parsed hexagram"
                );
                records.push(record);
            }
            Err(err) => {
                warn!(block = err.block, line = %err.line, "Skipping manuscript block: {}", err.fault);
                diagnostics.push(err);
            }
        }
    }

    let expected = options.expected_records.unwrap_or(1).max(1);
    if records.len() < expected {
        return Err(BuildError::Incomplete {
            built: records.len(),
            expected,
            diagnostics,
        });
    }

    if options.reject_duplicate_codes {
        let mut seen: HashMap<FigureCode, HexagramId> = HashMap::new();
        for record in &records {
            if let Some(first) = seen.insert(record.code, record.id) {
                return Err(BuildError::DuplicateCode {
                    code: record.code,
                    first,
                    second: record.id,
                });
            }
        }
    }

    let build = CatalogBuild {
        records,
        diagnostics,
    };
    info!(
        records = build.records.len(),
        lines = build.line_count(),
        skipped = build.diagnostics.len(),
        "Built catalog from manuscript"
    );
    Ok(build)
}

/// Read a manuscript from disk and [`build`] it.
pub fn build_from_path(
    path: impl AsRef<Path>,
    options: &BuildOptions,
) -> Result<CatalogBuild, BuildError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    build(&text, options)
}
