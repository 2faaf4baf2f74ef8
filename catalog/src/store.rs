//! Read-only catalog of the 64 hexagram records.
//!
//! A [`CatalogStore`] is only ever constructed complete: 64 records, six line
//! records each, unique codes, ids, and names. Partial catalogs are rejected
//! at load time with a [`CatalogLoadError`] instead of surfacing later as
//! lookup misses. Once built it is immutable; share it behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use yijing_types::{
    Figure, FigureCode, HEXAGRAM_COUNT, HexagramId, HexagramRecord, LinePosition, LineRecord,
    Trigram,
};

use crate::atomic_write::{AtomicWriteOptions, atomic_write_with_options};

/// Lookup miss. Carries the query that missed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("no hexagram with code {0}")]
    Code(FigureCode),
    #[error("no hexagram with id {0}")]
    Id(HexagramId),
    #[error("no hexagram named '{0}'")]
    Name(String),
    #[error("hexagram {hexagram} has no line at position {position}")]
    Line {
        hexagram: HexagramId,
        position: LinePosition,
    },
}

#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog has {actual} records, expected {expected}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("hexagram {id} has {actual} line records, expected positions 1-6 in order")]
    IncompleteLines { id: HexagramId, actual: usize },
    #[error("hexagram {id} code {code} does not match its trigrams")]
    InconsistentCode { id: HexagramId, code: FigureCode },
    #[error("hexagrams {first} and {second} share code {code}")]
    DuplicateCode {
        code: FigureCode,
        first: HexagramId,
        second: HexagramId,
    },
    #[error("hexagram id {0} appears more than once")]
    DuplicateId(HexagramId),
    #[error("hexagrams {first} and {second} share name '{name}'")]
    DuplicateName {
        name: String,
        first: HexagramId,
        second: HexagramId,
    },
    #[error("failed to write catalog {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Persisted form: `{"hexagrams": [...]}`.
#[derive(Deserialize)]
struct CatalogFile {
    hexagrams: Vec<HexagramRecord>,
}

#[derive(Serialize)]
struct CatalogFileRef<'a> {
    hexagrams: &'a [HexagramRecord],
}

#[derive(Debug, Clone)]
pub struct CatalogStore {
    /// Sorted by id, so record `n` sits at index `n - 1`.
    records: Vec<HexagramRecord>,
    by_code: HashMap<FigureCode, usize>,
    /// Full and short names.
    by_name: HashMap<String, usize>,
}

impl CatalogStore {
    /// Validate and index a complete set of records.
    pub fn new(mut records: Vec<HexagramRecord>) -> Result<Self, CatalogLoadError> {
        if records.len() != HEXAGRAM_COUNT {
            return Err(CatalogLoadError::CountMismatch {
                expected: HEXAGRAM_COUNT,
                actual: records.len(),
            });
        }
        records.sort_by_key(|record| record.id);

        let mut by_code = HashMap::with_capacity(HEXAGRAM_COUNT);
        let mut by_name = HashMap::with_capacity(HEXAGRAM_COUNT * 2);
        for (index, record) in records.iter().enumerate() {
            if index > 0 && records[index - 1].id == record.id {
                return Err(CatalogLoadError::DuplicateId(record.id));
            }
            if !record
                .lines
                .iter()
                .map(|line| line.position)
                .eq(LinePosition::ALL)
            {
                return Err(CatalogLoadError::IncompleteLines {
                    id: record.id,
                    actual: record.lines.len(),
                });
            }
            if !record.code_is_consistent() {
                return Err(CatalogLoadError::InconsistentCode {
                    id: record.id,
                    code: record.code,
                });
            }
            if let Some(first) = by_code.insert(record.code, index) {
                return Err(CatalogLoadError::DuplicateCode {
                    code: record.code,
                    first: records[first].id,
                    second: record.id,
                });
            }
            for name in [&record.name, &record.short_name] {
                match by_name.insert(name.clone(), index) {
                    Some(first) if first != index => {
                        return Err(CatalogLoadError::DuplicateName {
                            name: name.clone(),
                            first: records[first].id,
                            second: record.id,
                        });
                    }
                    _ => {}
                }
            }
        }

        debug!(records = records.len(), names = by_name.len(), "Indexed catalog");
        Ok(Self {
            records,
            by_code,
            by_name,
        })
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogLoadError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.hexagrams)
    }

    pub fn to_json(&self) -> Result<String, CatalogLoadError> {
        let file = CatalogFileRef {
            hexagrams: &self.records,
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogLoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| CatalogLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self::from_json(&json)?;
        info!(path = %path.display(), records = store.len(), "Loaded catalog");
        Ok(store)
    }

    /// Write the JSON form atomically, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CatalogLoadError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        let write_error = |source| CatalogLoadError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_error)?;
        }
        atomic_write_with_options(path, json.as_bytes(), AtomicWriteOptions::default())
            .map_err(write_error)?;
        info!(path = %path.display(), records = self.len(), "Saved catalog");
        Ok(())
    }

    pub fn by_code(&self, code: FigureCode) -> Result<&HexagramRecord, NotFoundError> {
        self.by_code
            .get(&code)
            .map(|&index| &self.records[index])
            .ok_or(NotFoundError::Code(code))
    }

    pub fn by_figure(&self, figure: &Figure) -> Result<&HexagramRecord, NotFoundError> {
        self.by_code(figure.code())
    }

    pub fn by_trigrams(
        &self,
        lower: Trigram,
        upper: Trigram,
    ) -> Result<&HexagramRecord, NotFoundError> {
        self.by_code(FigureCode::from_trigrams(lower, upper))
    }

    pub fn by_id(&self, id: HexagramId) -> Result<&HexagramRecord, NotFoundError> {
        self.records
            .get(usize::from(id.value()) - 1)
            .filter(|record| record.id == id)
            .ok_or(NotFoundError::Id(id))
    }

    /// Exact match on the full name (乾为天) or the short name (乾卦).
    pub fn by_name(&self, name: &str) -> Result<&HexagramRecord, NotFoundError> {
        let name = name.trim();
        self.by_name
            .get(name)
            .map(|&index| &self.records[index])
            .ok_or_else(|| NotFoundError::Name(name.to_string()))
    }

    /// Interpret free-form user input: an id (`11`), a code (`111000`), or a name.
    pub fn find(&self, query: &str) -> Result<&HexagramRecord, NotFoundError> {
        let query = query.trim();
        if let Ok(code) = FigureCode::parse(query) {
            return self.by_code(code);
        }
        if let Some(id) = query.parse::<u8>().ok().and_then(|id| HexagramId::new(id).ok()) {
            return self.by_id(id);
        }
        self.by_name(query)
    }

    pub fn line(
        &self,
        hexagram: HexagramId,
        position: LinePosition,
    ) -> Result<&LineRecord, NotFoundError> {
        self.by_id(hexagram)?
            .line(position)
            .ok_or(NotFoundError::Line { hexagram, position })
    }

    /// Records whose name, judgment, or guidance mentions `keyword`, in id order.
    pub fn search<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a HexagramRecord> {
        let keyword = keyword.trim();
        self.records.iter().filter(move |record| {
            let guidance = &record.guidance;
            [
                &record.name,
                &record.short_name,
                &record.judgment,
                &guidance.career,
                &guidance.relationship,
                &guidance.health,
                &guidance.wealth,
            ]
            .iter()
            .any(|field| field.contains(keyword))
        })
    }

    /// All records in id order.
    pub fn iter(&self) -> impl Iterator<Item = &HexagramRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a HexagramRecord;
    type IntoIter = std::slice::Iter<'a, HexagramRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
