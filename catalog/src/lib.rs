//! Hexagram catalog: manuscript builder and read-only store.
//!
//! # Architecture
//!
//! ```text
//! manuscript text
//!   └── manuscript::build ── per-block Result<HexagramRecord, ParseBlockError>
//!         └── CatalogBuild { records, diagnostics }
//!               └── CatalogStore::new (validates 64 records) ⇄ JSON on disk
//! ```

mod atomic_write;
pub mod guidance;
mod manuscript;
mod store;
#[cfg(test)]
mod test_support;

pub use manuscript::{
    BlockFault, BuildError, BuildOptions, CatalogBuild, ParseBlockError, build, build_from_path,
    parse_blocks,
};
pub use store::{CatalogLoadError, CatalogStore, NotFoundError};
