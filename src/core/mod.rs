//! Extraction and rewrite engine.
//!
//! ## Pipeline
//!
//! ```text
//! walker ──► parsers::go (tree + positions)
//!               │
//!               ▼
//!          classify (exclusions, blanks, wrapped literals)
//!          │                         │
//!          ▼                         ▼
//!     catalog (extract)        rewrite (span edits, import, init artifact)
//! ```
//!
//! ## Module Structure
//!
//! - `parsers`: Go parsing with tree-sitter and string literal decoding
//! - `exclusions`: run-wide exclusion list and file-scoped import exclusions
//! - `classify`: translation-candidate rules
//! - `catalog`: occurrence catalogs and their file formats
//! - `rewrite`: literal wrapping and initialization artifacts
//! - `walker`: directory recursion, counters and error aggregation
//! - `errors`: engine error kinds

pub mod catalog;
pub mod classify;
pub mod errors;
pub mod exclusions;
pub mod parsers;
pub mod rewrite;
pub mod walker;

pub use classify::Mode;
pub use errors::{EngineError, EngineResult};
pub use exclusions::Exclusions;
pub use walker::{Counters, RunReport, WalkOptions};

/// Extract catalogs for every Go file under `options.root`.
pub fn extract(options: &WalkOptions, exclusions: &Exclusions) -> EngineResult<RunReport> {
    walker::run(Mode::Extract, options, exclusions)
}

/// Wrap translatable literals for every Go file under `options.root`.
pub fn rewrite(options: &WalkOptions, exclusions: &Exclusions) -> EngineResult<RunReport> {
    walker::run(Mode::Rewrite, options, exclusions)
}
