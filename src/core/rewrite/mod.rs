//! Literal wrapping and per-package code generation.
//!
//! A file is rewritten by collecting span edits (one per qualifying literal,
//! plus at most one import insertion) and applying them to the original text.
//! The syntax tree itself is never mutated.

pub mod edits;
pub mod imports;
pub mod init_artifact;

pub use edits::{SpanEdit, apply_edits};
pub use imports::{WRAPPER_IMPORT_ALIAS, import_edit};
pub use init_artifact::{INIT_FILE_NAME, InitState, PackageInitRecord, render_init_artifact};

use tracing::debug;

use crate::core::classify::{Classifier, Rejection, Verdict};
use crate::core::parsers::go::{PositionIndex, SourceUnit, walk_preorder};

/// Result of rewriting one file in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRewrite {
    /// Regenerated source. Equal to the input when nothing was replaced.
    pub source: String,
    /// Number of literals wrapped.
    pub replaced: usize,
    pub import_added: bool,
}

impl FileRewrite {
    pub fn changed(&self) -> bool {
        self.replaced > 0
    }
}

/// Wrap every qualifying literal of `unit` in `wrapper_symbol(...)`.
pub fn rewrite_unit(
    unit: &SourceUnit,
    classifier: &Classifier<'_>,
    wrapper_symbol: &str,
    runtime_package: &str,
) -> FileRewrite {
    let mut edits = Vec::new();

    walk_preorder(unit.root(), |node| match classifier.classify(&node) {
        Verdict::Candidate(_) => {
            let original = unit.text(&node);
            edits.push(SpanEdit::replace(
                node.start_byte(),
                node.end_byte(),
                format!("{}({})", wrapper_symbol, original),
            ));
        }
        Verdict::Rejected(Rejection::Undecodable(reason)) => {
            let position = unit.position(&node);
            debug!(
                file = %unit.display_path(),
                line = position.line,
                column = position.column,
                %reason,
                "leaving undecodable string literal unwrapped"
            );
        }
        Verdict::Rejected(_) | Verdict::NotLiteral => {}
    });

    let replaced = edits.len();
    if replaced == 0 {
        return FileRewrite {
            source: unit.source.clone(),
            replaced: 0,
            import_added: false,
        };
    }

    let import = import_edit(unit, runtime_package);
    let import_added = import.is_some();
    edits.extend(import);

    FileRewrite {
        source: apply_edits(&unit.source, edits),
        replaced,
        import_added,
    }
}
