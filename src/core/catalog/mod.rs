//! Occurrence catalogs built from a single tree traversal.
//!
//! Occurrences are keyed by decoded value, so a value appears once per file no
//! matter how often it occurs. When a value occurs more than once, the
//! occurrence visited last in pre-order (document order) keeps its position.
//! Entries are serialized sorted by that surviving offset.

mod writer;

pub use writer::{
    CatalogPaths, EXTRACTED_SUFFIX, I18nEntry, render_po, translation_suffix, write_catalogs,
    write_translations,
};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::classify::{Classifier, Rejection, Verdict};
use crate::core::parsers::go::{PositionIndex, SourceUnit, walk_preorder};

/// One concrete appearance of a literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringOccurrence {
    pub value: String,
    pub filename: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

/// Distinct literal values of one file.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    by_value: HashMap<String, StringOccurrence>,
}

impl Catalog {
    /// Record an occurrence; a later occurrence of the same value replaces the earlier one.
    pub fn record(&mut self, occurrence: StringOccurrence) {
        self.by_value.insert(occurrence.value.clone(), occurrence);
    }

    pub fn len(&self) -> usize {
        self.by_value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_value.is_empty()
    }

    pub fn get(&self, value: &str) -> Option<&StringOccurrence> {
        self.by_value.get(value)
    }

    /// Occurrences ordered by byte offset, ties broken by value.
    pub fn occurrences(&self) -> Vec<&StringOccurrence> {
        let mut occurrences: Vec<&StringOccurrence> = self.by_value.values().collect();
        occurrences.sort_by(|a, b| a.offset.cmp(&b.offset).then_with(|| a.value.cmp(&b.value)));
        occurrences
    }

    /// Identity translation entries in catalog order.
    pub fn translations(&self) -> Vec<I18nEntry> {
        self.occurrences()
            .into_iter()
            .map(|occurrence| I18nEntry::identity(&occurrence.value))
            .collect()
    }
}

/// Traverse `unit` once and collect every candidate literal.
pub fn build_catalog(unit: &SourceUnit, classifier: &Classifier<'_>) -> Catalog {
    let mut catalog = Catalog::default();
    let filename = unit.display_path();

    walk_preorder(unit.root(), |node| match classifier.classify(&node) {
        Verdict::Candidate(value) => {
            let position = unit.position(&node);
            catalog.record(StringOccurrence {
                value,
                filename: filename.clone(),
                offset: position.offset,
                line: position.line,
                column: position.column,
            });
        }
        Verdict::Rejected(Rejection::Undecodable(reason)) => {
            let position = unit.position(&node);
            debug!(
                file = %filename,
                line = position.line,
                column = position.column,
                %reason,
                "skipping undecodable string literal"
            );
        }
        Verdict::Rejected(_) | Verdict::NotLiteral => {}
    });

    catalog
}
