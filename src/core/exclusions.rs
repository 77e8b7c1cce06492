//! Literal values that are never translation candidates.
//!
//! The external exclusion list is loaded once per run into [`Exclusions`] and
//! passed down explicitly. Import paths are file-scoped: [`Exclusions::for_file`]
//! layers the current file's imports on top of the run-wide list without
//! mutating it, so they never carry over to the next file.

use std::{collections::HashSet, fs, path::Path};

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::errors::{EngineError, EngineResult};
use crate::core::parsers::go::SourceUnit;

/// Decoded values that are blank for translation purposes.
pub const BLANKS: &[&str] = &["\t", "\n", " "];

/// On-disk shape of the exclusion list file.
///
/// ```json
/// { "excludedStrings": ["OK", "%s"], "excludedRegexps": ["^\\d+$"] }
/// ```
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusionList {
    #[serde(default)]
    pub excluded_strings: Vec<String>,
    #[serde(default)]
    pub excluded_regexps: Vec<String>,
}

/// Run-wide exclusions.
#[derive(Debug, Default)]
pub struct Exclusions {
    strings: HashSet<String>,
    patterns: Vec<Regex>,
}

impl Exclusions {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the exclusion list file.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| EngineError::io(path, e))?;
        let list: ExclusionList =
            serde_json::from_str(&content).map_err(|source| EngineError::ExclusionList {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            path = %path.display(),
            strings = list.excluded_strings.len(),
            patterns = list.excluded_regexps.len(),
            "loaded exclusion list"
        );
        Self::from_list(list)
    }

    pub fn from_list(list: ExclusionList) -> EngineResult<Self> {
        let patterns = list
            .excluded_regexps
            .into_iter()
            .map(|pattern| {
                Regex::new(&pattern)
                    .map_err(|source| EngineError::ExclusionPattern { pattern, source })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            strings: list.excluded_strings.into_iter().collect(),
            patterns,
        })
    }

    pub fn from_strings<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
            patterns: Vec::new(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.strings.contains(value) || self.patterns.iter().any(|re| re.is_match(value))
    }

    /// Exclusions for one file: the run-wide list plus that file's import paths.
    pub fn for_file<'a>(&'a self, unit: &SourceUnit) -> FileExclusions<'a> {
        FileExclusions {
            run: self,
            imports: unit.imports.iter().map(|import| import.path.clone()).collect(),
        }
    }
}

/// File-scoped exclusion view.
#[derive(Debug)]
pub struct FileExclusions<'a> {
    run: &'a Exclusions,
    imports: HashSet<String>,
}

impl FileExclusions<'_> {
    pub fn contains(&self, value: &str) -> bool {
        self.imports.contains(value) || self.run.contains(value)
    }
}

/// True for the fixed blank values (single tab, newline, or space).
pub fn is_blank(value: &str) -> bool {
    BLANKS.contains(&value)
}
