use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::walker::{Counters, DirectoryReport, FileFailure};

// ============================================================
// Parameters
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Go source directory; the config file is looked up from here
    pub project_root_path: String,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStringsParams {
    /// Go source directory (or single .go file)
    pub project_root_path: String,
    /// Recurse into subdirectories (default: true)
    pub recursive: Option<bool>,
    /// Write catalog files next to the sources (default: false)
    pub write: Option<bool>,
    /// Catalog locale suffix (overrides config)
    pub locale: Option<String>,
    /// Exclusion list JSON file (overrides config)
    pub excluded_strings_file: Option<String>,
    /// Max strings to return (default: 50, max: 200)
    pub limit: Option<u32>,
    /// Strings to skip (default: 0)
    pub offset: Option<u32>,
}

#[derive(Debug, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewritePackageParams {
    /// Go source directory (or single .go file)
    pub project_root_path: String,
    /// Recurse into subdirectories (default: true)
    pub recursive: Option<bool>,
    /// Compute changes without writing (default: false)
    pub dry_run: Option<bool>,
    /// Write the rewritten tree here instead of in place
    pub output_dir: Option<String>,
    /// Translation function name (overrides config)
    pub wrapper_symbol: Option<String>,
    /// Go import path of the translation runtime (overrides config)
    pub runtime_package: Option<String>,
    /// Exclusion list JSON file (overrides config)
    pub excluded_strings_file: Option<String>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config_path: Option<String>,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub ignores: Vec<String>,
    pub locale: String,
    pub wrapper_symbol: String,
    pub runtime_package: String,
    pub excluded_strings_file: Option<String>,
    pub po: bool,
    pub extract_test_files: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            ignores: c.ignores,
            locale: c.locale,
            wrapper_symbol: c.wrapper_symbol,
            runtime_package: c.runtime_package,
            excluded_strings_file: c.excluded_strings_file,
            po: c.po,
            extract_test_files: c.extract_test_files,
        }
    }
}

// ============================================================
// Extract Types (extract_strings)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StringItem {
    pub value: String,
    pub file_path: String,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExtractStringsResult {
    /// Whether catalog files were written
    pub written: bool,
    pub total_count: usize,
    pub file_count: usize,
    pub items: Vec<StringItem>,
    pub pagination: Pagination,
    pub errors: Vec<FailureItem>,
}

// ============================================================
// Rewrite Types (rewrite_package)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RewritePackageResult {
    pub dry_run: bool,
    pub wrapped_count: usize,
    pub rewritten_file_count: usize,
    pub init_artifact_count: usize,
    pub packages: Vec<PackageItem>,
    pub errors: Vec<FailureItem>,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageItem {
    pub path: String,
    pub wrapped_count: usize,
    pub rewritten_file_count: usize,
    pub init_emitted: bool,
}

impl From<&DirectoryReport> for PackageItem {
    fn from(dir: &DirectoryReport) -> Self {
        let Counters {
            strings,
            rewritten_files,
            ..
        } = dir.counters;
        Self {
            path: dir.path.clone(),
            wrapped_count: strings,
            rewritten_file_count: rewritten_files,
            init_emitted: dir.init_emitted,
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FailureItem {
    pub file_path: String,
    pub kind: String,
    pub message: String,
}

impl From<&FileFailure> for FailureItem {
    fn from(failure: &FileFailure) -> Self {
        Self {
            file_path: failure.path.clone(),
            kind: failure.kind.clone(),
            message: failure.message.clone(),
        }
    }
}
