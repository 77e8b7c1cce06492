//! Catalog file naming and serialization.

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Catalog;
use crate::core::errors::{EngineError, EngineResult};
use crate::core::parsers::literal::quote;

/// Suffix of the positional occurrence catalog.
pub const EXTRACTED_SUFFIX: &str = ".extracted.json";

/// Suffix of the identity translation catalog for `locale`, e.g. `.en.json`.
pub fn translation_suffix(locale: &str) -> String {
    format!(".{}.json", locale)
}

/// One identity translation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nEntry {
    pub id: String,
    pub translation: String,
}

impl I18nEntry {
    pub fn identity(value: &str) -> Self {
        Self {
            id: value.to_string(),
            translation: value.to_string(),
        }
    }
}

/// Catalog artifacts for one source file, co-located with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub extracted: PathBuf,
    pub translations: PathBuf,
    pub po: PathBuf,
}

impl CatalogPaths {
    pub fn for_source(source: &Path, locale: &str) -> Self {
        let base = source.as_os_str().to_string_lossy();
        Self {
            extracted: PathBuf::from(format!("{}{}", base, EXTRACTED_SUFFIX)),
            translations: PathBuf::from(format!("{}{}", base, translation_suffix(locale))),
            po: PathBuf::from(format!("{}.{}.po", base, locale)),
        }
    }
}

/// Write the positional and identity catalogs, plus the annotated catalog if `po` is set.
///
/// Files are overwritten on every run.
pub fn write_catalogs(
    source: &Path,
    catalog: &Catalog,
    locale: &str,
    po: bool,
) -> EngineResult<CatalogPaths> {
    let paths = CatalogPaths::for_source(source, locale);

    write_json(&paths.extracted, &catalog.occurrences())?;
    write_json(&paths.translations, &catalog.translations())?;

    if po {
        debug!(path = %paths.po.display(), "writing annotated catalog");
        fs::write(&paths.po, render_po(catalog)).map_err(|e| EngineError::io(&paths.po, e))?;
    }

    Ok(paths)
}

/// Write only the identity catalog for `source`, which may be a mirrored path.
pub fn write_translations(source: &Path, catalog: &Catalog, locale: &str) -> EngineResult<PathBuf> {
    let path = CatalogPaths::for_source(source, locale).translations;
    write_json(&path, &catalog.translations())?;
    Ok(path)
}

/// Render the annotated, line-oriented catalog.
///
/// ```text
/// # filename: main.go, offset: 42, line: 5, column: 14
/// msgid "Hello"
/// msgstr "Hello"
///
/// ```
pub fn render_po(catalog: &Catalog) -> String {
    let mut out = String::new();
    for occurrence in catalog.occurrences() {
        let quoted = quote(&occurrence.value);
        let _ = writeln!(
            out,
            "# filename: {}, offset: {}, line: {}, column: {}",
            occurrence.filename, occurrence.offset, occurrence.line, occurrence.column
        );
        let _ = writeln!(out, "msgid {}", quoted);
        let _ = writeln!(out, "msgstr {}", quoted);
        out.push('\n');
    }
    out
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> EngineResult<()> {
    debug!(path = %path.display(), "writing catalog");
    let mut json = serde_json::to_string_pretty(value).map_err(|source| EngineError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;
    json.push('\n');
    fs::write(path, json).map_err(|e| EngineError::io(path, e))
}
