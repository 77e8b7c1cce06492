//! Directory walker driving extraction and rewriting.
//!
//! Each directory is a package. Its own `.go` files are processed first, in
//! file-name order, then (when recursive) each non-hidden subdirectory in name
//! order. A failure on one file is logged, recorded in the [`RunReport`], and
//! never stops the remaining files or directories.

use std::{
    fs,
    ops::AddAssign,
    path::{Path, PathBuf},
};

use glob::Pattern;
use serde::Serialize;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::core::{
    catalog::{StringOccurrence, build_catalog, write_catalogs, write_translations},
    classify::{Classifier, Mode, is_test_file},
    errors::{EngineError, EngineResult},
    exclusions::Exclusions,
    parsers::go::{SourceUnit, parse_go_file},
    rewrite::{INIT_FILE_NAME, PackageInitRecord, rewrite_unit},
};

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    /// Directory to walk, or a single `.go` file.
    pub root: PathBuf,
    pub recursive: bool,
    pub locale: String,
    pub wrapper_symbol: String,
    pub runtime_package: String,
    /// Also write the annotated `.po` catalog.
    pub po: bool,
    /// Catalog `_test.go` files during extraction. Rewriting always skips them.
    pub extract_test_files: bool,
    /// Glob patterns matched against paths relative to the root.
    pub ignores: Vec<Pattern>,
    /// Write rewritten sources under this directory instead of in place.
    pub output_dir: Option<PathBuf>,
    /// Compute everything but write nothing.
    pub dry_run: bool,
}

impl WalkOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            recursive: false,
            locale: crate::config::DEFAULT_LOCALE.to_string(),
            wrapper_symbol: crate::config::DEFAULT_WRAPPER_SYMBOL.to_string(),
            runtime_package: crate::config::DEFAULT_RUNTIME_PACKAGE.to_string(),
            po: false,
            extract_test_files: true,
            ignores: Vec::new(),
            output_dir: None,
            dry_run: false,
        }
    }
}

/// Literal and file counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    /// Distinct values catalogued (extract) or literals wrapped (rewrite).
    pub strings: usize,
    /// Source files processed successfully.
    pub files: usize,
    /// Files whose content changed (rewrite).
    pub rewritten_files: usize,
    /// Initialization artifacts written (rewrite).
    pub init_artifacts: usize,
}

impl AddAssign for Counters {
    fn add_assign(&mut self, other: Self) {
        self.strings += other.strings;
        self.files += other.files;
        self.rewritten_files += other.rewritten_files;
        self.init_artifacts += other.init_artifacts;
    }
}

/// Outcome for one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub package: Option<String>,
    /// Distinct values catalogued (extract) or literals wrapped (rewrite).
    pub strings: usize,
    /// True for test files passed over by the test-file rule.
    pub skipped: bool,
    /// Catalogued occurrences in catalog order (extract only).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<StringOccurrence>,
}

/// Totals for one directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    pub path: String,
    pub counters: Counters,
    pub init_emitted: bool,
}

/// A per-file failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileFailure {
    pub path: String,
    pub kind: String,
    pub message: String,
}

impl FileFailure {
    fn new(path: &Path, error: &EngineError) -> Self {
        Self {
            path: display(path),
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Everything a run did, for reporting and exit-status mapping.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    #[serde(skip)]
    pub mode: Mode,
    pub totals: Counters,
    pub directories: Vec<DirectoryReport>,
    pub files: Vec<FileReport>,
    pub errors: Vec<FileFailure>,
}

impl RunReport {
    fn new(mode: Mode) -> Self {
        Self {
            mode,
            totals: Counters::default(),
            directories: Vec::new(),
            files: Vec::new(),
            errors: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Walk `options.root` in the given mode.
///
/// Fails only if the root does not exist; everything below it is best-effort.
pub fn run(mode: Mode, options: &WalkOptions, exclusions: &Exclusions) -> EngineResult<RunReport> {
    let metadata = fs::metadata(&options.root).map_err(|e| EngineError::io(&options.root, e))?;

    let mut walker = Walker {
        mode,
        options,
        exclusions,
        base: if metadata.is_dir() {
            options.root.clone()
        } else {
            options
                .root
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        },
        report: RunReport::new(mode),
    };

    if metadata.is_dir() {
        walker.visit_dir(&options.root);
    } else {
        let dir = walker.base.clone();
        walker.process_package(&dir, vec![options.root.clone()]);
    }

    info!(
        strings = walker.report.totals.strings,
        files = walker.report.totals.files,
        errors = walker.report.errors.len(),
        "run finished"
    );
    Ok(walker.report)
}

struct Walker<'a> {
    mode: Mode,
    options: &'a WalkOptions,
    exclusions: &'a Exclusions,
    /// Directory that relative paths (ignores, output mirroring) are taken from.
    base: PathBuf,
    report: RunReport,
}

impl Walker<'_> {
    fn visit_dir(&mut self, dir: &Path) {
        info!(dir = %dir.display(), recursive = self.options.recursive, "inspecting directory");

        let mut files = Vec::new();
        let mut subdirs = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf());
                    let error = EngineError::io(&path, e.into());
                    warn!(%error, "cannot read directory entry");
                    self.report.errors.push(FileFailure::new(&path, &error));
                    continue;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') || self.is_ignored(entry.path()) {
                debug!(path = %entry.path().display(), "skipping entry");
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                if self.is_output_dir(entry.path()) {
                    debug!(path = %entry.path().display(), "skipping output directory");
                    continue;
                }
                subdirs.push(entry.into_path());
            } else if file_type.is_file() && is_source_file(&name) {
                files.push(entry.into_path());
            }
        }

        self.process_package(dir, files);

        if self.options.recursive {
            for subdir in subdirs {
                self.visit_dir(&subdir);
            }
        }
    }

    /// Process the given files of one directory and record its totals.
    fn process_package(&mut self, dir: &Path, files: Vec<PathBuf>) {
        let mut counters = Counters::default();
        let mut init = PackageInitRecord::new(self.target_path(dir));

        for path in files {
            match self.process_file(&path, &mut init, &mut counters) {
                Ok(file_report) => self.report.files.push(file_report),
                Err(error) => {
                    warn!(file = %path.display(), %error, "failed to process file");
                    self.report.errors.push(FileFailure::new(&path, &error));
                }
            }
        }

        info!(
            dir = %dir.display(),
            strings = counters.strings,
            files = counters.files,
            "finished directory"
        );
        self.report.totals += counters;
        self.report.directories.push(DirectoryReport {
            path: display(dir),
            counters,
            init_emitted: counters.init_artifacts > 0,
        });
    }

    fn process_file(
        &self,
        path: &Path,
        init: &mut PackageInitRecord,
        counters: &mut Counters,
    ) -> EngineResult<FileReport> {
        let test_file = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(is_test_file);
        let skip_test_file = match self.mode {
            Mode::Extract => test_file && !self.options.extract_test_files,
            Mode::Rewrite => test_file,
        };
        if skip_test_file {
            debug!(file = %path.display(), "skipping test file");
            return Ok(FileReport {
                path: display(path),
                package: None,
                strings: 0,
                skipped: true,
                occurrences: Vec::new(),
            });
        }

        match self.mode {
            Mode::Extract => self.extract_file(path, counters),
            Mode::Rewrite => self.rewrite_file(path, init, counters),
        }
    }

    fn extract_file(&self, path: &Path, counters: &mut Counters) -> EngineResult<FileReport> {
        info!(file = %path.display(), "extracting strings");

        let unit = parse_go_file(path)?;
        let classifier = Classifier::new(
            &unit,
            self.exclusions.for_file(&unit),
            Mode::Extract,
            &self.options.wrapper_symbol,
        );
        let catalog = build_catalog(&unit, &classifier);

        if !self.options.dry_run {
            write_catalogs(path, &catalog, &self.options.locale, self.options.po)?;
        }

        counters.strings += catalog.len();
        counters.files += 1;
        info!(file = %path.display(), strings = catalog.len(), "extracted strings");

        Ok(FileReport {
            path: display(path),
            package: Some(unit.package_name.clone()),
            strings: catalog.len(),
            skipped: false,
            occurrences: catalog.occurrences().into_iter().cloned().collect(),
        })
    }

    fn rewrite_file(
        &self,
        path: &Path,
        init: &mut PackageInitRecord,
        counters: &mut Counters,
    ) -> EngineResult<FileReport> {
        info!(file = %path.display(), "rewriting strings");

        let unit = parse_go_file(path)?;
        let classifier = Classifier::new(
            &unit,
            self.exclusions.for_file(&unit),
            Mode::Rewrite,
            &self.options.wrapper_symbol,
        );
        let rewrite = rewrite_unit(
            &unit,
            &classifier,
            &self.options.wrapper_symbol,
            &self.options.runtime_package,
        );

        let target = self.target_path(path);
        if !self.options.dry_run && (rewrite.changed() || target != path) {
            write_source(&target, &rewrite.source)?;
            self.write_identity_catalog(&unit, &target)?;
        }

        counters.files += 1;
        if rewrite.changed() {
            counters.strings += rewrite.replaced;
            counters.rewritten_files += 1;
            let emitted = init.ensure_emitted(
                &unit.package_name,
                &self.options.locale,
                &self.options.runtime_package,
                self.options.dry_run,
            )?;
            if emitted {
                counters.init_artifacts += 1;
            }
        }
        info!(
            file = %path.display(),
            wrapped = rewrite.replaced,
            import_added = rewrite.import_added,
            "rewrote strings"
        );

        Ok(FileReport {
            path: display(path),
            package: Some(unit.package_name.clone()),
            strings: rewrite.replaced,
            skipped: false,
            occurrences: Vec::new(),
        })
    }

    /// The init artifact embeds `*.go.<locale>.json`, so every written source
    /// gets its identity catalog beside it.
    fn write_identity_catalog(&self, unit: &SourceUnit, target: &Path) -> EngineResult<()> {
        let classifier = Classifier::new(
            unit,
            self.exclusions.for_file(unit),
            Mode::Extract,
            &self.options.wrapper_symbol,
        );
        let catalog = build_catalog(unit, &classifier);
        if catalog.is_empty() {
            return Ok(());
        }
        let written = write_translations(target, &catalog, &self.options.locale)?;
        debug!(path = %written.display(), strings = catalog.len(), "wrote identity catalog");
        Ok(())
    }

    /// True for the output directory itself, so a mirror nested under the root is never re-walked.
    fn is_output_dir(&self, path: &Path) -> bool {
        let Some(output_dir) = &self.options.output_dir else {
            return false;
        };
        match (fs::canonicalize(path), fs::canonicalize(output_dir)) {
            (Ok(canonical), Ok(canonical_output)) => canonical == canonical_output,
            _ => path == output_dir.as_path(),
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        if self.options.ignores.is_empty() {
            return false;
        }
        let relative = display(path.strip_prefix(&self.base).unwrap_or(path));
        self.options
            .ignores
            .iter()
            .any(|pattern| pattern.matches(&relative))
    }

    /// Where output for `path` goes: itself, or its mirror under the output directory.
    fn target_path(&self, path: &Path) -> PathBuf {
        match &self.options.output_dir {
            Some(output_dir) => match path.strip_prefix(&self.base) {
                Ok(relative) => output_dir.join(relative),
                Err(_) => output_dir.join(path.file_name().unwrap_or_default()),
            },
            None => path.to_path_buf(),
        }
    }
}

/// Go source files the walker feeds to the engine.
pub fn is_source_file(name: &str) -> bool {
    !name.starts_with('.') && name.ends_with(".go") && name != INIT_FILE_NAME
}

fn write_source(path: &Path, content: &str) -> EngineResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| EngineError::io(path, e))
}

fn display(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
