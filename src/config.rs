use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{Exclusions, WalkOptions};

pub const CONFIG_FILE_NAME: &str = ".i18nizerc.json";

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_WRAPPER_SYMBOL: &str = "T";
pub const DEFAULT_RUNTIME_PACKAGE: &str = "github.com/i18nize/i18nize/i18n";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Glob patterns (relative to the source root) of files and directories to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Locale suffix of the identity catalogs (`main.go.en.json`).
    #[serde(default = "default_locale")]
    pub locale: String,
    /// Function name wrapped around translatable literals.
    #[serde(default = "default_wrapper_symbol")]
    pub wrapper_symbol: String,
    /// Go import path of the translation runtime.
    #[serde(default = "default_runtime_package")]
    pub runtime_package: String,
    /// JSON exclusion list, relative to the config file.
    #[serde(default)]
    pub excluded_strings_file: Option<String>,
    /// Also write annotated `.po` catalogs.
    #[serde(default)]
    pub po: bool,
    #[serde(default = "default_extract_test_files")]
    pub extract_test_files: bool,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_wrapper_symbol() -> String {
    DEFAULT_WRAPPER_SYMBOL.to_string()
}

fn default_runtime_package() -> String {
    DEFAULT_RUNTIME_PACKAGE.to_string()
}

fn default_extract_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            locale: default_locale(),
            wrapper_symbol: default_wrapper_symbol(),
            runtime_package: default_runtime_package(),
            excluded_strings_file: None,
            po: false,
            extract_test_files: default_extract_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error for invalid glob patterns in `ignores`, a wrapper symbol
    /// that is not a Go identifier, or a locale that cannot be a file suffix.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        if !is_go_identifier(&self.wrapper_symbol) {
            bail!(
                "Invalid 'wrapperSymbol': \"{}\" is not a Go identifier",
                self.wrapper_symbol
            );
        }

        if self.locale.is_empty()
            || !self
                .locale
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            bail!("Invalid 'locale': \"{}\"", self.locale);
        }

        if self.runtime_package.trim().is_empty() {
            bail!("'runtimePackage' must not be empty");
        }

        Ok(())
    }

    /// Compiled `ignores` patterns. Call after [`Config::validate`].
    pub fn ignore_patterns(&self) -> Result<Vec<Pattern>> {
        self.ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))
            })
            .collect()
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path of the config file, or `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// The configured exclusion list, resolved against the config file's directory.
    pub fn excluded_strings_path(&self) -> Option<PathBuf> {
        let file = self.config.excluded_strings_file.as_ref()?;
        let base = self
            .path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or_else(|| Path::new("."));
        Some(base.join(file))
    }
}

/// Find and load the config for `start_dir`. A file path starts the search at its parent.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let search_from = if start_dir.is_file() {
        start_dir.parent().unwrap_or(start_dir)
    } else {
        start_dir
    };

    match find_config_file(search_from) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}

/// Per-invocation values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub locale: Option<String>,
    pub wrapper_symbol: Option<String>,
    pub runtime_package: Option<String>,
    /// Resolved against the working directory, unlike the config file entry.
    pub excluded_strings_file: Option<PathBuf>,
    pub po: bool,
    pub skip_test_files: bool,
}

/// Everything a run needs: walk options plus the exclusion list, loaded once.
pub struct RunSettings {
    pub options: WalkOptions,
    pub exclusions: Exclusions,
    pub config_path: Option<PathBuf>,
}

/// Load the config for `root`, apply `overrides`, and load the exclusion list.
pub fn resolve_settings(root: &Path, overrides: Overrides) -> Result<RunSettings> {
    let mut loaded = load_config(root)?;

    let excluded_strings_path = match overrides.excluded_strings_file {
        Some(path) => Some(path),
        None => loaded.excluded_strings_path(),
    };

    let config = &mut loaded.config;
    if let Some(locale) = overrides.locale {
        config.locale = locale;
    }
    if let Some(wrapper_symbol) = overrides.wrapper_symbol {
        config.wrapper_symbol = wrapper_symbol;
    }
    if let Some(runtime_package) = overrides.runtime_package {
        config.runtime_package = runtime_package;
    }
    config.po |= overrides.po;
    if overrides.skip_test_files {
        config.extract_test_files = false;
    }
    config.validate()?;

    let exclusions = match &excluded_strings_path {
        Some(path) => Exclusions::load(path)
            .with_context(|| format!("Failed to load excluded strings from {}", path.display()))?,
        None => Exclusions::empty(),
    };

    let options = WalkOptions {
        locale: config.locale.clone(),
        wrapper_symbol: config.wrapper_symbol.clone(),
        runtime_package: config.runtime_package.clone(),
        po: config.po,
        extract_test_files: config.extract_test_files,
        ignores: config.ignore_patterns()?,
        ..WalkOptions::new(root)
    };

    Ok(RunSettings {
        options,
        exclusions,
        config_path: loaded.path,
    })
}
