//! Per-directory initialization artifact wiring catalogs into the runtime.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::core::catalog::translation_suffix;
use crate::core::errors::{EngineError, EngineResult};
use crate::core::parsers::literal::quote;

/// File name of the generated initialization artifact.
pub const INIT_FILE_NAME: &str = "i18n_init.go";

/// Render the initialization artifact for a package.
///
/// The content depends only on its arguments, so regenerating it is byte-identical.
pub fn render_init_artifact(package_name: &str, locale: &str, runtime_package: &str) -> String {
    format!(
        r#"// Code generated by i18nize. DO NOT EDIT.

package {package}

import (
	"embed"

	i18n {runtime}
)

//go:embed *.go{suffix}
var i18nCatalogs embed.FS

func init() {{
	i18n.RegisterCatalogs({package_literal}, {locale_literal}, i18nCatalogs)
}}
"#,
        package = package_name,
        runtime = quote(runtime_package),
        suffix = translation_suffix(locale),
        package_literal = quote(package_name),
        locale_literal = quote(locale),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitState {
    NoInit,
    InitEmitted,
}

/// Tracks whether a directory has received its initialization artifact this run.
///
/// The only transition is `NoInit -> InitEmitted`, taken by the first
/// successful [`ensure_emitted`](Self::ensure_emitted).
#[derive(Debug)]
pub struct PackageInitRecord {
    dir: PathBuf,
    state: InitState,
}

impl PackageInitRecord {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            state: InitState::NoInit,
        }
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(INIT_FILE_NAME)
    }

    /// Emit the artifact unless already done. Returns true if this call wrote it.
    ///
    /// With `dry_run` the state still transitions but nothing is written. A
    /// failed write leaves the state at `NoInit` so a later file can retry.
    pub fn ensure_emitted(
        &mut self,
        package_name: &str,
        locale: &str,
        runtime_package: &str,
        dry_run: bool,
    ) -> EngineResult<bool> {
        if self.state == InitState::InitEmitted {
            return Ok(false);
        }

        let path = self.path();
        if !dry_run {
            write_artifact(
                &path,
                &render_init_artifact(package_name, locale, runtime_package),
            )?;
        }
        info!(path = %path.display(), package = package_name, "emitted initialization artifact");
        self.state = InitState::InitEmitted;
        Ok(true)
    }
}

fn write_artifact(path: &Path, content: &str) -> EngineResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| EngineError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| EngineError::io(path, e))
}
