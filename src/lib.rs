//! i18nize - string extraction and rewriting for Go source trees
//!
//! i18nize finds translatable string literals in Go packages, writes per-file
//! catalogs of them, and rewrites the sources so each literal goes through a
//! translation function backed by those catalogs.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and CLI overrides
//! - `core`: Extraction and rewrite engine
//! - `logging`: Diagnostic log setup
//! - `mcp`: Model Context Protocol server implementation

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
