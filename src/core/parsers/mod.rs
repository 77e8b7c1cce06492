//! Source parsing for Go files.
//!
//! - `go`: tree-sitter parsing into a [`go::SourceUnit`] with a position index
//! - `literal`: decoding and quoting of Go string literals

pub mod go;
pub mod literal;
