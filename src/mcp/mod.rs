//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes extraction and rewriting to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameters and result DTOs

mod server;
pub mod types;

pub use server::{I18nizeMcpServer, run_server};
