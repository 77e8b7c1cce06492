mod config;
mod extract;
mod rewrite;
