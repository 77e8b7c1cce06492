mod command_result;
pub mod extract;
pub mod init;
pub mod rewrite;

pub use command_result::*;
