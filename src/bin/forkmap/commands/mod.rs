//! Command implementations

pub mod check;
pub mod completions;
pub mod init;
pub mod list;
pub mod map;
pub mod resolve;
