//! Shared utilities

pub mod config;
pub mod context;

pub use config::Config;
pub use context::GlobalContext;
