//! High-level operations.
//!
//! This module contains the implementation of forkmap commands.

pub mod check;
pub mod resolve;

pub use check::{check_forks, format_report, CheckError, CheckReport, ForkFileCheck};
pub use resolve::{fork_map, resolve_import, resolve_imports, BuildTarget, Resolution};
