//! forkmap - build-time module fork resolution
//!
//! This crate decides, for a module import seen while bundling, whether the
//! import should resolve to an alternate source file for the bundle type and
//! entry point being built.

pub mod core;
pub mod ops;
pub mod util;

pub use crate::core::{BundleType, Channel, ForkRule, ForkTable, Optimization};
pub use ops::{fork_map, resolve_import, BuildTarget, Resolution};
pub use util::context::GlobalContext;
