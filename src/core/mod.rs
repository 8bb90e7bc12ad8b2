//! Core data structures for forkmap.
//!
//! This module contains the foundational types:
//! - Bundle types (channel and optimization level)
//! - The fork table and its rules

pub mod bundle_type;
pub mod fork;
pub mod rules;

pub use bundle_type::{BundleType, Channel, Optimization, ParseBundleTypeError};
pub use fork::{ForkFn, ForkRule, ForkTable};
