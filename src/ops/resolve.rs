//! Fork resolution for a build target.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{BundleType, ForkTable};

/// One bundle being produced: what it is built as, from which entry point,
/// and which packages it depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTarget {
    /// Bundle type being built
    pub bundle_type: BundleType,

    /// Entry point name (e.g., "react-dom")
    pub entry: String,

    /// Dependencies available to the bundle
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl BuildTarget {
    /// Create a target with no dependencies.
    pub fn new(bundle_type: BundleType, entry: impl Into<String>) -> Self {
        BuildTarget {
            bundle_type,
            entry: entry.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add a dependency.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependencies.push(name.into());
        self
    }

    /// Replace the dependency list.
    pub fn with_dependencies<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = names.into_iter().map(Into::into).collect();
        self
    }
}

/// Outcome of resolving a single import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Module path as imported
    pub module: String,

    /// Replacement file, or `None` to keep the original
    pub fork: Option<&'static str>,
}

impl Resolution {
    /// Check if the import is replaced.
    pub fn is_forked(&self) -> bool {
        self.fork.is_some()
    }
}

/// Resolve one import for a target.
pub fn resolve_import(table: &ForkTable, target: &BuildTarget, module: &str) -> Resolution {
    let fork = table.resolve(
        module,
        target.bundle_type,
        &target.entry,
        &target.dependencies,
    );

    Resolution {
        module: module.to_string(),
        fork,
    }
}

/// Resolve several imports for a target, preserving input order.
pub fn resolve_imports<I, S>(table: &ForkTable, target: &BuildTarget, paths: I) -> Vec<Resolution>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .map(|m| resolve_import(table, target, m.as_ref()))
        .collect()
}

/// Compute every substitution in effect for a target.
///
/// Keys are module paths, values their replacement files. Modules that keep
/// their original file are absent.
pub fn fork_map(table: &ForkTable, target: &BuildTarget) -> BTreeMap<&'static str, &'static str> {
    let map: BTreeMap<_, _> = table
        .rules()
        .filter_map(|rule| {
            rule.decide(target.bundle_type, &target.entry, &target.dependencies)
                .map(|fork| (rule.module, fork))
        })
        .collect();

    tracing::debug!(
        "{} fork(s) for {} {}",
        map.len(),
        target.bundle_type,
        target.entry
    );

    map
}
