//! Fork table - module path to replacement-file decisions.
//!
//! The table is built once and never mutated afterwards. A lookup for a
//! module with no rule and a rule that declines to fork both yield `None`,
//! meaning "use the original file".

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::core::bundle_type::BundleType;
use crate::core::rules;

/// Decision function of a fork rule.
///
/// Receives the bundle type, the entry point name and the dependencies of
/// the bundle being built.
pub type ForkFn = fn(BundleType, &str, &[String]) -> Option<&'static str>;

/// A single fork rule, keyed by the module path it applies to.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ForkRule {
    /// Canonical module path (exact match)
    pub module: &'static str,

    /// Brief description
    pub description: &'static str,

    /// Every replacement path `decide` can return
    pub candidates: &'static [&'static str],

    #[serde(skip)]
    decide: ForkFn,
}

impl ForkRule {
    /// Create a new rule.
    pub const fn new(
        module: &'static str,
        description: &'static str,
        candidates: &'static [&'static str],
        decide: ForkFn,
    ) -> Self {
        ForkRule {
            module,
            description,
            candidates,
            decide,
        }
    }

    /// Evaluate the rule for a build.
    pub fn decide(
        &self,
        bundle_type: BundleType,
        entry: &str,
        dependencies: &[String],
    ) -> Option<&'static str> {
        (self.decide)(bundle_type, entry, dependencies)
    }
}

static BUILTIN: LazyLock<ForkTable> = LazyLock::new(ForkTable::with_builtin_rules);

/// Mapping from module path to fork rule.
#[derive(Debug, Clone, Default)]
pub struct ForkTable {
    rules: BTreeMap<&'static str, ForkRule>,
}

impl ForkTable {
    /// Create an empty table.
    pub fn new() -> Self {
        ForkTable {
            rules: BTreeMap::new(),
        }
    }

    /// The process-wide table holding all built-in rules.
    pub fn builtin() -> &'static ForkTable {
        &BUILTIN
    }

    /// Create a table with all built-in rules registered.
    pub fn with_builtin_rules() -> Self {
        let mut table = ForkTable::new();
        for rule in rules::builtin_rules() {
            table.register(rule);
        }
        table
    }

    /// Register a rule. Re-registering a module path replaces the rule.
    pub fn register(&mut self, rule: ForkRule) {
        self.rules.insert(rule.module, rule);
    }

    /// Resolve the replacement for `module` in the given build.
    ///
    /// Returns `None` when the original file should be used.
    pub fn resolve(
        &self,
        module: &str,
        bundle_type: BundleType,
        entry: &str,
        dependencies: &[String],
    ) -> Option<&'static str> {
        let rule = self.get(module)?;
        let fork = rule.decide(bundle_type, entry, dependencies)?;
        tracing::debug!("fork {} -> {} ({}, {})", module, fork, bundle_type, entry);
        Some(fork)
    }

    /// Get a rule by module path.
    pub fn get(&self, module: &str) -> Option<&ForkRule> {
        self.rules.get(module)
    }

    /// Check if a rule is registered for a module path.
    pub fn contains(&self, module: &str) -> bool {
        self.rules.contains_key(module)
    }

    /// Iterate over rules in module path order.
    pub fn rules(&self) -> impl Iterator<Item = &ForkRule> + '_ {
        self.rules.values()
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
