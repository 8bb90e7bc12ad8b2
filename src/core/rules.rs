//! Built-in fork rules.
//!
//! To replace a file with another file for a specific environment, add a
//! rule here together with the logic for choosing the replacement.

use crate::core::bundle_type::{BundleType, Channel};
use crate::core::fork::ForkRule;

/// Entry point of the React Native renderer.
pub const REACT_NATIVE_RENDERER: &str = "react-native-renderer";

/// Entry point of the React Native CS renderer.
pub const REACT_CS_RENDERER: &str = "react-cs-renderer";

/// Entry point of the React Native RT renderer.
pub const REACT_RT_RENDERER: &str = "react-rt-renderer";

/// Dependency that re-exports the `object-assign` polyfill.
pub const REACT_PACKAGE: &str = "react";

const OBJECT_ASSIGN_UMD: &str = "shared/forks/object-assign.umd.js";
const FEATURE_FLAGS_NATIVE: &str = "shared/forks/ReactFeatureFlags.native.js";
const FEATURE_FLAGS_NATIVE_CS: &str = "shared/forks/ReactFeatureFlags.native-cs.js";
const FEATURE_FLAGS_WWW: &str = "shared/forks/ReactFeatureFlags.www.js";
const LOW_PRIORITY_WARNING_WWW: &str = "shared/forks/lowPriorityWarning.www.js";
const CURRENT_OWNER_WWW: &str = "react/src/forks/ReactCurrentOwner.www.js";
const INVOKE_GUARDED_CALLBACK_WWW: &str = "shared/forks/invokeGuardedCallback.www.js";
const ERROR_DIALOG_WWW: &str = "react-reconciler/src/forks/ReactFiberErrorDialog.www.js";
const ERROR_DIALOG_NATIVE: &str = "react-reconciler/src/forks/ReactFiberErrorDialog.native.js";
const EVENT_LISTENER_WWW: &str = "react-dom/src/events/forks/EventListener-www.js";

/// All built-in rules.
pub fn builtin_rules() -> [ForkRule; 7] {
    [
        ForkRule::new(
            "object-assign",
            "UMD bundles read the polyfill from React instead of bundling it again",
            &[OBJECT_ASSIGN_UMD],
            object_assign,
        ),
        ForkRule::new(
            "shared/ReactFeatureFlags",
            "Feature flags per renderer and for www",
            &[
                FEATURE_FLAGS_NATIVE,
                FEATURE_FLAGS_NATIVE_CS,
                FEATURE_FLAGS_WWW,
            ],
            feature_flags,
        ),
        ForkRule::new(
            "shared/lowPriorityWarning",
            "Warning blacklist on www",
            &[LOW_PRIORITY_WARNING_WWW],
            low_priority_warning,
        ),
        ForkRule::new(
            "react/src/ReactCurrentOwner",
            "Inline require of ReactCurrentOwner on www",
            &[CURRENT_OWNER_WWW],
            current_owner,
        ),
        ForkRule::new(
            "shared/invokeGuardedCallback",
            "Wrapping and reporting of caught errors on www",
            &[INVOKE_GUARDED_CALLBACK_WWW],
            invoke_guarded_callback,
        ),
        ForkRule::new(
            "react-reconciler/src/ReactFiberErrorDialog",
            "Error dialogs for caught errors on www and native",
            &[ERROR_DIALOG_WWW, ERROR_DIALOG_NATIVE],
            error_dialog,
        ),
        ForkRule::new(
            "react-dom/src/events/EventListener",
            "Top-level listeners wrapped in guards on www",
            &[EVENT_LISTENER_WWW],
            event_listener,
        ),
    ]
}

fn is_www(bundle_type: BundleType) -> bool {
    bundle_type.channel() == Channel::Fb
}

/// Only UMD bundles duplicate the polyfill, and only bundles that depend on
/// React can read `assign()` from its internals.
fn object_assign(
    bundle_type: BundleType,
    _entry: &str,
    dependencies: &[String],
) -> Option<&'static str> {
    if bundle_type.channel() != Channel::Umd {
        return None;
    }
    if !dependencies.iter().any(|dep| dep == REACT_PACKAGE) {
        return None;
    }
    Some(OBJECT_ASSIGN_UMD)
}

fn feature_flags(
    bundle_type: BundleType,
    entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    match entry {
        REACT_NATIVE_RENDERER => Some(FEATURE_FLAGS_NATIVE),
        REACT_CS_RENDERER => Some(FEATURE_FLAGS_NATIVE_CS),
        _ if is_www(bundle_type) => Some(FEATURE_FLAGS_WWW),
        _ => None,
    }
}

fn low_priority_warning(
    bundle_type: BundleType,
    _entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    is_www(bundle_type).then_some(LOW_PRIORITY_WARNING_WWW)
}

fn current_owner(
    bundle_type: BundleType,
    _entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    is_www(bundle_type).then_some(CURRENT_OWNER_WWW)
}

fn invoke_guarded_callback(
    bundle_type: BundleType,
    _entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    is_www(bundle_type).then_some(INVOKE_GUARDED_CALLBACK_WWW)
}

fn error_dialog(
    bundle_type: BundleType,
    entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    match bundle_type.channel() {
        Channel::Fb => Some(ERROR_DIALOG_WWW),
        // The native fork plays well with redbox
        Channel::Rn => match entry {
            REACT_NATIVE_RENDERER | REACT_RT_RENDERER => Some(ERROR_DIALOG_NATIVE),
            _ => None,
        },
        _ => None,
    }
}

// www fork is integrated with TimeSlice profiling
fn event_listener(
    bundle_type: BundleType,
    _entry: &str,
    _dependencies: &[String],
) -> Option<&'static str> {
    is_www(bundle_type).then_some(EVENT_LISTENER_WWW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fork::ForkTable;

    const ENTRIES: [&str; 5] = [
        "react",
        "react-dom",
        REACT_NATIVE_RENDERER,
        REACT_CS_RENDERER,
        REACT_RT_RENDERER,
    ];

    fn deps(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn resolve(
        module: &str,
        bt: BundleType,
        entry: &str,
        dependencies: &[String],
    ) -> Option<&'static str> {
        let table = ForkTable::builtin();
        table.resolve(module, bt, entry, dependencies)
    }

    fn www(bt: BundleType) -> bool {
        matches!(bt, BundleType::FbDev | BundleType::FbProd)
    }

    #[test]
    fn test_object_assign_umd_with_react() {
        let fork = Some("shared/forks/object-assign.umd.js");
        let react = deps(&["react"]);
        let react_and_fbjs = deps(&["fbjs", "react"]);

        let bt = BundleType::UmdDev;
        assert_eq!(resolve("object-assign", bt, "react-dom", &react), fork);

        let bt = BundleType::UmdProd;
        assert_eq!(
            resolve("object-assign", bt, "react-dom", &react_and_fbjs),
            fork
        );
    }

    #[test]
    fn test_object_assign_without_react() {
        let bt = BundleType::UmdDev;
        let similar = deps(&["react-dom", "reactx"]);

        assert_eq!(resolve("object-assign", bt, "react-dom", &[]), None);
        assert_eq!(resolve("object-assign", bt, "react-dom", &similar), None);
    }

    #[test]
    fn test_object_assign_only_for_umd() {
        let with_react = deps(&["react"]);
        for bt in BundleType::ALL {
            let umd = matches!(bt, BundleType::UmdDev | BundleType::UmdProd);
            let fork = resolve("object-assign", bt, "react-dom", &with_react);
            assert_eq!(fork.is_some(), umd, "{bt}");
        }
    }

    #[test]
    fn test_feature_flags_entry_takes_precedence() {
        let module = "shared/ReactFeatureFlags";
        for bt in BundleType::ALL {
            assert_eq!(
                resolve(module, bt, REACT_NATIVE_RENDERER, &[]),
                Some("shared/forks/ReactFeatureFlags.native.js")
            );
            assert_eq!(
                resolve(module, bt, REACT_CS_RENDERER, &[]),
                Some("shared/forks/ReactFeatureFlags.native-cs.js")
            );
        }
    }

    #[test]
    fn test_feature_flags_www_fallback() {
        let module = "shared/ReactFeatureFlags";
        for bt in BundleType::ALL {
            let expected = www(bt).then_some("shared/forks/ReactFeatureFlags.www.js");
            assert_eq!(resolve(module, bt, "react-dom", &[]), expected, "{bt}");
            assert_eq!(resolve(module, bt, REACT_RT_RENDERER, &[]), expected);
        }
    }

    #[test]
    fn test_www_only_rules() {
        let cases = [
            (
                "shared/lowPriorityWarning",
                "shared/forks/lowPriorityWarning.www.js",
            ),
            (
                "react/src/ReactCurrentOwner",
                "react/src/forks/ReactCurrentOwner.www.js",
            ),
            (
                "shared/invokeGuardedCallback",
                "shared/forks/invokeGuardedCallback.www.js",
            ),
            (
                "react-dom/src/events/EventListener",
                "react-dom/src/events/forks/EventListener-www.js",
            ),
        ];
        let react = deps(&["react"]);

        for (module, fork) in cases {
            for bt in BundleType::ALL {
                for entry in ENTRIES {
                    let expected = www(bt).then_some(fork);
                    let actual = resolve(module, bt, entry, &react);
                    assert_eq!(actual, expected, "{module} {bt} {entry}");
                }
            }
        }
    }

    #[test]
    fn test_error_dialog() {
        let module = "react-reconciler/src/ReactFiberErrorDialog";
        let www_fork = Some("react-reconciler/src/forks/ReactFiberErrorDialog.www.js");
        let native_path = "react-reconciler/src/forks/ReactFiberErrorDialog.native.js";
        let native_fork = Some(native_path);

        let bt = BundleType::FbDev;
        assert_eq!(resolve(module, bt, "react-dom", &[]), www_fork);
        let bt = BundleType::FbProd;
        assert_eq!(resolve(module, bt, REACT_NATIVE_RENDERER, &[]), www_fork);

        for bt in [BundleType::RnDev, BundleType::RnProd] {
            assert_eq!(resolve(module, bt, REACT_NATIVE_RENDERER, &[]), native_fork);
            assert_eq!(resolve(module, bt, REACT_RT_RENDERER, &[]), native_fork);
            assert_eq!(resolve(module, bt, REACT_CS_RENDERER, &[]), None);
            assert_eq!(resolve(module, bt, "react-dom", &[]), None);
        }

        let other = [
            BundleType::UmdDev,
            BundleType::UmdProd,
            BundleType::NodeDev,
            BundleType::NodeProd,
        ];
        for bt in other {
            for entry in ENTRIES {
                assert_eq!(resolve(module, bt, entry, &[]), None);
            }
        }
    }

    #[test]
    fn test_results_are_declared_candidates() {
        let dep_sets = [deps(&[]), deps(&["react"])];
        for rule in builtin_rules() {
            for bt in BundleType::ALL {
                for entry in ENTRIES {
                    for dependencies in &dep_sets {
                        if let Some(fork) = rule.decide(bt, entry, dependencies) {
                            assert!(
                                rule.candidates.contains(&fork),
                                "{} returned undeclared fork {}",
                                rule.module,
                                fork
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_module_paths_unique() {
        let rules = builtin_rules();
        let mut modules: Vec<_> = rules.iter().map(|r| r.module).collect();
        modules.sort();
        modules.dedup();
        assert_eq!(modules.len(), rules.len());
    }
}
