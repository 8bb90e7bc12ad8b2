//! Fork file checks.
//!
//! Verifies that every replacement file the fork table can name exists
//! under a source root, so a missing fork surfaces before a bundle is
//! built for the one variant that needs it.

use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::ForkTable;

/// Errors from checking fork files.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("source root `{}` is not a directory", .0.display())]
    SourceRootMissing(PathBuf),
}

/// Status of a single fork file.
#[derive(Debug, Clone, Serialize)]
pub struct ForkFileCheck {
    /// Module the fork replaces
    pub module: &'static str,

    /// Fork path relative to the source root
    pub fork: &'static str,

    /// Whether the file exists
    pub found: bool,
}

/// Result of checking all fork files.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Source root the forks were checked against
    pub source_root: PathBuf,

    /// One entry per candidate fork file
    pub files: Vec<ForkFileCheck>,
}

impl CheckReport {
    /// Check if every fork file was found.
    pub fn is_ok(&self) -> bool {
        self.files.iter().all(|f| f.found)
    }

    /// Fork files that are missing.
    pub fn missing(&self) -> impl Iterator<Item = &ForkFileCheck> + '_ {
        self.files.iter().filter(|f| !f.found)
    }

    /// Number of fork files found.
    pub fn found_count(&self) -> usize {
        self.files.iter().filter(|f| f.found).count()
    }
}

/// Check every candidate fork of every rule against `source_root`.
pub fn check_forks(table: &ForkTable, source_root: &Path) -> Result<CheckReport, CheckError> {
    if !source_root.is_dir() {
        return Err(CheckError::SourceRootMissing(source_root.to_path_buf()));
    }

    let mut files = Vec::new();
    for rule in table.rules() {
        for &fork in rule.candidates {
            let found = source_root.join(fork).is_file();
            if !found {
                tracing::warn!("missing fork for {}: {}", rule.module, fork);
            }
            files.push(ForkFileCheck {
                module: rule.module,
                fork,
                found,
            });
        }
    }

    Ok(CheckReport {
        source_root: source_root.to_path_buf(),
        files,
    })
}

/// Format a check report for terminal output.
pub fn format_report(report: &CheckReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    let root = report.source_root.display();
    writeln!(output, "Checking forks in {}", root).unwrap();
    for file in &report.files {
        if file.found && !verbose {
            continue;
        }
        let status = if file.found { "[OK]" } else { "[!!]" };
        writeln!(output, "  {} {} ({})", status, file.fork, file.module).unwrap();
    }

    writeln!(
        output,
        "{} of {} fork file(s) found",
        report.found_count(),
        report.files.len()
    )
    .unwrap();

    output
}
