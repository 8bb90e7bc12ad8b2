//! `forkmap check` command
//!
//! The source root comes from `--source-root`, then `paths.source_root` in
//! config, then `./packages`. Relative roots resolve against the working
//! directory, except one set in the global config, which resolves against
//! `~/.forkmap`.

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::CheckArgs;
use forkmap::ops::{check_forks, format_report};
use forkmap::{ForkTable, GlobalContext};

/// Source root used when neither the command line nor config names one.
const DEFAULT_SOURCE_ROOT: &str = "packages";

pub fn execute(args: CheckArgs, verbose: bool) -> Result<()> {
    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(verbose);
    let config = ctx.load_config();

    let source_root = args
        .source_root
        .or(config.paths.source_root)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE_ROOT));
    let source_root = ctx.resolve_path(&source_root);

    let report = check_forks(ForkTable::builtin(), &source_root)?;
    print!("{}", format_report(&report, ctx.is_verbose()));

    if !report.is_ok() {
        bail!(
            "{} fork file(s) missing\n\
             help: Restore the files or remove the rules that name them",
            report.missing().count()
        );
    }

    Ok(())
}
