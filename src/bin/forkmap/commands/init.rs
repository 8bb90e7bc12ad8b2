//! `forkmap init` command

use anyhow::{bail, Result};

use crate::cli::InitArgs;
use forkmap::util::Config;
use forkmap::GlobalContext;

pub fn execute(args: InitArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let path = ctx.project_config_path();

    if path.exists() && !args.force {
        bail!(
            "{} already exists\n\
             help: Pass `--force` to overwrite it",
            path.display()
        );
    }

    let mut config = Config::default();
    config.build.bundle_type = args.bundle_type.map(|bt| bt.to_string());
    config.build.entry = args.entry;
    config.build.dependencies = args.deps;
    config.paths.source_root = args.source_root;

    config.save(&path)?;
    eprintln!("     Created {}", path.display());

    Ok(())
}
