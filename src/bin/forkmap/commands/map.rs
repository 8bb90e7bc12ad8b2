//! `forkmap map` command

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;

use crate::cli::MapArgs;
use forkmap::{fork_map, BuildTarget, ForkTable, GlobalContext};

#[derive(Serialize)]
struct MapOutput<'a> {
    target: &'a BuildTarget,
    forks: BTreeMap<&'static str, &'static str>,
}

pub fn execute(args: MapArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let config = ctx.load_config();
    let target = args.target.into_target(&config)?;

    let forks = fork_map(ForkTable::builtin(), &target);

    if args.json {
        let output = MapOutput {
            target: &target,
            forks,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} {}", target.bundle_type, target.entry);
    if forks.is_empty() {
        println!("  (no forks)");
    }
    for (module, fork) in &forks {
        println!("  {} -> {}", module, fork);
    }

    Ok(())
}
