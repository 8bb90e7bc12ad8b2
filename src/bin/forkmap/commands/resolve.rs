//! `forkmap resolve` command

use anyhow::Result;

use crate::cli::ResolveArgs;
use forkmap::ops::resolve_imports;
use forkmap::{ForkTable, GlobalContext};

pub fn execute(args: ResolveArgs) -> Result<()> {
    let ctx = GlobalContext::new()?;
    let config = ctx.load_config();
    let target = args.target.into_target(&config)?;

    let results = resolve_imports(ForkTable::builtin(), &target, &args.modules);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for res in &results {
        match res.fork {
            Some(fork) => println!("{} -> {}", res.module, fork),
            None => println!("{} (no fork)", res.module),
        }
    }

    Ok(())
}
