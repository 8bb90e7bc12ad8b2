//! `forkmap list` command

use anyhow::{Context, Result};

use crate::cli::ListArgs;
use forkmap::{ForkRule, ForkTable};

pub fn execute(args: ListArgs) -> Result<()> {
    let table = ForkTable::builtin();

    let rules: Vec<&ForkRule> = match args.module.as_deref() {
        Some(module) => {
            let rule = table.get(module).with_context(|| {
                format!(
                    "no fork rule for `{}`\n\
                     help: Run `forkmap list` to see every rule",
                    module
                )
            })?;
            vec![rule]
        }
        None => table.rules().collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in rules {
        println!("{}", rule.module);
        println!("    {}", rule.description);
        for fork in rule.candidates {
            println!("    → {}", fork);
        }
    }

    Ok(())
}
