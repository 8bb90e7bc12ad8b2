//! forkmap CLI - module fork resolution for bundle variants

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("forkmap=debug")
    } else {
        EnvFilter::new("forkmap=info")
    };

    // stdout is reserved for command output (including --json)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Map(args) => commands::map::execute(args),
        Commands::List(args) => commands::list::execute(args),
        Commands::Check(args) => commands::check::execute(args, cli.verbose),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
