//! CLI definitions using clap.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use forkmap::util::Config;
use forkmap::{BuildTarget, BundleType};

/// forkmap - Resolve module forks for bundle variants
#[derive(Parser)]
#[command(name = "forkmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a project config with a default build target
    Init(InitArgs),

    /// Show which file an import resolves to
    Resolve(ResolveArgs),

    /// Show every fork in effect for a build target
    Map(MapArgs),

    /// List the fork rules
    List(ListArgs),

    /// Check that every fork file exists
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

const NO_BUNDLE_TYPE: &str = "no bundle type given\n\
     help: Pass `--bundle-type <TYPE>` or set `build.bundle_type` in config";

const NO_ENTRY: &str = "no entry point given\n\
     help: Pass `--entry <NAME>` or set `build.entry` in config";

/// Build target selection shared by `resolve` and `map`.
#[derive(Args)]
pub struct TargetArgs {
    /// Bundle type (e.g., UMD_DEV, fb-prod)
    #[arg(short, long, env = "FORKMAP_BUNDLE_TYPE")]
    pub bundle_type: Option<BundleType>,

    /// Entry point being built (e.g., react-dom)
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Dependency of the bundle (repeatable)
    #[arg(short = 'd', long = "dep")]
    pub deps: Vec<String>,
}

impl TargetArgs {
    /// Build the target, falling back to configured defaults.
    pub fn into_target(self, config: &Config) -> Result<BuildTarget> {
        let bundle_type = match self.bundle_type {
            Some(bt) => bt,
            None => config.bundle_type()?.context(NO_BUNDLE_TYPE)?,
        };

        let entry = self
            .entry
            .or_else(|| config.build.entry.clone())
            .context(NO_ENTRY)?;

        let deps = if self.deps.is_empty() {
            config.build.dependencies.clone()
        } else {
            self.deps
        };

        Ok(BuildTarget::new(bundle_type, entry).with_dependencies(deps))
    }
}

#[derive(Args)]
pub struct InitArgs {
    /// Default bundle type
    #[arg(short, long)]
    pub bundle_type: Option<BundleType>,

    /// Default entry point
    #[arg(short, long)]
    pub entry: Option<String>,

    /// Default dependency (repeatable)
    #[arg(short = 'd', long = "dep")]
    pub deps: Vec<String>,

    /// Directory fork paths are relative to
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Overwrite an existing project config
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Module paths to resolve
    #[arg(required = true)]
    pub modules: Vec<String>,

    #[command(flatten)]
    pub target: TargetArgs,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    pub target: TargetArgs,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only the rule for this module path
    pub module: Option<String>,

    /// Emit JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Directory fork paths are relative to (defaults to ./packages)
    #[arg(long)]
    pub source_root: Option<PathBuf>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
