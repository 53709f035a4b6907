pub mod completions;
pub mod expr;
pub mod generate;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::Config;
use crate::types::{GenerationParams, TruncationPolicy};

/// bitty - Random expression image generator
#[derive(Parser, Debug)]
#[command(name = "bitty")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print the expression line and warnings
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an image from a random expression
    Generate(generate::GenerateArgs),

    /// Print a random expression without rendering it
    Expr(expr::ExprArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Options shared by every command that builds an expression
#[derive(Args, Debug, Default, Clone)]
pub struct TreeArgs {
    /// Base tree depth (2-12)
    #[arg(long, short)]
    pub depth: Option<u32>,

    /// Random spread added to the depth (0-6)
    #[arg(long, short)]
    pub randomness: Option<u32>,

    /// Where leaves are placed in the tree
    #[arg(long, value_enum)]
    pub policy: Option<TruncationPolicy>,

    /// Seed for reproducible output (random if omitted)
    #[arg(long, short)]
    pub seed: Option<u64>,

    /// Preset file (default: ./bitty.yaml if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl TreeArgs {
    /// Overlay the flags that were given onto `params`.
    pub fn apply(&self, params: &mut GenerationParams) {
        if let Some(depth) = self.depth {
            params.depth = depth;
        }
        if let Some(randomness) = self.randomness {
            params.randomness = randomness;
        }
        if let Some(policy) = self.policy {
            params.policy = policy;
        }
    }

    /// Load the preset named by `--config`, or the default one.
    pub fn load_config(&self) -> crate::error::Result<Config> {
        let cwd = std::env::current_dir()?;
        Config::discover(self.config.as_deref(), &cwd)
    }

    /// Seed from the flag, then the preset, then the thread RNG.
    pub fn seed(&self, config: &Config) -> u64 {
        self.seed
            .or(config.seed)
            .unwrap_or_else(crate::generate::random_seed)
    }
}
