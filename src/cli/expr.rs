//! Expr command implementation.
//!
//! Prints a random expression and its constant without rendering an image.

use clap::Args;

use crate::error::Result;
use crate::generate::Generation;
use crate::output::Printer;
use crate::types::GenerationParams;

use super::generate::report_clamped;
use super::TreeArgs;

/// Print a random expression without rendering it
#[derive(Args, Debug, Default)]
pub struct ExprArgs {
    #[command(flatten)]
    pub tree: TreeArgs,
}

pub fn run(args: ExprArgs, printer: &Printer) -> Result<()> {
    let generation = generate(&args, printer)?;
    println!("{}", generation.summary());
    Ok(())
}

/// Resolve parameters and build the expression.
fn generate(args: &ExprArgs, printer: &Printer) -> Result<Generation> {
    let config = args.tree.load_config()?;

    let mut params = GenerationParams::default();
    config.apply(&mut params);
    args.tree.apply(&mut params);
    report_clamped(&params.clamp(), printer);

    let seed = args.tree.seed(&config);
    let generation = Generation::new(&params, seed)?;
    printer.info(
        "Built",
        &format!(
            "{} nodes, depth {} ({}), seed {}",
            generation.expr().node_count(),
            generation.depth(),
            params.policy,
            seed
        ),
    );

    Ok(generation)
}
