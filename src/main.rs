use bitty::cli::{Cli, Commands};
use bitty::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Generate(args) => bitty::cli::generate::run(args, &printer)?,
        Commands::Expr(args) => bitty::cli::expr::run(args, &printer)?,
        Commands::Completions(args) => bitty::cli::completions::run(args)?,
    }

    Ok(())
}
