use anyhow::Result;
use budgetbook::cli::Cli;
use budgetbook::logging;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    cli.run()
}
