use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = typescale::cli::Cli::parse();
    typescale::run(cli).context("typescale failed")
}
