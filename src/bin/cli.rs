// src/bin/cli.rs
use loldoc::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::main()
}
