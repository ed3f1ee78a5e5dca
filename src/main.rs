mod cli;

use clap::Parser;
use color_eyre::Report;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let output = Cli::parse().run()?;
    println!("{output}");
    Ok(())
}
