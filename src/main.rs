use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod extract;
mod merge;
mod output;
mod parsing;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("seqfuse=debug,info")
    } else {
        EnvFilter::new("seqfuse=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Merge(args) => {
            cli::merge::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Features(args) => {
            cli::features::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Tabular(args) => {
            cli::tabular::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
