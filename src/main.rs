use clap::Parser;
use miette::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use brickify::cli::{Cli, Commands};
use brickify::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => brickify::cli::build::run(args, &printer)?,
        Commands::Palette(args) => brickify::cli::palette::run(args, &printer)?,
        Commands::Init(args) => brickify::cli::init::run(args, &printer)?,
        Commands::Completions(args) => brickify::cli::completions::run(args)?,
    }

    Ok(())
}
