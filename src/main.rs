use anyhow::Result;
use clap::Parser;
use huffpack::cli::{self, Cli, Command};

huffpack::if_tracing! {
    use tracing_subscriber::{EnvFilter, fmt};
}

fn main() -> Result<()> {
    huffpack::if_tracing! {
        let subscriber = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_target(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Codes(args) => cli::codes::codes(args)?,
        Command::Tree(args) => cli::tree::tree(args)?,
        Command::Stats(args) => cli::stats::stats(args)?,
        Command::Test(args) => cli::test::test(args)?,
    }
    Ok(())
}
