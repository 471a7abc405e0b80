use clap::Parser;
use hackathon_registration::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => cli::serve::run().await,
        Command::Tracks(args) => cli::tracks::run(args),
        Command::Submit(args) => cli::submit::run(args).await,
    }
}
