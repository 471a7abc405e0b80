//! Tracks command - prints the problem track catalog

use clap::Args;

use crate::api::types::TracksResponse;

#[derive(Args, Debug)]
pub struct TracksArgs {
    /// Print the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: TracksArgs) -> anyhow::Result<()> {
    let catalog = TracksResponse::catalog();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    println!("Problem tracks (catalog {})", catalog.version);
    for track in &catalog.tracks {
        println!("{:>3}  {:<30} {}", track.number, track.slug, track.title);
    }

    Ok(())
}
