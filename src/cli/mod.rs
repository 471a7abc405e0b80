//! CLI module for the registration service
//!
//! Subcommands:
//! - `serve`: run the registration endpoint
//! - `tracks`: print the problem track catalog
//! - `submit`: walk a saved form through the wizard and send it

pub mod serve;
pub mod submit;
pub mod tracks;

use clap::{Parser, Subcommand};

/// Hackathon team registration service
#[derive(Parser)]
#[command(name = "hackathon-registration")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the registration endpoint
    Serve,

    /// Print the problem track catalog
    Tracks(tracks::TracksArgs),

    /// Validate a form file step by step and submit it
    Submit(submit::SubmitArgs),
}
