//! Command line interface

pub mod serve;

use clap::{Parser, Subcommand};

/// Team administration API server
#[derive(Parser)]
#[command(name = "team-admin-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP API server (default)
    Serve(serve::ServeArgs),
}
