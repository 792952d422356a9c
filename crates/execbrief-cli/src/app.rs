//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "execbrief")]
#[command(
    author,
    version,
    about = "Knowledge-synthesis demo: ZeroEntropy search with a Claude pipeline comparison"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load the sample document set into the demo collection
    Load,

    /// Show indexing status of the demo collection
    Status,

    /// Ask a question and print the synthesized answer
    Query(QueryArgs),

    /// Race ZeroEntropy against the Claude pipeline for one question
    Compare(QueryArgs),

    /// Start the local HTTP surface for the UI layer
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct QueryArgs {
    /// The business question to answer
    pub query: Vec<String>,
}

impl QueryArgs {
    pub fn text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,
}
