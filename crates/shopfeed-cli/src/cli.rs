use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shopfeed")]
#[command(about = "An infinite-scroll product feed for the terminal", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to a catalog file (or set SHOPFEED_CATALOG); the built-in mock
    /// catalog is used when omitted
    #[arg(long, value_name = "FILE", env = "SHOPFEED_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Products per page
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,

    /// Size of the built-in mock catalog
    #[arg(long, value_name = "N")]
    pub items: Option<usize>,

    /// Simulated fetch latency in milliseconds
    #[arg(long, value_name = "MS")]
    pub delay_ms: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a catalog file
    Generate(GenerateArgs),
    /// Print one page of the catalog as JSON
    Peek(PeekArgs),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Number of products to generate
    #[arg(long, default_value_t = 100)]
    pub count: usize,

    /// Output path
    #[arg(long, value_name = "FILE")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct PeekArgs {
    /// Page index to fetch
    #[arg(long, default_value_t = 0)]
    pub page: u32,
}
