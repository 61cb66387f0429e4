use super::RouletteOperation;
use clap::Parser;

/// command line tool for computing station distances and drawing
/// roulette destinations from a CSV station network
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RouletteApp {
    #[command(subcommand)]
    pub op: RouletteOperation,
}
