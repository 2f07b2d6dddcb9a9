use clap::{Parser, Subcommand};

/// Sequence reported when no other input is given.
pub const DEMO_SEQUENCE: [i32; 6] = [-4, 3, -9, 0, 4, 1];

#[derive(Debug, Parser)]
#[command(
    name = "signratio",
    version,
    about = "Report the fraction of positive, negative and zero elements"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Print the ratios of the built-in demo sequence (default)
    Demo,
}
