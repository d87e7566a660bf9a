use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cabundle")]
#[command(about = "Locate the operating system's trusted CA certificate bundle")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the normalized OS identity used for bundle lookup
    Os,

    /// Print the ordered list of candidate bundle locations
    SearchPath {
        /// Output as JSON (reports an absent search path as null)
        #[arg(long)]
        json: bool,
    },

    /// Print the first candidate that exists on this system
    Resolve {
        /// Output as JSON (reports a missing bundle as null)
        #[arg(long)]
        json: bool,
    },
}

pub mod os;
pub mod resolve;
pub mod search_path;
