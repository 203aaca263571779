use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mpyedit CLI
#[derive(Parser)]
#[command(name = "mpyedit")]
#[command(version, about = "MicroPython editor support tooling", long_about = None)]
pub struct CliCommand {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that a script only uses API available on a board
    Check {
        /// Path to the Python source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Board identifier to check against
        #[arg(long, value_name = "ID")]
        board: String,
    },
    /// Development tools for debugging and testing
    Dev {
        #[command(subcommand)]
        command: DevCommands,
    },
}

#[derive(Subcommand)]
pub enum DevCommands {
    /// Print the import record detected in a file
    PrintImports {
        /// Path to the Python source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the output in debug format
        #[arg(long)]
        print_debug: bool,

        /// Disable colors in the output
        #[arg(long)]
        no_colors: bool,
    },
    /// Print the autocomplete word list for a board
    PrintApi {
        /// Board identifier to pick the word list for; the full list is
        /// printed when no board is given
        #[arg(long, value_name = "ID")]
        board: Option<String>,
    },
}
