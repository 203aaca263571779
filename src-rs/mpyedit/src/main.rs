use std::path::Path;
use std::process::ExitCode;

use anstream::println;
use clap::Parser;

use crate::command::{CliCommand, Commands, DevCommands};

mod command;
mod print_api;
mod print_error;
mod print_imports;
mod stylesheet;

fn main() -> ExitCode {
    let cli = CliCommand::parse();

    match cli.command {
        Commands::Check { file, board } => check(&file, &board),
        Commands::Dev { command } => match command {
            DevCommands::PrintImports {
                file,
                print_debug,
                no_colors,
            } => {
                if no_colors {
                    anstream::ColorChoice::Never.write_global();
                }

                match std::fs::read_to_string(&file) {
                    Ok(source) => {
                        let record = mpyedit_imports::detect_imports(&source);
                        print_imports::print(&record, print_debug);
                        ExitCode::SUCCESS
                    }
                    Err(error) => {
                        print_error::print(&read_error_message(&file, &error));
                        ExitCode::FAILURE
                    }
                }
            }
            DevCommands::PrintApi { board } => {
                print_api::print(board.as_deref());
                ExitCode::SUCCESS
            }
        },
    }
}

/// Runs the compatibility check and reports the verdict.
///
/// The exit code is non-zero when the script is incompatible, so the
/// check can gate a script the way a linter would.
fn check(file: &Path, board: &str) -> ExitCode {
    let source = match std::fs::read_to_string(file) {
        Ok(source) => source,
        Err(error) => {
            print_error::print(&read_error_message(file, &error));
            return ExitCode::FAILURE;
        }
    };

    match mpyedit_api::is_api_used_compatible(board, &source) {
        Ok(true) => {
            println!("{} is compatible with board {board}", file.display());
            ExitCode::SUCCESS
        }
        Ok(false) => {
            println!(
                "{} uses modules not available on board {board}",
                file.display()
            );
            ExitCode::FAILURE
        }
        Err(error) => {
            print_error::print(&error.to_string());
            ExitCode::FAILURE
        }
    }
}

fn read_error_message(file: &Path, error: &std::io::Error) -> String {
    format!("couldn't read `{}` - {error}", file.display())
}
