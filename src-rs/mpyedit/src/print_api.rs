//! Autocomplete word list printing for the mpyedit CLI

use anstream::println;
use mpyedit_api::{compatible_api, full_api};

/// Prints one autocomplete candidate per line
pub fn print(board: Option<&str>) {
    let words = board.map_or_else(full_api, compatible_api);
    for word in words {
        println!("{word}");
    }
}
