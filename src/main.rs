// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap, always answers with one json envelope

use anyhow::{Context, Result};

fn main() -> Result<()> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    sheet_search::cli::run(std::env::args_os(), &mut handle)
        .context("Failed to write output envelope")
}
