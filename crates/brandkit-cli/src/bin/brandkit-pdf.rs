//! brandkit-pdf binary entry point
//!
//! This is a thin wrapper that calls the library's `run_pdf_cli()` function.

use anyhow::Result;
use brandkit_cli::run_pdf_cli;

fn main() -> Result<()> {
    run_pdf_cli()
}
