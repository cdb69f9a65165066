//! brandkit-pptx binary entry point
//!
//! This is a thin wrapper that calls the library's `run_pptx_cli()` function.

use anyhow::Result;
use brandkit_cli::run_pptx_cli;

fn main() -> Result<()> {
    run_pptx_cli()
}
