//! brandkit CLI - Command-line interface library
//!
//! This library provides the two generators of the brand kit:
//! - `brandkit-pdf`: A4 brand guidelines document
//! - `brandkit-pptx`: 16:9 presentation with speaker notes
//!
//! # Library Usage
//!
//! ```ignore
//! use brandkit_cli::{pdf_command, GenerateArgs};
//!
//! let report = pdf_command(&GenerateArgs {
//!     config: None,
//!     output: None,
//!     root: ".".into(),
//!     date: None,
//! })?;
//! println!("Size: {}", report.size_label());
//! ```
//!
//! # Binary Usage
//!
//! ```bash
//! # Build assets/brandkit/CredSuvidha-BrandKit.pdf
//! brandkit-pdf
//!
//! # Build the deck with a custom configuration and output path
//! brandkit-pptx --config brandkit.toml --output deck.pptx
//! ```

pub mod app;

// Re-export main entry points and types
pub use app::{init_logging, pdf_command, pptx_command, run_pdf_cli, run_pptx_cli};
pub use app::{GenerateArgs, GenerationReport};
