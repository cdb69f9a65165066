//! CLI Application logic
//!
//! Contains the command-line interfaces of `brandkit-pdf` and
//! `brandkit-pptx`. Both run the whole build: load configuration and
//! tokens, lay the brand kit out on their canvas, render and write.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing::info;

use brandkit_ast::DocumentLayout;
use brandkit_core::{
    build_layout_with_theme, date_label, load_theme, BrandkitConfig, Canvas, Renderer, Theme,
};
use brandkit_pdf::PdfRenderer;
use brandkit_pptx::PptxRenderer;

/// Arguments shared by both generators
#[derive(Debug, Clone, Parser)]
pub struct GenerateArgs {
    /// Configuration file (defaults to brandkit.toml in the project root)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (defaults to the configured name under the asset directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Project root that relative paths are resolved against
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Date label for the cover (defaults to the current month)
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Parser)]
#[command(name = "brandkit-pdf")]
#[command(author, version, about = "Generate the brand kit PDF", long_about = None)]
struct PdfCli {
    #[command(flatten)]
    args: GenerateArgs,
}

#[derive(Parser)]
#[command(name = "brandkit-pptx")]
#[command(author, version, about = "Generate the brand kit presentation", long_about = None)]
struct PptxCli {
    #[command(flatten)]
    args: GenerateArgs,
}

/// What a generator wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub pages: usize,
}

impl GenerationReport {
    /// Size in kilobytes, one decimal, e.g. `12.3 KB`
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.bytes as f64 / 1024.0)
    }
}

/// Install the stderr log subscriber, `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point of `brandkit-pdf`
pub fn run_pdf_cli() -> Result<()> {
    let cli = PdfCli::parse();
    init_logging();

    let report = pdf_command(&cli.args)?;
    println!("PDF generated successfully!");
    println!("Output: {}", report.output.display());
    println!("Pages: {}", report.pages);
    println!("Size: {}", report.size_label());
    Ok(())
}

/// Entry point of `brandkit-pptx`
pub fn run_pptx_cli() -> Result<()> {
    let cli = PptxCli::parse();
    init_logging();

    let report = pptx_command(&cli.args)?;
    println!("Presentation generated successfully!");
    println!("Output: {}", report.output.display());
    println!("Slides: {}", report.pages);
    println!("Size: {}", report.size_label());
    Ok(())
}

/// Build the A4 brand kit and write it as PDF
pub fn pdf_command(args: &GenerateArgs) -> Result<GenerationReport> {
    let config = load_config(args)?;
    let (layout, _) = layout_for(args, &config, &Canvas::a4_document())?;

    let renderer = PdfRenderer::new(&config.pdf, &args.root)
        .context("Failed to load PDF fonts")?;
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.paths.pdf_output_path(&args.root));

    write_output(&renderer, &layout, &output)
}

/// Build the widescreen brand kit and write it as PPTX
pub fn pptx_command(args: &GenerateArgs) -> Result<GenerationReport> {
    let config = load_config(args)?;
    let (layout, theme) = layout_for(args, &config, &Canvas::widescreen_deck())?;

    let renderer = PptxRenderer::new(&config.pptx).with_theme(&theme);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| config.paths.pptx_output_path(&args.root));

    write_output(&renderer, &layout, &output)
}

fn load_config(args: &GenerateArgs) -> Result<BrandkitConfig> {
    BrandkitConfig::load(args.config.as_deref(), &args.root).with_context(|| match &args.config {
        Some(path) => format!("Failed to load config: {}", path.display()),
        None => format!("Failed to load config under {}", args.root.display()),
    })
}

/// Layout on `canvas` plus the theme it was built with
fn layout_for(
    args: &GenerateArgs,
    config: &BrandkitConfig,
    canvas: &Canvas,
) -> Result<(DocumentLayout, Theme)> {
    let context = || format!("Failed to build brand kit layout ({:?})", canvas.kind);
    let date = args
        .date
        .clone()
        .unwrap_or_else(|| date_label(Local::now().date_naive()));
    let theme = load_theme(config, &args.root).with_context(context)?;
    let layout =
        build_layout_with_theme(config, &args.root, canvas, &date, &theme).with_context(context)?;
    Ok((layout, theme))
}

fn write_output<R: Renderer>(
    renderer: &R,
    layout: &DocumentLayout,
    output: &Path,
) -> Result<GenerationReport> {
    let bytes = renderer
        .render(layout)
        .with_context(|| format!("Failed to render {}", renderer.extension().to_uppercase()))?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::write(output, &bytes)
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;
    info!(path = %output.display(), bytes = bytes.len(), "Wrote output");

    Ok(GenerationReport {
        output: output.to_path_buf(),
        bytes: bytes.len(),
        pages: layout.page_count(),
    })
}
