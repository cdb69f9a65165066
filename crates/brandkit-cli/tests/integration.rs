//! Integration tests for the brandkit generators
//!
//! These tests run the whole build against a temporary project:
//! configuration + tokens + logo -> layout -> PDF / PPTX on disk

use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};

use brandkit_cli::{pdf_command, pptx_command, GenerateArgs};
use brandkit_pptx::inspect;
use tempfile::TempDir;
use zip::ZipArchive;

const TOKENS: &str = r##"{
  "colors": {
    "brand": { "50": "#eef7ff", "600": "#1a6ef5", "950": "#142857" },
    "accent": { "500": "#f97316" },
    "logo": { "navy": "#1b3a5c", "gold": "#c5961e", "background": "#faf6f1" }
  }
}"##;

/// Create a project with tokens and, optionally, a logo
fn create_project(with_logo: bool) -> TempDir {
    let dir = TempDir::new().unwrap();
    let asset_dir = dir.path().join("assets/brandkit");
    fs::create_dir_all(&asset_dir).unwrap();
    fs::write(asset_dir.join("brand-tokens.json"), TOKENS).unwrap();
    if with_logo {
        let logo = image::RgbImage::from_pixel(24, 12, image::Rgb([0x1b, 0x3a, 0x5c]));
        logo.save(dir.path().join("logo.png")).unwrap();
    }
    dir
}

fn args(root: &Path) -> GenerateArgs {
    GenerateArgs {
        config: None,
        output: None,
        root: root.to_path_buf(),
        date: Some("October 2026".to_string()),
    }
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut content = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    content
}

#[test]
fn test_pptx_default_output() {
    let project = create_project(true);
    let report = pptx_command(&args(project.path())).unwrap();

    let expected = project
        .path()
        .join("assets/brandkit/CredSuvidha-BrandKit.pptx");
    assert_eq!(report.output, expected);

    let bytes = fs::read(&expected).unwrap();
    assert_eq!(bytes.len(), report.bytes);

    let summary = inspect(&bytes).unwrap();
    assert_eq!(summary.slides, report.pages);
    assert!(summary.slides >= 12);
    assert!(summary.notes >= 10);
    assert_eq!(summary.media, 1);

    let cover = read_part(&bytes, "ppt/slides/slide1.xml");
    assert!(cover.contains("<a:t>Brand Kit</a:t>"));
    assert!(cover.contains("October 2026"));

    let last = read_part(&bytes, &format!("ppt/slides/slide{}.xml", summary.slides));
    assert!(last.contains("Thank You"));
}

#[test]
fn test_pptx_theme_uses_tokens() {
    let project = create_project(false);
    let report = pptx_command(&args(project.path())).unwrap();
    let bytes = fs::read(&report.output).unwrap();

    let theme = read_part(&bytes, "ppt/theme/theme1.xml");
    assert!(theme.contains(r#"<a:accent1><a:srgbClr val="1A6EF5"/></a:accent1>"#));
    assert!(theme.contains(r#"<a:dk2><a:srgbClr val="142857"/></a:dk2>"#));
}

#[test]
fn test_pptx_without_logo_has_no_media() {
    let project = create_project(false);
    let report = pptx_command(&args(project.path())).unwrap();
    let summary = inspect(&fs::read(&report.output).unwrap()).unwrap();
    assert_eq!(summary.media, 0);
}

#[test]
fn test_pdf_output_override() {
    let project = create_project(true);
    let output = project.path().join("out/kit.pdf");
    let report = pdf_command(&GenerateArgs {
        output: Some(output.clone()),
        ..args(project.path())
    })
    .unwrap();

    assert_eq!(report.output, output);
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
    assert!(
        bytes.windows(b"/FontFile".len()).any(|w| w == b"/FontFile"),
        "default config must still embed a font"
    );
    assert!(report.pages > 1);
    assert!(report.size_label().ends_with(" KB"));
}

#[test]
fn test_config_file_overrides_identity_and_paths() {
    let project = create_project(false);
    fs::write(
        project.path().join("brandkit.toml"),
        r#"
[identity]
company = "Acme Lending"
domain = "acme.example"

[paths]
pptx_output = "Acme.pptx"
"#,
    )
    .unwrap();

    let report = pptx_command(&args(project.path())).unwrap();
    assert!(report.output.ends_with("assets/brandkit/Acme.pptx"));

    let bytes = fs::read(&report.output).unwrap();
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("<dc:creator>Acme Lending</dc:creator>"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let project = create_project(false);
    let err = pptx_command(&GenerateArgs {
        config: Some(PathBuf::from("/nonexistent/brandkit.toml")),
        ..args(project.path())
    })
    .unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to load config"));
}

#[test]
fn test_missing_tokens_fails() {
    let project = TempDir::new().unwrap();
    let err = pdf_command(&args(project.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to build brand kit layout"));
}
