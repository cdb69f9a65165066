//! Bitmap assets
//!
//! Images are read once, sniffed for their format and intrinsic size, and
//! kept in an [`AssetSet`] keyed by name. Layout code asks the set for an
//! asset and simply leaves the element out when it is not there.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use brandkit_ast::{ImageFormat, ImageSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::AssetError;

/// Asset key of the brand logo
pub const LOGO: &str = "logo";

/// What to do when an asset file does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetPolicy {
    /// Skip the asset and every element that shows it
    #[default]
    Optional,
    /// Fail the build
    Required,
}

/// Loaded images by name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSet {
    images: BTreeMap<String, ImageSource>,
}

impl AssetSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, source: ImageSource) {
        self.images.insert(source.name.clone(), source);
    }

    pub fn get(&self, name: &str) -> Option<&ImageSource> {
        self.images.get(name)
    }

    /// The brand logo, if it was loaded
    pub fn logo(&self) -> Option<&ImageSource> {
        self.get(LOGO)
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Load `path` under `name`, applying `policy` when the file is absent
    ///
    /// Returns whether the asset was loaded.
    pub fn load(
        &mut self,
        name: &str,
        path: impl AsRef<Path>,
        policy: AssetPolicy,
    ) -> Result<bool, AssetError> {
        let path = path.as_ref();
        if !path.exists() {
            return match policy {
                AssetPolicy::Optional => {
                    warn!(asset = name, path = %path.display(), "Optional asset not found, skipping");
                    Ok(false)
                }
                AssetPolicy::Required => Err(AssetError::missing(name, path)),
            };
        }
        let bytes = std::fs::read(path)?;
        let source = decode_image(name, bytes)?;
        debug!(
            asset = name,
            width = source.width_px,
            height = source.height_px,
            "Loaded image asset"
        );
        self.insert(source);
        Ok(true)
    }
}

/// Sniff format and size of encoded image bytes
pub fn decode_image(name: &str, bytes: Vec<u8>) -> Result<ImageSource, AssetError> {
    let format = match image::guess_format(&bytes) {
        Ok(image::ImageFormat::Png) => ImageFormat::Png,
        Ok(image::ImageFormat::Jpeg) => ImageFormat::Jpeg,
        Ok(image::ImageFormat::Gif) => ImageFormat::Gif,
        Ok(other) => {
            return Err(AssetError::decode(
                name,
                format!("unsupported format {other:?}"),
            ))
        }
        Err(e) => return Err(AssetError::decode(name, e.to_string())),
    };
    let decoded =
        image::load_from_memory(&bytes).map_err(|e| AssetError::decode(name, e.to_string()))?;

    Ok(ImageSource {
        name: name.to_string(),
        format,
        width_px: decoded.width(),
        height_px: decoded.height(),
        bytes: Arc::from(bytes),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Cursor;

    /// Encode a small solid PNG
    pub(crate) fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([0x1a, 0x6e, 0xf5]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        out.into_inner()
    }

    pub(crate) fn logo_source() -> ImageSource {
        decode_image(LOGO, png_bytes(40, 20)).unwrap()
    }

    #[test]
    fn test_decode_png() {
        let source = decode_image("logo", png_bytes(8, 4)).unwrap();
        assert_eq!(source.format, ImageFormat::Png);
        assert_eq!((source.width_px, source.height_px), (8, 4));
        assert_eq!(source.file_name(), "logo.png");
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_image("logo", b"not an image".to_vec()).unwrap_err();
        assert_eq!(err.code(), "ASSET002");
    }

    #[test]
    fn test_optional_missing_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetSet::new();
        let loaded = assets
            .load(LOGO, dir.path().join("logo.png"), AssetPolicy::Optional)
            .unwrap();
        assert!(!loaded);
        assert!(assets.logo().is_none());
        assert!(assets.is_empty());
    }

    #[test]
    fn test_required_missing_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut assets = AssetSet::new();
        let err = assets
            .load(LOGO, dir.path().join("logo.png"), AssetPolicy::Required)
            .unwrap_err();
        assert_eq!(err.code(), "ASSET001");
    }

    #[test]
    fn test_load_present_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, png_bytes(30, 10)).unwrap();

        let mut assets = AssetSet::new();
        assert!(assets.load(LOGO, &path, AssetPolicy::Required).unwrap());
        let logo = assets.logo().unwrap();
        assert_eq!(logo.width_px, 30);
        assert_eq!(logo.height_for_width(90), 30);
    }
}
