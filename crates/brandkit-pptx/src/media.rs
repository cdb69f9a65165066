//! Media parts
//!
//! Every distinct image is stored once under `ppt/media/`, however many
//! slides show it.

use std::collections::BTreeSet;
use std::sync::Arc;

use brandkit_ast::{DocumentLayout, ImageFormat};

/// An embedded image part
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Asset key, e.g. `logo`
    pub name: String,
    /// File name inside `ppt/media/`, e.g. `image1.png`
    pub embedded_name: String,
    pub format: ImageFormat,
    pub data: Arc<[u8]>,
}

impl MediaItem {
    /// Package part path
    pub fn part_name(&self) -> String {
        format!("ppt/media/{}", self.embedded_name)
    }
}

/// Deduplicated images of one deck
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MediaRegistry {
    items: Vec<MediaItem>,
}

impl MediaRegistry {
    /// Collect the images of a layout, numbered in order of first use
    pub fn from_layout(layout: &DocumentLayout) -> Self {
        let items = layout
            .images()
            .into_iter()
            .enumerate()
            .map(|(i, source)| MediaItem {
                name: source.name.clone(),
                embedded_name: format!("image{}.{}", i + 1, source.format.extension()),
                format: source.format,
                data: Arc::clone(&source.bytes),
            })
            .collect();
        Self { items }
    }

    pub fn get(&self, name: &str) -> Option<&MediaItem> {
        self.items.iter().find(|m| m.name == name)
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct image formats, for `[Content_Types].xml` defaults
    pub fn formats(&self) -> BTreeSet<(&'static str, &'static str)> {
        self.items
            .iter()
            .map(|m| (m.format.extension(), m.format.content_type()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_ast::{DocumentMeta, ImageElement, ImageSource, PageKind, PageLayout, Rect};

    fn source(name: &str, format: ImageFormat) -> ImageSource {
        ImageSource {
            name: name.to_string(),
            format,
            bytes: Arc::from(vec![0u8; 4]),
            width_px: 2,
            height_px: 1,
        }
    }

    fn page(sources: &[ImageSource]) -> PageLayout {
        let mut page = PageLayout::new(PageKind::Content);
        for s in sources {
            page.push(ImageElement {
                bounds: Rect::new(0, 0, 20, 10),
                source: s.clone(),
            });
        }
        page
    }

    #[test]
    fn test_images_are_deduplicated() {
        let logo = source("logo", ImageFormat::Png);
        let photo = source("photo", ImageFormat::Jpeg);
        let layout = DocumentLayout {
            meta: DocumentMeta::default(),
            width: 960,
            height: 540,
            pages: vec![page(&[logo.clone()]), page(&[logo, photo])],
        };
        let media = MediaRegistry::from_layout(&layout);

        assert_eq!(media.items().len(), 2);
        assert_eq!(media.get("logo").unwrap().embedded_name, "image1.png");
        assert_eq!(media.get("photo").unwrap().part_name(), "ppt/media/image2.jpeg");
        assert_eq!(media.formats().len(), 2);
    }

    #[test]
    fn test_empty_registry() {
        let layout = DocumentLayout {
            meta: DocumentMeta::default(),
            width: 960,
            height: 540,
            pages: vec![page(&[])],
        };
        let media = MediaRegistry::from_layout(&layout);
        assert!(media.is_empty());
        assert!(media.get("logo").is_none());
    }
}
