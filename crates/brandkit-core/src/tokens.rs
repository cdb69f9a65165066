//! Brand token file loading
//!
//! The token file is a JSON object of color values. Two shapes are
//! accepted:
//!
//! ```json
//! { "brand-600": "#1a6ef5", "logo-gold": "#C5961E" }
//! { "colors": { "brand": { "600": "#1a6ef5" }, "logo": { "gold": "#C5961E" } } }
//! ```
//!
//! Nested groups are flattened by joining keys with `-`, so both files
//! above yield the tokens `brand-600` and `logo-gold`.

use std::collections::BTreeMap;
use std::path::Path;

use brandkit_ast::Rgb;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TokenError;

/// Named colors read from the token file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrandTokens {
    colors: BTreeMap<String, Rgb>,
}

impl BrandTokens {
    /// Load tokens from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TokenError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TokenError::not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let value: Value = serde_json::from_str(&content)
            .map_err(|e| TokenError::malformed(path, e.to_string()))?;
        let tokens = Self::from_value(&value).map_err(|e| match e {
            TokenError::Malformed { reason, .. } => TokenError::malformed(path, reason),
            other => other,
        })?;
        debug!(path = %path.display(), count = tokens.len(), "Loaded brand tokens");
        Ok(tokens)
    }

    /// Parse tokens from a JSON string
    pub fn parse(json: &str) -> Result<Self, TokenError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| TokenError::malformed("<inline>", e.to_string()))?;
        Self::from_value(&value)
    }

    /// Build tokens from an already parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self, TokenError> {
        let root = value
            .as_object()
            .ok_or_else(|| TokenError::malformed("<inline>", "top level must be an object"))?;

        let colors = match root.get("colors") {
            Some(Value::Object(colors)) => colors,
            Some(_) => {
                return Err(TokenError::malformed(
                    "<inline>",
                    "\"colors\" must be an object",
                ))
            }
            None => root,
        };

        let mut tokens = Self::default();
        tokens.flatten_into("", colors)?;
        Ok(tokens)
    }

    fn flatten_into(&mut self, prefix: &str, map: &Map<String, Value>) -> Result<(), TokenError> {
        for (key, value) in map {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}-{key}")
            };
            match value {
                Value::String(hex) => {
                    let color = Rgb::parse_hex(hex)
                        .map_err(|_| TokenError::invalid_value(&name, hex.as_str()))?;
                    self.colors.insert(name, color);
                }
                Value::Object(group) => self.flatten_into(&name, group)?,
                other => {
                    return Err(TokenError::malformed(
                        "<inline>",
                        format!("token '{name}' must be a string or object, found {other}"),
                    ))
                }
            }
        }
        Ok(())
    }

    /// Look up a token by its flattened name
    pub fn get(&self, name: &str) -> Option<Rgb> {
        self.colors.get(name).copied()
    }

    pub fn insert(&mut self, name: impl Into<String>, color: Rgb) {
        self.colors.insert(name.into(), color);
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All tokens in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flat_map() {
        let tokens = BrandTokens::parse(r##"{"brand-600": "#1a6ef5", "logo-gold": "C5961E"}"##)
            .unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.get("brand-600"), Some(Rgb::from_u32(0x1a6ef5)));
        assert_eq!(tokens.get("logo-gold"), Some(Rgb::from_u32(0xc5961e)));
    }

    #[test]
    fn test_nested_colors_are_flattened() {
        let tokens = BrandTokens::parse(
            r##"{
                "colors": {
                    "brand": { "600": "#1a6ef5", "50": "#eef7ff" },
                    "logo": { "gold": "#C5961E" }
                },
                "typography": { "body": "Inter" }
            }"##,
        )
        .unwrap();
        assert_eq!(tokens.get("brand-600"), Some(Rgb::from_u32(0x1a6ef5)));
        assert_eq!(tokens.get("brand-50"), Some(Rgb::from_u32(0xeef7ff)));
        assert_eq!(tokens.get("logo-gold"), Some(Rgb::from_u32(0xc5961e)));
        assert!(tokens.get("typography-body").is_none());
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        let err = BrandTokens::parse(r##"{"brand-600": "#1a6ef"}"##).unwrap_err();
        assert_eq!(err.code(), "TOKEN003");
        assert!(err.to_string().contains("brand-600"));
    }

    #[test]
    fn test_malformed_shapes() {
        assert_eq!(BrandTokens::parse("[1, 2]").unwrap_err().code(), "TOKEN002");
        assert_eq!(BrandTokens::parse("{ not json").unwrap_err().code(), "TOKEN002");
        assert_eq!(
            BrandTokens::parse(r#"{"brand-600": 12}"#).unwrap_err().code(),
            "TOKEN002"
        );
        assert_eq!(
            BrandTokens::parse(r#"{"colors": "red"}"#).unwrap_err().code(),
            "TOKEN002"
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = BrandTokens::from_file(dir.path().join("brand-tokens.json")).unwrap_err();
        assert_eq!(err.code(), "TOKEN001");
    }

    #[test]
    fn test_from_file_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ broken").unwrap();
        let err = BrandTokens::from_file(file.path()).unwrap_err();
        assert_eq!(err.code(), "TOKEN002");
        assert!(err
            .to_string()
            .contains(&file.path().display().to_string()));
    }

    #[test]
    fn test_iter_is_sorted() {
        let tokens =
            BrandTokens::parse(r##"{"b": "#000000", "a": "#ffffff", "c": "#123456"}"##).unwrap();
        let names: Vec<&str> = tokens.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }
}
