//! `head` entries: HTML tags injected into every generated page.
//!
//! # Example
//!
//! ```toml
//! head = [
//!     ["link", { rel = "icon", href = "/home.png" }],
//!     ["meta", { name = "theme-color", content = "#3eaf7c" }],
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, SiteConfig};

/// A single head tag descriptor: tag name plus its attributes.
///
/// Serialized as a 2-element sequence (`["link", { rel = "icon" }]`) to
/// match the shape the site generator consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadTag(String, BTreeMap<String, String>);

impl HeadTag {
    pub fn new(tag: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self(tag.into(), attributes)
    }

    /// Tag name (e.g., "link", "meta", "script").
    pub fn tag(&self) -> &str {
        &self.0
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.1
    }

    /// Look up a single attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.1.get(name).map(String::as_str)
    }

    /// Validate the tag descriptor, reporting under `head` with its index.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        if self.0.is_empty() {
            diag.error(
                SiteConfig::FIELDS.head,
                format!("entry {index}: empty tag name"),
            );
        } else if !self.0.chars().all(|c| c.is_ascii_alphabetic()) {
            diag.error_with_hint(
                SiteConfig::FIELDS.head,
                format!("entry {index}: invalid tag name '{}'", self.0),
                "tag names are plain ASCII, e.g. \"link\" or \"meta\"",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_head_defaults_empty() {
        let config = test_parse_config("");
        assert!(config.head.is_empty());
    }

    #[test]
    fn test_head_icon_entry() {
        let config =
            test_parse_config(r#"head = [["link", { rel = "icon", href = "/home.png" }]]"#);
        assert_eq!(config.head.len(), 1);
        assert_eq!(config.head[0].tag(), "link");
        assert_eq!(config.head[0].attr("rel"), Some("icon"));
        assert_eq!(config.head[0].attr("href"), Some("/home.png"));
        assert_eq!(config.head[0].attr("missing"), None);
    }

    #[test]
    fn test_head_preserves_entry_order() {
        let config = test_parse_config(
            r#"head = [
    ["meta", { name = "b" }],
    ["meta", { name = "a" }],
    ["link", { rel = "icon", href = "/x.png" }],
]"#,
        );
        let names: Vec<_> = config.head.iter().map(HeadTag::tag).collect();
        assert_eq!(names, ["meta", "meta", "link"]);
        assert_eq!(config.head[0].attr("name"), Some("b"));
        assert_eq!(config.head[1].attr("name"), Some("a"));
    }

    #[test]
    fn test_invalid_tag_name() {
        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("not a tag", BTreeMap::new()).validate(0, &mut diag);
        assert_eq!(diag.len(), 1);

        let mut diag = ConfigDiagnostics::new();
        HeadTag::new("", BTreeMap::new()).validate(3, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("entry 3"));
    }

    #[test]
    fn test_valid_tag_names() {
        let mut diag = ConfigDiagnostics::new();
        for tag in ["link", "meta", "script", "style"] {
            HeadTag::new(tag, BTreeMap::new()).validate(0, &mut diag);
        }
        assert!(diag.is_empty());
    }
}
