//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # head tag descriptors
//! │   └── theme/     # themeConfig (logo, nav, sidebar)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The configuration is read once at startup, validated as a whole, and
//! never mutated afterwards. Serialized field names (`themeConfig`,
//! `ariaLabel`, `sidebarDepth`, `collapsable`) follow the shape the external
//! site generator consumes.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{
    HeadTag, LinkTarget, NavItem, NavLink, Sidebar, SidebarChild, SidebarGroup, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::cli::Cli;
use crate::{debug, log};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Markdown source root - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site display name, shown in the navbar and browser tab.
    pub title: String,

    /// SEO description injected as page metadata.
    pub description: String,

    /// HTML tags injected into every page's `<head>`, in order.
    pub head: Vec<HeadTag>,

    /// Theme settings (logo, nav, sidebar)
    #[serde(rename = "themeConfig")]
    pub theme: ThemeConfig,
}

/// Field path table for diagnostics.
pub struct SiteFields {
    pub title: FieldPath,
    pub description: FieldPath,
    pub head: FieldPath,
    pub theme: FieldPath,
}

impl SiteConfig {
    pub const FIELDS: SiteFields = SiteFields {
        title: FieldPath::new("title"),
        description: FieldPath::new("description"),
        head: FieldPath::new("head"),
        theme: FieldPath::new("themeConfig"),
    };

    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file; its parent
    /// directory becomes the markdown source root. Fails fast with grouped
    /// diagnostics if the configuration does not validate.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found. Run 'siteconf init' to create one.",
                cli.config.display()
            )));
        };

        let mut config = Self::from_path(&config_path, cli.is_strict())?;
        config.root = config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        config.config_path = config_path;

        debug!("config"; "loaded {}", config.config_path.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            if strict {
                bail!(ConfigError::Validation(format!(
                    "unknown config fields: {}",
                    ignored.join(", ")
                )));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since it's always at the source root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Get the markdown source root
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole configuration.
    ///
    /// Collects all validation errors and returns them at once. On-disk
    /// sidebar checks run only when a source root is set (i.e. the config
    /// came from a file, not `from_str`).
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        if self.title.is_empty() {
            diag.warn(Self::FIELDS.title, "empty; the site will have no display name");
        }
        if self.description.is_empty() {
            diag.warn(
                Self::FIELDS.description,
                "empty; search engines will see no summary",
            );
        }

        for (index, tag) in self.head.iter().enumerate() {
            tag.validate(index, &mut diag);
        }

        let root = (!self.root.as_os_str().is_empty()).then_some(self.root.as_path());
        self.theme.validate(root, &mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse config with a minimal valid preamble.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"title = "首页"
description = "sherry的前端记录"
head = [["link", { rel = "icon", href = "/home.png" }]]

[themeConfig]
logo = "/home.png"

[[themeConfig.nav]]
text = "首页"
link = "/"

[[themeConfig.nav]]
text = "Github"
link = "https://github.com/sherryQwl"

[[themeConfig.sidebar."/pages/folder1/"]]
title = "面试汇总"
collapsable = false
sidebarDepth = 2
children = [["interview.md", "宝典"]]
"#;

    #[test]
    fn test_from_str_invalid_toml() {
        // Invalid TOML syntax - unclosed bracket
        let result: Result<SiteConfig, _> = toml::from_str("[themeConfig\ntitle = \"首页\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert!(config.title.is_empty());
        assert!(config.head.is_empty());
        assert!(config.theme.nav.is_empty());
    }

    #[test]
    fn test_full_config_parses_and_validates() {
        let config = SiteConfig::from_str(FULL).unwrap();
        assert_eq!(config.title, "首页");
        assert_eq!(config.description, "sherry的前端记录");
        assert_eq!(config.head[0].attr("href"), Some("/home.png"));
        assert_eq!(config.theme.logo.as_deref(), Some("/home.png"));
        assert_eq!(config.theme.nav.len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_title_survives_serialization() {
        // Page title metadata comes verbatim from `title`
        let config = SiteConfig::from_str("title = \"首页\"").unwrap();
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["title"], "首页");
    }

    #[test]
    fn test_json_round_trip_is_lossless() {
        let config = SiteConfig::from_str(FULL).unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);

        // Sidebar order and nav order survive the cycle
        let prefixes: Vec<_> = back.theme.sidebar.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, ["/pages/folder1/"]);
        assert_eq!(back.theme.nav[1].text(), "Github");
    }

    #[test]
    fn test_toml_round_trip_is_lossless() {
        let config = SiteConfig::from_str(FULL).unwrap();
        let rendered = toml::to_string(&config).unwrap();
        let back = SiteConfig::from_str(&rendered).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        // Config should parse successfully
        assert_eq!(config.title, "Test");

        // Unknown fields should be collected
        assert!(!ignored.is_empty());
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored(FULL).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_strict_rejects_unknown_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        std::fs::write(&path, "title = \"t\"\ntypo_field = 1").unwrap();

        let result = SiteConfig::from_path(&path, true);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("typo_field"));

        // Non-strict parses the same file fine
        let config = SiteConfig::from_path(&path, false).unwrap();
        assert_eq!(config.title, "t");
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let config = SiteConfig::from_str(
            r#"title = "t"
head = [["not a tag", {}]]

[themeConfig]
logo = "home.png"

[[themeConfig.nav]]
text = "分类"
items = []
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        let diag = match err.downcast::<ConfigError>().unwrap() {
            ConfigError::Diagnostics(diag) => diag,
            other => panic!("expected diagnostics, got {other}"),
        };
        assert_eq!(diag.len(), 3);
    }
}
