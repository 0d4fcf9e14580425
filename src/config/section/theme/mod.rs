//! `themeConfig` section: logo, navigation bar, and sidebar.

mod nav;
mod sidebar;

pub use nav::{LinkTarget, NavItem, NavLink};
pub use sidebar::{Sidebar, SidebarChild, SidebarGroup};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme settings consumed by the site generator's default theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Path to the navbar icon asset (root-relative).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Top navigation bar entries, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar groups keyed by URL path prefix.
    pub sidebar: Sidebar,
}

/// Field path table for diagnostics.
pub struct ThemeFields {
    pub logo: FieldPath,
    pub nav: FieldPath,
    pub sidebar: FieldPath,
}

impl ThemeConfig {
    pub const FIELDS: ThemeFields = ThemeFields {
        logo: FieldPath::new("themeConfig.logo"),
        nav: FieldPath::new("themeConfig.nav"),
        sidebar: FieldPath::new("themeConfig.sidebar"),
    };

    /// Validate the theme section.
    ///
    /// `root` is the markdown source tree for on-disk sidebar checks; pass
    /// `None` when validating a config that has no backing directory.
    pub fn validate(&self, root: Option<&Path>, diag: &mut ConfigDiagnostics) {
        if let Some(logo) = &self.logo
            && !logo.starts_with('/')
        {
            diag.error_with_hint(
                Self::FIELDS.logo,
                format!("'{logo}' is not a root-relative path"),
                "asset paths start with /, e.g. \"/home.png\"",
            );
        }

        for (index, item) in self.nav.iter().enumerate() {
            item.validate(index, diag);
        }

        self.sidebar.validate(root, diag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.theme.logo.is_none());
        assert!(config.theme.nav.is_empty());
        assert!(config.theme.sidebar.is_empty());
    }

    #[test]
    fn test_logo_must_be_root_relative() {
        let config = test_parse_config("[themeConfig]\nlogo = \"home.png\"");
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(None, &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("home.png"));
    }

    #[test]
    fn test_valid_theme_passes() {
        let config = test_parse_config(
            r#"[themeConfig]
logo = "/home.png"

[[themeConfig.nav]]
text = "首页"
link = "/"

[[themeConfig.sidebar."/pages/folder1/"]]
title = "面试汇总"
children = [["interview.md", "宝典"]]
"#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.theme.validate(None, &mut diag);
        assert!(diag.is_empty(), "unexpected errors: {:?}", diag.errors());
    }
}
