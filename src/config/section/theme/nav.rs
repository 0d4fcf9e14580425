//! `themeConfig.nav`: top navigation bar entries.
//!
//! A nav item is either a direct link or a dropdown of links:
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "首页"
//! link = "/"
//!
//! [[themeConfig.nav]]
//! text = "分类"
//! ariaLabel = "分类"
//! items = [
//!     { text = "前端", link = "/pages/folder1/" },
//!     { text = "Github", link = "https://github.com/sherryQwl" },
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, ThemeConfig};

// ============================================================================
// NavLink / NavItem
// ============================================================================

/// A direct navigation link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

/// A top-level navigation bar entry.
///
/// Untagged: presence of `items` selects the dropdown form, presence of
/// `link` the direct form. Exactly one of the two shapes matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Dropdown menu of links.
    Dropdown {
        text: String,
        #[serde(rename = "ariaLabel", default, skip_serializing_if = "Option::is_none")]
        aria_label: Option<String>,
        items: Vec<NavLink>,
    },

    /// Direct link.
    Link(NavLink),
}

impl NavItem {
    /// Display text of this entry.
    pub fn text(&self) -> &str {
        match self {
            Self::Dropdown { text, .. } => text,
            Self::Link(link) => &link.text,
        }
    }

    /// All direct links reachable from this entry (one for the link form,
    /// every dropdown item otherwise).
    pub fn links(&self) -> &[NavLink] {
        match self {
            Self::Dropdown { items, .. } => items,
            Self::Link(link) => std::slice::from_ref(link),
        }
    }

    pub const fn is_dropdown(&self) -> bool {
        matches!(self, Self::Dropdown { .. })
    }

    /// Validate this entry, reporting under `themeConfig.nav` with its index.
    pub fn validate(&self, index: usize, diag: &mut ConfigDiagnostics) {
        let field = ThemeConfig::FIELDS.nav;

        if self.text().is_empty() {
            diag.error(field, format!("item {index}: empty text"));
        }

        if let Self::Dropdown { text, items, .. } = self
            && items.is_empty()
        {
            diag.error_with_hint(
                field,
                format!("item {index} ('{text}'): dropdown has no items"),
                "add at least one { text, link } entry to items",
            );
        }

        for link in self.links() {
            if let Err(reason) = LinkTarget::classify(&link.link) {
                diag.error_with_hint(
                    field,
                    format!("item {index} ('{}'): {reason}", self.text()),
                    "use a root-relative path (/...), a markdown file, or an http(s) URL",
                );
            }
        }
    }
}

// ============================================================================
// Link classification
// ============================================================================

/// Classified destination of a `link` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// Fully qualified external URL (http/https).
    External(url::Url),
    /// Root-relative path beginning with `/`.
    RootRelative(String),
    /// Relative path to a markdown file.
    Markdown(String),
}

impl LinkTarget {
    /// Classify a link value, rejecting anything outside the three
    /// permitted forms.
    pub fn classify(link: &str) -> Result<Self, String> {
        if link.is_empty() {
            return Err("empty link".into());
        }

        match url::Url::parse(link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(format!(
                        "link '{link}': scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ));
                }
                if parsed.host_str().is_none() {
                    return Err(format!("link '{link}': URL must have a valid host"));
                }
                Ok(Self::External(parsed))
            }
            // Not an absolute URL - must be a site-local path
            Err(_) => {
                if link.starts_with('/') {
                    Ok(Self::RootRelative(link.to_string()))
                } else if link.ends_with(".md") {
                    Ok(Self::Markdown(link.to_string()))
                } else {
                    Err(format!(
                        "link '{link}' is neither root-relative, a markdown file, nor an http(s) URL"
                    ))
                }
            }
        }
    }

    pub const fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}
