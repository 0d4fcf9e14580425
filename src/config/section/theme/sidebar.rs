//! `themeConfig.sidebar`: collapsible link groups scoped to path prefixes.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.sidebar."/pages/folder1/"]]
//! title = "面试汇总"
//! collapsable = false
//! sidebarDepth = 2
//! children = [["interview.md", "宝典"]]
//! ```

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::Path;

use crate::config::{ConfigDiagnostics, ThemeConfig};

// ============================================================================
// Sidebar (ordered prefix map)
// ============================================================================

/// Ordered mapping from URL path prefix to its sidebar groups.
///
/// Serializes as a plain map (the shape the generator consumes) but keeps
/// the declaration order, which is the display order. Duplicate prefixes
/// are rejected at parse time.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sidebar {
    rules: Vec<(String, Vec<SidebarGroup>)>,
}

impl Sidebar {
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate prefixes and their groups in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.rules
            .iter()
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }

    /// Groups declared for an exact prefix.
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.rules
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Groups shown when visiting `page_path`.
    ///
    /// The longest declared prefix that `page_path` starts with wins, so a
    /// `/pages/folder1/` rule shadows a catch-all `/` rule for pages under
    /// that folder.
    pub fn groups_for(&self, page_path: &str) -> Option<&[SidebarGroup]> {
        self.rules
            .iter()
            .filter(|(prefix, _)| page_path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, groups)| groups.as_slice())
    }

    /// Total number of groups across all prefixes.
    pub fn group_count(&self) -> usize {
        self.rules.iter().map(|(_, groups)| groups.len()).sum()
    }

    /// Validate prefixes and their groups.
    ///
    /// When `root` is given, prefixes and children are also resolved against
    /// the markdown tree on disk; misses are warnings since the generator
    /// owns broken-link authority.
    pub fn validate(&self, root: Option<&Path>, diag: &mut ConfigDiagnostics) {
        let field = ThemeConfig::FIELDS.sidebar;

        for (prefix, groups) in &self.rules {
            if !prefix.starts_with('/') || !prefix.ends_with('/') {
                diag.error_with_hint(
                    field,
                    format!("prefix '{prefix}' must begin and end with /"),
                    "e.g. \"/pages/folder1/\"",
                );
                continue;
            }

            if groups.is_empty() {
                diag.warn(field, format!("prefix '{prefix}' has no groups"));
            }

            for group in groups {
                group.validate(prefix, diag);
            }

            if let Some(root) = root {
                Self::check_tree(root, prefix, groups, diag);
            }
        }
    }

    /// Resolve a prefix and its children against the markdown tree.
    fn check_tree(root: &Path, prefix: &str, groups: &[SidebarGroup], diag: &mut ConfigDiagnostics) {
        let field = ThemeConfig::FIELDS.sidebar;
        let dir = root.join(prefix.trim_start_matches('/'));

        if !dir.is_dir() {
            diag.warn(
                field,
                format!("prefix '{prefix}' does not match a directory in the source tree"),
            );
            return;
        }

        for group in groups {
            for child in &group.children {
                if !dir.join(child.path()).is_file() {
                    diag.warn(
                        field,
                        format!(
                            "'{}' (group '{}') not found under {prefix}",
                            child.path(),
                            group.title
                        ),
                    );
                }
            }
        }
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.rules.iter().map(|(prefix, groups)| (prefix, groups)))
    }
}

impl<'de> Deserialize<'de> for Sidebar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = Sidebar;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of path prefixes to sidebar groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Sidebar, A::Error> {
                let mut rules: Vec<(String, Vec<SidebarGroup>)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((prefix, groups)) = map.next_entry::<String, Vec<SidebarGroup>>()? {
                    if rules.iter().any(|(p, _)| *p == prefix) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate sidebar prefix `{prefix}`"
                        )));
                    }
                    rules.push((prefix, groups));
                }

                Ok(Sidebar { rules })
            }
        }

        deserializer.deserialize_map(SidebarVisitor)
    }
}

// ============================================================================
// SidebarGroup / SidebarChild
// ============================================================================

/// A collapsible section of links in the side navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarGroup {
    /// Section heading.
    pub title: String,

    /// Whether the section starts collapsed.
    #[serde(default = "default_collapsable")]
    pub collapsable: bool,

    /// Heading extraction depth for child pages.
    #[serde(rename = "sidebarDepth", default, skip_serializing_if = "Option::is_none")]
    pub sidebar_depth: Option<u8>,

    /// Ordered (relative file path, display label) pairs.
    #[serde(default)]
    pub children: Vec<SidebarChild>,
}

const fn default_collapsable() -> bool {
    true
}

impl SidebarGroup {
    /// Display label for a child path, if declared in this group.
    pub fn child_label(&self, path: &str) -> Option<&str> {
        self.children
            .iter()
            .find(|child| child.path() == path)
            .map(SidebarChild::label)
    }

    /// Validate the group, reporting under its owning prefix.
    pub fn validate(&self, prefix: &str, diag: &mut ConfigDiagnostics) {
        let field = ThemeConfig::FIELDS.sidebar;

        if self.title.is_empty() {
            diag.error(field, format!("group under '{prefix}' has an empty title"));
        }

        if self.children.is_empty() {
            diag.error_with_hint(
                field,
                format!("group '{}' under '{prefix}' has no children", self.title),
                "add at least one [path, label] pair",
            );
        }

        for child in &self.children {
            if child.path().starts_with('/') {
                diag.error_with_hint(
                    field,
                    format!(
                        "group '{}': child path '{}' must be relative to '{prefix}'",
                        self.title,
                        child.path()
                    ),
                    "drop the leading /",
                );
            }
        }
    }
}

/// A sidebar entry: relative file path plus its display label.
///
/// Serialized as a 2-element sequence (`["interview.md", "宝典"]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarChild(String, String);

impl SidebarChild {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self(path.into(), label.into())
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }
}
