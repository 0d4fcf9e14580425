//! Init command implementation.

use std::fs;
use std::path::Path;

use anyhow::{Result, bail};

use crate::log;

/// Starter configuration written by `siteconf init`.
const STARTER: &str = r#"title = "My Docs"
description = "A personal collection of markdown notes"
head = [["link", { rel = "icon", href = "/favicon.png" }]]

[themeConfig]
logo = "/favicon.png"

[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.sidebar."/guide/"]]
title = "Guide"
collapsable = false
children = [["getting-started.md", "Getting Started"]]
"#;

/// Create a starter config file, optionally inside a new directory.
pub fn new_config(name: Option<&Path>, config_file: &Path) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let dir = match name {
        Some(name) => cwd.join(name),
        None => cwd,
    };
    let path = dir.join(config_file);

    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    fs::create_dir_all(&dir)?;
    fs::write(&path, STARTER)?;

    log!("init"; "created {}", path.display());
    log!("init"; "run 'siteconf check' to validate it");
    Ok(())
}
