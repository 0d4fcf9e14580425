//! Check command implementation.
//!
//! Validation itself happens during `SiteConfig::load`; reaching this point
//! means the configuration is well-formed, so all that is left is the
//! summary.

use anyhow::Result;

use crate::cli::args::CheckArgs;
use crate::config::SiteConfig;
use crate::{debug, log};

/// Execute check command
pub fn run_check(_args: &CheckArgs, config: &SiteConfig) -> Result<()> {
    log!("check"; "{}", config.config_path.display());

    let nav_links: usize = config.theme.nav.iter().map(|item| item.links().len()).sum();
    log!(
        "check";
        "{}, {} ({} link{}), {} with {}",
        plural_count(config.head.len(), "head tag"),
        plural_count(config.theme.nav.len(), "nav item"),
        nav_links,
        if nav_links == 1 { "" } else { "s" },
        plural_count(config.theme.sidebar.len(), "sidebar prefix"),
        plural_count(config.theme.sidebar.group_count(), "group"),
    );

    for (prefix, groups) in config.theme.sidebar.iter() {
        for group in groups {
            debug!("check"; "{prefix} '{}': {}", group.title, plural_count(group.children.len(), "child"));
        }
    }

    log!("check"; "configuration ok");
    Ok(())
}

/// Format a count with its pluralized noun.
fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "nav item"), "0 nav items");
        assert_eq!(plural_count(1, "nav item"), "1 nav item");
        assert_eq!(plural_count(2, "group"), "2 groups");
    }
}
