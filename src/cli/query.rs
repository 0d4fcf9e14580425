//! Query command implementation.
//!
//! Serializes the resolved configuration back out as JSON, the shape the
//! site generator consumes. Field order and sidebar order are preserved.

use std::fs;

use anyhow::{Result, bail};
use serde_json::Value as JsonValue;

use crate::cli::args::QueryArgs;
use crate::config::SiteConfig;
use crate::log;

/// Execute query command
pub fn run_query(args: &QueryArgs, config: &SiteConfig) -> Result<()> {
    let mut value = serde_json::to_value(config)?;

    if let Some(fields) = &args.fields {
        filter_fields(&mut value, fields)?;
    }

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)?;
            log!("query"; "wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

/// Keep only the requested top-level fields, erroring on unknown names.
fn filter_fields(value: &mut JsonValue, fields: &[String]) -> Result<()> {
    let JsonValue::Object(map) = value else {
        bail!("config did not serialize to an object");
    };

    for field in fields {
        if !map.contains_key(field) {
            let known: Vec<_> = map.keys().map(String::as_str).collect();
            bail!("unknown field '{field}' (known: {})", known.join(", "));
        }
    }

    map.retain(|key, _| fields.iter().any(|f| f == key));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> JsonValue {
        let config = SiteConfig::from_str(
            r#"title = "首页"
description = "sherry的前端记录"

[themeConfig]
logo = "/home.png"
"#,
        )
        .unwrap();
        serde_json::to_value(&config).unwrap()
    }

    #[test]
    fn test_query_shape_matches_generator() {
        let value = sample();
        assert_eq!(value["title"], "首页");
        assert_eq!(value["themeConfig"]["logo"], "/home.png");
        // Internal bookkeeping never leaks into the consumed shape
        assert!(value.get("config_path").is_none());
        assert!(value.get("root").is_none());
    }

    #[test]
    fn test_filter_fields() {
        let mut value = sample();
        filter_fields(&mut value, &["title".into(), "themeConfig".into()]).unwrap();

        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("title"));
        assert!(map.contains_key("themeConfig"));
    }

    #[test]
    fn test_filter_unknown_field() {
        let mut value = sample();
        let err = filter_fields(&mut value, &["navbar".into()]).unwrap_err();
        assert!(err.to_string().contains("unknown field 'navbar'"));
    }
}
