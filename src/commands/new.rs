//! Create a new post

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Site;

const SCAFFOLD: &str = r#"---
title: "{{ title }}"
description: ""
date: {{ date }}
author: "{{ author }}"
published: false
---

"#;

/// Create a new draft post named after its title
pub fn create_post(site: &Site, title: &str) -> Result<PathBuf> {
    let slug = slug::slugify(title);
    if slug.is_empty() {
        anyhow::bail!("Cannot derive a filename from title {:?}", title);
    }

    let extension = site
        .config
        .extensions
        .first()
        .map(|e| e.trim_start_matches('.'))
        .unwrap_or("mdx");

    fs::create_dir_all(&site.content_dir)
        .with_context(|| format!("Failed to create {:?}", site.content_dir))?;

    let file_path = site.content_dir.join(format!("{}.{}", slug, extension));

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    if site.config.author.is_empty() {
        tracing::warn!("No `author` configured; fill it in before building");
    }

    let today = chrono::Local::now().date_naive();
    let content = SCAFFOLD
        .replace("{{ title }}", &escape_yaml(title))
        .replace("{{ date }}", &today.format("%Y-%m-%d").to_string())
        .replace("{{ author }}", &escape_yaml(&site.config.author));

    fs::write(&file_path, content)
        .with_context(|| format!("Failed to write {:?}", file_path))?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Escape text for a double-quoted YAML scalar
fn escape_yaml(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
