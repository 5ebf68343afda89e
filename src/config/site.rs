//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Configuration file name, relative to the site root
pub const CONFIG_FILE: &str = "_config.yml";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    /// Default author for new post scaffolds
    pub author: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    /// Name of the post collection written by `build`
    pub output_file: String,

    // Content
    /// File extensions treated as posts, without the leading dot
    pub extensions: Vec<String>,
    /// Include `published: false` posts in build output and listings
    pub render_drafts: bool,

    // Date format (Moment.js tokens)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            author: String::new(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            output_file: "posts.json".to_string(),

            extensions: vec!["mdx".to_string(), "md".to_string()],
            render_drafts: false,

            date_format: "YYYY-MM-DD".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}
