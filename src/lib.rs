//! mdx-posts: build-time content pipeline for an MDX blog
//!
//! Scans a directory of MDX documents, validates each one's front-matter
//! against a fixed schema, derives slugs from filenames and produces a
//! date-sorted collection of posts for the page renderer. A single invalid
//! document fails the whole load.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::{ContentLoader, LoadError, Post};

/// A blog site rooted at a directory
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (MDX) directory
    pub content_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Site {
    /// Create a new site from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(config::CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site with an explicit configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// Load and validate every post, newest first
    pub fn load_posts(&self) -> Result<Vec<Post>, LoadError> {
        ContentLoader::from_site(self).load_all()
    }

    /// Validate content and write the post collection
    pub fn build(&self) -> Result<PathBuf> {
        commands::build::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }

    /// Create a new post
    pub fn new_post(&self, title: &str) -> Result<PathBuf> {
        commands::new::create_post(self, title)
    }

    /// Path of the post collection written by `build`
    pub fn output_path(&self) -> PathBuf {
        self.public_dir.join(&self.config.output_file)
    }
}
