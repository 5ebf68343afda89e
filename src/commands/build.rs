//! Write the validated post collection for the page renderer

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Validate all content and write it as JSON
///
/// Nothing is written unless every post is valid.
pub fn run(site: &Site) -> Result<PathBuf> {
    let start = std::time::Instant::now();

    let posts = super::load_posts(site)?;
    let total = posts.len();
    let posts = super::visible_posts(site, posts);

    if posts.len() < total {
        tracing::info!("Skipping {} unpublished posts", total - posts.len());
    }

    let output = site.output_path();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {:?}", parent))?;
    }

    let json = serde_json::to_string_pretty(&posts)?;
    fs::write(&output, json).with_context(|| format!("Failed to write {:?}", output))?;

    let duration = start.elapsed();
    tracing::info!(
        "Wrote {} posts to {:?} in {:.2}s",
        posts.len(),
        output,
        duration.as_secs_f64()
    );

    Ok(output)
}
