//! Validate content without writing anything

use anyhow::Result;

use crate::Site;

/// Validate every post, returning how many were loaded
pub fn run(site: &Site) -> Result<usize> {
    let posts = super::load_posts(site)?;
    let drafts = posts.iter().filter(|p| !p.published).count();

    tracing::info!(
        "{} posts valid ({} published, {} drafts)",
        posts.len(),
        posts.len() - drafts,
        drafts
    );

    Ok(posts.len())
}
