//! CLI commands

pub mod build;
pub mod check;
pub mod clean;
pub mod list;
pub mod new;

use anyhow::Result;

use crate::content::{published_only, Post};
use crate::Site;

/// Load posts, logging every validation error before failing
fn load_posts(site: &Site) -> Result<Vec<Post>> {
    match site.load_posts() {
        Ok(posts) => Ok(posts),
        Err(err) => {
            for e in err.errors() {
                tracing::error!("{}", e);
            }
            Err(err.into())
        }
    }
}

/// Posts that should be visible, honoring `render_drafts`
fn visible_posts(site: &Site, posts: Vec<Post>) -> Vec<Post> {
    if site.config.render_drafts {
        posts
    } else {
        published_only(posts)
    }
}
