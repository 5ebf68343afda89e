//! List site content

use anyhow::Result;

use crate::content::Post;
use crate::helpers::{format_date, full_date};
use crate::Site;

/// List posts, newest first
pub fn run(site: &Site) -> Result<()> {
    let posts = super::visible_posts(site, super::load_posts(site)?);

    for line in format_lines(site, &posts) {
        println!("{}", line);
    }

    Ok(())
}

/// One header line, then one line per post
///
/// An empty `date_format` falls back to the long form ("January 5, 2024").
pub fn format_lines(site: &Site, posts: &[Post]) -> Vec<String> {
    let mut lines = Vec::with_capacity(posts.len() + 1);
    lines.push(format!("Posts ({}):", posts.len()));

    for post in posts {
        let date = if site.config.date_format.is_empty() {
            full_date(&post.date)
        } else {
            format_date(&post.date, &site.config.date_format)
        };
        let draft = if post.published { "" } else { " (draft)" };
        lines.push(format!("  {} - {}{} [{}]", date, post.title, draft, post.slug));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use std::fs;
    use tempfile::TempDir;

    fn site_with(dir: &TempDir, date_format: &str, render_drafts: bool) -> Site {
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(
            content.join("live-post.mdx"),
            "---\ntitle: Live\ndate: 2024-01-05\nauthor: Jane\n---\nHello\n",
        )
        .unwrap();
        fs::write(
            content.join("draft-post.mdx"),
            "---\ntitle: Draft\ndate: 2024-02-10\nauthor: Jane\npublished: false\n---\nWIP\n",
        )
        .unwrap();

        let config = SiteConfig {
            date_format: date_format.to_string(),
            render_drafts,
            ..Default::default()
        };
        Site::with_config(dir.path().to_path_buf(), config)
    }

    fn lines(site: &Site) -> Vec<String> {
        let posts = super::super::visible_posts(site, site.load_posts().unwrap());
        format_lines(site, &posts)
    }

    #[test]
    fn test_list_marks_drafts() {
        let dir = TempDir::new().unwrap();
        let site = site_with(&dir, "YYYY-MM-DD", true);

        assert_eq!(
            lines(&site),
            vec![
                "Posts (2):",
                "  2024-02-10 - Draft (draft) [draft-post]",
                "  2024-01-05 - Live [live-post]",
            ]
        );
    }

    #[test]
    fn test_list_hides_drafts_by_default() {
        let dir = TempDir::new().unwrap();
        let site = site_with(&dir, "YYYY-MM-DD", false);

        assert_eq!(
            lines(&site),
            vec!["Posts (1):", "  2024-01-05 - Live [live-post]"]
        );
    }

    #[test]
    fn test_list_honours_date_format() {
        let dir = TempDir::new().unwrap();

        let site = site_with(&dir, "DD/MM/YYYY", false);
        assert_eq!(lines(&site)[1], "  05/01/2024 - Live [live-post]");

        let site = site_with(&dir, "", false);
        assert_eq!(lines(&site)[1], "  January 5, 2024 - Live [live-post]");
    }
}
