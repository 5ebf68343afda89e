//! Post model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::schema::PostMeta;

/// A blog post, validated and ready for the page renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Short summary, may be empty
    pub description: String,

    /// Cover image path or URL
    pub image: Option<String>,

    /// Publication date
    pub date: NaiveDate,

    /// Post author
    pub author: String,

    /// Whether the post is published
    pub published: bool,

    /// Slug (URL-friendly name) derived from the filename
    pub slug: String,

    /// MDX source following the front-matter
    pub body: String,

    /// Source file path (relative to the content directory)
    #[serde(skip)]
    pub source: PathBuf,
}

impl Post {
    /// Assemble a post from its validated front-matter
    pub fn new(meta: PostMeta, slug: String, body: String, source: PathBuf) -> Self {
        Self {
            title: meta.title,
            description: meta.description,
            image: meta.image,
            date: meta.date,
            author: meta.author,
            published: meta.published,
            slug,
            body,
            source,
        }
    }

    /// Get the previous (newer) post in a date-sorted list
    pub fn prev<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        if pos > 0 {
            Some(&posts[pos - 1])
        } else {
            None
        }
    }

    /// Get the next (older) post in a date-sorted list
    pub fn next<'a>(&self, posts: &'a [Post]) -> Option<&'a Post> {
        let pos = posts.iter().position(|p| p.slug == self.slug)?;
        posts.get(pos + 1)
    }
}

/// Find a post by slug
pub fn find_by_slug<'a>(posts: &'a [Post], slug: &str) -> Option<&'a Post> {
    posts.iter().find(|p| p.slug == slug)
}

/// Keep only published posts, preserving order
pub fn published_only(posts: Vec<Post>) -> Vec<Post> {
    posts.into_iter().filter(|p| p.published).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, date: (i32, u32, u32), published: bool) -> Post {
        let meta = PostMeta {
            title: slug.to_string(),
            description: String::new(),
            image: None,
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            author: "Jane".to_string(),
            published,
        };
        Post::new(
            meta,
            slug.to_string(),
            String::new(),
            PathBuf::from(format!("{}.mdx", slug)),
        )
    }

    #[test]
    fn test_prev_next() {
        let posts = vec![
            post("newest", (2025, 3, 1), true),
            post("middle", (2025, 2, 1), true),
            post("oldest", (2025, 1, 1), true),
        ];

        assert!(posts[0].prev(&posts).is_none());
        assert_eq!(posts[0].next(&posts).unwrap().slug, "middle");
        assert_eq!(posts[1].prev(&posts).unwrap().slug, "newest");
        assert_eq!(posts[1].next(&posts).unwrap().slug, "oldest");
        assert!(posts[2].next(&posts).is_none());
    }

    #[test]
    fn test_find_and_filter() {
        let posts = vec![
            post("draft", (2025, 3, 1), false),
            post("live", (2025, 2, 1), true),
        ];
        assert_eq!(find_by_slug(&posts, "draft").unwrap().title, "draft");
        assert!(find_by_slug(&posts, "missing").is_none());

        let live = published_only(posts);
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].slug, "live");
    }

    #[test]
    fn test_serialized_fields() {
        let mut p = post("hello-world", (2025, 1, 1), true);
        p.body = "<Hello />".to_string();
        let json = serde_json::to_value(&p).unwrap();

        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "description",
                "image",
                "date",
                "author",
                "published",
                "slug",
                "body"
            ]
        );
        assert_eq!(json["date"], "2025-01-01");
        assert!(json["image"].is_null());
    }
}
