//! Content loading errors

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A single problem found while loading the content directory
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid front-matter: {message}", .path.display())]
    FrontMatter { path: PathBuf, message: String },

    #[error("{}: field `{field}` {message}", .path.display())]
    Field {
        path: PathBuf,
        field: &'static str,
        message: String,
    },

    #[error("{}: invalid filename: {reason}", .path.display())]
    Filename { path: PathBuf, reason: SlugError },

    #[error("slug `{slug}` is used by more than one post: {}", display_paths(.sources))]
    SlugCollision { slug: String, sources: Vec<PathBuf> },
}

impl ContentError {
    /// The field name for schema violations
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ContentError::Field { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Why a filename could not be turned into a slug
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlugError {
    #[error("filename has no stem")]
    Empty,

    #[error("`{0}` is not kebab-case (only a-z, 0-9 and single inner hyphens are allowed)")]
    NotKebabCase(String),
}

/// Every error found in one `load_all` pass
///
/// Never empty: a loader with nothing to report returns its posts instead.
#[derive(Debug)]
pub struct LoadError {
    errors: Vec<ContentError>,
}

impl LoadError {
    pub(crate) fn new(errors: Vec<ContentError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub fn errors(&self) -> &[ContentError] {
        &self.errors
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = if self.errors.len() == 1 { "" } else { "s" };
        write!(f, "content validation failed ({} error{})", self.errors.len(), s)?;
        for err in &self.errors {
            write!(f, "\n  - {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_message() {
        let err = ContentError::Field {
            path: PathBuf::from("hello-world.mdx"),
            field: "date",
            message: "must be an ISO calendar date, got `not-a-date`".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "hello-world.mdx: field `date` must be an ISO calendar date, got `not-a-date`"
        );
        assert_eq!(err.field(), Some("date"));
    }

    #[test]
    fn test_load_error_lists_every_error() {
        let err = LoadError::new(vec![
            ContentError::Filename {
                path: PathBuf::from("My Post.mdx"),
                reason: SlugError::NotKebabCase("My Post".to_string()),
            },
            ContentError::SlugCollision {
                slug: "hello-world".to_string(),
                sources: vec![
                    PathBuf::from("a/hello-world.mdx"),
                    PathBuf::from("b/hello-world.md"),
                ],
            },
        ]);

        let text = err.to_string();
        assert!(text.starts_with("content validation failed (2 errors)"));
        assert!(text.contains("My Post.mdx: invalid filename"));
        assert!(text.contains("a/hello-world.mdx, b/hello-world.md"));
    }
}
