//! Content loader - loads and validates posts from the content directory

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use super::error::{ContentError, LoadError};
use super::{derive_slug, schema, FrontMatter, Post};
use crate::Site;

/// Loads posts from a content directory
///
/// Loading is all-or-nothing: either every document is valid and the whole
/// collection is returned, or every problem found is returned instead.
pub struct ContentLoader {
    content_dir: PathBuf,
    extensions: Vec<String>,
}

impl ContentLoader {
    /// Create a loader for `content_dir` accepting `.mdx` and `.md` files
    pub fn new<P: Into<PathBuf>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.into(),
            extensions: vec!["mdx".to_string(), "md".to_string()],
        }
    }

    /// Create a loader using the site's content directory and extensions
    pub fn from_site(site: &Site) -> Self {
        Self::new(&site.content_dir).with_extensions(&site.config.extensions[..])
    }

    /// Replace the accepted file extensions (without the leading dot)
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
            .collect();
        self
    }

    /// Load every post, sorted by date (newest first)
    pub fn load_all(&self) -> Result<Vec<Post>, LoadError> {
        let files = self.discover().map_err(|e| LoadError::new(vec![e]))?;

        let mut posts = Vec::with_capacity(files.len());
        let mut errors = Vec::new();
        let mut slugs: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();

        for path in &files {
            let source = self.relative(path);

            let slug = match derive_slug(path) {
                Ok(slug) => {
                    slugs.entry(slug.clone()).or_default().push(source.clone());
                    Some(slug)
                }
                Err(reason) => {
                    errors.push(ContentError::Filename {
                        path: source.clone(),
                        reason,
                    });
                    None
                }
            };

            match self.load_post(path, &source) {
                Ok((meta, body)) => {
                    if let Some(slug) = slug {
                        posts.push(Post::new(meta, slug, body, source));
                    }
                }
                Err(mut errs) => errors.append(&mut errs),
            }
        }

        errors.extend(
            slugs
                .into_iter()
                .filter(|(_, sources)| sources.len() > 1)
                .map(|(slug, sources)| ContentError::SlugCollision { slug, sources }),
        );

        if !errors.is_empty() {
            return Err(LoadError::new(errors));
        }

        sort_posts(&mut posts);

        tracing::info!(
            "Loaded {} posts from {:?}",
            posts.len(),
            self.content_dir
        );

        Ok(posts)
    }

    /// Read one document and validate its front-matter
    fn load_post(
        &self,
        path: &Path,
        source: &Path,
    ) -> Result<(schema::PostMeta, String), Vec<ContentError>> {
        let content = fs::read_to_string(path).map_err(|e| {
            vec![ContentError::Io {
                path: source.to_path_buf(),
                source: e,
            }]
        })?;

        let (fm, body) = FrontMatter::parse(&content).map_err(|e| {
            vec![ContentError::FrontMatter {
                path: source.to_path_buf(),
                message: e.to_string(),
            }]
        })?;

        let meta = schema::validate(&fm).map_err(|errs| {
            errs.into_iter()
                .map(|e| ContentError::Field {
                    path: source.to_path_buf(),
                    field: e.field,
                    message: e.message,
                })
                .collect::<Vec<_>>()
        })?;

        Ok((meta, body.to_string()))
    }

    /// Find all content files, in a stable order
    fn discover(&self) -> Result<Vec<PathBuf>, ContentError> {
        let dir_error = |source: io::Error| ContentError::Io {
            path: self.content_dir.clone(),
            source,
        };

        let metadata = fs::metadata(&self.content_dir).map_err(dir_error)?;
        if !metadata.is_dir() {
            return Err(dir_error(io::Error::new(
                io::ErrorKind::InvalidInput,
                "content path is not a directory",
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(&self.content_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        {
            let entry = entry.map_err(|e| ContentError::Io {
                path: e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| self.content_dir.clone()),
                source: e.into(),
            })?;

            let path = entry.path();
            if !entry.file_type().is_file() {
                continue;
            }

            if self.is_content_file(path) {
                files.push(path.to_path_buf());
            } else {
                tracing::debug!("Skipping {:?}: not a content file", path);
            }
        }

        Ok(files)
    }

    fn is_content_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| {
                let e = e.to_ascii_lowercase();
                self.extensions.iter().any(|allowed| *allowed == e)
            })
            .unwrap_or(false)
    }

    /// Path relative to the content directory
    fn relative(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.content_dir)
            .unwrap_or(path)
            .to_path_buf()
    }
}

/// Sort by date descending (newest first), then by slug
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|s| s.starts_with('.'))
        .unwrap_or(false)
}
