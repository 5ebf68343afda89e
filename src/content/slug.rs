//! Filename to slug derivation

use std::path::Path;

use super::error::SlugError;

/// Derive a post slug from its filename
///
/// The extension is stripped and the remaining stem must already be
/// kebab-case. Nothing is normalized: `My Post.mdx` is an error, not
/// `my-post`.
pub fn derive_slug<P: AsRef<Path>>(filename: P) -> Result<String, SlugError> {
    let stem = filename
        .as_ref()
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if stem.is_empty() {
        return Err(SlugError::Empty);
    }

    if !is_kebab_case(&stem) {
        return Err(SlugError::NotKebabCase(stem));
    }

    Ok(stem)
}

/// Lowercase ASCII alphanumerics separated by single hyphens
pub fn is_kebab_case(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && !s.contains("--")
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_slug() {
        assert_eq!(derive_slug("hello-world.mdx").unwrap(), "hello-world");
        assert_eq!(derive_slug("2024-recap.md").unwrap(), "2024-recap");
        assert_eq!(derive_slug("posts/nested/rust.mdx").unwrap(), "rust");
    }

    #[test]
    fn test_rejects_spaces_and_uppercase() {
        assert_eq!(
            derive_slug("My Post.mdx"),
            Err(SlugError::NotKebabCase("My Post".to_string()))
        );
        assert!(derive_slug("Hello-World.mdx").is_err());
        assert!(derive_slug("hello_world.mdx").is_err());
    }

    #[test]
    fn test_rejects_stray_hyphens() {
        assert!(derive_slug("-hello.mdx").is_err());
        assert!(derive_slug("hello-.mdx").is_err());
        assert!(derive_slug("hello--world.mdx").is_err());
    }

    #[test]
    fn test_rejects_non_ascii() {
        assert!(derive_slug("café.mdx").is_err());
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        // `hello.world` is not kebab-case
        assert!(derive_slug("hello.world.mdx").is_err());
    }

    #[test]
    fn test_empty_stem() {
        assert_eq!(derive_slug(""), Err(SlugError::Empty));
    }
}
