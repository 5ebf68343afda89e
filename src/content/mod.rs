//! Content module - front-matter, schema validation and post loading

pub mod error;
mod frontmatter;
pub mod loader;
mod post;
pub mod schema;
mod slug;

pub use error::{ContentError, LoadError, SlugError};
pub use frontmatter::{FrontMatter, FrontMatterError};
pub use loader::ContentLoader;
pub use post::{find_by_slug, published_only, Post};
pub use self::slug::{derive_slug, is_kebab_case};
