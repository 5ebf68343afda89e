//! Front-matter schema
//!
//! Each field has its own rule. Every rule runs on every document so a
//! single pass reports all of a file's problems, not just the first one.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

use super::FrontMatter;

/// Fields the schema knows about; anything else is ignored
pub const KNOWN_FIELDS: [&str; 6] = [
    "title",
    "description",
    "image",
    "date",
    "author",
    "published",
];

/// Validated front-matter of a single post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub date: NaiveDate,
    pub author: String,
    pub published: bool,
}

/// A single field that failed its rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate raw front-matter against the post schema
pub fn validate(fm: &FrontMatter) -> Result<PostMeta, Vec<FieldError>> {
    let mut errors = Vec::new();

    let title = required_text(fm, "title", &mut errors);
    let description = optional_string(fm, "description", &mut errors).unwrap_or_default();
    let image = optional_string(fm, "image", &mut errors);
    let date = required_date(fm, "date", &mut errors);
    let author = required_text(fm, "author", &mut errors);
    let published = optional_bool(fm, "published", &mut errors).unwrap_or(true);

    for key in fm.keys().filter(|k| !KNOWN_FIELDS.contains(k)) {
        tracing::debug!("Ignoring unknown front-matter field `{}`", key);
    }

    match (title, date, author) {
        (Some(title), Some(date), Some(author)) if errors.is_empty() => Ok(PostMeta {
            title,
            description,
            image,
            date,
            author,
            published,
        }),
        _ => Err(errors),
    }
}

/// Parse a calendar date from `YYYY-MM-DD` or an ISO 8601 date-time
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    // chrono accepts `2025-1-5` and `25-01-01` for `%Y-%m-%d`
    if !has_iso_date_prefix(s) {
        return None;
    }
    if s.len() > 10 && s.as_bytes()[10] != b'T' {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    let formats = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// Exactly `YYYY-MM-DD` in the first ten bytes
fn has_iso_date_prefix(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() >= 10
        && b[4] == b'-'
        && b[7] == b'-'
        && [0, 1, 2, 3, 5, 6, 8, 9]
            .iter()
            .all(|&i| b[i].is_ascii_digit())
}

fn required_text(
    fm: &FrontMatter,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fm.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(Value::String(s)) if s.trim().is_empty() => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("must be a string, found {}", kind(other)),
            ));
            None
        }
    }
}

fn optional_string(
    fm: &FrontMatter,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match fm.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("must be a string, found {}", kind(other)),
            ));
            None
        }
    }
}

fn optional_bool(
    fm: &FrontMatter,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<bool> {
    match fm.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("must be true or false, found {}", kind(other)),
            ));
            None
        }
    }
}

fn required_date(
    fm: &FrontMatter,
    field: &'static str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    match fm.get(field) {
        None | Some(Value::Null) => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
        Some(Value::String(s)) => {
            let date = parse_date(s);
            if date.is_none() {
                errors.push(FieldError::new(
                    field,
                    format!("must be an ISO calendar date (YYYY-MM-DD), got `{}`", s),
                ));
            }
            date
        }
        Some(other) => {
            errors.push(FieldError::new(
                field,
                format!("must be an ISO calendar date (YYYY-MM-DD), found {}", kind(other)),
            ));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
