//! Front-matter parsing

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const DELIMITER: &str = "---";

/// Why a front-matter block could not be read
#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("opening `---` has no closing `---` line")]
    Unterminated,

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("expected key/value pairs, found {0}")]
    NotAMapping(&'static str),
}

/// Raw front-matter of a document, before schema validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// A document without a leading `---` line has empty front-matter and
    /// is returned whole as the body.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.trim_start_matches('\u{feff}').trim_start();

        let mut lines = content.split_inclusive('\n');
        match lines.next() {
            Some(first) if first.trim_end() == DELIMITER => {}
            _ => return Ok((FrontMatter::default(), content)),
        }

        let yaml_start = content
            .find('\n')
            .map(|i| i + 1)
            .unwrap_or(content.len());
        let mut offset = yaml_start;

        for line in lines {
            let line_end = offset + line.len();
            if line.trim_end() == DELIMITER {
                let yaml = &content[yaml_start..offset];
                let body = content[line_end..].trim_start_matches(['\n', '\r']);
                return Ok((Self::from_yaml(yaml)?, body));
            }
            offset = line_end;
        }

        Err(FrontMatterError::Unterminated)
    }

    fn from_yaml(yaml: &str) -> Result<Self, FrontMatterError> {
        if yaml.trim().is_empty() {
            return Ok(FrontMatter::default());
        }

        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(fields) => Ok(Self { fields }),
            // A block holding only comments
            Value::Null => Ok(FrontMatter::default()),
            Value::Bool(_) => Err(FrontMatterError::NotAMapping("a boolean")),
            Value::Number(_) => Err(FrontMatterError::NotAMapping("a number")),
            Value::String(_) => Err(FrontMatterError::NotAMapping("a string")),
            Value::Sequence(_) => Err(FrontMatterError::NotAMapping("a list")),
            Value::Tagged(_) => Err(FrontMatterError::NotAMapping("a tagged value")),
        }
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All keys that are plain strings
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().filter_map(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
