//! YAML front matter extraction.
//!
//! A document carries front matter when its text begins with `---`. The text is
//! split on the first two `---` sequences; the middle part is parsed as YAML and
//! the remainder, trimmed, becomes the body. Any failure along the way keeps the
//! original text untouched, so callers always have something to render.

use serde_yaml::{Mapping, Value};

/// Front matter delimiter.
const DELIMITER: &str = "---";

/// Key/value metadata parsed from a front matter block.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrontMatter(Mapping);

impl FrontMatter {
    /// Whether no keys were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a top-level key holding a string.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}

/// Outcome of [`extract_front_matter`].
///
/// Only [`Extraction::Parsed`] changes the text; both other variants hand back
/// the input exactly as received.
#[derive(Clone, Debug, PartialEq)]
pub enum Extraction<'a> {
    /// The text does not start with a delimiter.
    NotPresent {
        /// Original input.
        content: &'a str,
    },
    /// The block parsed; `body` is the trimmed remainder.
    Parsed {
        /// Parsed metadata.
        front_matter: FrontMatter,
        /// Text after the closing delimiter, trimmed.
        body: &'a str,
    },
    /// The text starts with a delimiter but the block could not be used.
    Fallback {
        /// Original input.
        content: &'a str,
        /// Why the block was rejected.
        reason: String,
    },
}

impl<'a> Extraction<'a> {
    /// Text to hand to the renderer.
    #[must_use]
    pub fn body(&self) -> &'a str {
        match self {
            Self::NotPresent { content } | Self::Fallback { content, .. } => content,
            Self::Parsed { body, .. } => body,
        }
    }

    /// Split into front matter (empty unless parsed) and body.
    #[must_use]
    pub fn into_parts(self) -> (FrontMatter, &'a str) {
        match self {
            Self::NotPresent { content } | Self::Fallback { content, .. } => {
                (FrontMatter::default(), content)
            }
            Self::Parsed { front_matter, body } => (front_matter, body),
        }
    }
}

/// Split optional YAML front matter from a document.
///
/// ```
/// use pdfgate_render::extract_front_matter;
///
/// let (meta, body) = extract_front_matter("---\nkey: v\n---\nBody").into_parts();
/// assert_eq!(meta.get_str("key"), Some("v"));
/// assert_eq!(body, "Body");
/// ```
#[must_use]
pub fn extract_front_matter(content: &str) -> Extraction<'_> {
    if !content.starts_with(DELIMITER) {
        return Extraction::NotPresent { content };
    }

    let mut parts = content.splitn(3, DELIMITER);
    let (Some(_), Some(block), Some(rest)) = (parts.next(), parts.next(), parts.next()) else {
        return Extraction::Fallback {
            content,
            reason: "missing closing delimiter".to_owned(),
        };
    };

    match parse_block(block) {
        Ok(front_matter) => Extraction::Parsed {
            front_matter,
            body: rest.trim(),
        },
        Err(reason) => Extraction::Fallback { content, reason },
    }
}

/// Parse the text between delimiters.
///
/// Only invalid YAML is an error. Valid YAML that is not a mapping (empty block,
/// scalar, sequence) yields no keys but still counts as front matter.
fn parse_block(block: &str) -> Result<FrontMatter, String> {
    if block.trim().is_empty() {
        return Ok(FrontMatter::default());
    }

    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => Ok(FrontMatter(mapping)),
        Ok(_) => Ok(FrontMatter::default()),
        Err(e) => Err(format!("invalid YAML: {e}")),
    }
}
