// SPDX-License-Identifier: GPL-3.0-or-later

use std::fmt;

use thiserror::Error;

use crate::json::JsonValue;

pub type Result<T> = std::result::Result<T, MusicBrainzError>;

#[derive(Debug, Error)]
pub enum MusicBrainzError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid response from MusicBrainz API: {0}")]
    InvalidResponse(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failure reported by a caller-supplied transport.
    #[error("transport failed: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Decoding failed: {0}")]
    Decode(#[from] DecodeError),

    /// A cursor request failed; the cursor still holds its previous page.
    #[error("page request at offset {offset} failed: {source}")]
    Paging {
        offset: usize,
        limit: Option<u32>,
        #[source]
        source: Box<MusicBrainzError>,
    },
}

impl MusicBrainzError {
    /// Strips any paging context and returns the error the transport or decoder raised.
    pub fn inner(&self) -> &MusicBrainzError {
        match self {
            MusicBrainzError::Paging { source, .. } => source.inner(),
            other => other,
        }
    }

    pub fn as_decode_error(&self) -> Option<&DecodeError> {
        match self.inner() {
            MusicBrainzError::Decode(error) => Some(error),
            _ => None,
        }
    }
}

/// What went wrong while decoding a value, independent of where.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeErrorKind {
    #[error("malformed JSON: {0}")]
    Syntax(String),

    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid value: {0}")]
    InvalidValue(String),

    #[error("required property `{0}` is missing")]
    MissingProperty(String),

    #[error("`{property}` reports {reported} but {actual} entries were decoded")]
    CountMismatch {
        property: String,
        reported: u64,
        actual: usize,
    },
}

/// One step of the path from the document root to the failing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Property(String),
    Index(usize),
}

/// A decoding failure together with the property path at which it occurred.
///
/// Segments are recorded innermost first while the error unwinds through the
/// nested readers, so [`DecodeError::path`] reverses them for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    kind: DecodeErrorKind,
    path: Vec<PathSegment>,
}

impl DecodeError {
    pub fn new(kind: DecodeErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    pub fn syntax(error: serde_json::Error) -> Self {
        Self::new(DecodeErrorKind::Syntax(error.to_string()))
    }

    pub fn unexpected(expected: &'static str, found: &JsonValue) -> Self {
        Self::new(DecodeErrorKind::UnexpectedType {
            expected,
            found: describe(found),
        })
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::InvalidValue(message.into()))
    }

    pub fn missing_property(property: impl Into<String>) -> Self {
        Self::new(DecodeErrorKind::MissingProperty(property.into()))
    }

    pub fn count_mismatch(property: impl Into<String>, reported: u64, actual: usize) -> Self {
        Self::new(DecodeErrorKind::CountMismatch {
            property: property.into(),
            reported,
            actual,
        })
    }

    pub fn kind(&self) -> &DecodeErrorKind {
        &self.kind
    }

    /// Dotted path from the root to the failing value, e.g. `media[0].tracks[2].length`.
    pub fn path(&self) -> String {
        let mut rendered = String::new();
        for segment in self.path.iter().rev() {
            match segment {
                PathSegment::Property(name) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(name);
                }
                PathSegment::Index(index) => {
                    rendered.push('[');
                    rendered.push_str(&index.to_string());
                    rendered.push(']');
                }
            }
        }
        rendered
    }

    pub fn segments(&self) -> impl Iterator<Item = &PathSegment> {
        self.path.iter().rev()
    }

    pub fn is_missing_property(&self, property: &str) -> bool {
        matches!(&self.kind, DecodeErrorKind::MissingProperty(name) if name == property)
    }

    pub(crate) fn within(mut self, segment: PathSegment) -> Self {
        self.path.push(segment);
        self
    }

    pub(crate) fn within_property(self, name: &str) -> Self {
        self.within(PathSegment::Property(name.to_string()))
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} at `{}`", self.kind, self.path())
        }
    }
}

impl std::error::Error for DecodeError {}

pub(crate) fn describe(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_renders_outermost_first() {
        let error = DecodeError::invalid("bad")
            .within_property("length")
            .within(PathSegment::Index(2))
            .within_property("tracks")
            .within(PathSegment::Index(0))
            .within_property("media");

        assert_eq!(error.path(), "media[0].tracks[2].length");
        assert_eq!(
            error.to_string(),
            "invalid value: bad at `media[0].tracks[2].length`"
        );
    }

    #[test]
    fn test_inner_unwraps_paging_context() {
        let error = MusicBrainzError::Paging {
            offset: 25,
            limit: Some(25),
            source: Box::new(MusicBrainzError::Decode(DecodeError::missing_property(
                "id",
            ))),
        };

        let decode = error.as_decode_error().expect("decode error");
        assert!(decode.is_missing_property("id"));
        assert!(error.to_string().contains("offset 25"));
    }
}
