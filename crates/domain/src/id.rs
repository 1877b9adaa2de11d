//! Movie identifier as carried by `data-movie-id` attributes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Opaque identifier of a movie.
///
/// The backend uses integer keys, but the client never interprets the value:
/// only canonical integers (`"42"`, `"-3"`) become [`MovieId::Numeric`];
/// anything else, including `"007"` or `" 7 "`, is kept verbatim as text.
/// Numeric ids are serialised as JSON numbers so request bodies match what
/// the server expects.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => n.fmt(f),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl FromStr for MovieId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ValidationError::EmptyMovieId);
        }
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Ok(Self::Numeric(n)),
            _ => Ok(Self::Text(s.to_string())),
        }
    }
}
