//! Byte encodings of contract values.
//!
//! [`Codec::Json`] is the human-readable format the front-end consumes; keys are the
//! serde names declared on the domain types. [`Codec::Postcard`] is a compact binary
//! format for storage and transport. Both are lossless for every contract value.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::Path;
use strum_macros::{Display, EnumString};

#[annc_derive::annc_error]
pub enum CodecError {
    #[error("JSON codec error{}: {source}", format_context(.context))]
    Json { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Postcard codec error{}: {source}", format_context(.context))]
    Postcard { source: postcard::Error, context: Option<Cow<'static, str>> },

    /// Postcard input that still has bytes left after a complete value.
    #[error("Postcard input has {count} trailing bytes{}", format_context(.context))]
    TrailingBytes { count: usize, context: Option<Cow<'static, str>> },
}

const BINARY_EXTENSIONS: [&str; 2] = ["bin", "postcard"];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Codec {
    #[default]
    Json,
    Postcard,
}

impl Codec {
    /// Picks a codec from a file extension: `.bin` and `.postcard` are binary,
    /// everything else (including no extension) is JSON.
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if BINARY_EXTENSIONS.iter().any(|bin| ext.eq_ignore_ascii_case(bin)) => {
                Self::Postcard
            },
            _ => Self::Json,
        }
    }

    /// Serializes a value. JSON output is pretty-printed.
    ///
    /// # Errors
    /// Returns [`CodecError::Json`] or [`CodecError::Postcard`] if the value cannot be
    /// represented in the target format.
    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, CodecError> {
        match self {
            Self::Json => serde_json::to_vec_pretty(value).context("Encoding JSON"),
            Self::Postcard => postcard::to_stdvec(value).context("Encoding postcard"),
        }
    }

    /// Deserializes a value, rejecting input with missing or mistyped fields.
    ///
    /// # Errors
    /// Returns [`CodecError::Json`] or [`CodecError::Postcard`] when the bytes do not
    /// describe a `T`, and [`CodecError::TrailingBytes`] when postcard input continues
    /// past the decoded value.
    pub fn decode<T: DeserializeOwned>(self, bytes: &[u8]) -> Result<T, CodecError> {
        match self {
            Self::Json => serde_json::from_slice(bytes).context("Decoding JSON"),
            Self::Postcard => {
                let (value, rest) =
                    postcard::take_from_bytes(bytes).context("Decoding postcard")?;
                if !rest.is_empty() {
                    return Err(CodecError::TrailingBytes {
                        count: rest.len(),
                        context: Some("Decoding postcard".into()),
                    });
                }
                Ok(value)
            },
        }
    }
}
