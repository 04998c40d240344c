//! Documents: arrays of contract values exchanged with external producers.
//!
//! Decoding a document is the conformance check. A value missing any field, or carrying
//! a field of the wrong type, makes the whole document nonconforming.

use crate::codec::{Codec, CodecError};
use annc_domain::{Pack, Programme};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumString};
use tracing::{debug, instrument};

#[annc_derive::annc_error]
pub enum DocumentError {
    #[error("Document I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Document does not conform to `{kind}`{}: {message}", format_context(.context))]
    Nonconforming {
        kind: DocumentKind,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    #[error("Document encoding failure{}: {source}", format_context(.context))]
    Codec { source: CodecError, context: Option<Cow<'static, str>> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentKind {
    Programmes,
    Packs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    Programmes(Vec<Programme>),
    Packs(Vec<Pack>),
}

/// Counts reported for a checked document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSummary {
    pub kind: DocumentKind,
    pub records: usize,
    /// Programme columns holding empty text, across all rows.
    pub empty_fields: usize,
    /// File references across all packs.
    pub files: usize,
}

impl Document {
    #[must_use]
    pub const fn kind(&self) -> DocumentKind {
        match self {
            Self::Programmes(_) => DocumentKind::Programmes,
            Self::Packs(_) => DocumentKind::Packs,
        }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Programmes(rows) => rows.len(),
            Self::Packs(packs) => packs.len(),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn summary(&self) -> DocumentSummary {
        let (empty_fields, files) = match self {
            Self::Programmes(rows) => (rows.iter().map(Programme::empty_fields).sum(), 0),
            Self::Packs(packs) => (0, packs.iter().map(Pack::len).sum()),
        };
        DocumentSummary { kind: self.kind(), records: self.len(), empty_fields, files }
    }

    /// Decodes `bytes` as a document of `kind`.
    ///
    /// # Errors
    /// Returns [`DocumentError::Nonconforming`] with the decoder's message when the
    /// bytes are malformed or any value lacks a field.
    pub fn decode(kind: DocumentKind, codec: Codec, bytes: &[u8]) -> Result<Self, DocumentError> {
        let decoded = match kind {
            DocumentKind::Programmes => codec.decode(bytes).map(Self::Programmes),
            DocumentKind::Packs => codec.decode(bytes).map(Self::Packs),
        };
        decoded.map_err(|err| DocumentError::Nonconforming {
            kind,
            message: err.to_string().into(),
            context: None,
        })
    }

    /// # Errors
    /// Returns [`DocumentError::Codec`] if encoding fails.
    pub fn encode(&self, codec: Codec) -> Result<Vec<u8>, DocumentError> {
        let encoded = match self {
            Self::Programmes(rows) => codec.encode(rows),
            Self::Packs(packs) => codec.encode(packs),
        };
        Ok(encoded?)
    }

    /// Reads and checks a document file; the codec follows the file extension.
    ///
    /// # Errors
    /// Returns [`DocumentError::Io`] if the file cannot be read and
    /// [`DocumentError::Nonconforming`] if its content does not conform. Both carry the
    /// path as context.
    #[instrument(skip_all, fields(kind = %kind, path = %path.as_ref().display()))]
    pub fn read(kind: DocumentKind, path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = fs::read(path).context(format!("Failed to read {}", path.display()))?;
        let document = Self::decode(kind, Codec::from_path(path), &bytes)
            .context(path.display().to_string())?;

        debug!(records = document.len(), bytes = bytes.len(), "Document decoded");
        Ok(document)
    }

    /// Writes the document with the codec matching the file extension.
    ///
    /// # Errors
    /// Returns [`DocumentError::Codec`] or [`DocumentError::Io`] on failure.
    #[instrument(skip_all, fields(kind = %self.kind(), path = %path.as_ref().display()))]
    pub fn write(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let bytes = self.encode(Codec::from_path(path))?;
        fs::write(path, &bytes).context(format!("Failed to write {}", path.display()))?;

        debug!(records = self.len(), bytes = bytes.len(), "Document written");
        Ok(())
    }
}

impl From<Vec<Programme>> for Document {
    fn from(rows: Vec<Programme>) -> Self {
        Self::Programmes(rows)
    }
}

impl From<Vec<Pack>> for Document {
    fn from(packs: Vec<Pack>) -> Self {
        Self::Packs(packs)
    }
}

impl fmt::Display for DocumentSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DocumentKind::Programmes => {
                write!(f, "{} programmes, {} empty fields", self.records, self.empty_fields)
            },
            DocumentKind::Packs => write!(f, "{} packs, {} files", self.records, self.files),
        }
    }
}
