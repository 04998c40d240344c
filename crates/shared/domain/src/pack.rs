use serde::{Deserialize, Serialize};
use std::slice;

/// A named, ordered bundle of file references (typically announcement audio).
///
/// `name` is not required to be unique and `files` may be empty. Order of `files` is
/// preserved through every codec, since consumers may treat it as playback order.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pack {
    pub name: String,
    pub files: Vec<String>,
}

impl Pack {
    pub fn new<I, S>(name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), files: files.into_iter().map(Into::into).collect() }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterates over the file references in order.
    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.files.iter()
    }
}

impl<'a> IntoIterator for &'a Pack {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
