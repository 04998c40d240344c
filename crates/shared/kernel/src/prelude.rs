pub use crate::codec::{Codec, CodecError, CodecErrorExt};
pub use crate::config::{ConfigError, load_config};
pub use crate::document::{Document, DocumentError, DocumentKind, DocumentSummary};
pub use annc_domain::{Pack, Programme, ProgrammeField};
