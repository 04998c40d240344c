//! Kernel utilities around the announcement contract.
//! Keep this crate lightweight: codecs, document conformance checks, and config loading.
//!
//! ## Conformance
//! ```rust
//! use annc_kernel::codec::Codec;
//! use annc_kernel::document::{Document, DocumentKind};
//!
//! let raw = br#"[{ "name": "platform-1-pack", "files": ["approach.mp3", "arrival.mp3"] }]"#;
//! let document = Document::decode(DocumentKind::Packs, Codec::Json, raw).unwrap();
//! assert_eq!(document.len(), 1);
//! ```
//!
//! ## Config loading
//! ```rust,ignore
//! use annc_kernel::config::load_config;
//! use annc_kernel::domain::config::AppConfig;
//!
//! let cfg: AppConfig = load_config(Some("annc.toml")).unwrap();
//! ```
pub mod codec;
pub mod config;
pub mod document;
pub mod prelude;

pub use annc_domain as domain;
