//! # Domain Models
//!
//! The announcement data contract: a [`Programme`] row of station announcement texts and
//! a [`Pack`] of file references. Dependencies are limited to `serde` and `strum`.
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.
//!
//! ```rust
//! use annc_domain::{Pack, Programme, ProgrammeField};
//!
//! let programme = Programme {
//!     route: "42".to_owned(),
//!     station: "Central".to_owned(),
//!     ..Programme::default()
//! };
//! assert_eq!(programme.get(ProgrammeField::Route), "42");
//! assert!(programme.on_approach.is_empty());
//!
//! let pack = Pack::new("platform-1-pack", ["approach.mp3", "arrival.mp3"]);
//! assert_eq!(pack.len(), 2);
//! ```

pub mod config;
pub mod constants;
pub mod pack;
pub mod programme;

pub use crate::pack::Pack;
pub use crate::programme::{Programme, ProgrammeField};
