// crates/swissmatch-core/src/lib.rs

//! Swiss cantons, communities and zip codes.
//!
//! Records are indexed once under every addressing scheme (ordering number,
//! code, code + add-on, code + name, name) and looked up through
//! [`Dataset`]. Names match across locales and spellings: `Zürich`,
//! `Zurich`, `Zuerich` and `Zurigo` all find the same record.
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod dataset;
pub mod error;
pub mod handle;
pub mod index;
pub mod key;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::dataset::Dataset;
pub use crate::error::{Error, IntegrityError, Result};
pub use crate::handle::SwissMatch;
pub use crate::key::Arg;
pub use crate::loader::{DataFiles, DataSource, Records};
pub use crate::model::{Canton, Community, Language, Locale, Names, ZipCode, ZipType};
