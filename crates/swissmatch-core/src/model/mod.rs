// crates/swissmatch-core/src/model/mod.rs
pub mod domain;
pub mod names;

pub use domain::{Canton, Community, ZipCode, ZipType};
pub use names::{Language, Locale, Names};
