//! Workspace facade: re-exports `swissmatch-core` so the demos can use
//! `swissmatch_rs::prelude::*`.

pub use swissmatch_core::*;
