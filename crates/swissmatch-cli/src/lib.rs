//! swissmatch-cli
//! ==============
//!
//! Command-line interface for the `swissmatch-core` resolver.
//!
//! This crate primarily provides a binary (`swissmatch`). The library target
//! exists so docs.rs renders an overview page.
//!
//! ```text
//! swissmatch --help
//! swissmatch stats
//! swissmatch zip-code 8000 Zürich
//! swissmatch cities 8000 --locale fr
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
