// crates/swissmatch-core/src/index/mod.rs

//! # Secondary indices
//!
//! Every index owns its records in a flat `Vec` and maps keys to positions
//! in that vector (`u32` ids), the same "structure of arrays" layout for all
//! three record kinds. Indices are built in a single pass and never mutated
//! afterwards.

mod canton;
mod community;
mod zip_code;

pub use canton::CantonIndex;
pub use community::CommunityIndex;
pub use zip_code::ZipCodeIndex;

use crate::model::Names;
use crate::text::{canonical_keys, Tier};
use std::collections::HashMap;

/// Canonical name -> ids of the records carrying that name, in insertion order.
#[derive(Debug, Clone, Default)]
pub(crate) struct NameIndex {
    keys: HashMap<String, Vec<u32>>,
}

impl NameIndex {
    /// Register every spelling of `names` under both canonical tiers.
    /// A record is listed at most once per key.
    pub(crate) fn insert(&mut self, id: u32, names: &Names) {
        for key in record_keys(names) {
            self.keys.entry(key).or_default().push(id);
        }
    }

    /// Ids for `name`: tier 1 first, tier 2 as fallback.
    pub(crate) fn lookup(&self, name: &str) -> &[u32] {
        Tier::ALL
            .iter()
            .find_map(|tier| self.keys.get(&tier.apply(name)))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Distinct canonical keys over all spellings of a record.
pub(crate) fn record_keys(names: &Names) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for variant in names.variants() {
        for key in canonical_keys(variant) {
            if !out.contains(&key) {
                out.push(key);
            }
        }
    }
    out
}

/// Position of the next record as an id.
#[inline]
pub(crate) fn next_id<T>(records: &[T]) -> u32 {
    records.len() as u32
}
