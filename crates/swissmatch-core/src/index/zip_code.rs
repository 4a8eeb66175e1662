// crates/swissmatch-core/src/index/zip_code.rs
use super::{next_id, record_keys, NameIndex};
use crate::error::{IntegrityError, Result};
use crate::key::ZipCodeKey;
use crate::model::ZipCode;
use crate::text::Tier;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Zip codes under every addressing scheme.
///
/// - ordering number (ONRP): unique
/// - 4 digit code: one-to-many, in load order
/// - (code, add-on): unique
/// - (code, canonical name): unique, any spelling of the name
/// - canonical name: one-to-many, across codes
#[derive(Debug, Clone, Default)]
pub struct ZipCodeIndex {
    zip_codes: Vec<ZipCode>,
    by_ordering_number: HashMap<u32, u32>,
    by_code: HashMap<u16, Vec<u32>>,
    by_code_and_add_on: HashMap<(u16, u8), u32>,
    by_code_and_name: HashMap<(u16, String), u32>,
    by_name: NameIndex,
}

impl ZipCodeIndex {
    /// Build all maps in one pass. Any uniqueness violation aborts the build.
    pub fn build(zip_codes: Vec<ZipCode>) -> Result<Self> {
        let mut idx = ZipCodeIndex {
            zip_codes: Vec::with_capacity(zip_codes.len()),
            by_ordering_number: HashMap::with_capacity(zip_codes.len()),
            by_code: HashMap::new(),
            by_code_and_add_on: HashMap::with_capacity(zip_codes.len()),
            by_code_and_name: HashMap::with_capacity(zip_codes.len() * 2),
            by_name: NameIndex::default(),
        };

        for zip in zip_codes {
            let id = next_id(&idx.zip_codes);

            if idx.by_ordering_number.insert(zip.ordering_number, id).is_some() {
                return Err(IntegrityError::DuplicateOrderingNumber(zip.ordering_number).into());
            }
            if idx
                .by_code_and_add_on
                .insert((zip.code, zip.add_on), id)
                .is_some()
            {
                return Err(IntegrityError::DuplicateCodeAndAddOn {
                    code: zip.code,
                    add_on: zip.add_on,
                }
                .into());
            }
            for key in record_keys(&zip.names) {
                match idx.by_code_and_name.entry((zip.code, key)) {
                    Entry::Vacant(slot) => {
                        slot.insert(id);
                    }
                    Entry::Occupied(slot) if *slot.get() == id => {}
                    Entry::Occupied(slot) => {
                        let (code, name) = slot.key().clone();
                        return Err(IntegrityError::DuplicateCodeAndName { code, name }.into());
                    }
                }
            }
            idx.by_code.entry(zip.code).or_default().push(id);
            idx.by_name.insert(id, &zip.names);
            idx.zip_codes.push(zip);
        }

        Ok(idx)
    }

    pub fn all(&self) -> &[ZipCode] {
        &self.zip_codes
    }

    pub fn len(&self) -> usize {
        self.zip_codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zip_codes.is_empty()
    }

    #[inline]
    fn record(&self, id: u32) -> &ZipCode {
        &self.zip_codes[id as usize]
    }

    pub fn by_ordering_number(&self, onrp: u32) -> Option<&ZipCode> {
        self.by_ordering_number.get(&onrp).map(|&id| self.record(id))
    }

    /// All zip codes sharing the 4 digit `code`, in load order.
    pub fn by_code(&self, code: u16) -> Vec<&ZipCode> {
        self.by_code
            .get(&code)
            .map(|ids| ids.iter().map(|&id| self.record(id)).collect())
            .unwrap_or_default()
    }

    pub fn by_code_and_add_on(&self, code: u16, add_on: u8) -> Option<&ZipCode> {
        self.by_code_and_add_on
            .get(&(code, add_on))
            .map(|&id| self.record(id))
    }

    /// All zip codes with a name matching `name`, across all codes.
    pub fn by_name(&self, name: &str) -> Vec<&ZipCode> {
        self.by_name
            .lookup(name)
            .iter()
            .map(|&id| self.record(id))
            .collect()
    }

    /// The zip code with `code` and a name matching `name` in any locale.
    pub fn by_code_and_name(&self, code: u16, name: &str) -> Option<&ZipCode> {
        Tier::ALL
            .iter()
            .find_map(|tier| self.by_code_and_name.get(&(code, tier.apply(name))))
            .map(|&id| self.record(id))
    }

    pub fn get(&self, key: ZipCodeKey<'_>) -> Option<&ZipCode> {
        match key {
            ZipCodeKey::OrderingNumber(onrp) => self.by_ordering_number(onrp),
            ZipCodeKey::CodeAndAddOn { code, add_on } => self.by_code_and_add_on(code, add_on),
            ZipCodeKey::CodeAndName { code, name } => self.by_code_and_name(code, name),
        }
    }
}
