// crates/swissmatch-core/src/index/canton.rs
use super::next_id;
use crate::error::{IntegrityError, Result};
use crate::key::CantonKey;
use crate::model::Canton;
use std::collections::HashMap;

/// Cantons by abbreviation and by plate code.
///
/// Canton identifiers are short exact codes, so there is no name folding
/// here; abbreviations only ignore ASCII case.
#[derive(Debug, Clone, Default)]
pub struct CantonIndex {
    cantons: Vec<Canton>,
    by_abbreviation: HashMap<String, u32>,
    by_plate_code: HashMap<u16, u32>,
}

impl CantonIndex {
    pub fn build(cantons: Vec<Canton>) -> Result<Self> {
        let mut idx = CantonIndex {
            cantons: Vec::with_capacity(cantons.len()),
            by_abbreviation: HashMap::with_capacity(cantons.len()),
            by_plate_code: HashMap::with_capacity(cantons.len()),
        };

        for canton in cantons {
            let id = next_id(&idx.cantons);
            let tag = canton.abbreviation.to_ascii_uppercase();
            if idx.by_abbreviation.insert(tag, id).is_some() {
                return Err(IntegrityError::DuplicateCantonAbbreviation(canton.abbreviation).into());
            }
            if idx.by_plate_code.insert(canton.plate_code, id).is_some() {
                return Err(IntegrityError::DuplicatePlateCode(canton.plate_code).into());
            }
            idx.cantons.push(canton);
        }
        Ok(idx)
    }

    pub fn all(&self) -> &[Canton] {
        &self.cantons
    }

    pub fn len(&self) -> usize {
        self.cantons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cantons.is_empty()
    }

    pub fn by_abbreviation(&self, abbreviation: &str) -> Option<&Canton> {
        self.by_abbreviation
            .get(&abbreviation.trim().to_ascii_uppercase())
            .map(|&id| &self.cantons[id as usize])
    }

    pub fn by_plate_code(&self, plate_code: u16) -> Option<&Canton> {
        self.by_plate_code
            .get(&plate_code)
            .map(|&id| &self.cantons[id as usize])
    }

    pub fn get(&self, key: CantonKey<'_>) -> Option<&Canton> {
        match key {
            CantonKey::Abbreviation(a) => self.by_abbreviation(a),
            CantonKey::PlateCode(p) => self.by_plate_code(p),
        }
    }
}
