// crates/swissmatch-core/src/model/domain.rs
use super::names::{Language, Locale, Names};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A canton.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Canton {
    /// License tag, e.g. "ZH".
    pub abbreviation: String,
    /// Numeric plate/canton code (1-26).
    pub plate_code: u16,
    pub names: Names,
}

/// A political community (Gemeinde / commune / comune).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Community {
    /// BFS community number, unique.
    pub community_number: u32,
    pub names: Names,
    /// Abbreviation of the canton the community belongs to.
    pub canton: String,
    /// Community number of the agglomeration core, if any.
    #[serde(default)]
    pub agglomeration: Option<u32>,
}

/// Swiss Post classification of a zip code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ZipType {
    /// 10: addresses and post office boxes
    DomicileAndPostal,
    /// 20: addresses only
    DomicileOnly,
    /// 30: post office boxes only
    PostalOnly,
    /// 40: company zip code
    Company,
    /// 80: internal use by Swiss Post
    Internal,
}

impl ZipType {
    pub fn code(self) -> u8 {
        match self {
            ZipType::DomicileAndPostal => 10,
            ZipType::DomicileOnly => 20,
            ZipType::PostalOnly => 30,
            ZipType::Company => 40,
            ZipType::Internal => 80,
        }
    }
}

impl TryFrom<u8> for ZipType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            10 => Ok(ZipType::DomicileAndPostal),
            20 => Ok(ZipType::DomicileOnly),
            30 => Ok(ZipType::PostalOnly),
            40 => Ok(ZipType::Company),
            80 => Ok(ZipType::Internal),
            other => Err(Error::invalid(format!("unknown zip code type {other}"))),
        }
    }
}

impl From<ZipType> for u8 {
    fn from(t: ZipType) -> u8 {
        t.code()
    }
}

/// A zip code record.
///
/// The 4 digit `code` is **not** unique. The ordering number (ONRP) is the
/// only standalone key; `(code, add_on)` and `(code, name)` are unique pairs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZipCode {
    /// Ordering number (ONRP).
    pub ordering_number: u32,
    pub zip_type: ZipType,
    /// 4 digit zip code.
    pub code: u16,
    /// 2 digit add-on.
    pub add_on: u8,
    pub names: Names,
    pub language: Language,
    #[serde(default)]
    pub language_alternative: Option<Language>,
    /// Abbreviation of the canton.
    pub canton: String,
    /// ONRP of the zip code that delivers mail for this one.
    #[serde(default)]
    pub delivery_by: Option<u32>,
    /// Community number of the largest community served.
    #[serde(default)]
    pub largest_community: Option<u32>,
    /// ISO date (YYYY-MM-DD) from which the record is valid.
    #[serde(default)]
    pub valid_from: Option<String>,
}

impl ZipCode {
    pub fn name(&self) -> &str {
        &self.names.native
    }

    pub fn name_in(&self, locale: Locale) -> &str {
        self.names.get(locale)
    }

    /// Code and add-on as one 6 digit number, e.g. `800000`.
    pub fn full_code(&self) -> u32 {
        u32::from(self.code) * 100 + u32::from(self.add_on)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04} {}", self.code, self.names.native)
    }
}

impl Community {
    pub fn name(&self) -> &str {
        &self.names.native
    }
}

impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.names.native, self.canton)
    }
}

impl Canton {
    pub fn name(&self) -> &str {
        &self.names.native
    }
}

impl fmt::Display for Canton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.names.native, self.abbreviation)
    }
}
