// crates/swissmatch-core/src/search.rs

//! # Query dispatch
//!
//! The caller-facing lookups. Each entry point turns its loose arguments into
//! a tagged key (see [`crate::key`]) and hands that key to exactly one index.
//!
//! | call | resolves via |
//! |---|---|
//! | `canton("ZH")` / `canton(1)` | abbreviation / plate code |
//! | `community(261)` | community number |
//! | `communities(Some("Zürich"))` | community names |
//! | `zip_code(4384, None)` | ordering number (**not** the 4 digit code) |
//! | `zip_code(800000, None)` | code + add-on, combined form |
//! | `zip_code(8000, Some(0))` | code + add-on |
//! | `zip_code(8000, Some("Zurigo"))` | code + name |
//! | `zip_codes(Some(8000))` | 4 digit code, one-to-many |
//! | `zip_codes(Some("Zürich"))` / `city("Zürich")` | name, one-to-many |

use crate::dataset::Dataset;
use crate::error::Result;
use crate::key::{parse_code, parse_community_number, Arg, CantonKey, ZipCodeKey, ZipCodesQuery};
use crate::model::{Canton, Community, Locale, ZipCode, ZipType};

impl Dataset {
    /// A canton by abbreviation (`"ZH"`) or plate code (`1`, `"1"`).
    pub fn canton<'a>(&self, identifier: impl Into<Arg<'a>>) -> Result<Option<&Canton>> {
        let key = CantonKey::parse(identifier.into())?;
        Ok(self.cantons.get(key))
    }

    pub fn cantons(&self) -> &[Canton] {
        self.cantons.all()
    }

    pub fn community<'a>(&self, number: impl Into<Arg<'a>>) -> Result<Option<&Community>> {
        let number = parse_community_number(number.into())?;
        Ok(self.communities.by_community_number(number))
    }

    /// All communities, or those matching `name`.
    pub fn communities(&self, name: Option<&str>) -> Vec<&Community> {
        match name {
            Some(name) => self.communities.by_name(name),
            None => self.communities.all().iter().collect(),
        }
    }

    /// A single zip code.
    ///
    /// A lone 4 digit number is the **ordering number** (ONRP); the 4 digit
    /// zip code alone does not identify a record. Use [`Dataset::zip_codes`]
    /// to list all records sharing a code.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use swissmatch_core::prelude::*;
    ///
    /// # fn main() -> Result<()> {
    /// let zurich = ZipCode {
    ///     ordering_number: 4384,
    ///     zip_type: ZipType::DomicileAndPostal,
    ///     code: 8000,
    ///     add_on: 0,
    ///     names: Names::native("Zürich").with(Locale::It, "Zurigo"),
    ///     language: Language::German,
    ///     language_alternative: None,
    ///     canton: "ZH".into(),
    ///     delivery_by: None,
    ///     largest_community: Some(261),
    ///     valid_from: None,
    /// };
    /// let db = Dataset::build(vec![], vec![], vec![zurich])?;
    ///
    /// assert!(db.zip_code(4384, None)?.is_some());
    /// assert!(db.zip_code(8000, Some(0.into()))?.is_some());
    /// assert!(db.zip_code(8000, Some("Zurigo".into()))?.is_some());
    /// assert!(db.zip_code(8000, Some("Nonexistent".into()))?.is_none());
    /// # Ok(()) }
    /// ```
    pub fn zip_code<'a>(
        &self,
        code: impl Into<Arg<'a>>,
        add_on_or_name: Option<Arg<'a>>,
    ) -> Result<Option<&ZipCode>> {
        let key = ZipCodeKey::parse(code.into(), add_on_or_name)?;
        Ok(self.zip_codes.get(key))
    }

    /// All zip codes, those sharing a 4 digit code, or those matching a name.
    pub fn zip_codes<'a>(&self, code_or_name: Option<Arg<'a>>) -> Result<Vec<&ZipCode>> {
        Ok(match ZipCodesQuery::parse(code_or_name)? {
            ZipCodesQuery::All => self.zip_codes.all().iter().collect(),
            ZipCodesQuery::Code(code) => self.zip_codes.by_code(code),
            ZipCodesQuery::Name(name) => self.zip_codes.by_name(name),
        })
    }

    /// Zip codes whose name (in any locale) matches `name`.
    pub fn city(&self, name: &str) -> Vec<&ZipCode> {
        self.zip_codes.by_name(name)
    }

    /// Distinct names used by the zip codes with `code`, in first-seen order.
    ///
    /// `only_types` keeps only records of the listed types; `locale` picks
    /// the spelling (native when `None`).
    pub fn cities_for_zip_code<'a>(
        &self,
        code: impl Into<Arg<'a>>,
        only_types: Option<&[ZipType]>,
        locale: Option<Locale>,
    ) -> Result<Vec<&str>> {
        let code = parse_code(code.into())?;
        let locale = locale.unwrap_or_default();

        let mut names: Vec<&str> = Vec::new();
        for zip in self.zip_codes.by_code(code) {
            if only_types.is_some_and(|types| !types.contains(&zip.zip_type)) {
                continue;
            }
            let name = zip.name_in(locale);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }
}
