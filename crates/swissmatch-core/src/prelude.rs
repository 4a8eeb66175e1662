//! swissmatch prelude: bring common types and traits into scope.

pub use crate::common::DbStats;
pub use crate::dataset::Dataset;
pub use crate::error::{Error, IntegrityError, Result};
pub use crate::handle::SwissMatch;
pub use crate::key::{Arg, CantonKey, ZipCodeKey, ZipCodesQuery};
pub use crate::loader::{DataFiles, DataSource, Records};
pub use crate::model::{Canton, Community, Language, Locale, Names, ZipCode, ZipType};
pub use crate::traits::Named;
