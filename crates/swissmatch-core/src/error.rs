// crates/swissmatch-core/src/error.rs
use thiserror::Error;

/// Errors produced while loading data, building indices or parsing lookup keys.
///
/// A lookup that simply finds nothing is **not** an error: single-record
/// lookups return `Ok(None)` and list lookups return an empty `Vec`.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed a key whose shape cannot be classified
    /// (wrong type, malformed number, unknown locale or zip type).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The dataset violates a uniqueness invariant. Index construction aborts.
    #[error("data integrity failure: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Uniqueness violations detected while building the index set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("duplicate canton abbreviation {0}")]
    DuplicateCantonAbbreviation(String),

    #[error("duplicate canton plate code {0}")]
    DuplicatePlateCode(u16),

    #[error("duplicate community number {0}")]
    DuplicateCommunityNumber(u32),

    #[error("duplicate ordering number (ONRP) {0}")]
    DuplicateOrderingNumber(u32),

    #[error("duplicate zip code {code:04} with add-on {add_on:02}")]
    DuplicateCodeAndAddOn { code: u16, add_on: u8 },

    #[error("zip code {code:04} resolves name {name:?} to more than one record")]
    DuplicateCodeAndName { code: u16, name: String },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
