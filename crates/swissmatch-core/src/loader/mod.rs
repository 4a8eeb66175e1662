// crates/swissmatch-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression, binary cache) and hands
//! the three record collections to [`Dataset::build`](crate::Dataset::build).
//!
//! The source document is JSON:
//!
//! ```json
//! { "cantons": [...], "communities": [...], "zip_codes": [...] }
//! ```
//!
//! optionally gzip-compressed. A bincode copy is cached next to it.

use crate::error::{Error, Result};
use crate::model::{Canton, Community, ZipCode};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

mod builder;
mod common_io;

use builder::CompressionMode;

/// Suffix of the bincode cache written next to a JSON source.
#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = "bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = "comp.bin";

/// Anything that can produce the three record collections.
pub trait DataSource {
    fn load_records(&self) -> Result<Records>;
}

/// The three record collections, ready for indexing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Records {
    #[serde(default)]
    pub cantons: Vec<Canton>,
    #[serde(default)]
    pub communities: Vec<Community>,
    #[serde(default)]
    pub zip_codes: Vec<ZipCode>,
}

impl Records {
    /// Write the records as a binary dataset (bincode, gzip when `compact`).
    pub fn save_as(&self, path: impl AsRef<Path>) -> Result<()> {
        builder::write_generic(path.as_ref(), self, CompressionMode::default())
    }
}

/// In-memory source.
impl DataSource for Records {
    fn load_records(&self) -> Result<Records> {
        Ok(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SourceFormat {
    Json,
    Binary,
}

/// The standard on-disk data source.
#[derive(Debug, Clone)]
pub struct DataFiles {
    path: PathBuf,
    format: SourceFormat,
    use_cache: bool,
}

impl Default for DataFiles {
    /// `<crate>/data/swissmatch.json.gz`
    fn default() -> Self {
        DataFiles::json(Self::default_data_dir().join(Self::default_dataset_filename()))
    }
}

impl DataFiles {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "swissmatch.json.gz"
    }

    /// A JSON source (plain or gzip) with a bincode cache next to it.
    pub fn json(path: impl Into<PathBuf>) -> Self {
        DataFiles {
            path: path.into(),
            format: SourceFormat::Json,
            use_cache: true,
        }
    }

    /// A binary dataset written by [`Records::save_as`].
    pub fn binary(path: impl Into<PathBuf>) -> Self {
        DataFiles {
            path: path.into(),
            format: SourceFormat::Binary,
            use_cache: false,
        }
    }

    /// Skip reading and writing the bincode cache.
    pub fn without_cache(mut self) -> Self {
        self.use_cache = false;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cache_path(&self) -> PathBuf {
        common_io::get_cache_path(&self.path, CACHE_SUFFIX)
    }
}

impl DataSource for DataFiles {
    fn load_records(&self) -> Result<Records> {
        debug!(path = %self.path.display(), format = ?self.format, "loading records");
        match self.format {
            SourceFormat::Binary => builder::read_binary(&self.path),
            SourceFormat::Json if self.use_cache => builder::load_via_cache(&self.path),
            SourceFormat::Json => parse_json(&self.path),
        }
    }
}

#[cfg(feature = "json")]
pub(crate) fn parse_json(path: &Path) -> Result<Records> {
    let reader = common_io::open_stream(path)?;
    serde_json::from_reader(reader).map_err(Error::Json)
}

#[cfg(not(feature = "json"))]
pub(crate) fn parse_json(path: &Path) -> Result<Records> {
    Err(Error::InvalidArgument(format!(
        "cannot read {}: built without the 'json' feature",
        path.display()
    )))
}
