// crates/swissmatch-core/src/handle.rs

//! Reloadable handle over the current [`Dataset`].
//!
//! Readers pin an `Arc<Dataset>` with [`SwissMatch::snapshot`] and run all
//! their lookups against it. A reload builds a complete replacement off to
//! the side and publishes it with a single pointer swap, so a reader never
//! sees a half-built index set and in-flight readers keep the snapshot they
//! started with.

use crate::dataset::Dataset;
use crate::error::Result;
use crate::loader::{DataFiles, DataSource};
use arc_swap::ArcSwap;
use std::sync::Arc;
use tracing::{info, warn};

pub struct SwissMatch {
    current: ArcSwap<Dataset>,
}

impl SwissMatch {
    pub fn new(dataset: Dataset) -> Self {
        SwissMatch {
            current: ArcSwap::from_pointee(dataset),
        }
    }

    /// Load from `source`, or from the standard [`DataFiles`] location when `None`.
    pub fn load(source: Option<&dyn DataSource>) -> Result<Self> {
        Ok(Self::new(build_from(source)?))
    }

    /// Build a new index set and swap it in.
    ///
    /// On error the previously installed snapshot stays in place.
    pub fn reload(&self, source: Option<&dyn DataSource>) -> Result<()> {
        match build_from(source) {
            Ok(dataset) => {
                self.install(dataset);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "reload rejected, keeping current index set");
                Err(e)
            }
        }
    }

    /// Publish an already built index set.
    pub fn install(&self, dataset: Dataset) {
        let stats = dataset.stats();
        self.current.store(Arc::new(dataset));
        info!(zip_codes = stats.zip_codes, "index set installed");
    }

    /// The index set current at the time of the call.
    pub fn snapshot(&self) -> Arc<Dataset> {
        self.current.load_full()
    }
}

impl From<Dataset> for SwissMatch {
    fn from(dataset: Dataset) -> Self {
        SwissMatch::new(dataset)
    }
}

fn build_from(source: Option<&dyn DataSource>) -> Result<Dataset> {
    let records = match source {
        Some(source) => source.load_records()?,
        None => DataFiles::default().load_records()?,
    };
    Dataset::from_records(records)
}
