// crates/swissmatch-core/src/dataset.rs
use crate::common::DbStats;
use crate::error::Result;
use crate::index::{CantonIndex, CommunityIndex, ZipCodeIndex};
use crate::loader::Records;
use crate::model::{Canton, Community, ZipCode};
use tracing::{debug, info};

/// The complete, immutable index set.
///
/// Built once from the three record collections; a reload builds a new
/// `Dataset` instead of touching this one (see [`SwissMatch`](crate::SwissMatch)).
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub(crate) cantons: CantonIndex,
    pub(crate) communities: CommunityIndex,
    pub(crate) zip_codes: ZipCodeIndex,
}

impl Dataset {
    /// Build every index. All-or-nothing: the first integrity violation is returned
    /// and nothing is kept.
    pub fn build(
        cantons: Vec<Canton>,
        communities: Vec<Community>,
        zip_codes: Vec<ZipCode>,
    ) -> Result<Self> {
        let cantons = CantonIndex::build(cantons)?;
        debug!(cantons = cantons.len(), "canton index built");
        let communities = CommunityIndex::build(communities)?;
        debug!(communities = communities.len(), "community index built");
        let zip_codes = ZipCodeIndex::build(zip_codes)?;
        debug!(zip_codes = zip_codes.len(), "zip code index built");

        let dataset = Dataset {
            cantons,
            communities,
            zip_codes,
        };
        let stats = dataset.stats();
        info!(
            cantons = stats.cantons,
            communities = stats.communities,
            zip_codes = stats.zip_codes,
            "index set built"
        );
        Ok(dataset)
    }

    pub fn from_records(records: Records) -> Result<Self> {
        Self::build(records.cantons, records.communities, records.zip_codes)
    }

    pub fn stats(&self) -> DbStats {
        DbStats {
            cantons: self.cantons.len(),
            communities: self.communities.len(),
            zip_codes: self.zip_codes.len(),
        }
    }

    pub fn canton_index(&self) -> &CantonIndex {
        &self.cantons
    }

    pub fn community_index(&self) -> &CommunityIndex {
        &self.communities
    }

    pub fn zip_code_index(&self) -> &ZipCodeIndex {
        &self.zip_codes
    }

    /// Copy the records back out, e.g. to write a binary dataset.
    pub fn to_records(&self) -> Records {
        Records {
            cantons: self.cantons.all().to_vec(),
            communities: self.communities.all().to_vec(),
            zip_codes: self.zip_codes.all().to_vec(),
        }
    }
}
