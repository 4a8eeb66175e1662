/// Simple aggregate statistics for a built index set.
///
/// Returned by [`Dataset::stats`](crate::Dataset::stats); the counts reflect
/// the records that made it into the indices.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub cantons: usize,
    pub communities: usize,
    pub zip_codes: usize,
}
