// crates/swissmatch-core/src/loader/builder.rs
use super::{common_io, parse_json, Records, CACHE_SUFFIX};
use crate::error::{Error, Result};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

/// Upper bound for decoding binary datasets.
const BINARY_LIMIT: u64 = 256 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompressionMode {
    Gzip,
    None,
}

impl Default for CompressionMode {
    fn default() -> Self {
        if cfg!(feature = "compact") {
            CompressionMode::Gzip
        } else {
            CompressionMode::None
        }
    }
}

fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_limit(BINARY_LIMIT)
}

/// **Smart Load:** use a fresh cache when there is one, otherwise parse the
/// JSON source and write the cache (best effort).
pub(super) fn load_via_cache(source: &Path) -> Result<Records> {
    let cache_path = common_io::get_cache_path(source, CACHE_SUFFIX);

    if is_cache_fresh(source, &cache_path) {
        match read_binary(&cache_path) {
            Ok(records) => {
                debug!(cache = %cache_path.display(), "using binary cache");
                return Ok(records);
            }
            Err(e) => warn!(cache = %cache_path.display(), error = %e, "ignoring unreadable cache"),
        }
    }

    let records = parse_json(source)?;
    match write_generic(&cache_path, &records, CompressionMode::default()) {
        Ok(()) => debug!(cache = %cache_path.display(), "binary cache written"),
        Err(e) => warn!(cache = %cache_path.display(), error = %e, "could not write cache"),
    }
    Ok(records)
}

pub(super) fn read_binary(path: &Path) -> Result<Records> {
    let reader = common_io::open_stream(path)?;
    bincode_options()
        .deserialize_from(reader)
        .map_err(Error::Bincode)
}

fn is_cache_fresh(source: &Path, cache_path: &Path) -> bool {
    let cache_time = match fs::metadata(cache_path).and_then(|m| m.modified()) {
        Ok(t) => t,
        Err(_) => return false,
    };
    match fs::metadata(source).and_then(|m| m.modified()) {
        Ok(source_time) => source_time <= cache_time,
        Err(_) => false,
    }
}

/// Writes any serializable value with bincode, optionally gzipped.
pub(super) fn write_generic<T: serde::Serialize>(
    path: &Path,
    value: &T,
    compression: CompressionMode,
) -> Result<()> {
    let file = File::create(path).map_err(Error::Io)?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            #[cfg(feature = "compact")]
            {
                let mut encoder = GzEncoder::new(writer, Compression::default());
                bincode_options()
                    .serialize_into(&mut encoder, value)
                    .map_err(Error::Bincode)?;
                encoder.finish().map_err(Error::Io)?.flush().map_err(Error::Io)?;
            }
            #[cfg(not(feature = "compact"))]
            {
                return Err(Error::InvalidArgument(
                    "Gzip requested but 'compact' disabled".into(),
                ));
            }
        }
        CompressionMode::None => {
            bincode_options()
                .serialize_into(&mut writer, value)
                .map_err(Error::Bincode)?;
            writer.flush().map_err(Error::Io)?;
        }
    }
    Ok(())
}
