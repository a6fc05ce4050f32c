use crate::error::SrResult;
use crate::model::RawResult;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Deserializes one RawResult payload from any reader. The fetch
/// collaborator (HTTP, fixture file, test cursor) owns transport;
/// this crate only sees bytes.
pub fn from_reader<R: Read>(reader: R) -> SrResult<RawResult> {
    let raw: RawResult = serde_json::from_reader(reader)?;

    debug!(
        "Decoded result payload: {} categories, {} contexts, {}/{}/{} score entries",
        raw.categories.len(),
        raw.contexts.len(),
        raw.result.data.categories.len(),
        raw.result.data.skills.len(),
        raw.result.data.contexts.len()
    );
    Ok(raw)
}

pub fn load_file<P: AsRef<Path>>(path: P) -> SrResult<RawResult> {
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}
