use crate::error::Result;
use crate::record::VersionDecisionRecord;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

/// Write `record` to `dir/file_name`, creating `dir` if needed.
///
/// The JSON is rendered in full before anything touches the disk, written to
/// a temporary file in the same directory and renamed into place. On failure
/// the temporary file is removed and any previous artifact is left as it was.
pub fn write_record(
    record: &VersionDecisionRecord,
    dir: &Path,
    file_name: &str,
) -> Result<PathBuf> {
    let json = record.to_json()?;

    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(json.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(&path).map_err(|e| e.error)?;

    info!(path = %path.display(), "wrote version details");
    Ok(path)
}
