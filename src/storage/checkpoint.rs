use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::StarredRepository;

/// Flat JSON file holding a list of repositories. Used to skip network
/// stages on later runs; it is trusted as-is, with no freshness check.
pub struct Checkpoint;

impl Checkpoint {
    /// Read a checkpoint. A missing file is an empty list; a present but
    /// malformed file is an error.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<StarredRepository>> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No checkpoint at {}", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&raw).map_err(|e| {
            Error::ParseError(format!("checkpoint {} is corrupt: {}", path.display(), e))
        })
    }

    /// Overwrite `path` with pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(data: &[StarredRepository], path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = BufWriter::new(fs::File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, data)?;
        writer.write_all(b"\n")?;
        writer.flush()?;

        tracing::info!("Saved {} repositories to {}", data.len(), path.display());
        Ok(())
    }
}
