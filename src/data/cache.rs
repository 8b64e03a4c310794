use crate::data::connectors::TextConnector;
use crate::error::{precondition, Result};
use crate::types::TriangleData;
use std::path::{Path, PathBuf};

/// Extension of the prepared sidecar written next to a `.txt` source.
pub const SIDECAR_EXTENSION: &str = "prepared.json";

/// Path of the prepared sidecar for a text source: `tri.txt` -> `tri.prepared.json`.
pub fn sidecar_path<P: AsRef<Path>>(source: P) -> PathBuf {
    source.as_ref().with_extension(SIDECAR_EXTENSION)
}

/// Load a previously prepared triangle.
pub fn load_prepared<P: AsRef<Path>>(path: P) -> Result<TriangleData> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write a prepared triangle.
pub fn save_prepared<P: AsRef<Path>>(path: P, data: &TriangleData) -> Result<()> {
    std::fs::write(path, serde_json::to_string(data)?)?;
    Ok(())
}

/// Reuse the sidecar of `source` when present, otherwise parse the text file
/// and write the sidecar for the next run.
pub fn load_or_prepare<P: AsRef<Path>>(source: P) -> Result<TriangleData> {
    let source = source.as_ref();
    if source.extension().and_then(|e| e.to_str()) != Some("txt") {
        return precondition(format!("expected a path to a .txt file, got {}", source.display()));
    }

    let target = sidecar_path(source);
    if target.is_file() {
        log::info!("Data is already prepared: {}", target.display());
        return load_prepared(&target);
    }

    let data = TextConnector::load(source)?;
    save_prepared(&target, &data)?;
    log::info!("File saved: {}", target.display());

    Ok(data)
}
