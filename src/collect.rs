use std::{
    ffi::{OsStr, OsString},
    path::{Path, PathBuf},
};

use crate::error::{FlipbookError, FlipbookResult};

/// File name suffix a directory entry must carry to count as a frame.
pub const FRAME_SUFFIX: &str = ".ppm";

/// Lists the frames directly inside `dir` (non-recursive), sorted into
/// playback order.
///
/// Playback order is byte-wise lexicographic order of the file name.
/// Subdirectories, non-matching files, and names that cannot be
/// suffix-tested (non-UTF-8) are ignored. An empty result is not an error.
pub fn collect_frames(dir: &Path) -> FlipbookResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        FlipbookError::directory_access(format!("failed to list '{}': {e}", dir.display()))
    })?;

    let mut names: Vec<OsString> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            FlipbookError::directory_access(format!(
                "failed to read an entry of '{}': {e}",
                dir.display()
            ))
        })?;
        let file_type = entry.file_type().map_err(|e| {
            FlipbookError::directory_access(format!(
                "failed to inspect '{}': {e}",
                entry.path().display()
            ))
        })?;
        if !file_type.is_file() {
            continue;
        }

        let name = entry.file_name();
        if is_frame_name(&name) {
            names.push(name);
        }
    }

    names.sort();
    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}

fn is_frame_name(name: &OsStr) -> bool {
    name.to_str().is_some_and(|n| n.ends_with(FRAME_SUFFIX))
}
