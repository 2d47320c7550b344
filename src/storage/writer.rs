//! File writer
//!
//! Whole-file replacement, optionally through a synced temporary file.

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Replace the contents of `path` with `bytes`
///
/// With `durable` set, the bytes go to `<path>.tmp`, are fsynced, and the
/// temporary file is renamed over `path`, so readers see either the old or
/// the new file. Without it, `path` is truncated and written in place.
pub fn write_file(path: &Path, bytes: &[u8], durable: bool) -> Result<()> {
    if !durable {
        fs::write(path, bytes)?;
        return Ok(());
    }

    let tmp_path = temp_path(path);
    let result = write_synced(&tmp_path, bytes).and_then(|()| {
        fs::rename(&tmp_path, path)?;
        Ok(())
    });

    if result.is_err() {
        // Cleanup failure is ignored; the write error is returned
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

/// "marks.txt" → "marks.txt.tmp"
fn temp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("gradebook"));
    name.push(".tmp");
    path.with_file_name(name)
}
