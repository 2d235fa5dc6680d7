//! File I/O utilities with atomic writes
//!
//! A document is either fully replaced or left untouched.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::SpendwiseError;

/// Read JSON from a file, `None` if the file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<Option<T>, SpendwiseError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    serde_json::from_reader(BufReader::new(file))
        .map(Some)
        .map_err(|e| SpendwiseError::Storage(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically
///
/// Data goes to a sibling `.tmp` file which is synced and then renamed over
/// the target.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SpendwiseError>
where
    T: Serialize + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let storage_err = |what: &str, e: &dyn std::fmt::Display| {
        SpendwiseError::Storage(format!("{} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("Failed to create directory for", &e))?;
    }

    let temp_path = path.with_extension("json.tmp");

    let result = (|| {
        let file = File::create(&temp_path)
            .map_err(|e| storage_err("Failed to create temp file for", &e))?;
        let mut writer = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, data)
            .map_err(|e| storage_err("Failed to serialize", &e))?;
        writer
            .flush()
            .map_err(|e| storage_err("Failed to flush", &e))?;
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| storage_err("Failed to sync", &e))?;

        fs::rename(&temp_path, path).map_err(|e| storage_err("Failed to replace", &e))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }

    result
}
