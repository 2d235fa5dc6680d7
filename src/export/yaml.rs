//! YAML Export functionality
//!
//! Same content as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full dataset to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> SpendwiseResult<()> {
    let export = FullExport::from_storage(storage)?;

    let header = format!(
        "# Spendwise Full Export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| SpendwiseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| SpendwiseError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_yaml() {
        let storage = Storage::in_memory().unwrap();

        let mut out = Vec::new();
        export_full_yaml(&storage, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("# Spendwise Full Export"));
        assert!(text.contains("schema_version:"));
        assert!(text.contains("name: Food"));

        let parsed: FullExport = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.metadata.category_count, 8);
        assert!(parsed.transactions.is_empty());
    }
}
