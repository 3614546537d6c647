use crate::domain::storage::Ledger;
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Projects the full ledger into a JSON document. The export is
/// regenerated from scratch on every run, so two exports of an
/// unchanged ledger are byte-identical.
pub struct ExportService {
    ledger: Arc<dyn Ledger>,
}

impl ExportService {
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }

    pub fn export(&self, json_path: &Path) -> Result<()> {
        let records = self.ledger.load_records()?;

        std::fs::write(json_path, render(&records)?)?;
        info!(
            "Exported {} records to {}",
            records.len(),
            json_path.display()
        );

        Ok(())
    }
}

// The export format fixes a 4-space indent, which the default
// serde_json pretty printer does not produce.
fn render<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}
