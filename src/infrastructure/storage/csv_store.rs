use crate::domain::storage::Ledger;
use crate::domain::GameRecord;
use crate::error::Result;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::PathBuf;

/// Ledger persisted as a CSV file with the fixed header
/// `URL,Title,Provider,Image_Path`. Rows are only ever appended; a
/// missing file reads as an empty ledger.
pub struct CsvLedger {
    path: PathBuf,
}

impl CsvLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Ledger for CsvLedger {
    fn load_known_urls(&self) -> Result<HashSet<String>> {
        Ok(self.load_records()?.into_iter().map(|r| r.url).collect())
    }

    fn load_records(&self) -> Result<Vec<GameRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for row in reader.deserialize() {
            records.push(row?);
        }
        Ok(records)
    }

    fn append(&self, records: &[GameRecord]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        // The header belongs to the first write only.
        let new_file = !self.path.exists() || std::fs::metadata(&self.path)?.len() == 0;
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(new_file)
            .from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_IMAGE;
    use tempfile::tempdir;

    fn record(url: &str, title: &str) -> GameRecord {
        GameRecord {
            url: url.to_string(),
            title: title.to_string(),
            provider: "Unknown".to_string(),
            image_path: NO_IMAGE.to_string(),
        }
    }

    #[test]
    fn missing_file_reads_as_empty_ledger() {
        let dir = tempdir().unwrap();
        let ledger = CsvLedger::new(dir.path().join("games.csv"));

        assert!(ledger.load_known_urls().unwrap().is_empty());
        assert!(ledger.load_records().unwrap().is_empty());
    }

    #[test]
    fn first_append_writes_the_header_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let ledger = CsvLedger::new(&path);

        ledger
            .append(&[record("https://stake.us/casino/games/a", "A")])
            .unwrap();
        ledger
            .append(&[record("https://stake.us/casino/games/b", "B")])
            .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], "URL,Title,Provider,Image_Path");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("https://stake.us/casino/games/a"));
        assert!(lines[2].starts_with("https://stake.us/casino/games/b"));
    }

    #[test]
    fn append_preserves_existing_rows_and_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let ledger = CsvLedger::new(&path);

        ledger
            .append(&[
                record("https://stake.us/casino/games/a", "A"),
                record("https://stake.us/casino/games/b", "B"),
            ])
            .unwrap();
        let before = std::fs::read_to_string(&path).unwrap();

        ledger
            .append(&[record("https://stake.us/casino/games/c", "C")])
            .unwrap();
        let after = std::fs::read_to_string(&path).unwrap();

        assert!(after.starts_with(&before));
        let urls: Vec<String> = ledger
            .load_records()
            .unwrap()
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://stake.us/casino/games/a",
                "https://stake.us/casino/games/b",
                "https://stake.us/casino/games/c",
            ]
        );
    }

    #[test]
    fn empty_append_creates_no_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("games.csv");
        let ledger = CsvLedger::new(&path);

        ledger.append(&[]).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn fields_with_commas_survive_a_round_trip() {
        let dir = tempdir().unwrap();
        let ledger = CsvLedger::new(dir.path().join("games.csv"));

        let original = record("https://stake.us/casino/games/x", "Gates, of Olympus");
        ledger.append(std::slice::from_ref(&original)).unwrap();

        assert_eq!(ledger.load_records().unwrap(), vec![original]);
    }
}
