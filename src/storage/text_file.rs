//! Comma-delimited text file storage.
//!
//! Layout: a header line, then one record per line. Lines are joined with
//! `\n` and the file carries no trailing newline, so every append writes
//! `\n` followed by the record. Records go through the `csv` reader and
//! writer with quoting disabled.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};

use super::traits::{InventoryStorage, LoadOutcome};
use crate::domain::{FIELD_COUNT, HEADER, Shoe};
use crate::error::{InventoryError, Result};

/// Inventory stored in a single text file.
#[derive(Debug, Clone)]
pub struct TextFileStorage {
    path: PathBuf,
}

impl TextFileStorage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a file containing only the header.
    fn create_empty(&self) -> Result<()> {
        let mut file = File::create(&self.path)?;
        write!(file, "{}", HEADER)?;
        Ok(())
    }

    /// Parse every data record after the header.
    ///
    /// Quoting is off, so every comma separates fields. Records with the
    /// wrong number of fields are skipped. A record with the right shape but
    /// a bad number fails the whole read.
    fn read_records(&self) -> Result<Vec<Shoe>> {
        let file = File::open(&self.path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .quoting(false)
            .from_reader(file);

        if reader.headers()?.is_empty() {
            return Err(InventoryError::MissingHeader);
        }

        let mut shoes = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |pos| pos.line() as usize);
            if record.len() != FIELD_COUNT {
                log::debug!(
                    "Skipping line {} of {}: {} fields",
                    line,
                    self.path.display(),
                    record.len()
                );
                continue;
            }
            let mut fields: Vec<&str> = record.iter().collect();
            fields[0] = fields[0].trim_start();
            let shoe = Shoe::from_fields(&fields)
                .map_err(|message| InventoryError::Parse { line, message })?;
            shoes.push(shoe);
        }

        Ok(shoes)
    }
}

/// Encode records one per line, joined by `\n` with no trailing newline.
fn encode_records(shoes: &[Shoe]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for shoe in shoes {
        writer.write_record(shoe.to_record())?;
    }
    let mut bytes = writer.into_inner().map_err(|e| e.into_error())?;
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
    }
    Ok(bytes)
}

impl InventoryStorage for TextFileStorage {
    fn load(&self) -> Result<LoadOutcome> {
        let exists = self
            .path
            .try_exists()
            .map_err(|source| InventoryError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        if !exists {
            self.create_empty()?;
            log::info!("Created inventory file at {}", self.path.display());
            return Ok(LoadOutcome::Created);
        }

        let shoes = self.read_records()?;
        log::info!("Read {} records from {}", shoes.len(), self.path.display());
        Ok(LoadOutcome::Loaded(shoes))
    }

    fn append(&self, shoe: &Shoe) -> Result<()> {
        let line = encode_records(std::slice::from_ref(shoe))?;
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(b"\n")?;
        file.write_all(&line)?;
        Ok(())
    }

    fn rewrite(&self, shoes: &[Shoe]) -> Result<()> {
        let mut content = HEADER.as_bytes().to_vec();
        if !shoes.is_empty() {
            content.push(b'\n');
            content.extend(encode_records(shoes)?);
        }
        fs::write(&self.path, content)?;
        log::debug!("Rewrote {} with {} records", self.path.display(), shoes.len());
        Ok(())
    }
}
