//! JSONL (JSON Lines) table files.
//!
//! Each line is one JSON object representing one row. Unlike a
//! lenient log reader, a malformed row is a load-time
//! [`StoreError::SchemaMismatch`] rather than a skipped line: bad
//! data must not silently vanish from the dashboard.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};

use super::{StoreError, TableKind, TableStore};

/// JSONL table reader.
pub struct JsonlReader<T> {
    path: PathBuf,
    table: String,
    _marker: PhantomData<T>,
}

impl<T: DeserializeOwned> JsonlReader<T> {
    /// Create a new JSONL reader for the given path.
    pub fn new(path: PathBuf) -> Self {
        let table = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            table,
            _marker: PhantomData,
        }
    }

    /// Create a reader for one of the dashboard tables.
    pub fn for_table(store: &TableStore, table: TableKind) -> Self {
        Self::new(store.table_path(table))
    }

    /// Check if the table file exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the whole table.
    ///
    /// A missing file is an empty relation, not an error; a row that
    /// fails to decode is a schema mismatch and fails the whole read.
    pub fn read_all(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut rows = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let row = serde_json::from_str(&line).map_err(|e| StoreError::SchemaMismatch {
                table: self.table.clone(),
                line: idx + 1,
                source: e,
            })?;
            rows.push(row);
        }

        debug!("Read {} rows from {:?}", rows.len(), self.path);
        Ok(rows)
    }

    /// Count rows without decoding them.
    pub fn count(&self) -> Result<usize, StoreError> {
        if !self.path.exists() {
            return Ok(0);
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let count = reader
            .lines()
            .map_while(Result::ok)
            .filter(|l| !l.trim().is_empty())
            .count();

        Ok(count)
    }
}

/// JSONL table writer. Used by fixtures and the import path; the
/// dashboard itself never writes.
pub struct JsonlWriter<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T: Serialize> JsonlWriter<T> {
    /// Create a new JSONL writer for the given path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Create a writer for one of the dashboard tables.
    pub fn for_table(store: &TableStore, table: TableKind) -> Self {
        Self::new(store.table_path(table))
    }

    fn ensure_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Append a single row.
    pub fn append(&self, row: &T) -> Result<(), StoreError> {
        self.ensure_dir()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string(row)?;
        writeln!(writer, "{}", json)?;
        writer.flush()?;

        Ok(())
    }

    /// Write rows, replacing the entire file.
    pub fn write_all(&self, rows: &[T]) -> Result<usize, StoreError> {
        self.ensure_dir()?;

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;

        for row in rows {
            let json = serde_json::to_string(row)?;
            writeln!(writer, "{}", json)?;
            count += 1;
        }

        writer.flush()?;
        info!("Wrote {} rows to {:?}", count, self.path);

        Ok(count)
    }
}
