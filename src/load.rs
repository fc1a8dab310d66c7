//! Bulk loading of word lists into a `WordTable`

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use crate::{TableError, WordTable};

/// Lowercases a token and strips trailing whitespace and control characters
#[must_use]
pub fn normalize(token: &str) -> String {
    token.trim_end_matches(|c: char| c.is_whitespace() || c.is_control()).to_lowercase()
}

impl WordTable {
    /// Inserts every line of `source` as a key, in source order.
    ///
    /// Each line is normalized first and lines that end up empty are skipped. Keys that are
    /// already present are absorbed by [`WordTable::put`]. Returns how many keys were new.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets, and
    /// [`TableError::Io`] when reading from `source` fails.
    pub fn load<R: BufRead>(&mut self, source: R) -> Result<usize, TableError> {
        let mut lines: usize = 0;
        let mut inserted: usize = 0;
        for line in source.lines() {
            let key = normalize(&line?);
            lines = lines.saturating_add(1);
            if key.is_empty() {
                continue;
            }
            if self.put(&key)? {
                inserted = inserted.saturating_add(1);
            }
        }
        debug!("loaded {inserted} new keys from {lines} lines");
        Ok(inserted)
    }

    /// Opens the word list at `path` and loads it with [`WordTable::load`]
    ///
    /// # Errors
    ///
    /// Returns [`TableError::SourceUnavailable`] when the file cannot be opened, plus any
    /// error of [`WordTable::load`].
    pub fn load_path<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, TableError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|source| TableError::SourceUnavailable { path: path.to_path_buf(), source })?;
        self.load(BufReader::new(file))
    }
}
