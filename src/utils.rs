//! Utility functions and traits for `WordTable`

use crate::{TableError, WordTable, load::normalize};

/// Extension trait for word sets that provides spell-checking helpers
pub trait WordSetExtensions {
    /// Returns the keys of the table as a Vec, in bucket order
    fn keys(&self) -> Vec<String>;

    /// Returns true if the table contains the given key.
    ///
    /// A table without buckets contains nothing.
    fn contains(&self, key: &str) -> bool;

    /// Returns every normalized word that is not in the table, in input order
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets.
    fn misspelled<I, S>(&self, words: I) -> Result<Vec<String>, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

impl WordSetExtensions for WordTable {
    fn keys(&self) -> Vec<String> {
        self.iter().map(str::to_string).collect()
    }

    fn contains(&self, key: &str) -> bool {
        matches!(self.find(key), Ok(Some(_)))
    }

    fn misspelled<I, S>(&self, words: I) -> Result<Vec<String>, TableError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut misses = Vec::new();
        for word in words {
            let word = normalize(word.as_ref());
            if self.find(&word)?.is_none() {
                misses.push(word);
            }
        }
        Ok(misses)
    }
}

/// Creates a `WordTable` with `size` buckets from an iterator of words
///
/// # Errors
///
/// Returns [`TableError::InvalidSize`] when `size` is zero.
pub fn from_words<I, S>(size: usize, words: I) -> Result<WordTable, TableError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut table = WordTable::with_size(size)?;
    for word in words {
        table.put(word.as_ref())?;
    }
    Ok(table)
}
