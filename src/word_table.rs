use std::{fmt, iter::Flatten, mem, slice};

use log::{debug, trace};

use crate::{HashCodeMethod, TableError, TableStats, hash_code::compress};

/// A chain of keys that compressed to the same bucket, in insertion order
pub type Bucket = Vec<String>;

/// A set of words stored in a fixed number of buckets with separate chaining.
///
/// Keys are routed through the selected [`HashCodeMethod`] and then compressed into
/// `[0, size)`. The table starts without buckets and must be sized with
/// [`WordTable::resize`] before any key operation.
///
/// Each bucket also keeps a cumulative insert counter that feeds [`WordTable::stats`].
/// Counters survive removals and are rebuilt only by a resize.
///
/// Note: This implementation is not thread-safe.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    /// The chains, one per bucket
    buckets: Vec<Bucket>,
    /// Insertions ever routed to each bucket since the last resize
    inserts: Vec<usize>,
    /// Method used for every hash computation from now on
    hash_code_method: HashCodeMethod,
    /// Number of keys currently stored
    len: usize,
}

impl WordTable {
    /// Creates an empty table with no buckets and the default hash code method
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with `size` buckets
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidSize`] when `size` is zero.
    pub fn with_size(size: usize) -> Result<Self, TableError> {
        let mut table = Self::new();
        table.resize(size)?;
        Ok(table)
    }

    /// Maps a key to its bucket under the current method and size
    fn hash(&self, key: &str) -> Result<usize, TableError> {
        compress(self.hash_code_method.code(key), self.buckets.len())
    }

    /// Returns the bucket holding `key`, or `None` when the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets.
    pub fn find(&self, key: &str) -> Result<Option<usize>, TableError> {
        let index = self.hash(key)?;
        let found = self.buckets.get(index).is_some_and(|chain| chain.iter().any(|k| k == key));
        Ok(found.then_some(index))
    }

    /// Inserts `key` at the end of its chain. Returns `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets.
    pub fn put(&mut self, key: &str) -> Result<bool, TableError> {
        if self.find(key)?.is_some() {
            return Ok(false);
        }
        self.insert_new(key.to_string())?;
        Ok(true)
    }

    /// Appends a key known to be absent and bumps its bucket counter
    fn insert_new(&mut self, key: String) -> Result<(), TableError> {
        let index = self.hash(&key)?;
        trace!("put `{key}` into bucket {index}");
        if let Some(chain) = self.buckets.get_mut(index) {
            chain.push(key);
            self.len = self.len.saturating_add(1);
        }
        if let Some(count) = self.inserts.get_mut(index) {
            *count = count.saturating_add(1);
        }
        Ok(())
    }

    /// Removes `key` from its chain. Returns `false` if it was not present.
    ///
    /// The bucket's insert counter is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets.
    pub fn erase(&mut self, key: &str) -> Result<bool, TableError> {
        let Some(index) = self.find(key)? else {
            return Ok(false);
        };
        let Some(chain) = self.buckets.get_mut(index) else {
            return Ok(false);
        };
        let Some(position) = chain.iter().position(|k| k == key) else {
            return Ok(false);
        };
        let removed = chain.remove(position);
        self.len = self.len.saturating_sub(1);
        trace!("erased `{removed}` from bucket {index}");
        Ok(true)
    }

    /// Rebuilds the table with `size` buckets and re-inserts every key.
    ///
    /// Keys are re-inserted under the current hash code method, walking the old buckets in
    /// index order and each chain in stored order. Insert counters start again from zero.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::InvalidSize`] when `size` is zero. The table is left untouched.
    pub fn resize(&mut self, size: usize) -> Result<(), TableError> {
        if size == 0 {
            return Err(TableError::InvalidSize { requested: size });
        }

        let old_size = self.buckets.len();
        let old_buckets = mem::replace(&mut self.buckets, vec![Bucket::new(); size]);
        self.inserts = vec![0; size];
        self.len = 0;

        for key in old_buckets.into_iter().flatten() {
            if self.find(&key)?.is_none() {
                self.insert_new(key)?;
            }
        }

        debug!(
            "resized table from {old_size} to {size} buckets with {} keys using {} hash code",
            self.len, self.hash_code_method
        );
        Ok(())
    }

    /// Re-derives every key's bucket at the current size, typically after a method change
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Unsized`] when the table has no buckets.
    pub fn rehash(&mut self) -> Result<(), TableError> {
        match self.buckets.len() {
            0 => Err(TableError::Unsized),
            size => self.resize(size),
        }
    }

    /// Returns the hash code method in use
    #[must_use]
    pub fn hash_code_method(&self) -> HashCodeMethod {
        self.hash_code_method
    }

    /// Selects the hash code method for subsequent operations.
    ///
    /// Existing keys stay where they are, so they may not be found until [`WordTable::rehash`].
    pub fn set_hash_code_method(&mut self, method: HashCodeMethod) {
        self.hash_code_method = method;
    }

    /// Returns the number of buckets
    #[must_use]
    pub fn size(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of keys currently stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no keys are stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the chains in bucket order
    #[must_use]
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Reports usage statistics from the cumulative insert counters
    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats::from_counters(&self.inserts)
    }

    /// Returns an iterator over the keys, bucket by bucket
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter { chains: self.buckets.iter().flatten() }
    }
}

impl fmt::Display for WordTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "{index}:\t")?;
            for key in chain {
                write!(f, "{key}\t")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a WordTable {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the keys of a [`WordTable`]
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Every chain flattened in bucket order
    chains: Flatten<slice::Iter<'a, Bucket>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.chains.next().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_put_and_find() {
        let mut table = WordTable::with_size(10).unwrap();
        assert!(table.put("dog").unwrap());

        let index = table.find("dog").unwrap();
        assert!(index.is_some_and(|i| i < 10));
        assert_eq!(table.find("cat").unwrap(), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_simple_hash_places_cat_in_bucket_one() {
        let mut table = WordTable::with_size(10).unwrap();
        table.put("cat").unwrap();
        // simple("cat") = 24, |7 * 24 + 103| = 271
        assert_eq!(table.find("cat").unwrap(), Some(1));
    }

    #[test]
    fn test_put_is_idempotent() {
        let mut table = WordTable::with_size(4).unwrap();
        assert!(table.put("a").unwrap());
        assert!(!table.put("a").unwrap());

        let stats = table.stats();
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.collisions, 0);
        assert_eq!(stats.max_bucket, 1);
        assert_eq!(table.iter().filter(|&k| k == "a").count(), 1);
    }

    #[test]
    fn test_erase() {
        let mut table = WordTable::with_size(10).unwrap();
        table.put("key1").unwrap();
        table.put("key2").unwrap();

        assert!(table.erase("key1").unwrap());
        assert_eq!(table.find("key1").unwrap(), None);
        assert!(table.find("key2").unwrap().is_some());
        assert!(!table.erase("key1").unwrap());
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_erase_from_bucket_zero() {
        let mut table = WordTable::with_size(1).unwrap();
        table.put("zero").unwrap();
        assert_eq!(table.find("zero").unwrap(), Some(0));

        assert!(table.erase("zero").unwrap());
        assert_eq!(table.find("zero").unwrap(), None);
        assert!(table.is_empty());
    }

    #[test]
    fn test_counters_are_cumulative() {
        let mut table = WordTable::with_size(1).unwrap();
        table.put("a").unwrap();
        table.erase("a").unwrap();
        table.put("a").unwrap();

        let stats = table.stats();
        assert_eq!(stats.inserts, 2);
        assert_eq!(stats.collisions, 1);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_collisions_in_single_bucket() {
        let mut table = WordTable::with_size(1).unwrap();
        for key in ["alpha", "beta", "gamma", "delta"] {
            table.put(key).unwrap();
        }

        let stats = table.stats();
        assert_eq!(stats.inserts, 4);
        assert_eq!(stats.collisions, 3);
        assert_eq!(stats.max_bucket, 4);
        assert!((stats.load_factor - 4.0).abs() < f64::EPSILON);
        // chain keeps insertion order
        assert_eq!(table.buckets(), &[vec!["alpha", "beta", "gamma", "delta"]]);
    }

    #[test]
    fn test_unsized_table_rejects_key_operations() {
        let mut table = WordTable::new();
        assert_eq!(table.size(), 0);
        assert!(matches!(table.find("a"), Err(TableError::Unsized)));
        assert!(matches!(table.put("a"), Err(TableError::Unsized)));
        assert!(matches!(table.erase("a"), Err(TableError::Unsized)));
        assert!(matches!(table.rehash(), Err(TableError::Unsized)));
        assert_eq!(table.stats(), TableStats::default());
    }

    #[test]
    fn test_resize_to_zero_is_rejected() {
        let mut table = WordTable::with_size(3).unwrap();
        table.put("kept").unwrap();

        assert!(matches!(table.resize(0), Err(TableError::InvalidSize { requested: 0 })));
        assert_eq!(table.size(), 3);
        assert!(table.find("kept").unwrap().is_some());
        assert!(matches!(WordTable::with_size(0), Err(TableError::InvalidSize { .. })));
    }

    #[test]
    fn test_resize_preserves_keys_and_resets_counters() {
        let mut table = WordTable::with_size(1).unwrap();
        for key in ["one", "two", "three"] {
            table.put(key).unwrap();
        }
        table.erase("two").unwrap();
        assert_eq!(table.stats().inserts, 3);

        table.resize(7).unwrap();
        assert_eq!(table.size(), 7);
        assert_eq!(table.len(), 2);
        assert_eq!(table.stats().inserts, 2);
        assert!(table.find("one").unwrap().is_some());
        assert!(table.find("three").unwrap().is_some());
        assert_eq!(table.find("two").unwrap(), None);
    }

    #[test]
    fn test_method_change_needs_rehash() {
        let mut table = WordTable::with_size(10).unwrap();
        table.put("ab").unwrap();
        // simple("ab") = 3 -> bucket 4
        assert_eq!(table.find("ab").unwrap(), Some(4));

        table.set_hash_code_method(HashCodeMethod::Poly);
        assert_eq!(table.hash_code_method(), HashCodeMethod::Poly);
        // poly("ab") = 35 -> bucket 8, which is still empty
        assert_eq!(table.find("ab").unwrap(), None);

        table.rehash().unwrap();
        assert_eq!(table.find("ab").unwrap(), Some(8));
        assert_eq!(table.size(), 10);
    }

    #[test]
    fn test_display_dumps_every_bucket() {
        let mut table = WordTable::with_size(2).unwrap();
        table.set_hash_code_method(HashCodeMethod::Simple);
        // simple("a") = 1 -> 110 % 2 = 0, simple("b") = 2 -> 117 % 2 = 1
        table.put("a").unwrap();
        table.put("b").unwrap();
        table.put("c").unwrap();

        assert_eq!(table.to_string(), "0:\ta\tc\t\n1:\tb\t\n");
    }

    #[test]
    fn test_iter() {
        let mut table = WordTable::with_size(5).unwrap();
        table.put("x").unwrap();
        table.put("y").unwrap();
        table.put("z").unwrap();

        let mut keys = Vec::new();
        for key in &table {
            keys.push(key);
        }
        keys.sort_unstable();
        assert_eq!(keys, vec!["x", "y", "z"]);
    }

    proptest! {
        #[test]
        fn test_put_then_erase_round_trip(
            keys in proptest::collection::hash_set("[a-z]{1,10}", 1..40),
            size in 1_usize..64,
        ) {
            let mut table = WordTable::with_size(size).unwrap();
            for key in &keys {
                table.put(key).unwrap();
            }
            for key in &keys {
                prop_assert!(table.erase(key).unwrap());
                prop_assert_eq!(table.find(key).unwrap(), None);
            }
            prop_assert!(table.is_empty());
        }

        #[test]
        fn test_resize_preserves_membership(
            keys in proptest::collection::vec("[a-z]{1,10}", 0..60),
            size in 1_usize..32,
            new_size in 1_usize..128,
            method in proptest::sample::select(HashCodeMethod::ALL.to_vec()),
        ) {
            let mut table = WordTable::with_size(size).unwrap();
            table.set_hash_code_method(method);
            for key in &keys {
                table.put(key).unwrap();
            }
            let len = table.len();

            table.resize(new_size).unwrap();
            prop_assert_eq!(table.len(), len);
            prop_assert_eq!(table.stats().inserts, len);
            for key in &keys {
                let index = table.find(key).unwrap();
                prop_assert!(index.is_some_and(|i| i < new_size));
            }
        }
    }
}
