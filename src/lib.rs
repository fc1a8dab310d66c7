//! # Word Table
//!
//! A set of words backed by a fixed-bucket hash table with separate chaining.
//!
//! This crate provides:
//!
//! - `WordTable`: the table itself, with find, put, erase, bulk load, manual resize and
//!   rehash, and cumulative usage statistics
//! - `HashCodeMethod`: four selectable hash code methods whose codes are compressed into
//!   the bucket range
//! - `Interpreter`: a line-oriented command interpreter used by the `spell_checker` binary
//!
//! The table starts without buckets, so size it with `resize` before inserting keys.
//!
//! ## Basic Usage
//!
//! ```rust
//! use wordtable::{HashCodeMethod, WordSetExtensions, WordTable};
//!
//! // Create a table and give it buckets
//! let mut table = WordTable::new();
//! table.resize(10)?;
//!
//! // Insert keys, duplicates are absorbed
//! table.put("cat")?;
//! table.put("dog")?;
//! table.put("cat")?;
//! assert_eq!(table.len(), 2);
//!
//! // Look up keys
//! assert_eq!(table.find("cat")?, Some(1));
//! assert_eq!(table.find("emu")?, None);
//!
//! // Remove keys and spell check
//! table.erase("dog")?;
//! assert_eq!(table.misspelled(["cat", "dog"])?, vec!["dog"]);
//!
//! // Switching methods leaves keys in place until a rehash
//! table.set_hash_code_method(HashCodeMethod::Poly);
//! table.rehash()?;
//! assert!(table.contains("cat"));
//! assert_eq!(table.stats().inserts, 1);
//! # Ok::<(), wordtable::TableError>(())
//! ```
//!
//! ## Command Scripts
//!
//! ```rust
//! use std::io::Cursor;
//! use wordtable::Interpreter;
//!
//! let mut interpreter = Interpreter::new(Vec::new());
//! let summary = interpreter.run(Cursor::new("resize 10\nput cat\ncheck cat dog\n"))?;
//! assert!(summary.is_clean());
//!
//! let output = String::from_utf8(interpreter.into_inner())?;
//! assert!(output.ends_with("misspelled:\tdog\n"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

/// Module implementing the line-oriented command interpreter
mod command;
/// Error types for the table and the interpreter
mod error;
/// Module implementing the hash code methods and compression
mod hash_code;
/// Bulk loading of word lists
mod load;
/// Logger setup for the binaries
pub mod logger;
/// Usage statistics
mod stats;
/// Utility functions and traits for the word table
mod utils;
/// Module implementing the chained hash table
mod word_table;

pub use command::{Command, Interpreter, RunSummary};
pub use error::{CommandError, TableError};
pub use hash_code::{HashCodeMethod, compress};
pub use load::normalize;
pub use stats::TableStats;
pub use utils::{WordSetExtensions, from_words};
pub use word_table::{Bucket, Iter, WordTable};
