//! Line-oriented command interpreter driving a `WordTable`
//!
//! Each script line holds a command name followed by space-delimited arguments:
//!
//! ```text
//! resize 101
//! load words.txt
//! hash_code cyclic
//! rehash
//! check teh quick brwon fox
//! stats
//! ```
//!
//! Commands that take arguments apply to each argument in turn.

use std::io::{BufRead, Write};

use log::{error, warn};

use crate::{CommandError, HashCodeMethod, WordSetExtensions, WordTable, load::normalize};

/// A parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `resize <n>...`: rebuild with `n` buckets
    Resize(Vec<String>),
    /// `load <path>...`: bulk load a word list
    Load(Vec<String>),
    /// `put <key>...`
    Put(Vec<String>),
    /// `find <key>...`: report the bucket of each key
    Find(Vec<String>),
    /// `erase <key>...`
    Erase(Vec<String>),
    /// `check <key>...`: report every key that is not in the table
    Check(Vec<String>),
    /// `hash_code <name>...`: select a hash code method
    HashCode(Vec<String>),
    /// `print`: dump every bucket
    Print,
    /// `stats`: usage statistics
    Stats,
    /// `rehash`: resize to the current size
    Rehash,
    /// A line without any command
    Empty,
    /// A command name that is not recognised
    Unknown(String),
}

impl Command {
    /// Parses one script line.
    ///
    /// The first token, lowercased, names the command. Empty tokens produced by repeated
    /// spaces are dropped and trailing whitespace is trimmed from every token.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let mut tokens = line
            .split(' ')
            .map(|token| token.trim_end_matches(|c: char| c.is_whitespace() || c.is_control()))
            .filter(|token| !token.is_empty());

        let Some(name) = tokens.next() else {
            return Self::Empty;
        };
        let args: Vec<String> = tokens.map(str::to_string).collect();

        match name.to_lowercase().as_str() {
            "resize" => Self::Resize(args),
            "load" => Self::Load(args),
            "put" => Self::Put(args),
            "find" => Self::Find(args),
            "erase" => Self::Erase(args),
            "check" => Self::Check(args),
            "hash_code" => Self::HashCode(args),
            "print" => Self::Print,
            "stats" => Self::Stats,
            "rehash" => Self::Rehash,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// Counts gathered while running a script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the script
    pub lines: usize,
    /// Commands that failed and were reported
    pub errors: usize,
}

impl RunSummary {
    /// Returns true if every command succeeded
    #[must_use]
    pub fn is_clean(self) -> bool {
        self.errors == 0
    }
}

/// Executes command scripts against a `WordTable`, writing results to `out`.
///
/// Every input line is echoed before it runs. Failed commands are reported as
/// `error: <message>` lines and execution continues, unless fail-fast is enabled.
#[derive(Debug)]
pub struct Interpreter<W> {
    /// The table every command operates on
    table: WordTable,
    /// Sink for echoed lines and command output
    out: W,
    /// Abort at the first failing command
    fail_fast: bool,
}

impl<W: Write> Interpreter<W> {
    /// Creates an interpreter over an unsized table
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { table: WordTable::new(), out, fail_fast: false }
    }

    /// Makes [`Interpreter::run`] stop at the first failing command
    #[must_use]
    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Returns the table the commands operate on
    #[must_use]
    pub fn table(&self) -> &WordTable {
        &self.table
    }

    /// Consumes the interpreter and returns the output sink
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Runs every line of `script` in order.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Io`] when reading the script or writing output fails. With
    /// fail-fast enabled, the first command error is returned as well.
    pub fn run<R: BufRead>(&mut self, script: R) -> Result<RunSummary, CommandError> {
        let mut summary = RunSummary::default();
        for line in script.lines() {
            let line = line?;
            summary.lines = summary.lines.saturating_add(1);
            writeln!(self.out, "{line}")?;

            let command = Command::parse(&line);
            if let Err(err) = self.execute(&command) {
                if self.fail_fast || matches!(err, CommandError::Io(_)) {
                    return Err(err);
                }
                error!("line {}: {err}", summary.lines);
                writeln!(self.out, "error: {err}")?;
                summary.errors = summary.errors.saturating_add(1);
            }
        }
        Ok(summary)
    }

    /// Executes a single command
    ///
    /// # Errors
    ///
    /// Returns the first failure among the command's arguments.
    pub fn execute(&mut self, command: &Command) -> Result<(), CommandError> {
        match command {
            Command::Resize(args) => {
                for arg in args {
                    let size = arg.parse::<usize>().map_err(|_| CommandError::InvalidArgument {
                        command: "resize",
                        argument: arg.clone(),
                    })?;
                    self.table.resize(size)?;
                }
            }
            Command::Load(paths) => {
                for path in paths {
                    self.table.load_path(path)?;
                }
            }
            Command::Put(keys) => {
                for key in keys {
                    self.table.put(&normalize(key))?;
                }
            }
            Command::Find(keys) => {
                for key in keys {
                    let key = normalize(key);
                    match self.table.find(&key)? {
                        Some(index) => writeln!(self.out, "{key}: found {index}")?,
                        None => writeln!(self.out, "{key}: not found")?,
                    }
                }
            }
            Command::Erase(keys) => {
                for key in keys {
                    self.table.erase(&normalize(key))?;
                }
            }
            Command::Check(keys) => {
                let misses = self.table.misspelled(keys)?;
                write!(self.out, "misspelled:")?;
                for miss in &misses {
                    write!(self.out, "\t{miss}")?;
                }
                writeln!(self.out)?;
            }
            Command::HashCode(names) => {
                for name in names {
                    match normalize(name).parse::<HashCodeMethod>() {
                        Ok(method) => self.table.set_hash_code_method(method),
                        Err(err) => warn!("{err}, keeping {}", self.table.hash_code_method()),
                    }
                }
            }
            Command::Print => write!(self.out, "{}", self.table)?,
            Command::Stats => write!(self.out, "{}", self.table.stats())?,
            Command::Rehash => self.table.rehash()?,
            Command::Empty => {}
            Command::Unknown(name) => warn!("ignoring unknown command `{name}`"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TableError;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, RunSummary) {
        let mut interpreter = Interpreter::new(Vec::new());
        let summary = interpreter.run(Cursor::new(script)).unwrap();
        (String::from_utf8(interpreter.into_inner()).unwrap(), summary)
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Command::parse("PUT Cat  dog \r"),
            Command::Put(vec!["Cat".to_string(), "dog".to_string()])
        );
        assert_eq!(Command::parse("resize 10"), Command::Resize(vec!["10".to_string()]));
        assert_eq!(Command::parse("stats extra"), Command::Stats);
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("Jump high"), Command::Unknown("jump".to_string()));
        assert_eq!(Command::parse("check"), Command::Check(Vec::new()));
    }

    #[test]
    fn test_spell_check_session() {
        let script = "resize 10\nput Cat dog\nfind cat\nfind emu\ncheck cat Emu dog\n\
                      erase dog\ncheck dog\nstats\n";
        let (output, summary) = run_script(script);

        let expected = "resize 10\nput Cat dog\nfind cat\ncat: found 1\nfind emu\nemu: not found\n\
                        check cat Emu dog\nmisspelled:\temu\nerase dog\ncheck dog\nmisspelled:\tdog\n\
                        stats\nsize:\t\t\t10\ninserts:\t\t2\nload factor:\t0.2\ncollisions:\t\t0\n\
                        max. bucket:\t1\n";
        assert_eq!(output, expected);
        assert_eq!(summary, RunSummary { lines: 8, errors: 0 });
        assert!(summary.is_clean());
    }

    #[test]
    fn test_errors_are_reported_and_skipped() {
        let script = "put cat\nresize abc\nresize 0\nresize 1\nhash_code sha1\nfrobnicate\nput cat\nprint\n";
        let (output, summary) = run_script(script);

        let expected = "put cat\nerror: hash table has no buckets, resize it before use\n\
                        resize abc\nerror: invalid argument `abc` for `resize`\n\
                        resize 0\nerror: invalid table size 0, size must be positive\n\
                        resize 1\nhash_code sha1\nfrobnicate\nput cat\nprint\n0:\tcat\t\n";
        assert_eq!(output, expected);
        assert_eq!(summary, RunSummary { lines: 8, errors: 3 });
        assert!(!summary.is_clean());
    }

    #[test]
    fn test_fail_fast_stops_at_first_error() {
        let mut interpreter = Interpreter::new(Vec::new()).fail_fast(true);
        let result = interpreter.run(Cursor::new("resize 0\nresize 4\n"));

        assert!(matches!(
            result,
            Err(CommandError::Table(TableError::InvalidSize { requested: 0 }))
        ));
        assert_eq!(interpreter.table().size(), 0);
        assert_eq!(String::from_utf8(interpreter.into_inner()).unwrap(), "resize 0\n");
    }

    #[test]
    fn test_hash_code_switch_and_rehash() {
        let script = "resize 10\nput ab\nhash_code POLY\nfind ab\nrehash\nfind ab\n";
        let (output, summary) = run_script(script);

        assert!(output.contains("find ab\nab: not found\nrehash\nfind ab\nab: found 8\n"));
        assert!(summary.is_clean());
    }

    #[test]
    fn test_missing_word_list_is_not_fatal() {
        let (output, summary) = run_script("resize 2\nload no/such/words.txt\nput ok\nfind ok\n");

        assert!(output.contains("error: cannot open file no/such/words.txt\n"));
        // simple("ok") = 26 -> 285 % 2
        assert!(output.ends_with("find ok\nok: found 1\n"));
        assert_eq!(summary.errors, 1);
    }

    #[test]
    fn test_check_without_arguments() {
        let (output, _) = run_script("resize 3\ncheck\n");
        assert_eq!(output, "resize 3\ncheck\nmisspelled:\n");
    }
}
