//! Hash code methods and the compression step that maps a code to a bucket

use std::{fmt, str::FromStr};

use crate::TableError;

/// Base of the polynomial accumulation
const POLY_BASE: i32 = 33;
/// Offset that turns a lowercase ASCII letter into its alphabet position ('a' -> 1)
const LETTER_OFFSET: i32 = 96;
/// Offset applied to each character by the custom exponential sum
const CUSTOM_OFFSET: i32 = 92;
/// Rotation applied to the cyclic accumulator before each character
const CYCLIC_SHIFT: u32 = 5;

/// Multiplier of the MAD compression `|a * code + b| mod p`
const SCALE: i64 = 7;
/// Shift of the MAD compression
const SHIFT: i64 = 103;
/// Prime of the MAD compression
const PRIME: u64 = 109_345_121;

/// The method used to turn a key into an integer hash code.
///
/// Every method is deterministic. Codes may be negative and wrap on overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HashCodeMethod {
    /// Polynomial accumulation of alphabet positions with base 33
    Poly,
    /// Linear sum of alphabet positions
    #[default]
    Simple,
    /// 5-bit cyclic shift of a 32-bit word, adding each character code
    Cyclic,
    /// Sum of `(c - 92)` raised to a decreasing exponent
    Custom,
}

impl HashCodeMethod {
    /// All methods, in the order they are reported
    pub const ALL: [Self; 4] = [Self::Poly, Self::Simple, Self::Cyclic, Self::Custom];

    /// Computes the hash code of `key` with this method
    #[must_use]
    pub fn code(self, key: &str) -> i32 {
        match self {
            Self::Poly => poly(key),
            Self::Simple => simple(key),
            Self::Cyclic => cyclic(key),
            Self::Custom => custom(key),
        }
    }

    /// The name accepted by `FromStr` and the `hash_code` command
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Poly => "poly",
            Self::Simple => "simple",
            Self::Cyclic => "cyclic",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for HashCodeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashCodeMethod {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TableError::UnknownHashCode(s.to_string()))
    }
}

/// Position of a lowercase letter in the alphabet
fn letter_value(byte: u8) -> i32 {
    i32::from(byte).wrapping_sub(LETTER_OFFSET)
}

/// Exponent for the first character of a key of `len` characters
fn exponent(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Polynomial accumulation, highest power first
fn poly(key: &str) -> i32 {
    let mut power = exponent(key.len()).saturating_sub(1);
    let mut sum: i32 = 0;
    for byte in key.bytes() {
        sum = sum.wrapping_add(letter_value(byte).wrapping_mul(POLY_BASE.wrapping_pow(power)));
        power = power.saturating_sub(1);
    }
    sum
}

/// Linear sum of alphabet positions
fn simple(key: &str) -> i32 {
    key.bytes().fold(0_i32, |sum, byte| sum.wrapping_add(letter_value(byte)))
}

/// Cyclic shift hash, reinterpreting the final word as signed
#[allow(clippy::cast_possible_wrap)]
fn cyclic(key: &str) -> i32 {
    let word = key
        .bytes()
        .fold(0_u32, |sum, byte| sum.rotate_left(CYCLIC_SHIFT).wrapping_add(u32::from(byte)));
    word as i32
}

/// Exponential sum with the exponent counting down from the key length
fn custom(key: &str) -> i32 {
    let mut power = exponent(key.len());
    let mut sum: i32 = 0;
    for byte in key.bytes() {
        sum = sum.wrapping_add(i32::from(byte).wrapping_sub(CUSTOM_OFFSET).wrapping_pow(power));
        power = power.saturating_sub(1);
    }
    sum
}

/// Compresses a hash code into a bucket index in `[0, size)`.
///
/// Uses the MAD method `(|7 * code + 103| mod 109345121) mod size`.
///
/// # Errors
///
/// Returns [`TableError::Unsized`] when `size` is zero.
#[allow(clippy::cast_possible_truncation)]
pub fn compress(code: i32, size: usize) -> Result<usize, TableError> {
    // |7 * i32| + 103 stays far inside i64
    let scaled = SCALE.saturating_mul(i64::from(code)).saturating_add(SHIFT);
    let reduced = scaled.unsigned_abs() % PRIME;
    // `reduced` is below PRIME, which fits in any supported usize
    (reduced as usize).checked_rem(size).ok_or(TableError::Unsized)
}
