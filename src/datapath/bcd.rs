//! Binary to two-digit decimal conversion.

use crate::datapath::error::DatapathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest value the 5-bit converter input can carry.
pub const MAX_BINARY: u8 = 31;

/// Two decimal digits: `tens` in `0..=3`, `ones` in `0..=9`.
///
/// Only [`convert`] builds one, and deserialization goes through the same
/// range checks, so the digits always spell a value in `0..=MAX_BINARY`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBcd")]
pub struct Bcd {
    tens: u8,
    ones: u8,
}

#[derive(Deserialize)]
struct RawBcd {
    tens: u8,
    ones: u8,
}

impl TryFrom<RawBcd> for Bcd {
    type Error = DatapathError;

    fn try_from(raw: RawBcd) -> Result<Self, Self::Error> {
        for digit in [raw.tens, raw.ones] {
            if digit > 9 {
                return Err(DatapathError::DigitOutOfRange(digit));
            }
        }
        convert(raw.tens * 10 + raw.ones)
    }
}

impl Bcd {
    /// Tens digit.
    pub const fn tens(&self) -> u8 {
        self.tens
    }

    /// Ones digit.
    pub const fn ones(&self) -> u8 {
        self.ones
    }

    /// The binary value these digits represent.
    pub const fn value(&self) -> u8 {
        self.tens * 10 + self.ones
    }
}

impl fmt::Display for Bcd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tens, self.ones)
    }
}

/// Split a 5-bit binary value into tens and ones digits.
///
/// # Example
///
/// ```rust
/// use button_sequencer::datapath::bcd::convert;
///
/// let bcd = convert(27).unwrap();
/// assert_eq!((bcd.tens(), bcd.ones()), (2, 7));
/// assert_eq!(bcd.value(), 27);
/// assert!(convert(32).is_err());
/// ```
pub fn convert(binary: u8) -> Result<Bcd, DatapathError> {
    if binary > MAX_BINARY {
        return Err(DatapathError::BinaryOutOfRange(binary));
    }
    Ok(Bcd {
        tens: binary / 10,
        ones: binary % 10,
    })
}
