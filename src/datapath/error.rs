//! Datapath error types.

use crate::datapath::bcd::MAX_BINARY;
use thiserror::Error;

/// Inputs outside the range a datapath block accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DatapathError {
    /// Converter input does not fit in 5 bits
    #[error("binary value {0} does not fit in 5 bits (max {max})", max = MAX_BINARY)]
    BinaryOutOfRange(u8),

    /// Decoder input is not a decimal digit
    #[error("{0} is not a decimal digit")]
    DigitOutOfRange(u8),
}
