//! Stateless datapath blocks that surround the controller.
//!
//! The controller only decides when operands are captured and when the
//! result is shown. These blocks turn a captured binary value into the
//! digits and segment patterns a two-digit display needs.

pub mod bcd;
pub mod error;
pub mod seven_segment;

pub use bcd::{convert, Bcd};
pub use error::DatapathError;
pub use seven_segment::{decode, Segment, SegmentPattern, SevenSegmentDisplay};

/// Convert a 5-bit value straight to `(tens, ones)` segment patterns.
///
/// # Example
///
/// ```rust
/// use button_sequencer::datapath::{decode, display_patterns};
///
/// let (tens, ones) = display_patterns(19).unwrap();
/// assert_eq!(tens, decode(1).unwrap());
/// assert_eq!(ones, decode(9).unwrap());
/// ```
pub fn display_patterns(binary: u8) -> Result<(SegmentPattern, SegmentPattern), DatapathError> {
    let digits = convert(binary)?;
    Ok((decode(digits.tens())?, decode(digits.ones())?))
}
