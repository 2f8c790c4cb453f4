//! Decimal digit to seven-segment pattern decoding.

use crate::datapath::error::DatapathError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the seven display segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
}

impl Segment {
    pub const ALL: [Segment; 7] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
    ];

    /// Bit position in the pattern: `a` is bit 6, `g` is bit 0.
    const fn bit(self) -> u8 {
        6 - self as u8
    }
}

/// Active-high 7-bit segment pattern, `a` in the most significant bit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SegmentPattern(u8);

impl SegmentPattern {
    /// All segments off.
    pub const BLANK: Self = Self(0);

    /// Raw pattern bits (`0b0abcdefg`).
    pub const fn bits(&self) -> u8 {
        self.0
    }

    /// Whether `segment` is lit.
    pub const fn segment(&self, segment: Segment) -> bool {
        self.0 & (1 << segment.bit()) != 0
    }

    /// Number of lit segments.
    pub const fn lit(&self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for SegmentPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:07b}", self.0)
    }
}

const PATTERNS: [u8; 10] = [
    0b111_1110, // 0
    0b011_0000, // 1
    0b110_1101, // 2
    0b111_1001, // 3
    0b011_0011, // 4
    0b101_1011, // 5
    0b101_1111, // 6
    0b111_0000, // 7
    0b111_1111, // 8
    0b111_1011, // 9
];

/// Look up the segment pattern for a decimal digit.
///
/// # Example
///
/// ```rust
/// use button_sequencer::datapath::seven_segment::decode;
///
/// assert_eq!(decode(5).unwrap().to_string(), "1011011");
/// assert!(decode(10).is_err());
/// ```
pub fn decode(digit: u8) -> Result<SegmentPattern, DatapathError> {
    PATTERNS
        .get(usize::from(digit))
        .map(|&bits| SegmentPattern(bits))
        .ok_or(DatapathError::DigitOutOfRange(digit))
}

/// Registered seven-segment driver.
///
/// The `digit`/`update` pair is sampled on the falling clock edge; the
/// decoded pattern appears on the following rising edge. With `update`
/// low the previous pattern is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SevenSegmentDisplay {
    digit: u8,
    update: bool,
    seg: SegmentPattern,
}

impl SevenSegmentDisplay {
    /// A blank display with nothing sampled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sample the input pair.
    pub fn falling_edge(&mut self, digit: u8, update: bool) {
        self.digit = digit;
        self.update = update;
    }

    /// Commit the sampled digit if `update` was high.
    ///
    /// An out-of-range digit leaves the displayed pattern unchanged.
    pub fn rising_edge(&mut self) -> Result<SegmentPattern, DatapathError> {
        if self.update {
            self.seg = decode(self.digit)?;
        }
        Ok(self.seg)
    }

    /// Pattern currently driven on the segment outputs.
    pub fn seg(&self) -> SegmentPattern {
        self.seg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [&str; 10] = [
        "1111110", "0110000", "1101101", "1111001", "0110011", "1011011", "1011111", "1110000",
        "1111111", "1111011",
    ];

    #[test]
    fn decodes_every_digit() {
        for (digit, expected) in EXPECTED.iter().enumerate() {
            assert_eq!(decode(digit as u8).unwrap().to_string(), *expected);
        }
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(decode(10), Err(DatapathError::DigitOutOfRange(10)));
        assert_eq!(decode(u8::MAX), Err(DatapathError::DigitOutOfRange(u8::MAX)));
    }

    #[test]
    fn segment_accessors() {
        let one = decode(1).unwrap();
        assert!(!one.segment(Segment::A));
        assert!(one.segment(Segment::B));
        assert!(one.segment(Segment::C));
        assert_eq!(one.lit(), 2);

        let eight = decode(8).unwrap();
        assert!(Segment::ALL.iter().all(|&s| eight.segment(s)));
    }

    #[test]
    fn display_starts_blank() {
        let display = SevenSegmentDisplay::new();
        assert_eq!(display.seg(), SegmentPattern::BLANK);
    }

    #[test]
    fn pattern_appears_on_rising_edge_and_holds() {
        let mut display = SevenSegmentDisplay::new();
        display.falling_edge(5, true);
        assert_eq!(display.seg(), SegmentPattern::BLANK);

        assert_eq!(display.rising_edge().unwrap(), decode(5).unwrap());
        assert_eq!(display.rising_edge().unwrap(), decode(5).unwrap());
    }

    #[test]
    fn update_low_holds_previous_pattern() {
        let mut display = SevenSegmentDisplay::new();
        display.falling_edge(3, true);
        display.rising_edge().unwrap();
        display.falling_edge(8, false);
        assert_eq!(display.rising_edge().unwrap(), decode(3).unwrap());
    }

    #[test]
    fn out_of_range_digit_keeps_pattern() {
        let mut display = SevenSegmentDisplay::new();
        display.falling_edge(2, true);
        display.rising_edge().unwrap();
        display.falling_edge(12, true);
        assert_eq!(
            display.rising_edge(),
            Err(DatapathError::DigitOutOfRange(12))
        );
        assert_eq!(display.seg(), decode(2).unwrap());
    }
}
