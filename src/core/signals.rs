//! Boundary signal values sampled and produced by the controller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment-driven input levels, sampled once per tick.
///
/// `rst_n` is active-low: `false` means reset is asserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Inputs {
    /// Active-low synchronous reset.
    pub rst_n: bool,
    /// Raw, unfiltered button level.
    pub button: bool,
}

impl Inputs {
    /// Inputs with reset released and the given button level.
    pub const fn running(button: bool) -> Self {
        Self { rst_n: true, button }
    }

    /// Inputs with reset asserted and the given button level.
    pub const fn resetting(button: bool) -> Self {
        Self {
            rst_n: false,
            button,
        }
    }

    /// True when the active-low reset is being driven.
    pub const fn reset_asserted(&self) -> bool {
        !self.rst_n
    }
}

impl Default for Inputs {
    fn default() -> Self {
        Self::running(false)
    }
}

/// The three pulse outputs of the controller.
///
/// Produced fresh on every evaluation and never stored by the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outputs {
    /// Capture-operand-A request (`save_A`).
    pub save_a: bool,
    /// Capture-operand-B request (`save_B`).
    pub save_b: bool,
    /// Display-result request (`show_result`).
    pub show_result: bool,
}

impl Outputs {
    /// All pulses deasserted.
    pub const NONE: Self = Self {
        save_a: false,
        save_b: false,
        show_result: false,
    };

    /// Build outputs from a `(save_A, save_B, show_result)` tuple.
    pub const fn from_tuple((save_a, save_b, show_result): (bool, bool, bool)) -> Self {
        Self {
            save_a,
            save_b,
            show_result,
        }
    }

    /// Outputs in boundary order: `(save_A, save_B, show_result)`.
    pub const fn as_tuple(&self) -> (bool, bool, bool) {
        (self.save_a, self.save_b, self.show_result)
    }

    /// Outputs as single-bit signal values, in boundary order.
    pub const fn as_bits(&self) -> (u8, u8, u8) {
        (
            self.save_a as u8,
            self.save_b as u8,
            self.show_result as u8,
        )
    }

    /// Number of pulses currently asserted.
    pub const fn asserted_count(&self) -> usize {
        self.save_a as usize + self.save_b as usize + self.show_result as usize
    }

    /// True when at most one pulse is asserted.
    pub const fn is_exclusive(&self) -> bool {
        self.asserted_count() <= 1
    }

    /// True when no pulse is asserted.
    pub const fn is_idle(&self) -> bool {
        self.asserted_count() == 0
    }
}

impl fmt::Display for Outputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (a, b, r) = self.as_bits();
        f.pad(&format!("({a},{b},{r})"))
    }
}
