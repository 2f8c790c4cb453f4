//! Boundary signal table.
//!
//! Names, order and widths match the signals a verification environment
//! binds to, so traces and reports can use the exact port names.

use serde::{Deserialize, Serialize};

/// Signal direction as seen from the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    In,
    Out,
}

/// One boundary signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Port {
    pub name: &'static str,
    pub direction: Direction,
    pub width: u8,
}

impl Port {
    const fn new(name: &'static str, direction: Direction) -> Self {
        Self {
            name,
            direction,
            width: 1,
        }
    }

    /// Find a port by its exact name.
    pub fn lookup(name: &str) -> Option<&'static Port> {
        PORTS.iter().find(|p| p.name == name)
    }
}

pub const CLK: Port = Port::new("clk", Direction::In);
pub const RST_N: Port = Port::new("rst_n", Direction::In);
pub const BUTTON: Port = Port::new("button", Direction::In);
pub const SAVE_A: Port = Port::new("save_A", Direction::Out);
pub const SAVE_B: Port = Port::new("save_B", Direction::Out);
pub const SHOW_RESULT: Port = Port::new("show_result", Direction::Out);

/// All ports in declaration order.
pub static PORTS: [Port; 6] = [CLK, RST_N, BUTTON, SAVE_A, SAVE_B, SHOW_RESULT];
