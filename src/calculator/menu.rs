use std::fmt;
use std::str::FromStr;

use crate::gates::gate::Gate;

/// A calculator menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Operation(Gate),
    Exit,
}

impl MenuChoice {
    /// Entries in menu order; entry `i` is selected by typing `i + 1`.
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Operation(Gate::And),
        MenuChoice::Operation(Gate::Or),
        MenuChoice::Operation(Gate::Not),
        MenuChoice::Operation(Gate::Xor),
        MenuChoice::Operation(Gate::Nand),
        MenuChoice::Operation(Gate::Nor),
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> usize {
        MenuChoice::ALL
            .iter()
            .position(|choice| choice == self)
            .map_or(0, |i| i + 1)
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Operation(gate) => write!(f, "{gate} Operation"),
            MenuChoice::Exit => f.write_str("Exit Program"),
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<MenuChoice, ()> {
        let number: usize = s.trim().parse().map_err(|_| ())?;
        number
            .checked_sub(1)
            .and_then(|i| MenuChoice::ALL.get(i))
            .copied()
            .ok_or(())
    }
}
