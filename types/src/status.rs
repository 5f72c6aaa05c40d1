use std::fmt::Display;

use crate::player::Player;

/// Summary of a position, recomputed from the board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Winner(Player),
    Scratch,
    Next(Player),
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(p) => write!(f, "Winner: {p}"),
            Status::Scratch => write!(f, "Scratch"),
            Status::Next(p) => write!(f, "Next player: {p}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts() {
        assert_eq!(Status::Winner(Player::X).to_string(), "Winner: X");
        assert_eq!(Status::Scratch.to_string(), "Scratch");
        assert_eq!(Status::Next(Player::O).to_string(), "Next player: O");
    }
}
