use serde::{Deserialize, Serialize};

use crate::{player::Player, status::Status};

/// The 8 winning triples: rows, columns, diagonals.
/// Enumeration order is fixed so winner detection is deterministic.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One game position. Cells are row-major, `None` is empty.
///
/// Serializes as a 9-element array of `null`/`"X"`/`"O"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board([Option<Player>; 9]);

impl Board {
    #[must_use]
    pub const fn empty() -> Self {
        Self([None; 9])
    }

    #[must_use]
    pub fn cell(&self, index: usize) -> Option<Player> {
        self.0[index]
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Player>; 9] {
        &self.0
    }

    /// Copy-and-set. Boards stored in a history are never mutated in place.
    #[must_use]
    pub fn with_move(&self, index: usize, player: Player) -> Self {
        let mut cells = self.0;
        cells[index] = Some(player);
        Self(cells)
    }

    #[must_use]
    pub fn filled(&self) -> usize {
        self.0.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// X moves on even fill counts, O on odd.
    #[must_use]
    pub fn next_player(&self) -> Player {
        if self.filled() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// First triple in `LINES` held entirely by one player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        for [a, b, c] in LINES {
            if let Some(p) = self.0[a] {
                if self.0[b] == Some(p) && self.0[c] == Some(p) {
                    return Some(p);
                }
            }
        }
        None
    }

    #[must_use]
    pub fn status(&self) -> Status {
        if let Some(winner) = self.winner() {
            Status::Winner(winner)
        } else if self.is_full() {
            Status::Scratch
        } else {
            Status::Next(self.next_player())
        }
    }
}

impl From<[Option<Player>; 9]> for Board {
    fn from(cells: [Option<Player>; 9]) -> Self {
        Self(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(xs: &[usize], os: &[usize]) -> Board {
        let mut board = Board::empty();
        for &i in xs {
            board = board.with_move(i, Player::X);
        }
        for &i in os {
            board = board.with_move(i, Player::O);
        }
        board
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(Board::empty().winner(), None);
    }

    #[test]
    fn next_player_alternates_by_parity() {
        let mut board = Board::empty();
        for i in 0..9 {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(board.next_player(), expected);
            board = board.with_move(i, expected);
        }
    }

    #[test]
    fn with_move_leaves_original_untouched() {
        let board = Board::empty();
        let moved = board.with_move(4, Player::X);
        assert_eq!(board.cell(4), None);
        assert_eq!(moved.cell(4), Some(Player::X));
    }

    #[test]
    fn winner_on_each_line() {
        for line in LINES {
            let board = board_with(&line, &[]);
            assert_eq!(board.winner(), Some(Player::X), "line {line:?}");
        }
    }

    #[test]
    fn full_board_without_line_is_scratch() {
        // X X O
        // O O X
        // X X O
        let board = board_with(&[0, 1, 5, 6, 7], &[2, 3, 4, 8]);
        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert_eq!(board.status(), Status::Scratch);
    }

    #[test]
    fn status_reports_winner_then_next_player() {
        let board = board_with(&[0, 1, 2], &[3, 4]);
        assert_eq!(board.status(), Status::Winner(Player::X));
        let board = board_with(&[0], &[]);
        assert_eq!(board.status(), Status::Next(Player::O));
    }
}
