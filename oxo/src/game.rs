use oxo_types::{Board, Player, Status};

/// Game state: an append-only log of positions plus a read cursor.
///
/// `history[0]` is always the empty board; every later entry differs from
/// its predecessor by exactly one cell. `step` selects which entry is
/// "current". All operations are total; illegal moves are silently ignored.
/// History and step persist under separate store keys, so the struct itself
/// never touches storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    history: Vec<Board>,
    step: usize,
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            step: 0,
        }
    }

    /// Rebuilds a game from persisted parts.
    ///
    /// Persisted text can predate a crash or have been hand-edited, so the
    /// invariants are restored here rather than assumed: an empty history
    /// becomes the initial seed and an out-of-range step is clamped to the
    /// last entry.
    #[must_use]
    pub fn from_parts(history: Vec<Board>, step: usize) -> Self {
        if history.is_empty() {
            return Self::new();
        }
        let step = step.min(history.len() - 1);
        Self { history, step }
    }

    #[must_use]
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn current_board(&self) -> &Board {
        &self.history[self.step]
    }

    #[must_use]
    pub fn is_latest(&self) -> bool {
        self.step == self.history.len() - 1
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.current_board().winner()
    }

    #[must_use]
    pub fn next_player(&self) -> Player {
        self.current_board().next_player()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.current_board().status()
    }

    /// Plays the next player's mark at `index`.
    ///
    /// No-op when the game is already won, the cell is occupied, or the
    /// index is out of range. Returns whether the move was applied.
    pub fn select_square(&mut self, index: usize) -> bool {
        let board = *self.current_board();
        if index >= 9 || board.winner().is_some() || board.cell(index).is_some() {
            return false;
        }
        let next = board.with_move(index, board.next_player());
        // The cursor must land on the entry about to be appended, so it is
        // taken from the length before the push.
        self.step = self.history.len();
        self.history.push(next);
        tracing::debug!(index, step = self.step, "move played");
        true
    }

    /// Moves the read cursor. Callers supply an index within the history;
    /// the engine does not clamp.
    pub fn show_step(&mut self, step: usize) {
        debug_assert!(step < self.history.len());
        self.step = step;
    }

    /// Back to a single empty board.
    pub fn restart(&mut self) {
        self.history = vec![Board::empty()];
        self.step = 0;
        tracing::debug!("game restarted");
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
