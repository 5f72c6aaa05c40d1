use std::{io, time::Duration};

use ratatui::{
    crossterm::event::{self, Event, KeyCode},
    layout::{Constraint, Layout},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    DefaultTerminal, Frame,
};

use oxo::{
    store::{Codec, Store},
    Game, Storage,
};

use crate::{board::BoardView, history::HistoryView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Board,
    History,
}

pub enum Message {
    Quit,
    SelectSquare(usize),
    ShowStep(usize),
    Restart,
}

pub struct StorageKeys {
    pub history: String,
    pub step: String,
}

pub struct App<S, C> {
    game: Game,
    storage: Storage<S, C>,
    keys: StorageKeys,
    focus: Focus,
    board_view: BoardView,
    history_view: HistoryView,
}

impl<S: Store, C: Codec> App<S, C> {
    pub fn new(game: Game, storage: Storage<S, C>, keys: StorageKeys) -> Self {
        let board_view = BoardView::new(&game);
        let history_view = HistoryView::new(&game);
        Self {
            game,
            storage,
            keys,
            focus: Focus::Board,
            board_view,
            history_view,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw(frame))?;
            if let Some(message) = self.update() {
                match message {
                    Message::Quit => break,
                    Message::SelectSquare(index) => {
                        // Moves are reachable from the board only on the
                        // latest step; viewing the past never mutates it.
                        if self.game.is_latest() && self.game.select_square(index) {
                            self.on_state_change();
                            self.persist();
                        }
                    }
                    Message::ShowStep(step) => {
                        self.game.show_step(step);
                        self.on_state_change();
                        self.persist();
                    }
                    Message::Restart => {
                        self.game.restart();
                        self.on_state_change();
                        self.persist();
                    }
                }
            }
        }
        Ok(())
    }

    pub fn update(&mut self) -> Option<Message> {
        if event::poll(Duration::from_millis(100)).ok()? {
            let event = event::read().ok()?;
            let mut pass_down = false;
            if let Event::Key(key_ev) = event {
                match key_ev.code {
                    KeyCode::Char('q') => return Some(Message::Quit),
                    KeyCode::Char('r') => return Some(Message::Restart),
                    KeyCode::Tab => {
                        self.focus = match self.focus {
                            Focus::Board => Focus::History,
                            Focus::History => Focus::Board,
                        };
                    }
                    _ => {
                        pass_down = true;
                    }
                }
            }
            if pass_down {
                return match self.focus {
                    Focus::Board => self.board_view.update(&event),
                    Focus::History => self.history_view.update(&event),
                };
            }
        }
        None
    }

    /// Save after commit: the game already holds the new state when the
    /// store is written, never the other way round.
    fn persist(&mut self) {
        if let Err(err) = self.storage.save(&self.keys.history, &self.game.history()) {
            tracing::warn!(%err, "history not saved");
        }
        if let Err(err) = self.storage.save(&self.keys.step, &self.game.step()) {
            tracing::warn!(%err, "step not saved");
        }
    }

    fn on_state_change(&mut self) {
        self.board_view.on_state_change(&self.game);
        self.history_view.on_state_change(&self.game);
    }

    fn draw(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([Constraint::Min(0), Constraint::Length(3)]);
        let [main, status] = vertical.areas(frame.area());
        let horizontal =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]);
        let [board, history] = horizontal.areas(main);

        frame.render_widget(self.board_view.draw(self.focus == Focus::Board), board);
        frame.render_widget(self.history_view.draw(self.focus == Focus::History), history);

        let block = Block::new().borders(Borders::ALL);
        let text = Line::raw(format!(
            "{}   [enter] play  [tab] focus  [r] restart  [q] quit",
            self.game.status()
        ));
        frame.render_widget(Paragraph::new(text).block(block), status);
    }
}
