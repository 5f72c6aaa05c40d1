use ratatui::{
    crossterm::event::{Event, KeyCode},
    text::Line,
    widgets::{Block, Borders, List, Widget},
};

use oxo::Game;

use crate::app::Message;

pub struct HistoryView {
    len: usize,
    step: usize,
    selected: usize,
}

impl HistoryView {
    pub fn new(game: &Game) -> Self {
        Self {
            len: game.history().len(),
            step: game.step(),
            selected: game.step(),
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => {
                    self.selected = (self.selected + 1).min(self.len - 1);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Enter => {
                    // The row for the current step acts as a disabled button.
                    if self.selected != self.step {
                        return Some(Message::ShowStep(self.selected));
                    }
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &Game) {
        self.len = game.history().len();
        self.step = game.step();
        self.selected = game.step();
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw("History").left_aligned());
        let items = (0..self.len).map(|index| {
            let label = if index == 0 {
                "Go to game start".to_owned()
            } else {
                format!("Go to move #{index}")
            };
            format!(
                "{}{}{}",
                if focused && index == self.selected {
                    '>'
                } else {
                    ' '
                },
                label,
                if index == self.step { " (current)" } else { "" },
            )
        });
        List::new(items).block(block)
    }
}
