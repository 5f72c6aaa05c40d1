use ratatui::{
    crossterm::event::{Event, KeyCode},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget},
};

use oxo::Game;
use oxo_types::Player;

use crate::app::Message;

pub struct BoardView {
    cells: [Option<Player>; 9],
    cursor: usize,
    latest: bool,
}

impl BoardView {
    pub fn new(game: &Game) -> Self {
        Self {
            cells: *game.current_board().cells(),
            cursor: 4,
            latest: game.is_latest(),
        }
    }

    pub fn update(&mut self, event: &Event) -> Option<Message> {
        if let Event::Key(key) = event {
            let (col, row) = (self.cursor % 3, self.cursor / 3);
            match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.cursor = row * 3 + col.saturating_sub(1);
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.cursor = row * 3 + (col + 1).min(2);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = row.saturating_sub(1) * 3 + col;
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.cursor = row.min(1) * 3 + 3 + col;
                }
                KeyCode::Enter => {
                    return Some(Message::SelectSquare(self.cursor));
                }
                _ => {}
            }
        }
        None
    }

    pub fn on_state_change(&mut self, game: &Game) {
        self.cells = *game.current_board().cells();
        self.latest = game.is_latest();
    }

    pub fn draw(&self, focused: bool) -> impl Widget + '_ {
        let mut lines = Vec::with_capacity(5);
        for row in 0..3 {
            let mut spans = Vec::with_capacity(5);
            for col in 0..3 {
                let index = row * 3 + col;
                let mark = match self.cells[index] {
                    Some(Player::X) => " X ",
                    Some(Player::O) => " O ",
                    None => "   ",
                };
                let mut style = Style::default();
                if focused && index == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(mark, style));
                if col < 2 {
                    spans.push(Span::raw("|"));
                }
            }
            lines.push(Line::from(spans));
            if row < 2 {
                lines.push(Line::raw("---+---+---"));
            }
        }
        let title = if self.latest {
            "Board"
        } else {
            "Board (viewing past move)"
        };
        let block = Block::new()
            .borders(Borders::ALL)
            .title(Line::raw(title).left_aligned());
        Paragraph::new(Text::from(lines)).centered().block(block)
    }
}
