use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{DEX_RED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("⬤ ", Style::default().fg(DEX_RED)),
            Span::styled("dexterm", Style::default().fg(HEADER_TEXT)),
            Span::styled("  │  ", Style::default().fg(MUTED_TEXT)),
            Span::styled("creature catalog lookup", Style::default().fg(MUTED_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
