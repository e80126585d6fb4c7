use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, notice: Option<&str>) -> Paragraph<'static> {
        let hints = " Ctrl+U: Clear │ Ctrl+Y: Copy sprite URL │ Esc: Quit";
        let right = match notice {
            Some(notice) => format!("{} ", notice),
            None => format!("v{} ", VERSION),
        };

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let right_width = right.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(right_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints.to_string(), text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(right, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
