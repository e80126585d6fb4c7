use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Creature;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::search::SearchViewState;
use crate::ui::theme::{type_color, DEX_RED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, STATUS_ERROR};

const PROMPT: &str = "> ";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, search, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    draw_search_box(frame, app, search);

    frame.render_widget(Clear, body);
    match app.search_view() {
        SearchViewState::Welcome => draw_welcome(frame, body),
        SearchViewState::Loading { term } => draw_loading(frame, term, body),
        SearchViewState::Error { message } => draw_error(frame, message, body),
        SearchViewState::Result { creature } => draw_result(frame, creature, body),
    }

    frame.render_widget(Footer::new().widget(footer, app.notice()), footer);
}

fn draw_search_box(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(PROMPT, Style::default().fg(MUTED_TEXT)),
        Span::styled(
            app.search_term().to_string(),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);

    let widget = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER))
            .title(" Search "),
    );
    frame.render_widget(widget, area);

    if area.width > 2 && area.height > 2 {
        let term_width = app.search_term().chars().count() as u16;
        let x = (area.x + 1 + PROMPT.len() as u16 + term_width).min(area.x + area.width - 2);
        frame.set_cursor_position((x, area.y + 1));
    }
}

fn draw_welcome(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the dex.",
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Start typing a creature name above.",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            "  The lookup fires once you pause for a moment.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(body_panel(lines, None), area);
}

fn draw_loading(frame: &mut Frame<'_>, term: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Searching for \"{}\"...", term),
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(body_panel(lines, None), area);
}

fn draw_error(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "  Try another name.",
            Style::default().fg(MUTED_TEXT),
        )),
    ];
    frame.render_widget(body_panel(lines, Some(" Error ")), area);
}

fn draw_result(frame: &mut Frame<'_>, creature: &Creature, area: Rect) {
    let title_spans = vec![
        Span::styled(
            format!("  {} ", creature.display_name()),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(creature.id_display(), Style::default().fg(DEX_RED)),
    ];

    let mut type_spans = vec![Span::styled("  Types:     ", Style::default().fg(MUTED_TEXT))];
    for name in &creature.types {
        type_spans.push(Span::styled(
            format!(" {} ", name),
            Style::default()
                .bg(type_color(name))
                .fg(Color::Rgb(0x11, 0x11, 0x11)),
        ));
        type_spans.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(""),
        Line::from(title_spans),
        Line::from(""),
        Line::from(type_spans),
        Line::from(vec![
            Span::styled("  Height:    ", Style::default().fg(MUTED_TEXT)),
            Span::styled(creature.height_display(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("  Weight:    ", Style::default().fg(MUTED_TEXT)),
            Span::styled(creature.weight_display(), Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(vec![
            Span::styled("  Abilities: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                creature.abilities.join(", "),
                Style::default().fg(HEADER_TEXT),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Sprite:    ", Style::default().fg(MUTED_TEXT)),
            Span::styled(creature.image_url.clone(), Style::default().fg(MUTED_TEXT)),
        ]),
    ];
    frame.render_widget(body_panel(lines, None), area);
}

fn body_panel(lines: Vec<Line<'static>>, title: Option<&'static str>) -> Paragraph<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if let Some(title) = title {
        block = block.title(title);
    }
    Paragraph::new(lines).wrap(Wrap { trim: false }).block(block)
}
