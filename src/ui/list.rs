//! Master list rendering: the catalog grouped into altitude sections.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::presenter::ListPresenter;
use crate::theme::{
    BG_HIGHLIGHT, BORDER_SUBTLE, SKY_DIM, SKY_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

/// Build the list screen's lines and report which line holds the selection
/// cursor (for scrolling).
pub fn list_lines(app: &App) -> (Vec<Line<'static>>, usize) {
    let presenter = ListPresenter::new(app.catalog.clouds());
    let mut lines = Vec::new();
    let mut selected_line = 0;
    let mut flat_index = 0;

    for section in 0..presenter.section_count() {
        let Some(header) = presenter.section_header(section) else {
            continue;
        };

        if section > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(vec![
            Span::styled(
                header.long_name,
                Style::default().fg(SKY_PRIMARY).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", header.feet), Style::default().fg(TEXT_MUTED)),
        ]));

        for row in 0..presenter.row_count(section) {
            let Ok(cloud) = presenter.row_at(section, row) else {
                break;
            };
            let selected = flat_index == app.selected;
            if selected {
                selected_line = lines.len();
            }

            let marker = if selected { "▸ " } else { "  " };
            let row_style = if selected {
                Style::default().fg(TEXT_PRIMARY).bg(BG_HIGHLIGHT)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(SKY_PRIMARY)),
                Span::styled(cloud.name.to_string(), row_style),
                Span::styled(format!(" ({})", cloud.abbreviation), Style::default().fg(SKY_DIM)),
            ]));

            flat_index += 1;
        }
    }

    (lines, selected_line)
}

/// Render the master list into the given area.
pub fn render_list(area: Rect, app: &App, frame: &mut Frame) {
    let (lines, selected_line) = list_lines(app);

    let block = Block::default()
        .title(" Cloud Atlas ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    // Keep the cursor inside the viewport; headers above it scroll away.
    let viewport = block.inner(area).height as usize;
    let scroll = if viewport > 0 {
        selected_line.saturating_sub(viewport - 1)
    } else {
        0
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
