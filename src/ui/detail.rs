//! Detail screen rendering: one cloud record's fields as labeled text.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Cloud;
use crate::presenter::CloudDetail;
use crate::theme::{AMBER_RAIN, BORDER_SUBTLE, SKY_PRIMARY, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

use super::helpers::wrap_text;

fn field_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<15}", label), Style::default().fg(TEXT_MUTED)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// Build the detail screen's lines for a record, wrapping the description
/// to the given width.
pub fn detail_lines(cloud: &Cloud, width: usize) -> Vec<Line<'static>> {
    let detail = CloudDetail::from_cloud(cloud);

    let precipitation_color = if cloud.precipitation { AMBER_RAIN } else { TEXT_SECONDARY };

    let mut lines = vec![
        field_line("Name", detail.name, TEXT_PRIMARY),
        field_line("Abbreviation", detail.abbreviation, TEXT_PRIMARY),
        field_line("Altitude", detail.altitude_text, TEXT_PRIMARY),
        field_line("Precipitation", detail.precipitation_text, precipitation_color),
        Line::default(),
    ];

    for wrapped in wrap_text(&detail.description, width.max(1)) {
        lines.push(Line::from(Span::styled(
            wrapped,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    lines
}

/// Render the detail screen for the given record.
pub fn render_detail(area: Rect, cloud: &Cloud, frame: &mut Frame) {
    let block = Block::default()
        .title(format!(" {} ", cloud.name))
        .title_style(Style::default().fg(SKY_PRIMARY).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_SUBTLE));

    let inner_width = block.inner(area).width as usize;
    let paragraph = Paragraph::new(detail_lines(cloud, inner_width)).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Catalog;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn find_cloud(catalog: &Catalog, name: &str) -> Cloud {
        catalog
            .clouds()
            .iter()
            .find(|c| c.name == name)
            .unwrap()
            .clone()
    }

    #[test]
    fn test_detail_lines_for_cumulonimbus() {
        let catalog = Catalog::sample_data();
        let cloud = find_cloud(&catalog, "Cumulonimbus");
        let lines = detail_lines(&cloud, 80);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert!(texts[0].contains("Cumulonimbus"));
        assert!(texts[1].contains("Cb"));
        assert!(texts[2].contains("Low Mid High "));
        assert!(texts[3].contains("True"));
        assert!(texts.iter().any(|t| t.contains("dark bottom")));
    }

    #[test]
    fn test_detail_lines_precipitation_false() {
        let catalog = Catalog::sample_data();
        let cloud = find_cloud(&catalog, "Cirrus");
        let lines = detail_lines(&cloud, 80);
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        assert!(texts[2].contains("High "));
        assert!(texts[3].contains("False"));
    }

    #[test]
    fn test_description_wraps_to_width() {
        let catalog = Catalog::sample_data();
        let cloud = find_cloud(&catalog, "Stratocumulus");
        let lines = detail_lines(&cloud, 20);

        // Everything after the blank separator line is wrapped description.
        let description: Vec<String> = lines[5..].iter().map(|l| line_text(l)).collect();
        assert!(description.len() > 1);
        assert!(description.iter().all(|l| l.len() <= 20));
    }
}
