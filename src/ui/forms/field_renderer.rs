//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field.
///
/// Empty fields show their placeholder. `status` is rendered on the bottom
/// border, used by image fields to show what is currently uploaded.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    status: Option<Line<'_>>,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = Span::styled(
        if is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let value = field.as_text();
    let mut lines: Vec<Line> = if value.is_empty() {
        vec![Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        // split('\n') rather than lines() so a trailing newline gets its own row
        value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect()
    };

    if value.is_empty() {
        lines[0].spans.insert(0, cursor);
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(status) = status {
        block = block.title_bottom(status);
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
