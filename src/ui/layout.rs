//! Layout components (header, panes, status bar)

use super::instructions::INSTRUCTIONS_HEIGHT;
use crate::app::App;
use crate::export::layout::{CARD_TAGLINE, CARD_TITLE};
use crate::platform::{COPY_LINK_SHORTCUT, EXPORT_IMAGE_SHORTCUT, EXPORT_PDF_SHORTCUT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub instructions: Option<Rect>,
    pub form: Rect,
    pub preview: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, optional guide, form and preview panes
/// and the status bar
pub fn create_layout(area: Rect, show_instructions: bool) -> ScreenLayout {
    let guide_height = if show_instructions {
        INSTRUCTIONS_HEIGHT
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Header
            Constraint::Length(guide_height), // Instructions
            Constraint::Min(0),               // Content
            Constraint::Length(1),            // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    ScreenLayout {
        header: rows[0],
        instructions: show_instructions.then_some(rows[1]),
        form: panes[0],
        preview: panes[1],
        status_bar: rows[3],
    }
}

/// Draw the bilingual page header
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            CARD_TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(CARD_TAGLINE),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key = Style::default().fg(Color::Cyan);
    let enabled = app.actions_enabled();
    let action_style = if enabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled("Tab", key),
        Span::raw(":next  "),
    ];
    for (shortcut, label) in [
        (EXPORT_IMAGE_SHORTCUT, ":png  "),
        (EXPORT_PDF_SHORTCUT, ":pdf  "),
        (COPY_LINK_SHORTCUT, ":link  "),
    ] {
        spans.push(Span::styled(shortcut, if enabled { key } else { action_style }));
        spans.push(Span::styled(label, action_style));
    }
    let guide = if app.state.shows_instructions() {
        ":hide guide"
    } else {
        ":guide"
    };
    spans.extend([Span::styled("F1", key), Span::raw(guide)]);

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
