//! Card details form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{Form, ImageSlot};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the card details form
pub fn draw_card_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Profile picture
            Constraint::Length(3), // QR code
            Constraint::Length(3), // bKash number
            Constraint::Length(3), // Name
            Constraint::Min(4),    // Message
            Constraint::Length(2), // Help text
        ])
        .margin(1)
        .split(area);

    let block = Block::default()
        .title(" Card Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let form = &app.state.form;
    let active = form.active_field();

    draw_field(
        frame,
        chunks[0],
        &form.profile_image,
        active == 0,
        Some(image_status(app, ImageSlot::Profile)),
    );
    draw_field(
        frame,
        chunks[1],
        &form.qr_image,
        active == 1,
        Some(image_status(app, ImageSlot::Qr)),
    );
    draw_field(frame, chunks[2], &form.phone_number, active == 2, None);
    draw_field(frame, chunks[3], &form.name, active == 3, None);
    draw_field(frame, chunks[4], &form.message, active == 4, None);

    let on_image = form
        .get_field(active)
        .is_some_and(|f| f.image_slot().is_some());
    let mut help = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
    ];
    if on_image {
        help.extend([
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": upload  "),
            Span::styled("Del", Style::default().fg(Color::Cyan)),
            Span::raw(": remove"),
        ]);
    } else if form.is_active_field_multiline() {
        help.extend([
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": new line"),
        ]);
    }
    let help = Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[5]);
}

/// Bottom-border status for an image field
fn image_status(app: &App, slot: ImageSlot) -> Line<'static> {
    match app.preview().image(slot) {
        Some(image) => Line::from(Span::styled(
            format!(" ✓ {} ", image.summary()),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            " No image ",
            Style::default().fg(Color::DarkGray),
        )),
    }
}
