//! Live card preview with the download and share buttons

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::export::layout::{
    caption, wrap_text, CARD_TAGLINE, CARD_TITLE, EID_GREETING, NAME_PLACEHOLDER,
    PHONE_PLACEHOLDER,
};
use crate::state::{ActionButton, CardDraft, ImageSlot};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DISABLED_HINT: &str = "Please enter your name and phone number to enable downloads";

/// Draw the preview pane
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Card
            Constraint::Length(BUTTON_HEIGHT), // Buttons
            Constraint::Length(1),             // Disabled hint / output dir
        ])
        .split(inner);

    let card_lines = card_lines(&app.preview(), app.footer(), chunks[0].width);
    frame.render_widget(
        Paragraph::new(card_lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false }),
        chunks[0],
    );

    draw_buttons(frame, chunks[1], app);

    let footer_line = if app.actions_enabled() {
        Line::from(Span::styled(
            format!("Saving to {}", app.output_dir().display()),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(DISABLED_HINT, Style::default().fg(Color::Red)))
    };
    frame.render_widget(
        Paragraph::new(footer_line).alignment(Alignment::Center),
        chunks[2],
    );
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let form = &app.state.form;
    let enabled = app.actions_enabled();
    for (idx, action) in ActionButton::ALL.iter().enumerate() {
        let is_selected = form.is_buttons_row_active() && form.selected_action() == *action;
        render_button(frame, columns[idx], action.label(), is_selected, enabled);
    }
}

/// Text rendition of the card, top to bottom
fn card_lines(draft: &CardDraft, footer: &str, width: u16) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(EID_GREETING, Style::default().fg(Color::Yellow))),
        Line::from(Span::styled(
            CARD_TITLE,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(CARD_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(""),
    ];

    for (slot, value, placeholder) in [
        (ImageSlot::Profile, &draft.name, NAME_PLACEHOLDER),
        (ImageSlot::Qr, &draft.phone_number, PHONE_PLACEHOLDER),
    ] {
        let image = match draft.image(slot) {
            Some(image) => Span::styled(
                format!("[{}: {}]", slot.label(), image.summary()),
                Style::default().fg(Color::Green),
            ),
            None => Span::styled(format!("[ {} ]", slot.label()), dim),
        };
        lines.push(Line::from(image));

        let text_style = if value.is_empty() {
            dim
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(
            caption(value, placeholder),
            text_style,
        )));
        lines.push(Line::from(""));
    }

    if !draft.message.is_empty() {
        let max_chars = usize::from(width.saturating_sub(4)).max(8);
        let quoted = format!("\"{}\"", draft.message);
        lines.extend(wrap_text(&quoted, max_chars).into_iter().map(|l| {
            Line::from(Span::styled(
                l,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ))
        }));
        lines.push(Line::from(""));
    }

    if !footer.is_empty() {
        lines.push(Line::from(Span::styled(footer.to_string(), dim)));
    }
    lines
}
