//! "Create & Share" guide shown above the editor

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows needed to draw the guide
pub const INSTRUCTIONS_HEIGHT: u16 = 8;

const STEPS: [(&str, &str); 3] = [
    (
        "Create",
        "Upload your photo and bKash QR code to create your personalized Eid card",
    ),
    (
        "Share",
        "Download and share your Eid QR card on social media or with friends and family",
    ),
    (
        "Receive",
        "Friends and family can scan your QR code to send you Eid Salami via bKash",
    ),
];

pub fn draw(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Create & Share Your QR Code This Eid ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    for (idx, (title, body)) in STEPS.iter().enumerate() {
        let lines = vec![
            Line::from(Span::styled(
                format!("{}. {title}", idx + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(*body, Style::default().fg(Color::Gray))),
        ];
        let step = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(step, columns[idx]);
    }
}
