//! Toast notification overlay

use super::base::{render_dialog, DialogConfig};
use crate::state::{Toast, ToastVariant};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Render a toast in the top-right corner of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let color = match toast.variant {
        ToastVariant::Success => Color::Green,
        ToastVariant::Destructive => Color::Red,
    };

    let hint = vec![
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        area,
        DialogConfig {
            title: &toast.title,
            title_color: color,
            border_color: color,
            message: &toast.description,
            hint: Some(hint),
            max_width: 48,
        },
    );
}
