//! UI module for rendering the TUI

mod components;
mod forms;
mod instructions;
mod layout;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area(), app.state.shows_instructions());

    layout::draw_header(frame, screen.header);
    if let Some(area) = screen.instructions {
        instructions::draw(frame, area);
    }
    forms::draw_card_form(frame, screen.form, app);
    preview::draw(frame, screen.preview, app);
    layout::draw_status_bar(frame, screen.status_bar, app);

    // Toasts sit over the preview pane
    if let Some(toast) = app.state.notifications.latest() {
        components::render_toast(frame, screen.preview, toast);
    }
}
