//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod layout;
mod success;

use crate::app::App;
use crate::state::ViewState;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    match app.form.view() {
        ViewState::Editing => form::draw(frame, content_area, app),
        ViewState::Submitted => success::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);
}
