//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod profile;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view {
        View::Signup => forms::draw_signup(frame, main_area, app),
        View::Profile => profile::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
