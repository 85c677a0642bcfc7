//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a bordered, centred button. A busy button is dimmed.
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_focused: bool, is_busy: bool) {
    let accent = if is_busy { Color::DarkGray } else { Color::Green };

    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(accent)
    };

    let mut text_style = Style::default().fg(accent);
    if is_focused {
        text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }

    let button = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(button, area);
}
