//! Post-registration user information view

use crate::app::App;
use crate::state::{AppState, FieldName};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{label:>14}: "),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw(value),
    ])
}

/// Display name of a select value, falling back to the raw id
fn resolved(state: &AppState, field: FieldName) -> String {
    state
        .selected_name(field)
        .or_else(|| state.form.text(field))
        .unwrap_or_default()
        .to_string()
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let form = &state.form;

    let title = match state.registered.as_ref().and_then(|a| a.user_id.as_deref()) {
        Some(id) => format!(" User Information (#{id}) "),
        None => " User Information ".to_string(),
    };

    let interests = state.selected_interest_names();
    let lines = vec![
        Line::from(Span::styled(
            "Registration complete",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        row("Username", form.username.clone()),
        row("Name", format!("{} {}", form.first_name, form.last_name)),
        row("Email", form.email.clone()),
        row("Degree", resolved(state, FieldName::DegreeId)),
        row("Degree Level", resolved(state, FieldName::DegreeLevelId)),
        row(
            "International",
            if form.international { "Yes" } else { "No" }.to_string(),
        ),
        row(
            "Years",
            format!("{} - {}", form.start_year, form.end_year),
        ),
        row(
            "Interests",
            if interests.is_empty() {
                "-".to_string()
            } else {
                interests.join(", ")
            },
        ),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(paragraph, area);
}
