//! Signup form rendering

use super::field_renderer::{
    draw_multi_select, draw_select_field, draw_text_field, draw_toggle_field,
};
use crate::app::App;
use crate::state::{AppState, FieldKind, FieldName, FormFocus, LoadStatus, OptionSource};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

const LEFT_COLUMN: [FieldName; 6] = [
    FieldName::Username,
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Email,
    FieldName::Password,
    FieldName::RePassword,
];

const RIGHT_COLUMN: [FieldName; 5] = [
    FieldName::DegreeId,
    FieldName::DegreeLevelId,
    FieldName::International,
    FieldName::StartYear,
    FieldName::EndYear,
];

/// Draw the signup form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT * LEFT_COLUMN.len() as u16), // Fields
            Constraint::Length(1),                                    // Unattached errors
            Constraint::Length(BUTTON_HEIGHT),                        // Submit
        ])
        .split(inner);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);

    draw_column(frame, columns[0], &LEFT_COLUMN, &app.state, None);
    draw_column(
        frame,
        columns[1],
        &RIGHT_COLUMN,
        &app.state,
        Some(FieldName::InterestIds),
    );

    draw_unattached_errors(frame, rows[1], &app.state);

    let label = if app.state.submission.is_in_flight() {
        "Submitting..."
    } else {
        "Sign Up"
    };
    render_button(
        frame,
        rows[2],
        label,
        app.state.focus == FormFocus::SubmitButton,
        app.state.submission.is_in_flight(),
    );
}

/// Stack fixed-height fields, giving any remaining space to `fill`
fn draw_column(
    frame: &mut Frame,
    area: Rect,
    fields: &[FieldName],
    state: &AppState,
    fill: Option<FieldName>,
) {
    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (field, chunk) in fields.iter().zip(chunks.iter()) {
        draw_field(frame, *chunk, *field, state);
    }
    if let (Some(field), Some(rest)) = (fill, chunks.last()) {
        draw_field(frame, *rest, field, state);
    }
}

fn list_status(state: &AppState, field: FieldName) -> LoadStatus {
    match field.kind() {
        FieldKind::Select(OptionSource::Remote(kind))
        | FieldKind::MultiSelect(OptionSource::Remote(kind)) => {
            state.reference.list(kind).status()
        }
        _ => LoadStatus::Loaded,
    }
}

fn draw_field(frame: &mut Frame, area: Rect, field: FieldName, state: &AppState) {
    let is_active = state.focus == FormFocus::Field(field);
    let error = state.errors.for_field(field);

    match field.kind() {
        FieldKind::Text | FieldKind::Secret => draw_text_field(
            frame,
            area,
            field,
            state.form.text(field).unwrap_or_default(),
            is_active,
            error,
        ),
        FieldKind::Select(_) => draw_select_field(
            frame,
            area,
            field,
            state.form.text(field).unwrap_or_default(),
            state.selected_name(field),
            list_status(state, field),
            is_active,
            error,
        ),
        FieldKind::Toggle => {
            draw_toggle_field(frame, area, field, state.form.international, is_active)
        }
        FieldKind::MultiSelect(_) => draw_multi_select(
            frame,
            area,
            field,
            state.options(field),
            |id| state.form.has_interest(id),
            state.interest_cursor,
            list_status(state, field),
            is_active,
            error,
        ),
    }
}

/// Server messages keyed to something the form has no field for
fn draw_unattached_errors(frame: &mut Frame, area: Rect, state: &AppState) {
    let spans: Vec<Span> = state
        .errors
        .unattached()
        .map(|(_, message)| Span::styled(format!("{message}  "), Style::default().fg(Color::Red)))
        .collect();
    if !spans.is_empty() {
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
