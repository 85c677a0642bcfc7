//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, LoadStatus, OptionEntry};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

const MASK: char = '•';

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered block titled with the field label; an error goes on the bottom edge
fn field_block(field: FieldName, is_active: bool, error: Option<&str>) -> Block<'static> {
    let mut block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, error.is_some()));
    if let Some(message) = error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {message} "),
            Style::default().fg(Color::Red),
        )));
    }
    block
}

/// Draw a free-text field; secret fields are masked
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    is_active: bool,
    error: Option<&str>,
) {
    let shown = if field.kind() == FieldKind::Secret {
        MASK.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let mut spans = vec![Span::styled(
        shown,
        if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        },
    )];
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(field_block(field, is_active, error));
    frame.render_widget(paragraph, area);
}

/// Draw a single-choice field
#[allow(clippy::too_many_arguments)]
pub fn draw_select_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    value: &str,
    selected_name: Option<&str>,
    status: LoadStatus,
    is_active: bool,
    error: Option<&str>,
) {
    let dim = Style::default().fg(Color::DarkGray);
    let label = match (value.is_empty(), selected_name) {
        (false, Some(name)) => Span::raw(name.to_string()),
        // Selected before the list arrived, or the id is unknown
        (false, None) => Span::raw(value.to_string()),
        (true, _) => match status {
            LoadStatus::Pending => Span::styled("Loading...", dim),
            LoadStatus::Failed => Span::styled("Unavailable", Style::default().fg(Color::Red)),
            LoadStatus::Loaded => Span::styled(field.placeholder(), dim),
        },
    };

    let line = if is_active {
        let arrow = Style::default().fg(Color::Cyan);
        Line::from(vec![
            Span::styled("◀ ", arrow),
            label,
            Span::styled(" ▶", arrow),
        ])
    } else {
        Line::from(label)
    };

    frame.render_widget(
        Paragraph::new(line).block(field_block(field, is_active, error)),
        area,
    );
}

/// Draw a checkbox field
pub fn draw_toggle_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    checked: bool,
    is_active: bool,
) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(mark, style.add_modifier(Modifier::BOLD)),
        Span::styled(format!(" {}", field.label()), style),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(is_active, false));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw a checkbox list; `is_selected` tells which ids are checked
#[allow(clippy::too_many_arguments)]
pub fn draw_multi_select(
    frame: &mut Frame,
    area: Rect,
    field: FieldName,
    entries: &[OptionEntry],
    is_selected: impl Fn(&str) -> bool,
    cursor: usize,
    status: LoadStatus,
    is_active: bool,
    error: Option<&str>,
) {
    let block = field_block(field, is_active, error);

    if entries.is_empty() {
        let text = match status {
            LoadStatus::Pending => Span::styled("Loading...", Style::default().fg(Color::DarkGray)),
            LoadStatus::Failed => Span::styled("Unavailable", Style::default().fg(Color::Red)),
            LoadStatus::Loaded => Span::styled("None offered", Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(Paragraph::new(Line::from(text)).block(block), area);
        return;
    }

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let mark = if is_selected(&entry.id) { "[x] " } else { "[ ] " };
            ListItem::new(format!("{mark}{}", entry.name))
        })
        .collect();

    let highlight = if is_active {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut list_state = ListState::default();
    list_state.select(Some(cursor.min(entries.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}
