//! Editing view: the registration form grid

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{FieldId, FIELD_COUNT};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::field_renderer::draw_field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows per field cell: bordered input box plus the error line
const FIELD_CELL_HEIGHT: u16 = 4;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Registration Form ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid_height = FIELD_CELL_HEIGHT * (FIELD_COUNT as u16).div_ceil(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(grid_height),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    draw_grid(frame, chunks[0], app);
    draw_buttons(frame, chunks[1], app);
    if app.config.show_hints() {
        draw_hints(frame, chunks[2]);
    }
}

/// Two-column grid of field cells, in display order
fn draw_grid(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIELD_CELL_HEIGHT); FIELD_COUNT / 2])
        .split(area);

    for (row, pair) in FieldId::ALL.chunks(2).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);

        for (col, &field) in pair.iter().enumerate() {
            draw_field_cell(frame, cols[col], app, field);
        }
    }
}

fn draw_field_cell(frame: &mut Frame, area: Rect, app: &App, field: FieldId) {
    let index = FieldId::ALL
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default();
    let is_active = app.active_field == index;

    draw_field(
        frame,
        area,
        field.label(),
        &display_value(app, field, is_active),
        field.placeholder(),
        is_active,
        app.form.visible_error(field),
    );
}

/// Value as it should appear on screen: masked password, dialing-code
/// prefixed phone, option arrows on the active select
fn display_value(app: &App, field: FieldId, is_active: bool) -> String {
    let raw = app.form.value(field);
    match field {
        FieldId::Password if !app.show_password => "•".repeat(raw.chars().count()),
        FieldId::PhoneNumber => app.form.phone_display(),
        FieldId::Country | FieldId::City if is_active && !raw.is_empty() => {
            format!("◂ {raw} ▸")
        }
        _ => raw.to_string(),
    }
}

fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let on_buttons = app.active_field == FIELD_COUNT;
    let form_valid = app.form.is_form_valid();

    let submit_label = if form_valid {
        "Submit Registration"
    } else {
        "Please fill all required fields"
    };
    render_action_button(
        frame,
        chunks[0],
        submit_label,
        on_buttons && app.selected_button == 0,
        form_valid,
        Some(Color::Green),
    );

    render_action_button(
        frame,
        chunks[1],
        "Clear Form",
        on_buttons && app.selected_button == 1,
        true,
        Some(Color::Yellow),
    );
}

fn draw_hints(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab/↓", Style::default().fg(Color::Cyan)),
        Span::raw(": next  "),
        Span::styled("Shift+Tab/↑", Style::default().fg(Color::Cyan)),
        Span::raw(": prev  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": choose option  "),
        Span::styled("F2", Style::default().fg(Color::Cyan)),
        Span::raw(": show/hide password  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(": submit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
