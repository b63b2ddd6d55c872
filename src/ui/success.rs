//! Submitted view: read-only confirmation card

use crate::app::App;
use crate::state::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the submitted-details card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(70, 90, area);

    let block = Block::default()
        .title(" Registration Successful! ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle + timestamp
            Constraint::Min(0),    // Details
            Constraint::Length(1), // Help
        ])
        .margin(1)
        .split(inner);

    draw_intro(frame, chunks[0], app);
    draw_details(frame, chunks[1], app);
    draw_help(frame, chunks[2]);
}

fn draw_intro(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![Line::from(Span::styled(
        "Your details have been submitted successfully.",
        Style::default().fg(Color::Gray),
    ))];
    if let Some(at) = app.submitted_at {
        lines.push(Line::from(Span::styled(
            format!("Submitted at {}", at.format("%Y-%m-%d %H:%M:%S")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// One label/value line per submitted field. The password is not echoed
/// back; the phone number carries its dialing code.
fn draw_details(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = FieldId::ALL
        .into_iter()
        .filter(|&field| field != FieldId::Password)
        .map(|field| {
            let value = match field {
                FieldId::PhoneNumber => app.form.phone_display(),
                _ => app.form.value(field).to_string(),
            };
            Line::from(vec![
                Span::styled(
                    format!("{:<14}", field.label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit another  "),
        Span::styled("y", Style::default().fg(Color::Cyan)),
        Span::raw(": copy details  "),
        Span::styled("q", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}

/// Rect centered in `area` by percentage of its width and height
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
