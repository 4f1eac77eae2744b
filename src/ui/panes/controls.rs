//! Input row: value field, index field and the speed gauge

use crate::engine::constants::{MAX_SPEED, MIN_SPEED};
use crate::engine::settings::Speed;
use crate::ui::input::{Field, InputState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Render the input fields and speed gauge.
///
/// The index field is dimmed when the active structure takes no index.
pub fn render_controls(
    frame: &mut Frame,
    area: Rect,
    input: &InputState,
    focused: Field,
    uses_index: bool,
    speed: Speed,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(area);

    render_field(frame, columns[0], " Value ", &input.value, focused == Field::Value, true);
    render_field(
        frame,
        columns[1],
        " Index ",
        &input.index,
        focused == Field::Index,
        uses_index,
    );

    let ratio = ((speed.factor() - MIN_SPEED) / (MAX_SPEED - MIN_SPEED)).clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Animation Speed [ / ] ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        )
        .gauge_style(Style::default().fg(DEFAULT_THEME.primary).bg(DEFAULT_THEME.bar_bg))
        .ratio(ratio)
        .label(Span::styled(
            speed.to_string(),
            Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
        ));
    frame.render_widget(gauge, columns[2]);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    text: &str,
    is_focused: bool,
    enabled: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let content = if text.is_empty() {
        let hint = if enabled { "enter a number" } else { "not used" };
        Line::styled(hint, Style::default().fg(DEFAULT_THEME.comment))
    } else {
        let mut spans = vec![Span::styled(
            text.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        )];
        if is_focused {
            spans.push(Span::styled("▏", Style::default().fg(DEFAULT_THEME.border_focused)));
        }
        Line::from(spans)
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title.to_string())
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}
