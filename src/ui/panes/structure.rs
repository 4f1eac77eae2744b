//! Linear structure pane: array, stack, queue and linked list
//!
//! Each kind gets its own drawing:
//!
//! - **Array / Queue**: a row of boxed cells with indices underneath; the queue
//!   also marks its front and rear
//! - **Stack**: a column of cells, top first
//! - **Linked list**: nodes joined by arrows, ending in `∅`
//!
//! The highlighted position is filled with the highlight color, or with the
//! removal color while a two-phase removal is waiting on its deadline.

use crate::engine::StructureKind;
use crate::memory::Value;
use crate::snapshot::{Cells, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the active linear structure
pub fn render_structure_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .title(format!(" {} ", snapshot.kind.title()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let values = match &snapshot.cells {
        Cells::Linear(values) => values.as_slice(),
        Cells::Tree(_) => &[],
    };

    let mut lines = vec![Line::default()];
    if values.is_empty() {
        lines.push(Line::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    } else {
        match snapshot.kind {
            StructureKind::Stack => lines.extend(stack_lines(values, snapshot)),
            StructureKind::LinkedList => lines.extend(list_lines(values, snapshot)),
            StructureKind::Queue => {
                lines.extend(row_lines(values, snapshot));
                lines.push(queue_marker_line(values));
            }
            _ => lines.extend(row_lines(values, snapshot)),
        }
    }

    lines.push(Line::default());
    lines.push(footer_line(values, snapshot));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Style of the cell at `index`
fn cell_style(snapshot: &Snapshot, index: usize) -> Style {
    if snapshot.highlight.and_then(|t| t.as_index()) == Some(index) {
        let bg = if snapshot.pending {
            DEFAULT_THEME.pending_remove
        } else {
            DEFAULT_THEME.highlight
        };
        Style::default()
            .bg(bg)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.number)
    }
}

fn cell_width(values: &[Value]) -> usize {
    values
        .iter()
        .map(|v| v.to_string().len())
        .max()
        .unwrap_or(1)
        .max(3)
        + 2
}

/// Three lines of boxes plus an index line
fn row_lines<'a>(values: &[Value], snapshot: &Snapshot) -> Vec<Line<'a>> {
    let width = cell_width(values);
    let border = Style::default().fg(DEFAULT_THEME.border_normal);

    let mut top = Vec::new();
    let mut middle = Vec::new();
    let mut bottom = Vec::new();
    let mut indices = Vec::new();

    for (index, value) in values.iter().enumerate() {
        let style = cell_style(snapshot, index);
        top.push(Span::styled(format!("┌{}┐", "─".repeat(width)), border));
        middle.push(Span::styled("│", border));
        middle.push(Span::styled(format!("{:^width$}", value, width = width), style));
        middle.push(Span::styled("│", border));
        bottom.push(Span::styled(format!("└{}┘", "─".repeat(width)), border));
        indices.push(Span::styled(
            format!(" {:^width$} ", index, width = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
    }

    vec![
        Line::from(top),
        Line::from(middle),
        Line::from(bottom),
        Line::from(indices),
    ]
}

fn queue_marker_line<'a>(values: &[Value]) -> Line<'a> {
    let width = cell_width(values) + 2;
    let total = width * values.len();
    let marker = Style::default().fg(DEFAULT_THEME.secondary);
    if values.len() == 1 {
        return Line::styled(format!("{:^total$}", "front/rear", total = total), marker);
    }
    let gap = total.saturating_sub(width * 2);
    Line::from(vec![
        Span::styled(format!("{:^width$}", "front", width = width), marker),
        Span::raw(" ".repeat(gap)),
        Span::styled(format!("{:^width$}", "rear", width = width), marker),
    ])
}

fn stack_lines<'a>(values: &[Value], snapshot: &Snapshot) -> Vec<Line<'a>> {
    let width = cell_width(values) + 4;
    let border = Style::default().fg(DEFAULT_THEME.border_normal);
    let mut lines = Vec::with_capacity(values.len() * 2 + 1);

    for (index, value) in values.iter().enumerate() {
        let label = if index == 0 { " ← top" } else { "       " };
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled(format!("├{}┤", "─".repeat(width)), border),
            Span::raw("       "),
        ]));
        lines.push(Line::from(vec![
            Span::raw("       "),
            Span::styled("│", border),
            Span::styled(
                format!("{:^width$}", value, width = width),
                cell_style(snapshot, index),
            ),
            Span::styled("│", border),
            Span::styled(label, Style::default().fg(DEFAULT_THEME.secondary)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::raw("       "),
        Span::styled(format!("└{}┘", "─".repeat(width)), border),
        Span::raw("       "),
    ]));
    lines
}

fn list_lines<'a>(values: &[Value], snapshot: &Snapshot) -> Vec<Line<'a>> {
    let arrow = Style::default().fg(DEFAULT_THEME.comment);
    let mut nodes = Vec::with_capacity(values.len() * 2 + 1);
    let mut labels = Vec::with_capacity(values.len() * 2 + 1);

    for (index, value) in values.iter().enumerate() {
        let text = format!("[ {} ]", value);
        let label = match index {
            0 => "head",
            i if i + 1 == values.len() => "tail",
            _ => "",
        };
        labels.push(Span::styled(
            format!("{:^width$}", label, width = text.chars().count()),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
        labels.push(Span::raw("   "));
        nodes.push(Span::styled(text, cell_style(snapshot, index)));
        nodes.push(Span::styled(" → ", arrow));
    }
    nodes.push(Span::styled("∅", arrow));
    labels.push(Span::raw(" "));

    vec![Line::from(nodes), Line::from(labels)]
}

fn footer_line<'a>(values: &[Value], snapshot: &Snapshot) -> Line<'a> {
    let peek = match snapshot.kind {
        StructureKind::Stack => values.first().map(|v| format!("top: {}", v)),
        StructureKind::Queue => values.first().map(|v| format!("front: {}", v)),
        StructureKind::LinkedList => values.first().map(|v| format!("head: {}", v)),
        _ => None,
    };

    let mut spans = vec![Span::styled(
        format!("length: {}", values.len()),
        Style::default().fg(DEFAULT_THEME.comment),
    )];
    if let Some(peek) = peek {
        spans.push(Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment)));
        spans.push(Span::styled(peek, Style::default().fg(DEFAULT_THEME.fg)));
    }
    if snapshot.pending {
        spans.push(Span::styled("  │  ", Style::default().fg(DEFAULT_THEME.comment)));
        spans.push(Span::styled(
            "removing…",
            Style::default().fg(DEFAULT_THEME.pending_remove),
        ));
    }
    Line::from(spans)
}
