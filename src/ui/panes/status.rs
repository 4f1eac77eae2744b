//! Status bar rendering with keybindings and state indicators

use crate::engine::StructureKind;
use crate::snapshot::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom.
///
/// `is_error` colors the message for a rejected operation.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    snapshot: &Snapshot,
    is_error: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);

    let left_spans = vec![
        Span::styled(
            format!(" {} ", snapshot.kind.label().to_uppercase()),
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!(" {} ", message),
            bar.fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in key_hints(snapshot.kind).iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(format!(" {} ", key), key_style));
        right_spans.push(Span::styled(format!(" {} ", desc), desc_style));
    }

    if snapshot.pending {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " PENDING ",
            Style::default()
                .bg(DEFAULT_THEME.pending_remove)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if snapshot.highlight.is_some() || snapshot.search.is_some() {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ ANIMATING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}

/// Keys that do something on `kind`'s tab
fn key_hints(kind: StructureKind) -> &'static [(&'static str, &'static str)] {
    match kind {
        StructureKind::Array => &[
            ("a", "append"),
            ("i", "insert"),
            ("r", "remove"),
            ("x", "reset"),
            ("⇥", "next"),
            ("q", "quit"),
        ],
        StructureKind::Stack => &[
            ("a", "push"),
            ("r", "pop"),
            ("x", "reset"),
            ("⇥", "next"),
            ("q", "quit"),
        ],
        StructureKind::Queue => &[
            ("a", "enqueue"),
            ("r", "dequeue"),
            ("x", "reset"),
            ("⇥", "next"),
            ("q", "quit"),
        ],
        StructureKind::LinkedList => &[
            ("h/t", "head/tail"),
            ("i", "insert"),
            ("r", "remove"),
            ("x", "reset"),
            ("q", "quit"),
        ],
        StructureKind::BinarySearchTree => &[
            ("a", "insert"),
            ("r", "remove"),
            ("s", "search"),
            ("x", "reset"),
            ("q", "quit"),
        ],
    }
}
