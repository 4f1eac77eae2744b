//! Reference pane: description, operations and complexity of the active structure

use crate::engine::StructureKind;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(frame: &mut Frame, area: Rect, kind: StructureKind) {
    let block = Block::default()
        .title(" Operations ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::styled(
            kind.description(),
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::ITALIC),
        ),
        Line::default(),
    ];

    for (name, explanation) in kind.operations() {
        lines.push(Line::from(vec![
            Span::styled("• ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                format!("{}: ", name),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*explanation, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled(
            "Time Complexity: ",
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(kind.complexity(), Style::default().fg(DEFAULT_THEME.comment)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
