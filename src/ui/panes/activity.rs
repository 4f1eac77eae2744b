//! Activity pane: the operation log, newest at the bottom

use crate::snapshot::OperationLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the activity log.
///
/// `scroll_offset` is clamped here; `usize::MAX` sticks to the newest entry.
pub fn render_activity_pane(
    frame: &mut Frame,
    area: Rect,
    log: &OperationLog,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Activity [PgUp/PgDn] ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if log.is_empty() {
        let paragraph = Paragraph::new("(no operations yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = log
        .entries()
        .map(|entry| {
            let marker = if entry.accepted {
                Span::styled("✓ ", Style::default().fg(DEFAULT_THEME.success))
            } else {
                Span::styled("✗ ", Style::default().fg(DEFAULT_THEME.error))
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(
                    format!("{:<6} ", entry.kind.label()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}
