//! Search tree pane
//!
//! Nodes are drawn on a [`Canvas`] from the heap-style layout in the snapshot:
//! a node's slot is spread across its level so that level `d` is split into
//! `2^d` equal columns. Edges go from each node to its parent. Below the
//! canvas, a line shows the running search: path so far and, once playback
//! is over, the result.

use crate::engine::constants::{FOUND_TEXT, TREE_HORIZONTAL_SPACING};
use crate::snapshot::{Cells, PositionedNode, Snapshot};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as Edge},
        Block, Borders, Paragraph,
    },
    Frame,
};

const CANVAS_WIDTH: f64 = 100.0;

/// Render the tree and the search line beneath it
pub fn render_tree_pane(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .title(format!(" {} ", snapshot.kind.title()))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let nodes: &[PositionedNode] = match &snapshot.cells {
        Cells::Tree(nodes) => nodes,
        Cells::Linear(_) => &[],
    };

    if nodes.is_empty() {
        frame.render_widget(
            Paragraph::new("(empty tree)").style(Style::default().fg(DEFAULT_THEME.comment)),
            rows[0],
        );
    } else {
        render_canvas(frame, rows[0], nodes, snapshot);
    }

    frame.render_widget(Paragraph::new(search_line(snapshot)), rows[1]);
}

fn render_canvas(frame: &mut Frame, area: Rect, nodes: &[PositionedNode], snapshot: &Snapshot) {
    let levels = nodes.iter().map(|n| n.depth).max().unwrap_or(0) + 1;
    let height = f64::from(levels);
    // canvas units per terminal column, for centering labels
    let unit = CANVAS_WIDTH / f64::from(area.width.max(1));

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, height])
        .paint(move |ctx| {
            for node in nodes {
                if let Some(parent) = node.parent.and_then(|p| nodes.get(p)) {
                    let (x1, y1) = position(parent, height);
                    let (x2, y2) = position(node, height);
                    ctx.draw(&Edge {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: DEFAULT_THEME.edge,
                    });
                }
            }
            ctx.layer();
            for node in nodes {
                let (x, y) = position(node, height);
                let label = format!("({})", node.value);
                let offset = label.chars().count() as f64 * unit / 2.0;
                ctx.print(x - offset, y, Span::styled(label, node_style(snapshot, node)));
            }
        });

    frame.render_widget(canvas, area);
}

/// Canvas coordinates of a node: its slot spread over the level's width,
/// its depth counted down from the top
fn position(node: &PositionedNode, height: f64) -> (f64, f64) {
    let columns = 2f64.powi(node.depth as i32);
    let column = node.slot as f64 / f64::from(TREE_HORIZONTAL_SPACING);
    let x = (column + 0.5) / columns * CANVAS_WIDTH;
    let y = height - f64::from(node.depth) - 0.5;
    (x, y)
}

fn node_style(snapshot: &Snapshot, node: &PositionedNode) -> Style {
    if !snapshot.is_emphasized_value(node.value) {
        return Style::default().fg(DEFAULT_THEME.number);
    }

    if snapshot.highlight.and_then(|t| t.as_value()) == Some(node.value) {
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
        // visited earlier in the running search
        Style::default()
            .fg(DEFAULT_THEME.search_path)
            .add_modifier(Modifier::BOLD)
    }
}

fn search_line<'a>(snapshot: &Snapshot) -> Line<'a> {
    let Some(search) = &snapshot.search else {
        return Line::styled(
            format!(" nodes: {}", snapshot.cells.len()),
            Style::default().fg(DEFAULT_THEME.comment),
        );
    };

    let path = search
        .path_so_far
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" → ");

    let mut spans = vec![
        Span::styled(
            format!(" search {}: ", search.target),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(path, Style::default().fg(DEFAULT_THEME.search_path)),
    ];

    if let Some(result) = search.result {
        let color = if result == FOUND_TEXT {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.error
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!(" {} ", result),
            Style::default()
                .bg(color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}
