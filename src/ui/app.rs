//! Main TUI application state and logic

use crate::engine::settings::Settings;
use crate::engine::{Command, OpError, StructureKind, Workbench};
use crate::snapshot::OperationLog;
use crate::ui::input::{Field, InputState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes;
use super::theme::DEFAULT_THEME;

/// How long the event loop waits for a key before advancing the timelines
const FRAME_INTERVAL: Duration = Duration::from_millis(30);

/// Rows moved per PageUp / PageDown in the activity pane
const LOG_PAGE: usize = 5;

/// A key press, before it is resolved against the active structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append / push / enqueue / tree insert
    Add,
    InsertAt,
    AddHead,
    AddTail,
    /// Remove at index / pop / dequeue / tree remove
    Remove,
    Search,
    Reset,
    Faster,
    Slower,
}

impl Action {
    fn name(self) -> &'static str {
        match self {
            Action::Add => "add",
            Action::InsertAt => "insert at index",
            Action::AddHead => "add to head",
            Action::AddTail => "add to tail",
            Action::Remove => "remove",
            Action::Search => "search",
            Action::Reset => "reset",
            Action::Faster => "speed up",
            Action::Slower => "slow down",
        }
    }
}

/// The main application state
pub struct App {
    /// Every structure and its timeline
    pub workbench: Workbench,

    /// Structure shown in the main pane
    pub active: StructureKind,

    pub input: InputState,

    /// Field receiving typed digits
    pub field: Field,

    pub log: OperationLog,

    /// Activity pane scroll offset (`usize::MAX` = follow newest)
    pub log_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected operation
    pub status_is_error: bool,

    last_tick: Instant,
}

impl App {
    /// Create a new app showing `active` first
    pub fn new(settings: &Settings, active: StructureKind) -> Self {
        App {
            workbench: Workbench::new(settings),
            active,
            input: InputState::default(),
            field: Field::Value,
            log: OperationLog::new(settings.log_capacity),
            log_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.last_tick = Instant::now();
        loop {
            terminal.draw(|f| self.draw(f))?;

            if self.should_quit {
                break;
            }

            let key = if event::poll(FRAME_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => Some(key),
                    _ => None,
                }
            } else {
                None
            };

            // Advance before handling the key so a new highlight starts at "now"
            let now = Instant::now();
            self.workbench.tick(now.duration_since(self.last_tick));
            self.last_tick = now;

            if let Some(key) = key {
                self.handle_key_event(key);
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn draw(&mut self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let snapshot = self.workbench.snapshot(self.active);

        self.render_tabs(frame, rows[0]);

        panes::render_controls(
            frame,
            rows[1],
            &self.input,
            self.field,
            matches!(
                self.active,
                StructureKind::Array | StructureKind::LinkedList
            ),
            snapshot.speed,
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[2]);

        if self.active == StructureKind::BinarySearchTree {
            panes::render_tree_pane(frame, columns[0], &snapshot);
        } else {
            panes::render_structure_pane(frame, columns[0], &snapshot);
        }

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(columns[1]);

        panes::render_info_pane(frame, right[0], self.active);
        panes::render_activity_pane(frame, right[1], &self.log, &mut self.log_scroll);

        panes::render_status_bar(
            frame,
            rows[3],
            &self.status_message,
            &snapshot,
            self.status_is_error,
        );
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = StructureKind::ALL
            .iter()
            .map(|kind| Line::from(format!(" {} ", kind.title())));
        let tabs = Tabs::new(titles)
            .select(self.active.position())
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )
            .divider("│");
        frame.render_widget(tabs, area);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => self.switch_to(self.active.next()),
            KeyCode::BackTab => self.switch_to(self.active.prev()),
            KeyCode::Up | KeyCode::Down => {
                self.field = self.field.toggle();
            }
            KeyCode::PageUp => {
                self.log_scroll = self.log_scroll.saturating_sub(LOG_PAGE);
            }
            KeyCode::PageDown => {
                self.log_scroll = self.log_scroll.saturating_add(LOG_PAGE);
            }
            KeyCode::Backspace => self.input.backspace(self.field),
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                self.input.type_char(self.field, c);
            }
            KeyCode::Char('a') => self.perform(Action::Add),
            KeyCode::Char('i') => self.perform(Action::InsertAt),
            KeyCode::Char('h') => self.perform(Action::AddHead),
            KeyCode::Char('t') => self.perform(Action::AddTail),
            KeyCode::Char('r') => self.perform(Action::Remove),
            KeyCode::Char('s') => self.perform(Action::Search),
            KeyCode::Char('x') => self.perform(Action::Reset),
            KeyCode::Char(']') => self.perform(Action::Faster),
            KeyCode::Char('[') => self.perform(Action::Slower),
            _ => {}
        }
    }

    fn switch_to(&mut self, kind: StructureKind) {
        self.active = kind;
        self.status_message = format!("Switched to {}", kind.title());
        self.status_is_error = false;
    }

    /// Resolve `action` against the active structure and dispatch it
    pub fn perform(&mut self, action: Action) {
        let outcome = self
            .command_for(action)
            .and_then(|command| {
                self.workbench
                    .dispatch(self.active, command)
                    .map(|()| command)
            });

        match outcome {
            Ok(command) => {
                let message = describe(&command);
                for &field in consumed_fields(&command) {
                    self.input.clear(field);
                }
                self.status_message = message.clone();
                self.status_is_error = false;
                if !matches!(command, Command::SetSpeed(_)) {
                    self.log.push(self.active, message, true);
                    self.log_scroll = usize::MAX;
                }
            }
            Err(err) => {
                self.status_message = err.to_string();
                self.status_is_error = true;
                self.log
                    .push(self.active, format!("{}: {}", action.name(), err), false);
                self.log_scroll = usize::MAX;
            }
        }
    }

    /// Map a key action to an engine command, reading the input fields it needs
    fn command_for(&self, action: Action) -> Result<Command, OpError> {
        use StructureKind::*;

        let command = match (self.active, action) {
            (_, Action::Reset) => Command::Reset,
            (kind, Action::Faster) => {
                Command::SetSpeed(self.workbench.engine(kind).speed().faster().factor())
            }
            (kind, Action::Slower) => {
                Command::SetSpeed(self.workbench.engine(kind).speed().slower().factor())
            }

            (Array, Action::Add) => Command::Append(self.input.parse_value()?),
            (Stack, Action::Add) => Command::Push(self.input.parse_value()?),
            (Queue, Action::Add) => Command::Enqueue(self.input.parse_value()?),
            (LinkedList, Action::Add | Action::AddTail) => {
                Command::AddTail(self.input.parse_value()?)
            }
            (LinkedList, Action::AddHead) => Command::AddHead(self.input.parse_value()?),
            (BinarySearchTree, Action::Add) => Command::Insert(self.input.parse_value()?),

            (Array | LinkedList, Action::InsertAt) => {
                let value = self.input.parse_value()?;
                Command::InsertAt(self.input.parse_index()?, value)
            }

            (Array | LinkedList, Action::Remove) => Command::RemoveAt(self.input.parse_index()?),
            (Stack, Action::Remove) => Command::Pop,
            (Queue, Action::Remove) => Command::Dequeue,
            (BinarySearchTree, Action::Remove) => Command::Remove(self.input.parse_value()?),
            (BinarySearchTree, Action::Search) => Command::Search(self.input.parse_value()?),

            (kind, action) => {
                return Err(OpError::Unsupported {
                    command: action.name(),
                    structure: kind.title(),
                })
            }
        };
        Ok(command)
    }
}

/// Input fields a successful `command` read from; a search keeps its value
fn consumed_fields(command: &Command) -> &'static [Field] {
    match command {
        Command::Append(_)
        | Command::AddHead(_)
        | Command::AddTail(_)
        | Command::Push(_)
        | Command::Enqueue(_)
        | Command::Insert(_)
        | Command::Remove(_) => &[Field::Value],
        Command::InsertAt(..) => &[Field::Value, Field::Index],
        Command::RemoveAt(_) => &[Field::Index],
        Command::Search(_)
        | Command::Pop
        | Command::Dequeue
        | Command::Reset
        | Command::SetSpeed(_) => &[],
    }
}

/// One-line description for the status bar and activity log
fn describe(command: &Command) -> String {
    match *command {
        Command::Append(v)
        | Command::AddHead(v)
        | Command::AddTail(v)
        | Command::Push(v)
        | Command::Enqueue(v)
        | Command::Insert(v)
        | Command::Remove(v)
        | Command::Search(v) => format!("{} {}", command.name(), v),
        Command::InsertAt(index, v) => format!("insert {} at index {}", v, index),
        Command::RemoveAt(index) => format!("remove at index {}", index),
        Command::SetSpeed(factor) => format!("speed {:.1}x", factor),
        Command::Pop | Command::Dequeue | Command::Reset => command.name().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_push_consumes_value_field() {
        let mut app = App::new(&Settings::default(), StructureKind::Stack);
        type_text(&mut app, "42");
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(app.workbench.stack.peek(), Some(42));
        assert!(app.input.value.is_empty());
        assert!(!app.status_is_error);
        assert_eq!(app.log.len(), 1);
    }

    #[test]
    fn test_empty_value_is_rejected_and_logged() {
        let mut app = App::new(&Settings::default(), StructureKind::Array);
        press(&mut app, KeyCode::Char('a'));

        assert!(app.status_is_error);
        assert_eq!(app.workbench.array.values(), &[1, 2, 3, 4, 5]);
        assert_eq!(app.log.entries().next().map(|e| e.accepted), Some(false));
    }

    #[test]
    fn test_search_on_array_is_unsupported() {
        let mut app = App::new(&Settings::default(), StructureKind::Array);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Char('s'));

        assert!(app.status_is_error);
        assert_eq!(app.input.value, "3");
    }

    #[test]
    fn test_insert_at_reads_both_fields() {
        let mut app = App::new(&Settings::default(), StructureKind::Array);
        type_text(&mut app, "99");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "2");
        press(&mut app, KeyCode::Char('i'));

        assert_eq!(app.workbench.array.values(), &[1, 2, 99, 3, 4, 5]);
        assert!(app.input.index.is_empty());
    }

    #[test]
    fn test_search_keeps_value_field() {
        let mut app = App::new(&Settings::default(), StructureKind::BinarySearchTree);
        type_text(&mut app, "60");
        press(&mut app, KeyCode::Char('s'));

        assert!(!app.status_is_error);
        assert!(app.workbench.tree.session().is_some());
        assert_eq!(app.input.value, "60");
    }

    #[test]
    fn test_append_leaves_index_field() {
        let mut app = App::new(&Settings::default(), StructureKind::LinkedList);
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "3");
        press(&mut app, KeyCode::Up);
        type_text(&mut app, "7");
        press(&mut app, KeyCode::Char('t'));

        assert_eq!(app.workbench.list.values(), vec![1, 2, 3, 4, 5, 7]);
        assert!(app.input.value.is_empty());
        assert_eq!(app.input.index, "3");
    }

    #[test]
    fn test_speed_keys_only_touch_active_structure() {
        let mut app = App::new(&Settings::default(), StructureKind::Queue);
        press(&mut app, KeyCode::Char(']'));

        let queue_speed = app.workbench.engine(StructureKind::Queue).speed();
        let stack_speed = app.workbench.engine(StructureKind::Stack).speed();
        assert!((queue_speed.factor() - 1.1).abs() < 1e-9);
        assert!((stack_speed.factor() - 1.0).abs() < 1e-9);
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_tab_cycles_structures() {
        let mut app = App::new(&Settings::default(), StructureKind::BinarySearchTree);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active, StructureKind::Array);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.active, StructureKind::BinarySearchTree);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(&Settings::default(), StructureKind::Array);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }
}
