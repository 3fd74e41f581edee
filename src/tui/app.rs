use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::state::{SessionState, read_session, write_session};
use crate::model::Config;
use crate::repo::Repository;
use crate::state::AppStore;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode. Dialog interaction is not a mode: it is driven
/// by the dialog state machines in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task title into the input line
    AddTask,
}

/// Main application state
pub struct App {
    pub store: AppStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Cursor index into the filtered task list
    pub cursor: usize,
    /// Buffer for the add-task input line
    pub add_input: String,
    /// Last persistence error, shown in the status row
    pub last_error: Option<String>,
    pub show_key_hints: bool,
    data_dir: PathBuf,
}

impl App {
    pub fn new(store: AppStore, config: &Config, data_dir: PathBuf) -> Self {
        let theme = Theme::from_config(&config.ui);
        App {
            store,
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            add_input: String::new(),
            last_error: None,
            show_key_hints: config.ui.show_key_hints,
            data_dir,
        }
    }

    /// The id of the day the UI currently shows, if any.
    pub fn selected_day_id(&self) -> Option<i64> {
        self.store.snapshot().selected_day_id
    }

    /// Keep the cursor inside the filtered task list.
    pub fn clamp_cursor(&mut self) {
        let count = self.store.snapshot().filtered_tasks().len();
        if count == 0 {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(count - 1);
        }
    }

    /// The id of the task under the cursor, if any.
    pub fn cursor_task_id(&self) -> Option<i64> {
        self.store
            .snapshot()
            .filtered_tasks()
            .get(self.cursor)
            .map(|t| t.id)
    }

    /// Record a command result; persistence errors surface in the status row.
    pub fn report(&mut self, result: Result<(), crate::store::StoreError>) {
        if let Err(e) = result {
            self.last_error = Some(e.to_string());
        }
    }

    fn restore_session(&mut self, session: SessionState) {
        if let Some(id) = session.selected_day_id
            && self.store.snapshot().days.iter().any(|d| d.id == id)
        {
            self.store.select_day(id);
        }
        self.cursor = session.cursor;
        self.clamp_cursor();
    }

    fn session(&self) -> SessionState {
        SessionState {
            selected_day_id: self.selected_day_id(),
            cursor: self.cursor,
        }
    }
}

pub fn run(data_dir_override: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = crate::io::data_dir(data_dir_override);
    let config = read_config(&data_dir)?;

    let repo = Repository::open(&data_dir.join(&config.storage.file))?;
    let store = AppStore::new(repo)?;

    let mut app = App::new(store, &config, data_dir.clone());
    if let Some(session) = read_session(&data_dir) {
        app.restore_session(session);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app);

    // Save session state before exit
    let _ = write_session(&app.data_dir, &app.session());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Reconcile any change notifications queued since the last tick
        match app.store.pump() {
            Ok(true) => app.clamp_cursor(),
            Ok(false) => {}
            Err(e) => app.last_error = Some(e.to_string()),
        }

        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::state::TaskDialog;
    use crate::tui::input;
    use crate::tui::render::test_helpers::test_app;

    fn press(app: &mut App, code: KeyCode) {
        input::handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn digit_keys_select_days_by_position() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('3'));
        let snapshot = app.store.snapshot();
        assert_eq!(
            snapshot.selected_day().map(|d| d.name.clone()),
            Some("Wednesday".to_string())
        );
    }

    #[test]
    fn tab_walks_days_and_clamps_at_the_ends() {
        let mut app = test_app();
        press(&mut app, KeyCode::Left); // already at Monday
        assert_eq!(app.selected_day_id(), Some(1));

        for _ in 0..10 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.selected_day_id(), Some(7)); // stuck at Sunday
    }

    #[test]
    fn add_task_flow_types_and_commits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.mode, Mode::AddTask);

        type_str(&mut app, "buy milk");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, Mode::Navigate);
        let snapshot = app.store.snapshot();
        assert_eq!(snapshot.filtered_tasks().len(), 1);
        assert_eq!(snapshot.filtered_tasks()[0].title, "buy milk");
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn esc_abandons_the_add_input() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "half-typed");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.add_input.is_empty());
        assert!(app.store.snapshot().tasks.is_empty());
    }

    #[test]
    fn space_toggles_the_task_under_the_cursor() {
        let mut app = test_app();
        app.store.add_task("first", Some(1)).unwrap();
        app.store.add_task("second", Some(1)).unwrap();

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char(' '));

        let snapshot = app.store.snapshot();
        let tasks = snapshot.filtered_tasks();
        assert!(!tasks[0].done);
        assert!(tasks[1].done);
    }

    #[test]
    fn delete_flow_enter_d_y() {
        let mut app = test_app();
        app.store.add_task("doomed", Some(1)).unwrap();

        press(&mut app, KeyCode::Enter);
        assert!(matches!(
            app.store.snapshot().task_dialog,
            TaskDialog::Actions { .. }
        ));

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));

        let snapshot = app.store.snapshot();
        assert!(snapshot.task_dialog.is_idle());
        assert!(snapshot.tasks.is_empty());
    }

    #[test]
    fn edit_flow_rewrites_the_title() {
        let mut app = test_app();
        app.store.add_task("old", Some(1)).unwrap();

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        for _ in 0.."old".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "new");
        press(&mut app, KeyCode::Enter);

        let snapshot = app.store.snapshot();
        assert!(snapshot.task_dialog.is_idle());
        assert_eq!(snapshot.tasks[0].title, "new");
    }

    #[test]
    fn clear_day_flow_shift_x_then_y() {
        let mut app = test_app();
        app.store.add_task("a", Some(1)).unwrap();
        app.store.add_task("b", Some(1)).unwrap();

        input::handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT),
        );
        press(&mut app, KeyCode::Char('y'));

        let snapshot = app.store.snapshot();
        assert!(snapshot.day_clear.is_idle());
        assert!(snapshot.tasks.is_empty());
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn keys_fall_through_when_no_task_is_under_the_cursor() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        let snapshot = app.store.snapshot();
        assert!(snapshot.task_dialog.is_idle());
        assert!(snapshot.tasks.is_empty());
    }
}
