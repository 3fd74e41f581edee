use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Keys while typing a new task title into the input line.
pub(super) fn handle_add_task(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => {
            app.add_input.clear();
            app.mode = Mode::Navigate;
        }
        (_, KeyCode::Enter) => {
            let title = std::mem::take(&mut app.add_input);
            let day_id = app.selected_day_id();
            // Blank titles are dropped by the store; just leave input mode
            let result = app.store.add_task(&title, day_id);
            app.report(result);
            app.mode = Mode::Navigate;
            // Put the cursor on the new task (appended last)
            let count = app.store.snapshot().filtered_tasks().len();
            app.cursor = count.saturating_sub(1);
        }
        (_, KeyCode::Backspace) => {
            app.add_input.pop();
        }
        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            app.add_input.push(c);
        }
        _ => {}
    }
}
