use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::TaskDialog;
use crate::tui::app::App;

/// Keys while any stage of the task dialog flow is open.
pub(super) fn handle_task_dialog(app: &mut App, key: KeyEvent) {
    match app.store.snapshot().task_dialog.clone() {
        TaskDialog::Idle => {}
        TaskDialog::Actions { .. } => match key.code {
            KeyCode::Char('d') => app.store.request_delete(),
            KeyCode::Char('e') => app.store.request_edit(),
            KeyCode::Esc | KeyCode::Char('q') => app.store.dismiss_task_dialog(),
            _ => {}
        },
        TaskDialog::ConfirmDelete { .. } => match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let result = app.store.confirm_delete();
                app.report(result);
                app.clamp_cursor();
            }
            KeyCode::Char('n') | KeyCode::Esc => app.store.dismiss_task_dialog(),
            _ => {}
        },
        TaskDialog::Edit { buffer, .. } => match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => {
                let result = app.store.confirm_edit();
                app.report(result);
            }
            (_, KeyCode::Esc) => app.store.dismiss_task_dialog(),
            (_, KeyCode::Backspace) => {
                let mut buffer = buffer;
                buffer.pop();
                app.store.set_edit_text(buffer);
            }
            (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
                let mut buffer = buffer;
                buffer.push(c);
                app.store.set_edit_text(buffer);
            }
            _ => {}
        },
    }
}

/// Keys while the bulk-clear confirmation is open.
pub(super) fn handle_clear_day(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Enter => {
            let result = app.store.confirm_clear_day();
            app.report(result);
            app.clamp_cursor();
        }
        KeyCode::Char('n') | KeyCode::Esc => app.store.dismiss_clear_day(),
        _ => {}
    }
}
