mod add;
mod dialogs;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // An open dialog intercepts all input
    if !app.store.snapshot().task_dialog.is_idle() {
        dialogs::handle_task_dialog(app, key);
        return;
    }
    if !app.store.snapshot().day_clear.is_idle() {
        dialogs::handle_clear_day(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::AddTask => add::handle_add_task(app, key),
    }
}
