use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q')) => {
            app.should_quit = true;
        }

        // Day selection
        (KeyModifiers::NONE, KeyCode::Tab)
        | (KeyModifiers::NONE, KeyCode::Right)
        | (KeyModifiers::NONE, KeyCode::Char('l')) => {
            select_adjacent_day(app, 1);
        }
        (KeyModifiers::SHIFT, KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::BackTab)
        | (KeyModifiers::NONE, KeyCode::Left)
        | (KeyModifiers::NONE, KeyCode::Char('h')) => {
            select_adjacent_day(app, -1);
        }
        (KeyModifiers::NONE, KeyCode::Char(c @ '1'..='7')) => {
            let idx = c as usize - '1' as usize;
            let day_id = app.store.snapshot().days.get(idx).map(|d| d.id);
            if let Some(id) = day_id {
                app.store.select_day(id);
                app.clamp_cursor();
            }
        }

        // Cursor movement
        (KeyModifiers::NONE, KeyCode::Char('j')) | (KeyModifiers::NONE, KeyCode::Down) => {
            let count = app.store.snapshot().filtered_tasks().len();
            if count > 0 && app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Char('k')) | (KeyModifiers::NONE, KeyCode::Up) => {
            app.cursor = app.cursor.saturating_sub(1);
        }

        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id() {
                let result = app.store.toggle_task(id);
                app.report(result);
            }
        }

        // Add a task
        (KeyModifiers::NONE, KeyCode::Char('a')) | (KeyModifiers::NONE, KeyCode::Char('i')) => {
            app.add_input.clear();
            app.mode = Mode::AddTask;
        }

        // Task actions (the long-press intent)
        (KeyModifiers::NONE, KeyCode::Enter) => {
            if let Some(id) = app.cursor_task_id() {
                app.store.open_task_actions(id);
            }
        }

        // Bulk clear for the selected day (the day long-press intent)
        (KeyModifiers::SHIFT, KeyCode::Char('X')) => {
            if let Some(day_id) = app.selected_day_id() {
                app.store.open_clear_day(day_id);
            }
        }

        _ => {}
    }
}

/// Move the selection left or right through the ordered day list, clamped
/// at the ends.
fn select_adjacent_day(app: &mut App, delta: i32) {
    let snapshot = app.store.snapshot();
    if snapshot.days.is_empty() {
        return;
    }
    let current = snapshot
        .selected_day_id
        .and_then(|id| snapshot.days.iter().position(|d| d.id == id))
        .unwrap_or(0);
    let next = (current as i32 + delta).clamp(0, snapshot.days.len() as i32 - 1) as usize;
    let id = snapshot.days[next].id;
    app.store.select_day(id);
    app.cursor = 0;
}
