pub mod day_bar;
pub mod popups;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;
use crate::state::{DayClear, TaskDialog};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: day bar (2 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // day bar + separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    day_bar::render_day_bar(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Dialogs render on top of everything
    let snapshot = app.store.snapshot();
    match &snapshot.task_dialog {
        TaskDialog::Idle => {}
        TaskDialog::Actions { task } => popups::render_task_actions(frame, app, task, area),
        TaskDialog::ConfirmDelete { task } => {
            popups::render_confirm_delete(frame, app, task, area)
        }
        TaskDialog::Edit { task, buffer } => {
            popups::render_edit(frame, app, task, buffer, area)
        }
    }
    if let DayClear::Confirm { day_id } = snapshot.day_clear {
        popups::render_clear_day(frame, app, day_id, area);
    }
}

/// Truncate a string to the given display width, appending `…` when cut.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut width = 0;
    for (i, c) in text.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            // Room for the ellipsis
            let mut out = text[..i].to_string();
            out.push('\u{2026}');
            return out;
        }
        width += w;
    }
    text.to_string()
}
