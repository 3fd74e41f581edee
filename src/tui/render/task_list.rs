use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::truncate_to_width;
use crate::tui::app::App;

/// Render the task list for the selected day.
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let snapshot = app.store.snapshot();
    let tasks = snapshot.filtered_tasks();

    if tasks.is_empty() {
        let message = if snapshot.selected_day().is_some() {
            "no tasks \u{2014} press a to add"
        } else {
            "no day selected"
        };
        let line = Line::from(Span::styled(
            format!("  {}", message),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    let max_title = (area.width as usize).saturating_sub(8);
    let mut lines: Vec<Line> = Vec::new();

    // Simple scroll: keep the cursor row inside the viewport
    let visible = area.height as usize;
    let offset = app.cursor.saturating_sub(visible.saturating_sub(1));

    for (i, task) in tasks.iter().enumerate().skip(offset).take(visible) {
        let is_cursor = i == app.cursor;
        let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

        let checkbox_style = if task.done {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.highlight).bg(row_bg)
        };
        let title_style = if task.done {
            Style::default()
                .fg(app.theme.dim)
                .bg(row_bg)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_cursor {
            Style::default().fg(app.theme.text_bright).bg(row_bg)
        } else {
            Style::default().fg(app.theme.text).bg(row_bg)
        };

        let mut spans = vec![
            Span::styled("  ", Style::default().bg(row_bg)),
            Span::styled(format!("[{}] ", task.checkbox_char()), checkbox_style),
            Span::styled(truncate_to_width(&task.title, max_title), title_style),
        ];
        if is_cursor {
            // Pad the selection bar to the edge
            let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
            let pad = (area.width as usize).saturating_sub(used);
            spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_day_shows_the_hint() {
        let app = test_app();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_task_list(frame, &app, area);
        });
        assert!(output.contains("no tasks"));
    }

    #[test]
    fn rows_show_checkbox_and_title() {
        let mut app = test_app();
        app.store.add_task("water the plants", Some(1)).unwrap();
        app.store.add_task("call mum", Some(1)).unwrap();
        let id = app.store.snapshot().tasks[1].id;
        app.store.toggle_task(id).unwrap();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_task_list(frame, &app, area);
        });
        assert!(output.contains("[ ] water the plants"));
        assert!(output.contains("[x] call mum"));
    }

    #[test]
    fn other_days_tasks_are_not_rendered() {
        let mut app = test_app();
        app.store.add_task("monday thing", Some(1)).unwrap();
        app.store.add_task("friday thing", Some(5)).unwrap();

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_task_list(frame, &app, area);
        });
        assert!(output.contains("monday thing"));
        assert!(!output.contains("friday thing"));
    }
}
