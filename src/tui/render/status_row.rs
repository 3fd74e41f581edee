use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match app.mode {
        Mode::AddTask => {
            // Input prompt: add: title▌
            let mut spans = vec![
                Span::styled(
                    format!("add: {}", app.add_input),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            push_right_hint(app, &mut spans, "Enter add  Esc cancel", width);
            Line::from(spans)
        }
        Mode::Navigate => {
            if let Some(error) = &app.last_error {
                Line::from(Span::styled(
                    format!(" {}", error),
                    Style::default().fg(app.theme.red).bg(bg),
                ))
            } else {
                let summary = day_summary(app);
                let mut spans = vec![Span::styled(
                    summary,
                    Style::default().fg(app.theme.dim).bg(bg),
                )];
                if app.show_key_hints {
                    push_right_hint(
                        app,
                        &mut spans,
                        "a add  Space toggle  Enter actions  X clear day  q quit",
                        width,
                    );
                }
                Line::from(spans)
            }
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// " Monday — 2 of 5 done", or empty when nothing is selected.
fn day_summary(app: &App) -> String {
    let snapshot = app.store.snapshot();
    match snapshot.selected_day() {
        Some(day) => {
            let tasks = snapshot.filtered_tasks();
            let done = tasks.iter().filter(|t| t.done).count();
            format!(" {} \u{2014} {} of {} done", day.name, done, tasks.len())
        }
        None => String::new(),
    }
}

/// Right-align a dim hint after the existing spans, padding with spaces.
fn push_right_hint(app: &App, spans: &mut Vec<Span<'_>>, hint: &str, width: usize) {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hint_width = hint.chars().count();
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(
            hint.to_string(),
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }
}
