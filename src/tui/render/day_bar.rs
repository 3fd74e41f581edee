use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the day bar: one tab per day with an open-task badge, and a
/// separator line below.
pub fn render_day_bar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // separator
        ])
        .split(area);

    render_tabs(frame, app, chunks[0]);
    render_separator(frame, app, chunks[1]);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let snapshot = app.store.snapshot();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(" ", Style::default().bg(bg)));

    for day in &snapshot.days {
        let is_selected = snapshot.selected_day_id == Some(day.id);
        let tab_bg = if is_selected {
            app.theme.selection_bg
        } else {
            bg
        };
        let name_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(tab_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(tab_bg)
        };
        spans.push(Span::styled(format!(" {} ", day.short_name()), name_style));

        let open = snapshot.open_count(day.id);
        if open > 0 {
            spans.push(Span::styled(
                format!("{} ", open),
                Style::default().fg(app.theme.yellow).bg(tab_bg),
            ));
        }

        spans.push(Span::styled(
            "\u{2502}",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

fn render_separator(frame: &mut Frame, app: &App, area: Rect) {
    let sep = "\u{2500}".repeat(area.width as usize);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        sep,
        Style::default().fg(app.theme.dim).bg(app.theme.background),
    )));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn all_seven_days_appear() {
        let app = test_app();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_day_bar(frame, &app, area);
        });
        for label in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
            assert!(output.contains(label), "missing {label} in {output:?}");
        }
    }

    #[test]
    fn open_count_badge_shows_for_days_with_open_tasks() {
        let mut app = test_app();
        app.store.add_task("a", Some(2)).unwrap();
        app.store.add_task("b", Some(2)).unwrap();

        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_day_bar(frame, &app, area);
        });
        assert!(output.contains("Tu 2"));
    }
}
