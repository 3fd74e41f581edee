use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use super::truncate_to_width;
use crate::model::Task;
use crate::tui::app::App;

/// Render the task action-choice popup (delete or edit).
pub fn render_task_actions(frame: &mut Frame, app: &App, task: &Task, area: Rect) {
    let lines = vec![
        title_line(app, " Task"),
        blank_line(app),
        task_line(app, task),
        blank_line(app),
        hint_line(app, &[("e", "edit"), ("d", "delete"), ("Esc", "cancel")]),
    ];
    render_popup(frame, app, lines, 44, area);
}

/// Render the delete confirmation popup.
pub fn render_confirm_delete(frame: &mut Frame, app: &App, task: &Task, area: Rect) {
    let warn_style = Style::default().fg(app.theme.red).bg(app.theme.background);
    let lines = vec![
        title_line(app, " Delete Task"),
        blank_line(app),
        task_line(app, task),
        blank_line(app),
        Line::from(Span::styled("  This cannot be undone.", warn_style)),
        blank_line(app),
        hint_line(app, &[("y", "delete"), ("n", "keep")]),
    ];
    render_popup(frame, app, lines, 44, area);
}

/// Render the title edit popup with the pending buffer and a cursor.
pub fn render_edit(frame: &mut Frame, app: &App, _task: &Task, buffer: &str, area: Rect) {
    let bg = app.theme.background;
    let lines = vec![
        title_line(app, " Edit Task"),
        blank_line(app),
        Line::from(vec![
            Span::styled("  ", Style::default().bg(bg)),
            Span::styled(
                truncate_to_width(buffer, 38),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ),
            Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
        ]),
        blank_line(app),
        hint_line(app, &[("Enter", "save"), ("Esc", "cancel")]),
    ];
    render_popup(frame, app, lines, 44, area);
}

/// Render the bulk-clear confirmation popup for a day.
pub fn render_clear_day(frame: &mut Frame, app: &App, day_id: i64, area: Rect) {
    let bg = app.theme.background;
    let snapshot = app.store.snapshot();
    let name = snapshot
        .days
        .iter()
        .find(|d| d.id == day_id)
        .map(|d| d.name.as_str())
        .unwrap_or("?");
    let count = snapshot.tasks.iter().filter(|t| t.day_id == day_id).count();

    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let lines = vec![
        title_line(app, " Clear Day"),
        blank_line(app),
        Line::from(Span::styled(
            format!(
                "  Remove {} task{} from {}?",
                count,
                if count == 1 { "" } else { "s" },
                name,
            ),
            text_style,
        )),
        blank_line(app),
        hint_line(app, &[("y", "clear"), ("n", "keep")]),
    ];
    render_popup(frame, app, lines, 44, area);
}

fn title_line<'a>(app: &App, title: &'a str) -> Line<'a> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(app.theme.highlight)
            .bg(app.theme.background)
            .add_modifier(Modifier::BOLD),
    ))
}

fn blank_line(app: &App) -> Line<'static> {
    Line::from(Span::styled(
        "",
        Style::default().bg(app.theme.background),
    ))
}

fn task_line(app: &App, task: &Task) -> Line<'static> {
    let bg = app.theme.background;
    Line::from(vec![
        Span::styled(
            format!("  [{}] ", task.checkbox_char()),
            Style::default().fg(app.theme.highlight).bg(bg),
        ),
        Span::styled(
            truncate_to_width(&task.title, 34),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// "  y delete  n keep" with dimmed keys.
fn hint_line(app: &App, hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let bg = app.theme.background;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let text_style = Style::default().fg(app.theme.text).bg(bg);

    let mut spans = vec![Span::styled("  ", Style::default().bg(bg))];
    for (key, action) in hints {
        spans.push(Span::styled(*key, dim_style));
        spans.push(Span::styled(format!(" {}  ", action), text_style));
    }
    Line::from(spans)
}

fn render_popup(frame: &mut Frame, app: &App, lines: Vec<Line>, width: u16, area: Rect) {
    let popup_w = width.min(area.width.saturating_sub(2));
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);

    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(app.theme.highlight)
                .bg(app.theme.background),
        )
        .style(Style::default().bg(app.theme.background));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(app.theme.background));

    frame.render_widget(paragraph, overlay_area);
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
