//! Draws a [`Screen`] with ratatui.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::layout::INFO_ROWS;
use super::theme::Theme;
use super::view::{GridRow, Screen};

/// Draw the whole editor into `frame`.
pub fn draw(frame: &mut Frame, screen: &Screen, theme: &Theme) {
    let [grid, info, status, prompt] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(INFO_ROWS),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_grid(frame, grid, screen, theme);
    render_info(frame, info, screen, theme);
    render_status(frame, status, screen, theme);
    render_prompt(frame, prompt, screen, theme);
}

fn render_grid(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let lines: Vec<Line> = screen
        .rows
        .iter()
        .map(|row| grid_line(row, screen, theme))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn grid_line<'a>(row: &'a GridRow, screen: &Screen, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(row.cells.len() * 3 + 4);
    spans.push(Span::styled(
        row.address.as_str(),
        theme.text_secondary_style(),
    ));
    spans.push(Span::raw("  "));

    for cell in &row.cells {
        spans.push(Span::styled(
            cell.text.as_str(),
            theme.cell_style(cell.style, false, screen.editing_ascii),
        ));
        spans.push(Span::raw(" "));
    }
    let missing = screen.bytes_per_row.saturating_sub(row.cells.len());
    if missing > 0 {
        spans.push(Span::raw(" ".repeat(missing * (screen.cell_width + 1))));
    }

    spans.push(Span::styled("│ ", theme.text_secondary_style()));
    for cell in &row.cells {
        spans.push(Span::styled(
            cell.ascii.to_string(),
            theme.cell_style(cell.style, true, screen.editing_ascii),
        ));
    }
    Line::from(spans)
}

fn render_info(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let lines: Vec<Line> = screen
        .info_lines()
        .into_iter()
        .map(|text| Line::styled(text, theme.text_style()))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let status = Paragraph::new(screen.status.as_str()).style(theme.accent_bold_style());
    frame.render_widget(status, area);
}

fn render_prompt(frame: &mut Frame, area: Rect, screen: &Screen, theme: &Theme) {
    let prompt = &screen.prompt;
    let mut spans = Vec::new();
    if prompt.label.is_empty() {
        match &prompt.notice {
            Some(notice) => spans.push(Span::styled(notice.as_str(), theme.error_style())),
            None => spans.push(Span::styled(
                super::view::EDIT_HINTS,
                theme.text_secondary_style(),
            )),
        }
    } else {
        spans.push(Span::styled(
            format!("{}: ", prompt.label),
            theme.accent_bold_style(),
        ));
        spans.push(Span::styled(prompt.entry.as_str(), theme.text_style()));
        if let Some(notice) = &prompt.notice {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(notice.as_str(), theme.error_style()));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if let Some(column) = prompt.cursor {
        let x = area.x.saturating_add(column as u16);
        if x < area.right() {
            frame.set_cursor_position((x, area.y));
        }
    }
}
