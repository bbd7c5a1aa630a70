//! TUI rendering: header, input and output panels, status line, bottom bar.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use text_cleanup::core::app::{NAME, VERSION};

use super::app::App;
use super::constants::{ACCENT, ACCENT_SECONDARY, INPUT_PLACEHOLDER, INTRO};
use super::shortcuts;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    draw_input(f, app, panels[0]);
    draw_output(f, app, panels[1]);

    if let Some(ref status) = app.status {
        f.render_widget(
            Paragraph::new(Span::styled(status.as_str(), Style::default().fg(ACCENT))),
            chunks[2],
        );
    }
    f.render_widget(
        Paragraph::new(shortcuts::labels::bottom_bar()).alignment(Alignment::Right),
        chunks[3],
    );

    if app.toast_visible() {
        draw_toast(f, area);
    } else {
        app.copy_toast_until = None;
    }
}

fn draw_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("◆ ", Style::default().fg(ACCENT)),
            Span::styled(NAME, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" v{}", VERSION), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(INTRO, Style::default().fg(Color::DarkGray))),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn panel(title: &'static str, color: Color) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color)))
}

/// Input panel. Not wrapped, so the cursor sits at the end of the last line; scrolled to keep it visible.
fn draw_input(f: &mut Frame, app: &App, area: Rect) {
    let block = panel(" Input ", ACCENT);
    let inner = block.inner(area);

    if app.input.is_empty() {
        let placeholder =
            Paragraph::new(Span::styled(INPUT_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
                .block(block);
        f.render_widget(placeholder, area);
        f.set_cursor_position((inner.x, inner.y));
        return;
    }

    let line_count = app.input.split('\n').count();
    let last_line = app.input.rsplit('\n').next().unwrap_or("");
    let scroll = line_count.saturating_sub(inner.height.max(1) as usize);
    let scroll = scroll.min(u16::MAX as usize) as u16;
    let para = Paragraph::new(app.input.as_str())
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(para, area);

    let col = last_line
        .chars()
        .count()
        .min(inner.width.saturating_sub(1) as usize) as u16;
    let row = (line_count - 1)
        .saturating_sub(scroll as usize)
        .min(inner.height.saturating_sub(1) as usize) as u16;
    f.set_cursor_position((inner.x + col, inner.y + row));
}

fn draw_output(f: &mut Frame, app: &App, area: Rect) {
    let para = Paragraph::new(app.cleaned.as_str())
        .block(panel(" Cleaned output ", ACCENT_SECONDARY))
        .wrap(Wrap { trim: false })
        .scroll((app.output_scroll, 0));
    f.render_widget(para, area);
}

/// "Copied" toast, top right below the header.
fn draw_toast(f: &mut Frame, area: Rect) {
    const HEADER_HEIGHT: u16 = 2;
    let toast_text = " Copied ";
    let toast_width = toast_text.len() as u16 + 2;
    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(toast_width).saturating_sub(1),
        y: area.y + HEADER_HEIGHT,
        width: toast_width.min(area.width),
        height: 3u16.min(area.height.saturating_sub(HEADER_HEIGHT)),
    };
    f.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .style(Style::default().bg(Color::Black));
    let para = Paragraph::new(Line::from(toast_text))
        .block(block)
        .style(Style::default().fg(ACCENT).bg(Color::Black));
    f.render_widget(para, toast_area);
}
