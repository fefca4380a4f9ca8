//! Rendering of the page.

use choice_form::{ComboBox, Panel, RadioGroup, SelectionAdapter};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{Focus, PageApp, Theme};

const INTRO: &str = "Both widgets below take a list of option records but only ever hand the \
form the selected option's value, never the whole record. Tab moves between controls; the \
panels on the right show what the form holds.";

/// Draw the whole page into `frame`.
pub fn draw_page(frame: &mut Frame, app: &PageApp, panels: &[Panel; 3], title: &str, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(4), // Intro
            Constraint::Min(10),   // Columns
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let title = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(title, chunks[0]);

    let intro = Paragraph::new(INTRO)
        .style(Style::default().fg(theme.muted))
        .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[2]);

    draw_form_column(frame, app, columns[0], theme);

    let middle = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(columns[1]);
    draw_panel(frame, &panels[0], middle[0], theme);
    draw_panel(frame, &panels[1], middle[1], theme);
    draw_panel(frame, &panels[2], columns[2], theme);

    let help_text = "Tab: Next  ↑/↓: Navigate  Space/Enter: Select  Type: Filter  Esc: Quit";
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);
}

fn draw_form_column(frame: &mut Frame, app: &PageApp, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(" Form ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let page = app.page();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(radio_height(page.storage())),
            Constraint::Length(combo_height(page.user())),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    draw_radio_group(frame, page.storage(), rows[0], app.focus() == Focus::Storage, theme);
    draw_combo_box(frame, page.user(), rows[1], app.focus() == Focus::User, theme);
    draw_buttons(frame, app, rows[2], theme);
}

fn radio_height(group: &RadioGroup) -> u16 {
    2 + group.options().len() as u16 + u16::from(group.error().is_some())
}

fn combo_height(combo: &ComboBox) -> u16 {
    let listed = if combo.is_open() {
        combo.visible().len().max(1) as u16
    } else {
        0
    };
    3 + listed + u16::from(combo.error().is_some())
}

fn field_block<'a>(label: &'a str, has_error: bool, is_focused: bool, theme: &Theme) -> Block<'a> {
    let border_color = if has_error {
        theme.error
    } else if is_focused {
        theme.primary
    } else {
        theme.border
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} ", label))
        .title_style(Style::default().fg(if is_focused {
            theme.highlight
        } else {
            theme.text
        }))
}

fn error_line<'a>(error: &str, theme: &Theme) -> Line<'a> {
    Line::styled(format!("⚠ {}", error), Style::default().fg(theme.error))
}

fn draw_radio_group(
    frame: &mut Frame,
    group: &RadioGroup,
    area: Rect,
    is_focused: bool,
    theme: &Theme,
) {
    let block = field_block(group.label(), group.error().is_some(), is_focused, theme);

    let mut lines: Vec<Line> = group
        .options()
        .iter()
        .enumerate()
        .map(|(idx, option)| {
            let checked = group.is_checked(idx);
            let marker = if checked { "(●)" } else { "( )" };
            let style = if is_focused && idx == group.highlight() {
                Style::default()
                    .fg(theme.text)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else if checked {
                Style::default().fg(theme.highlight)
            } else {
                Style::default().fg(theme.text)
            };
            let mut spans = vec![Span::styled(format!("{} {}", marker, option.label()), style)];
            if let Some(desc) = option.desc() {
                spans.push(Span::styled(format!("  {}", desc), Style::default().fg(theme.muted)));
            }
            Line::from(spans)
        })
        .collect();

    if let Some(error) = group.error() {
        lines.push(error_line(error, theme));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_combo_box(frame: &mut Frame, combo: &ComboBox, area: Rect, is_focused: bool, theme: &Theme) {
    let block = field_block(combo.label(), combo.error().is_some(), is_focused, theme);
    let inner = block.inner(area);

    let arrow = if combo.is_open() { "▴" } else { "▾" };
    let mut lines = vec![Line::from(vec![
        Span::styled(combo.display_text().to_string(), Style::default().fg(theme.text)),
        Span::styled(format!(" {}", arrow), Style::default().fg(theme.muted)),
    ])];

    if combo.is_open() {
        let visible = combo.visible();
        if visible.is_empty() {
            lines.push(Line::styled(
                "  Nothing found.",
                Style::default().fg(theme.muted),
            ));
        }
        for (pos, idx) in visible.iter().enumerate() {
            let Some(option) = combo.options().get(*idx) else {
                continue;
            };
            let selected = combo.selected_index() == Some(*idx);
            let marker = if selected { "✓" } else { " " };
            let style = if pos == combo.highlight() {
                Style::default()
                    .fg(theme.text)
                    .bg(theme.selected_bg)
                    .add_modifier(Modifier::BOLD)
            } else if selected {
                Style::default().fg(theme.success)
            } else {
                Style::default().fg(theme.text)
            };
            lines.push(Line::styled(format!("{} {}", marker, option.label()), style));
        }
    }

    if let Some(error) = combo.error() {
        lines.push(error_line(error, theme));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);

    if is_focused {
        let offset = u16::try_from(combo.display_text().chars().count()).unwrap_or(u16::MAX);
        let cursor_x = inner.x.saturating_add(offset);
        if cursor_x < inner.x.saturating_add(inner.width) {
            frame.set_cursor_position((cursor_x, inner.y));
        }
    }
}

fn draw_buttons(frame: &mut Frame, app: &PageApp, area: Rect, theme: &Theme) {
    let button_style = |focused: bool, color: Color| {
        if focused {
            Style::default()
                .fg(theme.text)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color).add_modifier(Modifier::BOLD)
        }
    };

    let link = app.params().toggle_link();
    let line = Line::from(vec![
        Span::styled(
            "[ Submit ]",
            button_style(app.focus() == Focus::Submit, theme.primary),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[ {} ]", link.label),
            button_style(app.focus() == Focus::PrefillLink, theme.secondary),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_panel(frame: &mut Frame, panel: &Panel, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(format!(" {} ", panel.heading))
        .title_style(Style::default().fg(theme.primary));
    let body = Paragraph::new(panel.body.clone())
        .style(Style::default().fg(theme.success))
        .block(block);
    frame.render_widget(body, area);
}
