use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;
use super::util::format_amount;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(theme::TEXT_DIM)),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(theme::TEXT_DIM),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Expenses => super::screens::expenses::render(f, area, app),
        Screen::Budgets => super::screens::budgets::render(f, area, app),
    }
}

/// Keys worth advertising on the right of the status bar, per screen.
pub(crate) fn screen_hints(screen: Screen) -> &'static [(&'static str, &'static str)] {
    match screen {
        Screen::Dashboard => &[(":add", "record"), ("?", "keys")],
        Screen::Expenses => &[("f/F", "filter"), ("D", "delete"), ("?", "keys")],
        Screen::Budgets => &[("Enter", "edit"), (":budget", "set"), ("?", "keys")],
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
        InputMode::Confirm => theme::RED,
    };
    let remaining = &app.summary.remaining;
    let month_label = if remaining.is_over_budget() {
        format!("over by {}", format_amount(-remaining.raw()))
    } else {
        format!("{} left", format_amount(remaining.raw()))
    };

    let mut left = vec![
        Span::styled(
            format!(" {} ", app.input_mode),
            Style::default()
                .fg(theme::HEADER_BG)
                .bg(mode_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", app.today.format("%b %Y")),
            theme::status_bar_style(),
        ),
        Span::styled(
            month_label,
            theme::status_bar_style().fg(theme::budget_color(remaining.is_over_budget())),
        ),
    ];
    if app.screen == Screen::Expenses {
        left.push(Span::styled(
            format!("  {} of {} shown", app.expenses.len(), app.expense_count),
            theme::status_bar_style(),
        ));
    }

    let mut right = Vec::new();
    for (key, action) in screen_hints(app.screen) {
        right.push(Span::styled(
            format!(" {key}"),
            theme::status_bar_style().fg(theme::ACCENT),
        ));
        right.push(Span::styled(format!(" {action} "), theme::status_bar_style()));
    }

    let used: usize = left
        .iter()
        .chain(right.iter())
        .map(|span| span.content.chars().count())
        .sum();
    let pad = (area.width as usize).saturating_sub(used);

    let mut spans = left;
    spans.push(Span::styled(" ".repeat(pad), theme::status_bar_style()));
    spans.extend(right);
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

const KEY_HELP: &[(&str, &str)] = &[
    ("j/k", "move cursor"),
    ("g/G", "first/last row"),
    ("Ctrl-d/u", "half page"),
    ("1 2 3", "jump to tab"),
    ("Tab", "next tab"),
    ("Shift-Tab", "previous tab"),
    ("f/F", "cycle filter"),
    ("D", "delete expense"),
    ("Enter", "edit budget"),
    ("Esc", "clear filter"),
    (":", "command line"),
    ("Ctrl-q", "quit"),
];

/// Lay `entries` out two per row, left column first.
pub(crate) fn two_column_rows<'a>(entries: &[(&'a str, &'a str)]) -> Vec<[(&'a str, &'a str); 2]> {
    let half = entries.len().div_ceil(2);
    (0..half)
        .map(|i| [entries[i], entries.get(half + i).copied().unwrap_or(("", ""))])
        .collect()
}

fn key_cell<'a>(key: &'a str, desc: &'a str, key_width: usize) -> [Span<'a>; 2] {
    [
        Span::styled(format!("  {key:<key_width$} "), Style::default().fg(theme::ACCENT)),
        Span::styled(format!("{desc:<22}"), theme::normal_style()),
    ]
}

fn help_section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ))
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut lines = vec![help_section(" Keys")];
    for [(lk, ld), (rk, rd)] in two_column_rows(KEY_HELP) {
        let mut spans = key_cell(lk, ld, 9).to_vec();
        spans.extend(key_cell(rk, rd, 9));
        lines.push(Line::from(spans));
    }

    let mut cmds: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() > 1 && !cmds.iter().any(|(_, d)| *d == cmd.description) {
            cmds.push((name, cmd.description));
        }
    }
    cmds.sort_by_key(|(name, _)| *name);

    lines.push(Line::from(""));
    lines.push(help_section(" Commands"));
    for (name, desc) in cmds {
        lines.push(Line::from(vec![
            Span::styled(format!("  :{name:<10}"), Style::default().fg(theme::GREEN)),
            Span::styled(desc, theme::normal_style()),
        ]));
    }

    let height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
    let width = 72.min(area.width.saturating_sub(4));
    let popup = Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    );

    f.render_widget(Clear, popup);
    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" ExpenseTUI ", theme::title_style()))
            .title_bottom(Span::styled(" any key closes ", theme::dim_style()))
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup);
}
