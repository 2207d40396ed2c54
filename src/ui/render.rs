use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;

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
        render_help_overlay(f, f.area(), app);
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), Style::default().fg(p.text_dim)),
                    Span::styled(
                        format!("{s}"),
                        Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(
                    format!("{num}:{s}"),
                    Style::default().fg(p.text_dim),
                ))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(p.overlay)))
        .style(Style::default().bg(p.header_bg));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Overview => super::screens::overview::render(f, area, app),
        Screen::History => super::screens::history::render(f, area, app),
        Screen::Settings => super::screens::settings::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Normal => p.badge_style(p.accent),
        InputMode::Command | InputMode::Editing => p.badge_style(p.good),
        InputMode::Search => p.badge_style(p.warn),
        InputMode::Confirm => p.badge_style(p.bad),
    };

    let info = format!(
        " {} | {} expenses | {} spent",
        app.screen,
        app.transaction_count,
        app.format(app.summary.spent)
    );

    let right = match app.screen {
        Screen::Overview => " a add | b budget | ? help ",
        Screen::History => " D delete | / search | f filter | e export ",
        Screen::Settings => " n name | t theme | R reset | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.chars().count() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, p.status_bar_style()),
        Span::styled(" ".repeat(pad), p.status_bar_style()),
        Span::styled(right, p.status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(p.accent)),
                Span::styled(&app.command_input, p.command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count()),
        ),
        InputMode::Search => {
            let match_info = if !app.search_input.is_empty() {
                format!("  ({} matches)", app.history.len())
            } else {
                String::new()
            };
            (
                Line::from(vec![
                    Span::styled("/", Style::default().fg(p.warn)),
                    Span::styled(&app.search_input, p.command_bar_style()),
                    Span::styled(match_info, p.dim_style()),
                ]),
                Some(1 + app.search_input.chars().count()),
            )
        }
        InputMode::Editing => {
            let prompt = app.edit_target.map_or("edit> ", |t| t.prompt());
            (
                Line::from(vec![
                    Span::styled(prompt, Style::default().fg(p.good)),
                    Span::styled(&app.edit_input, p.command_bar_style()),
                ]),
                Some(prompt.chars().count() + app.edit_input.chars().count()),
            )
        }
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(p.warn)),
                Span::styled(" [y/N] ", Style::default().fg(p.bad)),
            ]),
            None,
        ),
        InputMode::Normal => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, / to search, ? for help",
                    p.dim_style(),
                ))
            } else {
                Line::from(Span::styled(&app.status_message, p.command_bar_style()))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(p.command_bg));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        let offset = u16::try_from(offset).unwrap_or(u16::MAX);
        f.set_cursor_position((area.x.saturating_add(offset), area.y));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let mut help_text = vec![
        Line::from(Span::styled(
            " PocketBudget Help ",
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", p.section_style())),
        Line::from(Span::styled(
            "  1-3 / Tab        Switch screen         j/k        Move down/up",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  g/G              Top/Bottom            Ctrl-q     Quit",
            p.normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Actions", p.section_style())),
        Line::from(Span::styled(
            "  a               Add expense            b          Set budget",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  D (History)     Delete expense         f          Cycle category filter",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  e / p           Export CSV / chart     t          Cycle theme",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  n               Change name            R          Reset history",
            p.normal_style(),
        )),
        Line::from(Span::styled(
            "  :               Command mode           /          Search (live)",
            p.normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", p.section_style())),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<12} {desc}"),
            p.normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        p.dim_style(),
    )));

    // Center the popup, clamped to terminal height
    let lines = u16::try_from(help_text.len()).unwrap_or(u16::MAX);
    let popup_height = lines.saturating_add(2).min(area.height.saturating_sub(2));
    let popup_width = 76.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(p.accent))
            .style(Style::default().bg(p.header_bg)),
    );
    f.render_widget(help, popup_area);
}
