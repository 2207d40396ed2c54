use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::ui::app::{App, EditTarget, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

/// The header clock repaints on every poll timeout.
const TICK: Duration = Duration::from_secs(1);

pub(crate) fn as_tui(config: &Config, ledger: &mut Ledger) -> Result<()> {
    let mut app = App::new(config, ledger);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "terminal UI stopped");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    ledger: &mut Ledger,
) -> Result<()> {
    while app.running {
        app.tick();
        terminal.draw(|f| {
            // tab bar, status bar, command bar, table borders and header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if !event::poll(TICK)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if app.show_help {
            app.show_help = false;
            continue;
        }

        let handled = match app.input_mode {
            InputMode::Normal => handle_normal_input(key, app, ledger),
            InputMode::Command => handle_command_input(key, app, ledger),
            InputMode::Search => {
                handle_search_input(key, app, ledger);
                Ok(())
            }
            InputMode::Editing => handle_editing_input(key, app, ledger),
            InputMode::Confirm => handle_confirm_input(key, app, ledger),
        };
        // A failed save must not take the UI down; the ledger is unchanged.
        if let Err(e) = handled {
            tracing::error!(error = %e, "command failed");
            app.set_status(format!("Error: {e}"));
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('/') => {
            app.input_mode = InputMode::Search;
            app.search_input.clear();
            app.screen = Screen::History;
            app.refresh_history(ledger);
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('1') => switch_screen(app, ledger, Screen::Overview),
        KeyCode::Char('2') => switch_screen(app, ledger, Screen::History),
        KeyCode::Char('3') => switch_screen(app, ledger, Screen::Settings),
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let next = (idx + 1) % screens.len();
            switch_screen(app, ledger, screens[next]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, ledger, screens[prev]);
        }
        KeyCode::Esc => handle_escape(app, ledger),
        KeyCode::Char('g') => {
            scroll_to_top(&mut app.history_index, &mut app.history_scroll);
        }
        KeyCode::Char('G') => {
            let len = app.history.len();
            let page = app.visible_rows;
            scroll_to_bottom(&mut app.history_index, &mut app.history_scroll, len, page);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('a') => app.begin_edit(EditTarget::Transaction),
        KeyCode::Char('b') => app.begin_edit(EditTarget::Budget),
        KeyCode::Char('n') => app.begin_edit(EditTarget::Name),
        KeyCode::Char('t') => commands::handle_command("theme", app, ledger)?,
        KeyCode::Char('e') => commands::handle_command("export", app, ledger)?,
        KeyCode::Char('p') => commands::handle_command("chart", app, ledger)?,
        KeyCode::Char('R') => commands::handle_command("reset", app, ledger)?,
        KeyCode::Char('f') => {
            app.screen = Screen::History;
            app.cycle_category_filter(ledger);
            if app.category_filter.is_empty() {
                app.set_status("Category filter: all");
            } else {
                let msg = format!("Category filter: {}", app.category_filter);
                app.set_status(msg);
            }
        }
        KeyCode::Char('D') if app.screen == Screen::History => {
            commands::handle_command("delete", app, ledger)?;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, ledger)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_search_input(key: event::KeyEvent, app: &mut App, ledger: &Ledger) {
    match key.code {
        KeyCode::Enter => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.search_input.clear();
            app.refresh_history(ledger);
        }
        KeyCode::Backspace => {
            app.search_input.pop();
            app.history_index = 0;
            app.history_scroll = 0;
            app.refresh_history(ledger);
        }
        KeyCode::Char(c) => {
            app.search_input.push(c);
            app.history_index = 0;
            app.history_scroll = 0;
            app.refresh_history(ledger);
        }
        _ => {}
    }
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    let Some(target) = app.edit_target else {
        app.end_edit();
        return Ok(());
    };
    match key.code {
        KeyCode::Enter => {
            let input = app.edit_input.clone();
            app.end_edit();
            if !commands::submit_edit(target, &input, app, ledger)? {
                app.begin_edit(target);
                app.set_status("Please enter your name to continue");
            }
        }
        // The first-run name prompt can only be left by answering it.
        KeyCode::Esc if target == EditTarget::Name && ledger.needs_name() => {
            app.set_status("Please enter your name to continue");
        }
        KeyCode::Esc => {
            app.end_edit();
            app.set_status("Edit cancelled");
        }
        KeyCode::Backspace => {
            app.edit_input.pop();
        }
        KeyCode::Char(c) => {
            app.edit_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App, ledger: &mut Ledger) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            if let Some(action) = app.pending_action.take() {
                commands::confirm(action, app, ledger)?;
            }
        }
        _ => {
            // Any other key = cancel
            app.pending_action = None;
            app.input_mode = InputMode::Normal;
            app.confirm_message.clear();
            app.set_status("Cancelled");
        }
    }
    Ok(())
}

// ── Navigation helpers ───────────────────────────────────────

fn switch_screen(app: &mut App, ledger: &Ledger, screen: Screen) {
    app.screen = screen;
    if screen == Screen::History {
        app.refresh_history(ledger);
    }
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    if app.screen == Screen::History {
        let len = app.history.len();
        let page = app.visible_rows.max(1);
        scroll_down(&mut app.history_index, &mut app.history_scroll, len, page);
    }
}

fn handle_move_up(app: &mut App) {
    if app.screen == Screen::History {
        scroll_up(&mut app.history_index, &mut app.history_scroll);
    }
}

fn handle_escape(app: &mut App, ledger: &Ledger) {
    app.status_message.clear();
    if !app.search_input.is_empty() {
        app.search_input.clear();
        app.refresh_history(ledger);
    }
}
