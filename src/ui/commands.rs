use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::app::{App, EditTarget, PendingAction, Screen};
use super::util::split_add_args;
use crate::config::{expand_home, PlatformDirs};
use crate::export;
use crate::ledger::{Ledger, LedgerError};
use crate::models::Theme;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Ledger) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit PocketBudget", cmd_quit, r);
    register_command!("quit", "Quit PocketBudget", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("hi", "Go to History", cmd_history, r);
    register_command!("history", "Go to History", cmd_history, r);
    register_command!("se", "Go to Settings", cmd_settings, r);
    register_command!("settings", "Go to Settings", cmd_settings, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("budget", "Set budget (e.g. :budget 500)", cmd_budget, r);
    register_command!("b", "Set budget (e.g. :b 500)", cmd_budget, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 12.50 Food lunch)",
        cmd_add,
        r
    );
    register_command!("a", "Add expense (e.g. :a 29 Phone plan)", cmd_add, r);
    register_command!(
        "delete",
        "Delete an expense by id, or the selected one",
        cmd_delete,
        r
    );
    register_command!("del", "Delete an expense", cmd_delete, r);
    register_command!("reset", "Clear the whole history", cmd_reset, r);
    register_command!(
        "search",
        "Search history (e.g. :search coffee)",
        cmd_search,
        r
    );
    register_command!("s", "Search history (e.g. :s coffee)", cmd_search, r);
    register_command!(
        "filter",
        "Filter history by category (e.g. :filter Food)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter history by category", cmd_filter, r);
    register_command!("name", "Change display name (e.g. :name Ana)", cmd_name, r);
    register_command!(
        "theme",
        "Switch theme (standard, dark, light, contrast)",
        cmd_theme,
        r
    );
    register_command!(
        "export",
        "Export history to CSV (e.g. :export ~/Documents)",
        cmd_export,
        r
    );
    register_command!(
        "chart",
        "Save category chart as PNG (e.g. :chart ~/Documents)",
        cmd_chart,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, ledger)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Input mistakes go to the status bar; anything else is a real failure.
fn report(app: &mut App, err: LedgerError) -> anyhow::Result<()> {
    if err.is_input_error() {
        app.set_status(err.to_string());
        Ok(())
    } else {
        Err(err.into())
    }
}

fn target_dir(args: &str, app: &App) -> PathBuf {
    if args.is_empty() {
        app.export_dir.clone()
    } else {
        PathBuf::from(expand_home(args, &PlatformDirs::detect()))
    }
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_history(_args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::History;
    app.refresh_history(ledger);
    Ok(())
}

fn cmd_settings(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::Settings;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.begin_edit(EditTarget::Budget);
        return Ok(());
    }

    match ledger.set_budget(args) {
        Ok(budget) => {
            app.refresh(ledger);
            app.set_status(format!("Budget set to {}", app.format(budget)));
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

fn cmd_add(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.begin_edit(EditTarget::Transaction);
        return Ok(());
    }

    let (amount, category, description) = split_add_args(args);
    match ledger.add_transaction(&description, &amount, &category) {
        Ok(id) => {
            app.refresh(ledger);
            let added = ledger.transactions().iter().find(|t| t.id == id);
            if let Some(txn) = added {
                let msg = format!(
                    "Added {} to {}: {}",
                    app.format(txn.amount),
                    txn.category,
                    txn.description
                );
                app.set_status(msg);
            }
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

fn cmd_delete(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let target = if args.is_empty() {
        if app.screen != Screen::History {
            app.set_status("Navigate to History and select an expense, or :delete <id>");
            return Ok(());
        }
        app.selected_transaction()
            .map(|t| (t.id, t.description.clone()))
    } else {
        ledger.find_id(args).and_then(|id| {
            ledger
                .transactions()
                .iter()
                .find(|t| t.id == id)
                .map(|t| (t.id, t.description.clone()))
        })
    };

    match target {
        Some((id, description)) => {
            let message = format!("Delete '{description}'?");
            app.ask_confirm(PendingAction::DeleteTransaction { id, description }, message);
        }
        None if args.is_empty() => app.set_status("Nothing selected"),
        None => app.set_status(format!("No expense matches id '{args}'")),
    }
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App, _ledger: &mut Ledger) -> anyhow::Result<()> {
    if app.transaction_count == 0 {
        app.set_status("History is already empty");
        return Ok(());
    }
    let count = app.transaction_count;
    app.ask_confirm(
        PendingAction::ResetAll,
        format!(
            "Delete all {count} expense{}? The budget is kept.",
            if count == 1 { "" } else { "s" }
        ),
    );
    Ok(())
}

fn cmd_search(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.search_input = args.to_string();
    app.screen = Screen::History;
    app.history_index = 0;
    app.history_scroll = 0;
    app.refresh_history(ledger);

    if args.is_empty() {
        app.set_status("Search cleared");
    } else {
        app.set_status(format!("Searching: {args}"));
    }

    Ok(())
}

fn cmd_filter(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    app.screen = Screen::History;
    app.history_index = 0;
    app.history_scroll = 0;

    if args.is_empty() {
        app.category_filter.clear();
        app.refresh_history(ledger);
        app.set_status("Category filter cleared");
        return Ok(());
    }

    let found = app
        .categories
        .iter()
        .find(|c| c.eq_ignore_ascii_case(args))
        .cloned();
    if let Some(category) = found {
        app.set_status(format!("Filtering by category: {category}"));
        app.category_filter = category;
        app.refresh_history(ledger);
    } else {
        app.set_status(format!(
            "No expenses in '{args}'. Used: {}",
            app.categories.join(", ")
        ));
    }
    Ok(())
}

fn cmd_name(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    if args.is_empty() {
        app.begin_edit(EditTarget::Name);
        return Ok(());
    }

    match ledger.set_name(args) {
        Ok(()) => {
            app.refresh(ledger);
            app.set_status(format!("Hello, {}!", app.name));
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

fn cmd_theme(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let theme = if args.is_empty() {
        app.theme.next()
    } else if let Some(theme) = Theme::from_name(args) {
        theme
    } else {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.as_str()).collect();
        app.set_status(format!("Unknown theme '{args}'. Themes: {}", names.join(", ")));
        return Ok(());
    };

    match ledger.set_theme(theme) {
        Ok(()) => {
            app.refresh(ledger);
            app.set_status(format!("Theme: {theme}"));
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

fn cmd_export(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let dir = target_dir(args, app);
    match export::write_csv(ledger, &dir, chrono::Utc::now().date_naive()) {
        Ok(path) => {
            let count = app.transaction_count;
            app.set_status(format!("Exported {count} expenses to {}", path.display()));
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

fn cmd_chart(args: &str, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    let dir = target_dir(args, app);
    match export::write_chart_png(ledger, &dir, chrono::Utc::now().date_naive()) {
        Ok(path) => {
            app.set_status(format!("Chart saved to {}", path.display()));
            Ok(())
        }
        Err(e) => report(app, e),
    }
}

/// Carry out a confirmed action.
pub(crate) fn confirm(action: PendingAction, app: &mut App, ledger: &mut Ledger) -> anyhow::Result<()> {
    match action {
        PendingAction::DeleteTransaction { id, description } => {
            if ledger.delete_transaction(id)? {
                app.set_status(format!("Deleted: {description}"));
            } else {
                app.set_status("Already deleted");
            }
        }
        PendingAction::ResetAll => {
            ledger.reset_all()?;
            app.history_index = 0;
            app.history_scroll = 0;
            app.set_status("History cleared");
        }
    }
    app.refresh(ledger);
    Ok(())
}

/// Submit the edit prompt. Returns `false` when the prompt must stay open.
pub(crate) fn submit_edit(
    target: EditTarget,
    input: &str,
    app: &mut App,
    ledger: &mut Ledger,
) -> anyhow::Result<bool> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(target != EditTarget::Name || !ledger.needs_name());
    }
    let command = match target {
        EditTarget::Name => "name",
        EditTarget::Budget => "budget",
        EditTarget::Transaction => "add",
    };
    handle_command(&format!("{command} {input}"), app, ledger)?;
    Ok(target != EditTarget::Name || !ledger.needs_name())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
