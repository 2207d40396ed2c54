use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config::{expand_home, Config, PlatformDirs};
use crate::export;
use crate::ledger::Ledger;
use crate::models::{find_default, Theme};
use crate::ui::util::{format_amount, split_add_args, truncate};

pub(crate) fn as_cli(args: &[String], config: &Config, ledger: &mut Ledger) -> Result<()> {
    match args[1].as_str() {
        "summary" | "s" => {
            cli_summary(config, ledger);
            Ok(())
        }
        "budget" => cli_budget(&args[2..], config, ledger),
        "add" => cli_add(&args[2..], config, ledger),
        "delete" => cli_delete(&args[2..], ledger),
        "reset" => cli_reset(&args[2..], ledger),
        "list" => cli_list(&args[2..], config, ledger),
        "categories" => {
            cli_categories(config, ledger);
            Ok(())
        }
        "export" => cli_export(&args[2..], config, ledger),
        "chart" => cli_chart(&args[2..], config, ledger),
        "name" => cli_name(&args[2..], ledger),
        "theme" => cli_theme(&args[2..], ledger),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("pocketbudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("PocketBudget: a pocket-money budget tracker");
    println!();
    println!("Usage: pocketbudget [command]");
    println!();
    println!("Commands:");
    println!("  (none)                          Launch interactive TUI");
    println!("  summary, s                      Print budget, spent, remaining and categories");
    println!("  budget [amount]                 Show or set the budget");
    println!("  add <amount> [category] [desc]  Record an expense");
    println!("  delete <id>                     Delete an expense (full id or unique prefix)");
    println!("  reset --yes                     Clear the history, keeping the budget");
    println!("  list                            List expenses, newest first");
    println!("    --search <text>               Only descriptions or categories containing text");
    println!("    --category <name>             Only this category");
    println!("  categories                      List categories in use");
    println!("  export [dir]                    Write the history as CSV");
    println!("  chart [dir]                     Write the category chart as PNG");
    println!("  name <name>                     Set the display name");
    println!("  theme <name>                    Set the theme (standard, dark, light, contrast)");
    println!("  --help, -h                      Show this help");
    println!("  --version, -V                   Show version");
}

/// Value following `--flag`, if present.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

fn target_dir(args: &[String], config: &Config) -> PathBuf {
    args.first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(expand_home(a, &PlatformDirs::detect())))
        .unwrap_or_else(|| config.export_dir.clone())
}

fn cli_summary(config: &Config, ledger: &Ledger) {
    let s = ledger.compute_summary();
    let money = |v| format_amount(v, &config.currency);

    let title = if ledger.needs_name() {
        "PocketBudget".to_string()
    } else {
        format!("PocketBudget: {}", ledger.name())
    };
    println!("{title}");
    println!("{}", "─".repeat(40));
    println!("  Budget:     {}", money(s.budget));
    println!("  Spent:      {}", money(s.spent));
    println!("  Remaining:  {}", money(s.remaining));
    if s.over_budget {
        println!("  Status:     over budget by {}", money(s.spent - s.budget));
    }
    println!("  Expenses:   {}", ledger.transactions().len());

    let totals = ledger.aggregate_by_category();
    if !totals.is_empty() {
        println!();
        println!("Spending by Category:");
        for total in &totals {
            println!(
                "  {:<16} {:>16} {:>6}%",
                truncate(&total.category, 16),
                money(total.amount),
                total.share_of(s.spent)
            );
        }
    }
}

fn cli_budget(args: &[String], config: &Config, ledger: &mut Ledger) -> Result<()> {
    let Some(input) = args.first() else {
        println!("Budget: {}", format_amount(ledger.budget(), &config.currency));
        return Ok(());
    };
    let budget = ledger.set_budget(input)?;
    println!("Budget set to {}", format_amount(budget, &config.currency));
    Ok(())
}

fn cli_add(args: &[String], config: &Config, ledger: &mut Ledger) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: pocketbudget add <amount> [category] [description]");
    }
    let (amount, category, description) = split_add_args(&args.join(" "));
    let id = ledger.add_transaction(&description, &amount, &category)?;
    if let Some(txn) = ledger.transactions().iter().find(|t| t.id == id) {
        println!(
            "Added {} to {}: {} ({})",
            format_amount(txn.amount, &config.currency),
            txn.category,
            txn.description,
            txn.short_id()
        );
    }
    Ok(())
}

fn cli_delete(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let Some(needle) = args.first() else {
        anyhow::bail!("Usage: pocketbudget delete <id>");
    };
    let id = ledger
        .find_id(needle)
        .ok_or_else(|| anyhow::anyhow!("No single expense matches id '{needle}'"))?;
    if ledger.delete_transaction(id)? {
        println!("Deleted {id}");
    } else {
        println!("Nothing to delete for {id}");
    }
    Ok(())
}

fn cli_reset(args: &[String], ledger: &mut Ledger) -> Result<()> {
    if !args.iter().any(|a| a == "--yes") {
        anyhow::bail!("This deletes every expense. Run again with --yes to confirm");
    }
    let count = ledger.transactions().len();
    ledger.reset_all()?;
    println!("Deleted {count} expenses. Budget kept.");
    Ok(())
}

fn cli_list(args: &[String], config: &Config, ledger: &Ledger) -> Result<()> {
    let query = flag_value(args, "--search").unwrap_or("");
    let category = flag_value(args, "--category")
        .map(|c| find_default(c).unwrap_or(c))
        .unwrap_or("");
    let txns = ledger.filter_transactions(query, category);
    if txns.is_empty() {
        println!("No expenses");
        return Ok(());
    }

    println!(
        "{:<9} {:<17} {:<16} {:>14}  Description",
        "ID", "Date", "Category", "Amount"
    );
    println!("{}", "─".repeat(80));
    for txn in txns.iter().rev() {
        println!(
            "{:<9} {:<17} {:<16} {:>14}  {}",
            txn.short_id(),
            txn.created_at
                .with_timezone(&chrono::Local)
                .format("%d.%m.%Y %H:%M")
                .to_string(),
            truncate(&txn.category, 16),
            format_amount(txn.amount, &config.currency),
            txn.description
        );
    }
    Ok(())
}

fn cli_categories(config: &Config, ledger: &Ledger) {
    let categories = ledger.distinct_categories();
    if categories.is_empty() {
        println!("No categories in use");
        return;
    }
    let totals = ledger.aggregate_by_category();
    for name in &categories {
        let amount = totals
            .iter()
            .find(|t| t.category == *name)
            .map(|t| t.amount)
            .unwrap_or_default();
        println!("  {name:<24} {}", format_amount(amount, &config.currency));
    }
}

fn cli_export(args: &[String], config: &Config, ledger: &Ledger) -> Result<()> {
    let dir = target_dir(args, config);
    let path = export::write_csv(ledger, &dir, chrono::Utc::now().date_naive())
        .with_context(|| format!("Failed to export to {}", dir.display()))?;
    println!(
        "Exported {} expenses to {}",
        ledger.transactions().len(),
        path.display()
    );
    Ok(())
}

fn cli_chart(args: &[String], config: &Config, ledger: &Ledger) -> Result<()> {
    let dir = target_dir(args, config);
    let path = export::write_chart_png(ledger, &dir, chrono::Utc::now().date_naive())
        .with_context(|| format!("Failed to write chart to {}", dir.display()))?;
    println!("Chart saved to {}", path.display());
    Ok(())
}

fn cli_name(args: &[String], ledger: &mut Ledger) -> Result<()> {
    ledger.set_name(&args.join(" "))?;
    println!("Hello, {}!", ledger.name());
    Ok(())
}

fn cli_theme(args: &[String], ledger: &mut Ledger) -> Result<()> {
    let Some(name) = args.first() else {
        println!("Current theme: {}", ledger.theme());
        return Ok(());
    };
    let theme = Theme::from_name(name).ok_or_else(|| {
        let names: Vec<&str> = Theme::all().iter().map(|t| t.as_str()).collect();
        anyhow::anyhow!("Unknown theme '{name}'. Themes: {}", names.join(", "))
    })?;
    ledger.set_theme(theme)?;
    println!("Theme set to {theme}");
    Ok(())
}
