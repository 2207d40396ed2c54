use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::export::bar_color;
use crate::ui::app::App;
use crate::ui::util::{share_bar, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Greeting and clock
            Constraint::Length(5), // Summary cards
            Constraint::Min(8),    // Chart and shares
        ])
        .split(area);

    render_header(f, chunks[0], app);
    render_summary_cards(f, chunks[1], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_category_chart(f, body[0], app);
    render_shares(f, body[1], app);
}

fn titled_block<'a>(title: &'a str, app: &App) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.palette.border_style())
        .title(Span::styled(format!(" {title} "), app.palette.title_style()))
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let greeting = if app.name.is_empty() {
        "Welcome".to_string()
    } else {
        format!("Hi, {}", app.name)
    };
    let line = Line::from(vec![
        Span::styled(
            greeting,
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", app.now.format("%B %Y")), p.dim_style()),
        Span::styled(
            format!("  {}", app.now.format("%H:%M:%S")),
            p.normal_style(),
        ),
    ]);
    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(p.border_style()),
    );
    f.render_widget(header, area);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let s = &app.summary;
    let (status, status_color) = if s.over_budget {
        ("Over budget", p.bad)
    } else if s.budget.is_zero() {
        ("No budget set", p.warn)
    } else {
        ("On track", p.good)
    };

    render_card(f, cards[0], app, "Budget", app.format(s.budget), p.accent);
    render_card(f, cards[1], app, "Spent", app.format(s.spent), p.warn);
    render_card(
        f,
        cards[2],
        app,
        "Remaining",
        app.format(s.remaining),
        if s.over_budget { p.bad } else { p.good },
    );
    render_card(f, cards[3], app, "Status", status.to_string(), status_color);
}

fn render_card(f: &mut Frame, area: Rect, app: &App, title: &str, value: String, color: Color) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(titled_block(title, app));

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, app: &App) {
    if app.category_totals.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No expenses yet. Add one with a or :add",
            app.palette.dim_style(),
        )))
        .centered()
        .block(titled_block("Spending by Category", app));
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = app
        .category_totals
        .iter()
        .enumerate()
        .map(|(i, total)| {
            let [r, g, b] = bar_color(i).0;
            let color = Color::Rgb(r, g, b);
            Bar::default()
                .value(total.amount.round().to_u64().unwrap_or(0))
                .text_value(format!("{}", total.amount.round_dp(2)))
                .label(Line::from(truncate(&total.category, 10)))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(app.palette.header_bg).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(titled_block("Spending by Category", app))
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn render_shares(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let block = titled_block("Share", app);
    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = inner_width.saturating_sub(22).min(20);
    let spent = app.summary.spent;

    let lines: Vec<Line> = if app.category_totals.is_empty() {
        vec![Line::from(Span::styled("Nothing to break down", p.dim_style()))]
    } else {
        app.category_totals
            .iter()
            .enumerate()
            .map(|(i, total)| {
                let [r, g, b] = bar_color(i).0;
                let share = total.share_of(spent);
                Line::from(vec![
                    Span::styled(format!("{:<12}", truncate(&total.category, 12)), p.normal_style()),
                    Span::styled(share_bar(share, bar_width), Style::default().fg(Color::Rgb(r, g, b))),
                    Span::styled(format!(" {:>5}%", share.round_dp(1)), p.dim_style()),
                ])
            })
            .collect()
    };

    let mut text = lines;
    if app.summary.budget > Decimal::ZERO {
        let used = (spent * Decimal::ONE_HUNDRED / app.summary.budget).round_dp(1);
        text.push(Line::from(""));
        text.push(Line::from(vec![
            Span::styled(format!("{:<12}", "of budget"), p.section_style()),
            Span::styled(
                share_bar(used, bar_width),
                Style::default().fg(if app.summary.over_budget { p.bad } else { p.good }),
            ),
            Span::styled(format!(" {used:>5}%"), p.dim_style()),
        ]));
    }

    f.render_widget(Paragraph::new(text).block(block), area);
}
