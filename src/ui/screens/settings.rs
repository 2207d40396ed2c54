use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Theme;
use crate::ui::app::App;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(area);

    render_profile(f, chunks[0], app);
    render_actions(f, chunks[1], app);
}

fn field<'a>(label: &'a str, value: String, app: &App) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label:<14}"), app.palette.dim_style()),
        Span::styled(
            value,
            Style::default()
                .fg(app.palette.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_profile(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let themes: Vec<Span> = Theme::all()
        .iter()
        .flat_map(|t| {
            let style = if *t == app.theme {
                p.selected_style()
            } else {
                p.dim_style()
            };
            [Span::styled(format!(" {t} "), style), Span::raw(" ")]
        })
        .collect();

    let mut theme_line = vec![Span::styled(format!("  {:<14}", "Theme"), p.dim_style())];
    theme_line.extend(themes);

    let lines = vec![
        Line::from(""),
        field("Name", app.name.clone(), app),
        Line::from(theme_line),
        field("Currency", app.currency.clone(), app),
        field("Budget", app.format(app.summary.budget), app),
        field("Expenses", app.transaction_count.to_string(), app),
        field("Export to", app.export_dir.display().to_string(), app),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(" Settings ", p.title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_actions(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let action = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<6}"), p.section_style()),
            Span::styled(desc, p.normal_style()),
        ])
    };

    let lines = vec![
        Line::from(""),
        action("n", "Change display name"),
        action("t", "Cycle theme"),
        action("e", "Export history as CSV"),
        action("p", "Save category chart as PNG"),
        action("R", "Reset history (budget is kept)"),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(" Actions ", p.title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
