use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let p = &app.palette;
    let mut filters = Vec::new();
    if !app.category_filter.is_empty() {
        filters.push(format!("category: {}", app.category_filter));
    }
    if !app.search_input.is_empty() {
        filters.push(format!("search: '{}'", app.search_input));
    }
    let title = format!(" History ({}) {} ", app.history.len(), filters.join(" | "));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(p.border_style())
        .title(Span::styled(title, p.title_style()));

    if app.history.is_empty() {
        let hint = if filters.is_empty() {
            "Add an expense with a or :add <amount> [category] [description]"
        } else {
            "Press Esc to clear the search, f to change the category filter"
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses to show", p.dim_style())),
            Line::from(""),
            Line::from(Span::styled(hint, p.dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Description", "Amount", "Id"]
        .iter()
        .map(|h| Cell::from(*h).style(p.header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .history
        .iter()
        .enumerate()
        .skip(app.history_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.history_index {
                p.selected_style()
            } else if i % 2 == 1 {
                p.alt_row_style()
            } else {
                p.normal_style()
            };
            let date = txn
                .created_at
                .with_timezone(&chrono::Local)
                .format("%d.%m.%Y %H:%M")
                .to_string();

            Row::new(vec![
                Cell::from(date),
                Cell::from(truncate(&txn.category, 16)),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(app.format(txn.amount)),
                Cell::from(txn.short_id()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(17),
        Constraint::Length(17),
        Constraint::Min(20),
        Constraint::Length(16),
        Constraint::Length(9),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}
