use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use super::panel;
use crate::store::ExpenseFilter;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = match app.filter {
        ExpenseFilter::All => format!("Expenses ({})", app.expenses.len()),
        filter => format!("Expenses ({}) filter: {filter}", app.expenses.len()),
    };

    if app.expenses.is_empty() {
        let hint = if app.filter == ExpenseFilter::All {
            "Add one with :add <amount> <category> [YYYY-MM-DD] [description]"
        } else {
            "Press f/F to change the filter or Esc to show all"
        };
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses found", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(hint, theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(panel(title)), area);
        return;
    }

    let header_cells = ["Date", "Category", "Description", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = app
        .expenses
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, expense)| {
            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let category = Line::from(vec![
                Span::raw(format!("{} ", expense.category.icon())),
                Span::styled(
                    expense.category.label(),
                    Style::default().fg(theme::category_color(expense.category)),
                ),
            ]);

            Row::new(vec![
                Cell::from(format!("  {}", expense.date.format("%Y-%m-%d"))),
                Cell::from(category),
                Cell::from(truncate(&expense.description, 40)),
                Cell::from(Span::styled(
                    format_amount(expense.amount),
                    theme::amount_style(),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Min(20),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(panel(title));
    f.render_widget(table, area);
}
