use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

use super::panel;
use crate::store::BudgetLine;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, progress_bar, spent_ratio};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = app
        .budget_lines
        .iter()
        .enumerate()
        .map(|(i, line)| budget_item(line, i, app.budget_index))
        .collect();

    if app.budget_lines.iter().all(|l| !l.is_set()) {
        items.push(ListItem::new(""));
        items.push(ListItem::new(Line::from(Span::styled(
            "  No budgets set. Press Enter on a category or use :budget <category> <amount>",
            theme::dim_style(),
        ))));
    }

    let title = format!("Monthly Budgets for {}", app.today.format("%B %Y"));
    f.render_widget(List::new(items).block(panel(title)), area);
}

fn budget_item(line: &BudgetLine, i: usize, selected: usize) -> ListItem<'static> {
    let row_style = if i == selected {
        theme::selected_style()
    } else if i % 2 == 0 {
        theme::alt_row_style()
    } else {
        theme::normal_style()
    };

    let name = format!(
        " {} {:<15}",
        line.category.icon(),
        line.category.label()
    );

    if !line.is_set() {
        return ListItem::new(Line::from(vec![
            Span::styled(name, row_style),
            Span::styled(
                format!("{} spent, no limit", format_amount(line.spent)),
                theme::dim_style(),
            ),
        ]));
    }

    let ratio = spent_ratio(line.spent, line.limit);
    let color = if line.over_budget {
        theme::budget_color(true)
    } else if ratio > 0.8 {
        theme::YELLOW
    } else {
        theme::budget_color(false)
    };

    let mut spans = vec![
        Span::styled(name, row_style),
        Span::styled(
            format!(
                "{:>12} / {:<12} ",
                format_amount(line.spent),
                format_amount(line.limit)
            ),
            Style::default().fg(color),
        ),
        Span::styled(progress_bar(ratio, 20), Style::default().fg(color)),
        Span::styled(
            format!(" {:.0}%", ratio * 100.0),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if line.over_budget {
        spans.push(Span::styled(
            format!("  over by {}", format_amount(line.spent - line.limit)),
            Style::default().fg(theme::RED).add_modifier(Modifier::BOLD),
        ));
    }
    ListItem::new(Line::from(spans))
}
