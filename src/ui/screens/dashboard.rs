use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use super::panel;
use crate::store::{CategoryTotals, RemainingBudget};
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Summary cards
            Constraint::Min(10),   // Category chart
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_category_chart(f, chunks[1], &app.summary.category_totals);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let summary = &app.summary;

    render_card(
        f,
        cards[0],
        "Total Spent",
        format_amount(summary.total_spent),
        theme::ACCENT,
        format!("{} expenses", app.expense_count),
    );
    render_card(
        f,
        cards[1],
        "This Month",
        format_amount(summary.spent_this_month()),
        theme::RED,
        app.today.format("%B %Y").to_string(),
    );
    render_remaining_card(f, cards[2], summary.remaining);

    let over = &app.over_budget;
    let names = over
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(", ");
    render_card(
        f,
        cards[3],
        "Over Budget",
        format!("{}", over.len()),
        theme::budget_color(!over.is_empty()),
        if over.is_empty() {
            "all within limits".to_string()
        } else {
            names
        },
    );
}

fn render_remaining_card(f: &mut Frame, area: Rect, remaining: RemainingBudget) {
    let subtitle = if remaining.is_over_budget() {
        format!("over by {}", format_amount(remaining.raw().abs()))
    } else {
        "left this month".to_string()
    };
    render_card(
        f,
        area,
        "Remaining Budget",
        format_amount(remaining.display()),
        theme::budget_color(remaining.is_over_budget()),
        subtitle,
    );
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    title: &str,
    value: String,
    color: Color,
    subtitle: String,
) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(panel(title));

    f.render_widget(text, area);
}

fn render_category_chart(f: &mut Frame, area: Rect, totals: &CategoryTotals) {
    let block = panel("Spending by Category");

    if totals.is_zero() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No expenses yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add <amount> <category> [YYYY-MM-DD] [description]",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .map(|(category, amount)| {
            let color = theme::category_color(category);
            Bar::default()
                .value(amount.round().to_u64().unwrap_or(0))
                .text_value(format_amount(amount))
                .label(Line::from(category.label()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(theme::HEADER_BG)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(14)
        .bar_gap(2)
        .value_style(Style::default().fg(theme::TEXT));

    f.render_widget(chart, area);
}
