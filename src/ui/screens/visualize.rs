use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::periods::FlowGraph;
use crate::ui::app::{App, PlottedPeriod};
use crate::ui::theme;
use crate::ui::util::{flow_bar, format_amount, pad_right, truncate};

const PERIOD_LIST_WIDTH: u16 = 26;
const FLOW_LABEL_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PERIOD_LIST_WIDTH), Constraint::Min(30)])
        .split(area);

    render_period_list(f, columns[0], app);

    match &app.plotted {
        Some(plotted) => render_plot(f, columns[1], plotted, &app.currency),
        None => render_empty(f, columns[1], app.periods.is_empty()),
    }
}

fn render_period_list(f: &mut Frame, area: Rect, app: &App) {
    let plotted_key = app.plotted.as_ref().map(|p| p.key.as_str());
    let items: Vec<ListItem> = app
        .periods
        .iter()
        .enumerate()
        .skip(app.period_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, key)| {
            let style = if i == app.period_index {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let marker = if Some(key.as_str()) == plotted_key {
                "● "
            } else {
                "  "
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", truncate(key, PERIOD_LIST_WIDTH as usize - 4)),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Select period ", theme::title_style())),
    );
    f.render_widget(list, area);
}

fn render_empty(f: &mut Frame, area: Rect, no_periods: bool) {
    let hint = if no_periods {
        "No saved periods. Enter data on screen 1 and press s to save."
    } else {
        "Select a period and press Enter to plot it"
    };
    let msg = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(hint, theme::dim_style())),
    ])
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(" Visualize ", theme::title_style())),
    );
    f.render_widget(msg, area);
}

fn render_plot(f: &mut Frame, area: Rect, plotted: &PlottedPeriod, currency: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Metric cards
            Constraint::Length(3), // Comment
            Constraint::Min(8),    // Flow diagram
        ])
        .split(area);

    render_metric_cards(f, chunks[0], plotted, currency);
    render_comment(f, chunks[1], plotted);
    render_flow(f, chunks[2], &plotted.graph, &plotted.key, currency);
}

fn render_metric_cards(f: &mut Frame, area: Rect, plotted: &PlottedPeriod, currency: &str) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let m = &plotted.metrics;
    let remaining_color = if m.is_over_budget() {
        theme::RED
    } else {
        theme::GREEN
    };
    render_card(f, cards[0], "Total income", m.total_income, theme::GREEN, currency);
    render_card(f, cards[1], "Total expenses", m.total_expense, theme::RED, currency);
    render_card(f, cards[2], "Remaining", m.remaining, remaining_color, currency);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: i64, color: Color, currency: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount, currency),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_comment(f: &mut Frame, area: Rect, plotted: &PlottedPeriod) {
    let comment = if plotted.record.comment.is_empty() {
        Span::styled("Comment: -", theme::dim_style())
    } else {
        Span::styled(
            format!("Comment: {}", plotted.record.comment),
            theme::normal_style(),
        )
    };
    let para = Paragraph::new(Line::from(comment)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY)),
    );
    f.render_widget(para, area);
}

/// Draw the two-stage flow: income sources into the pool node, then the pool
/// fanning out to each expense.
fn render_flow(f: &mut Frame, area: Rect, graph: &FlowGraph, key: &str, currency: &str) {
    let pool = graph.aggregator();
    let inflow = graph.inflow(pool);
    let outflow = graph.outflow(pool);
    let scale = inflow.max(outflow);

    let inner_width = area.width.saturating_sub(2) as usize;
    let bar_width = inner_width
        .saturating_sub(FLOW_LABEL_WIDTH + 8 + 15)
        .clamp(4, 40);

    let mut lines: Vec<Line> = Vec::new();
    for (label, weight) in graph.sources() {
        let weight = i64::from(weight);
        lines.push(Line::from(vec![
            Span::styled(pad_right(label, FLOW_LABEL_WIDTH), theme::normal_style()),
            Span::styled(flow_bar(weight, scale, bar_width), theme::income_style()),
            Span::styled(
                format!(" {:>14}", format_amount(weight, currency)),
                theme::income_style(),
            ),
            Span::styled(" ──┐", theme::dim_style()),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled(
            format!("{}╞═▶ ", " ".repeat(FLOW_LABEL_WIDTH + bar_width + 18)),
            theme::dim_style(),
        ),
        Span::styled(
            format!(
                "{}: in {} / out {}",
                graph.label(pool),
                format_amount(inflow, currency),
                format_amount(outflow, currency)
            ),
            theme::pool_style(),
        ),
    ]));

    let sinks = graph.sinks();
    let last = sinks.len().saturating_sub(1);
    for (i, (label, weight)) in sinks.into_iter().enumerate() {
        let weight = i64::from(weight);
        let branch = if i == last { "└─▶ " } else { "├─▶ " };
        lines.push(Line::from(vec![
            Span::styled(format!("    {branch}"), theme::dim_style()),
            Span::styled(pad_right(label, FLOW_LABEL_WIDTH), theme::normal_style()),
            Span::styled(flow_bar(weight, scale, bar_width), theme::expense_style()),
            Span::styled(
                format!(" {:>14}", format_amount(weight, currency)),
                theme::expense_style(),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" Flow for {key} "), theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
