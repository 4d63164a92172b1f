use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::CategoryKind;
use crate::ui::app::App;
use crate::ui::form::{EntryForm, FormField};
use crate::ui::theme;
use crate::ui::util::{format_amount, pad_right};

const LABEL_WIDTH: usize = 22;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(14),   // Period and amounts
            Constraint::Length(4), // Comment
        ])
        .split(area);

    render_fields(f, chunks[0], app);
    render_comment(f, chunks[1], app);
}

fn render_fields(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let mut lines: Vec<Line> = Vec::new();
    let mut section: Option<CategoryKind> = None;

    for (i, field) in EntryForm::fields().iter().enumerate() {
        let selected = i == form.selected;
        let (label, value, value_style) = match *field {
            FormField::Month => (
                "Month".to_string(),
                format!("◀ {} ▶", form.period().month.name()),
                theme::normal_style(),
            ),
            FormField::Year => (
                "Year".to_string(),
                format!("◀ {} ▶", form.period().year),
                theme::normal_style(),
            ),
            FormField::Amount(kind, name) => {
                if section != Some(kind) {
                    section = Some(kind);
                    lines.push(Line::from(""));
                    let heading = match kind {
                        CategoryKind::Income => " Income",
                        CategoryKind::Expense => " Expenses",
                    };
                    lines.push(Line::from(Span::styled(heading, theme::section_style())));
                }
                let style = match kind {
                    CategoryKind::Income => theme::income_style(),
                    CategoryKind::Expense => theme::expense_style(),
                };
                (
                    name.to_string(),
                    format_amount(i64::from(form.amount(kind, name)), &app.currency),
                    style,
                )
            }
            // Rendered in its own block below
            FormField::Comment => continue,
        };

        let row_style = if selected {
            theme::selected_style()
        } else {
            theme::normal_style()
        };
        let marker = if selected { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{}", pad_right(&label, LABEL_WIDTH)), row_style),
            Span::styled(
                format!(" {value:>16}"),
                if selected { row_style } else { value_style },
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Enter values in {} ", app.currency),
            theme::title_style(),
        ));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_comment(f: &mut Frame, area: Rect, app: &App) {
    let selected = app.form.current_field() == FormField::Comment;
    let border = if selected {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::OVERLAY)
    };
    let text = if app.form.comment().is_empty() {
        Line::from(Span::styled("Write a comment here", theme::dim_style()))
    } else {
        Line::from(Span::styled(app.form.comment(), theme::normal_style()))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(
            " Comment ",
            theme::title_style().add_modifier(if selected {
                Modifier::REVERSED
            } else {
                Modifier::empty()
            }),
        ));
    f.render_widget(
        Paragraph::new(text).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
