use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Cell, Clear, HighlightSpacing, Paragraph, Row, Table};
use throbber_widgets_tui::Throbber;
use unicode_width::UnicodeWidthStr;

use crate::filters::ContractKind;
use crate::format;
use crate::types::Contract;

use super::Theme;
use super::state::App;

const HIGHLIGHT_SYMBOL: &str = "▶ ";
const TABLE_COLUMN_SPACING: u16 = 1;
const PROMPT: &str = "Search ❯ ";

impl App {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_title(frame, layout[0]);
        self.render_input(frame, layout[1]);
        self.render_results(frame, layout[2]);
        self.render_footer(frame, layout[3]);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let mut line = Line::from(vec![
            Span::styled(format!(" {} ", self.title), self.theme.title_style()),
            Span::raw(" "),
        ]);
        if let Some(kind) = self.filters.kind {
            line.spans.push(Span::styled(
                format!("[{}] ", kind.label()),
                self.theme.badge_style(),
            ));
        }
        if let (Some(sort), Some(order)) = (self.filters.sort, self.filters.order) {
            line.spans.push(Span::styled(
                format!("[{} {}] ", sort.label(), order.arrow()),
                self.theme.badge_style(),
            ));
        }
        frame.render_widget(Paragraph::new(line), area);
        self.render_activity(frame, area);
    }

    /// Right-aligned activity indicator: a spinner while a fetch is in
    /// flight, otherwise the total match count.
    fn render_activity(&self, frame: &mut Frame, area: Rect) {
        let mut line = Line::default();
        if self.fetch.loading {
            let spinner = Throbber::default()
                .style(self.theme.muted_style())
                .throbber_style(self.theme.muted_style());
            line.spans.push(spinner.to_symbol_span(&self.throbber));
            line.spans
                .push(Span::styled("refreshing", self.theme.muted_style()));
        } else if let Some(page) = &self.fetch.data {
            line.spans.push(Span::styled(
                format!("{} contracts", page.total),
                self.theme.muted_style(),
            ));
        }

        let width = line.width() as u16;
        if width == 0 || width >= area.width {
            return;
        }
        let activity = Rect {
            x: area.right().saturating_sub(width),
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(line), activity);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(PROMPT, self.theme.prompt_style()),
            Span::styled(self.input.text().to_string(), self.theme.input_style()),
        ]);
        frame.render_widget(Paragraph::new(line), area);

        let cursor_x = area.x + PROMPT.width() as u16 + self.input.cursor_column();
        if cursor_x < area.right() {
            frame.set_cursor_position(Position::new(cursor_x, area.y));
        }
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let now = Utc::now();
        let rows: Vec<Row<'static>> = self
            .contracts()
            .iter()
            .map(|contract| contract_row(contract, now, &self.theme))
            .collect();
        let is_empty = rows.is_empty();

        let header = Row::new(
            ["Contract", "Type", "Price", "Location", "Expires"]
                .into_iter()
                .map(Cell::from)
                .collect::<Vec<_>>(),
        )
        .style(self.theme.table_header_style())
        .height(1);

        let widths = [
            Constraint::Min(24),
            Constraint::Length(13),
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(9),
        ];
        let table = Table::new(rows, widths)
            .header(header)
            .column_spacing(TABLE_COLUMN_SPACING)
            .highlight_spacing(HighlightSpacing::WhenSelected)
            .row_highlight_style(self.theme.selected_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(table, area, &mut self.table);

        if is_empty {
            let message = if self.fetch.loading {
                "Loading contracts…"
            } else if self.fetch.error.is_some() {
                // The footer carries the error text.
                ""
            } else {
                "No contracts found"
            };
            self.render_empty_message(frame, area, message);
        }
    }

    fn render_empty_message(&self, frame: &mut Frame, area: Rect, message: &str) {
        const HEADER_HEIGHT: u16 = 1;
        if message.is_empty() || area.height <= HEADER_HEIGHT {
            return;
        }
        let mut message_area = area;
        message_area.y += HEADER_HEIGHT;
        message_area.height -= HEADER_HEIGHT;

        let empty = Paragraph::new(message.to_string())
            .alignment(Alignment::Center)
            .style(self.theme.empty_style());
        frame.render_widget(Clear, message_area);
        frame.render_widget(empty, message_area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(error) = &self.fetch.error {
            Line::from(Span::styled(
                format!("✗ {error}"),
                self.theme.error_style(),
            ))
        } else {
            let mut spans = Vec::new();
            if let Some(page) = &self.fetch.data {
                spans.push(Span::styled(
                    format!(
                        "page {}/{} · {} contracts   ",
                        self.filters.page,
                        page.total_pages(),
                        page.total
                    ),
                    self.theme.row_style(),
                ));
            }
            spans.push(Span::styled(
                "Tab type · ^S sort · ^O order · PgUp/PgDn page · Enter select · Esc quit",
                self.theme.hint_style(),
            ));
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn contract_row(contract: &Contract, now: DateTime<Utc>, theme: &Theme) -> Row<'static> {
    let kind = ContractKind::parse(&contract.kind)
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| contract.kind.clone());

    Row::new(vec![
        Cell::from(contract.display_title()),
        Cell::from(kind),
        Cell::from(Line::from(format::isk(contract.price, 2)).right_aligned()),
        Cell::from(contract.display_location()),
        Cell::from(format::time_left(contract.date_expired, now)),
    ])
    .style(theme.row_style())
}
