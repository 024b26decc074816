//! Frame layout.
//!
//! ```text
//! ┌ Number ───────────────┐┌ Category ─────────────┐
//! └───────────────────────┘└───────────────────────┘
//! ┌ Name ─────────────────┐┌ Quantity ─────────────┐
//! └───────────────────────┘└───────────────────────┘
//! ┌ Filter by Category ┐┌ Actions ──────────────────┐
//! └────────────────────┘└───────────────────────────┘
//! ┌ Inventory ────────────────────────────────────────┐
//! │   ID  Number  Category  Name  Quantity            ▲
//! │ > 1   N-1     Tools     Hammer 5                  █
//! └◄═══════════════════════════════════════════════►──┘
//!  status line                                 ^A ^U ^D
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Paragraph, Row, Scrollbar, ScrollbarOrientation, ScrollbarState, Table,
    TableState,
};
use ratatui::Frame;

use crate::state::{cells, AppState, Button, Focus, FormField, StatusLevel, COLUMNS};

const KEY_HINTS: &str = "Tab focus  Space mark  ^V all  ^A add  ^U update  ^D delete  Esc close";

/// Widths of the data columns, in [`COLUMNS`] order.
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(6),
    Constraint::Length(12),
    Constraint::Length(16),
    Constraint::Min(16),
    Constraint::Length(10),
];

pub fn render(frame: &mut Frame, state: &AppState) {
    let [fields_top, fields_bottom, controls, table, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let halves = [Constraint::Percentage(50), Constraint::Percentage(50)];
    let [number, category] = Layout::horizontal(halves).areas(fields_top);
    let [name, quantity] = Layout::horizontal(halves).areas(fields_bottom);
    render_field(frame, state, FormField::Number, number);
    render_field(frame, state, FormField::Category, category);
    render_field(frame, state, FormField::Name, name);
    render_field(frame, state, FormField::Quantity, quantity);

    let [filter, buttons] =
        Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)]).areas(controls);
    render_filter(frame, state, filter);
    render_buttons(frame, state, buttons);

    render_table(frame, state, table);
    render_status(frame, state, status);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

fn render_field(frame: &mut Frame, state: &AppState, field: FormField, area: Rect) {
    let focused = state.focus == Focus::Field(field);
    let value = state.form.value(field);

    frame.render_widget(
        Paragraph::new(value).block(focus_block(field.label(), focused)),
        area,
    );

    if focused {
        let max = area.width.saturating_sub(2);
        let typed = u16::try_from(value.chars().count()).unwrap_or(u16::MAX);
        frame.set_cursor_position((area.x + 1 + typed.min(max), area.y + 1));
    }
}

fn render_filter(frame: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Filter;
    let line = Line::from(vec![
        Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            state.filter.current().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(focus_block("Filter by Category", focused)),
        area,
    );
}

fn render_buttons(frame: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Buttons;
    let current = state.focused_button();

    let spans: Vec<Span> = Button::ALL
        .iter()
        .map(|button| {
            let style = match (*button == current, focused) {
                (true, true) => Style::default().fg(Color::Black).bg(Color::Yellow),
                (true, false) => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };
            Span::styled(format!(" {} ", button.label()), style)
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(focus_block("Actions", focused)),
        area,
    );
}

fn render_table(frame: &mut Frame, state: &AppState, area: Rect) {
    let focused = state.focus == Focus::Table;
    let list = &state.list;
    let offset = list.column_offset();

    let header = Row::new(
        std::iter::once(Cell::from(" "))
            .chain(COLUMNS[offset..].iter().map(|c| Cell::from(*c)))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = list
        .rows()
        .iter()
        .map(|item| {
            let mark = if list.is_marked(item.id) { "*" } else { " " };
            let values = cells(item);
            Row::new(
                std::iter::once(Cell::from(mark))
                    .chain(values[offset..].iter().cloned().map(Cell::from))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let widths: Vec<Constraint> = std::iter::once(Constraint::Length(1))
        .chain(COLUMN_WIDTHS[offset..].iter().copied())
        .collect();

    let title = match list.marked_count() {
        0 => format!("Inventory ({})", list.len()),
        marked => format!("Inventory ({}, {marked} marked)", list.len()),
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(focus_block(&title, focused))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut table_state = TableState::default().with_selected(list.cursor());
    frame.render_stateful_widget(table, area, &mut table_state);

    // Scrollbars sit on the block border, not over the corners
    let vertical_area = Rect {
        x: area.x,
        y: area.y + 1,
        width: area.width,
        height: area.height.saturating_sub(2),
    };
    let mut vertical = ScrollbarState::new(list.len()).position(list.cursor().unwrap_or(0));
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        vertical_area,
        &mut vertical,
    );

    let horizontal_area = Rect {
        x: area.x + 1,
        y: area.y,
        width: area.width.saturating_sub(2),
        height: area.height,
    };
    let mut horizontal = ScrollbarState::new(COLUMNS.len()).position(offset);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::HorizontalBottom),
        horizontal_area,
        &mut horizontal,
    );
}

fn render_status(frame: &mut Frame, state: &AppState, area: Rect) {
    let message = match &state.status {
        Some(line) => {
            let color = match line.level {
                StatusLevel::Info => Color::Green,
                StatusLevel::Error => Color::Red,
            };
            Span::styled(line.message.clone(), Style::default().fg(color))
        }
        None => Span::raw(""),
    };

    let hint_width = u16::try_from(KEY_HINTS.len()).unwrap_or(u16::MAX);
    let [left, right] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(hint_width)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(message)), left);
    frame.render_widget(
        Paragraph::new(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        right,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use inventory_core::{InventoryItem, ItemFields};
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn buffer_to_string(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.list.replace(vec![
            InventoryItem::from_fields(1, ItemFields::new("N-1", "Tools", "Hammer", 5)),
            InventoryItem::from_fields(2, ItemFields::new("N-2", "Paint", "Primer", 8)),
        ]);
        state
    }

    #[test]
    fn test_renders_every_control() {
        let mut state = sample_state();
        state.info("Showing 2 items (filter: All)");
        let screen = draw(&state);

        for text in ["Number", "Category", "Quantity", "Filter by Category", "View All", "Close"] {
            assert!(screen.contains(text), "missing {text}");
        }
        assert!(screen.contains("Hammer"));
        assert!(screen.contains("Primer"));
        assert!(screen.contains("Showing 2 items"));
    }

    #[test]
    fn test_column_offset_hides_leading_columns() {
        let mut state = sample_state();
        for _ in 0..3 {
            state.list.scroll_columns(1);
        }
        let screen = draw(&state);

        assert!(!screen.contains("N-1"));
        assert!(screen.contains("Hammer"));
    }

    #[test]
    fn test_marked_rows_are_flagged() {
        let mut state = sample_state();
        state.select_row(1);
        state.list.toggle_mark();
        let screen = draw(&state);

        assert!(screen.contains("1 marked"));
        assert!(screen.contains("Primer"));
    }

    #[test]
    fn test_renders_empty_list() {
        let state = AppState::new();
        let screen = draw(&state);
        assert!(screen.contains("Inventory (0)"));
    }
}
