use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use crate::catalog::pricing::format_price;
use crate::ui::inventory::state::InventoryState;
use crate::ui::load::LoadState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT,
    RATING_STAR, STATUS_ERROR,
};
use crate::ui::components::{scroll_offset, status_message};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &InventoryState, spinner: char) {
    let [filters, table, pager] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(filter_bar(state), filters);

    match &state.listing {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(
                status_message(&format!("{} Loading products...", spinner), BRAND_BLUE),
                table,
            );
        }
        LoadState::Failed(message) => {
            frame.render_widget(status_message(message, STATUS_ERROR), table);
        }
        LoadState::Loaded(_) => render_table(frame, table, state),
    }

    frame.render_widget(pager_line(state), pager);
}

fn filter_bar(state: &InventoryState) -> Paragraph<'static> {
    let label = Style::default().fg(MUTED_TEXT);
    let value = Style::default().fg(HEADER_TEXT);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let search = if state.search_input.is_empty() && !state.editing_search {
        Span::styled("Search products...", label)
    } else {
        Span::styled(state.search_input.clone(), value)
    };
    let cursor = if state.editing_search {
        Span::styled("▏", Style::default().fg(BRAND_BLUE))
    } else {
        Span::raw("")
    };
    let sort = state
        .sort
        .map(|order| order.label())
        .unwrap_or("Sort by");

    let line = Line::from(vec![
        Span::styled(" 🔍 ", label),
        search,
        cursor,
        Span::styled("  │  ", separator),
        Span::styled("Category: ", label),
        Span::styled(state.category_label(), value),
        Span::styled("  │  ", separator),
        Span::styled("Sort: ", label),
        Span::styled(sort, value),
    ]);

    let border = if state.editing_search {
        BRAND_BLUE
    } else {
        GLOBAL_BORDER
    };
    Paragraph::new(line).block(
        Block::default()
            .title(" Inventory Overview ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

fn render_table(frame: &mut Frame<'_>, area: Rect, state: &InventoryState) {
    let products = state.visible_products();
    if products.is_empty() {
        frame.render_widget(status_message("No products found.", MUTED_TEXT), area);
        return;
    }

    // Borders and header take three rows.
    let capacity = area.height.saturating_sub(3).max(1) as usize;
    let offset = scroll_offset(state.selected, capacity);

    let header = Row::new(["Product", "Brand", "Category", "Price", "Stock", "Rating"])
        .style(
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        );

    let rows = products
        .iter()
        .enumerate()
        .skip(offset)
        .take(capacity)
        .map(|(index, product)| {
            let row = Row::new(vec![
                Cell::from(product.title.clone()),
                Cell::from(product.brand.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(product.category.clone()),
                Cell::from(format_price(product.price)),
                Cell::from(product.stock.to_string()),
                Cell::from(Line::from(vec![
                    Span::styled("★ ", Style::default().fg(RATING_STAR)),
                    Span::raw(format!("{:.2}", product.rating)),
                ])),
            ]);
            if index == state.selected {
                row.style(Style::default().bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD))
            } else {
                row
            }
        });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(34),
            Constraint::Percentage(16),
            Constraint::Percentage(18),
            Constraint::Length(11),
            Constraint::Length(7),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(table, area);
}

fn pager_line(state: &InventoryState) -> Paragraph<'static> {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);

    let prev = if state.has_prev_page() { enabled } else { disabled };
    let next = if state.has_next_page() { enabled } else { disabled };

    Paragraph::new(Line::from(vec![
        Span::styled(" ‹ Prev ", prev),
        Span::styled(
            format!(
                "  Page {} of {}  ({} products)  ",
                state.query.page,
                state.total_pages(),
                state.total()
            ),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(" Next › ", next),
    ]))
}
