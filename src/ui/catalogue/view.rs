use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::catalog::pricing::format_price;
use crate::ui::catalogue::state::{CatalogueState, ViewMode, GRID_COLUMNS};
use crate::ui::components::{scroll_offset, status_message};
use crate::ui::load::LoadState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, CATALOGUE_PURPLE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    RATING_STAR, STATUS_ERROR,
};

const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &CatalogueState, spinner: char) {
    let [title, content] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(area);

    frame.render_widget(title_block(state), title);

    if let Some(category) = &state.open {
        match &state.products {
            LoadState::Idle | LoadState::Loading => frame.render_widget(
                status_message(
                    &format!("{} Loading {} products...", spinner, category.name),
                    BRAND_BLUE,
                ),
                content,
            ),
            LoadState::Failed(message) => {
                frame.render_widget(status_message(message, STATUS_ERROR), content)
            }
            LoadState::Loaded(products) => {
                let cards = products
                    .iter()
                    .map(|product| {
                        vec![
                            Line::styled(product.title.clone(), Style::default().fg(HEADER_TEXT)),
                            Line::styled(product.description.clone(), Style::default().fg(MUTED_TEXT)),
                            Line::from(vec![
                                Span::styled(
                                    format_price(product.price),
                                    Style::default().add_modifier(Modifier::BOLD),
                                ),
                                Span::raw("  "),
                                Span::styled("★ ", Style::default().fg(RATING_STAR)),
                                Span::raw(format!("{:.2}", product.rating)),
                            ]),
                        ]
                    })
                    .collect();
                render_grid(frame, content, cards, state.product_selected);
            }
        }
        return;
    }

    match &state.categories {
        LoadState::Idle | LoadState::Loading => frame.render_widget(
            status_message(&format!("{} Loading categories...", spinner), BRAND_BLUE),
            content,
        ),
        LoadState::Failed(message) => {
            frame.render_widget(status_message(message, STATUS_ERROR), content)
        }
        LoadState::Loaded(categories) => match state.view_mode {
            ViewMode::Grid => {
                let cards = categories
                    .iter()
                    .map(|category| {
                        let picture = if category.thumbnail.is_some() {
                            Span::styled("▣ ", Style::default().fg(CATALOGUE_PURPLE))
                        } else {
                            Span::styled("□ ", Style::default().fg(MUTED_TEXT))
                        };
                        vec![
                            Line::from(vec![
                                picture,
                                Span::styled(
                                    category.name.clone(),
                                    Style::default().fg(HEADER_TEXT),
                                ),
                            ]),
                            Line::styled(
                                format!("{} products", category.count),
                                Style::default().fg(MUTED_TEXT),
                            ),
                            Line::styled("View products ›", Style::default().fg(BRAND_BLUE)),
                        ]
                    })
                    .collect();
                render_grid(frame, content, cards, state.selected);
            }
            ViewMode::List => {
                let visible = content.height.saturating_sub(2) as usize;
                let offset = scroll_offset(state.selected, visible);
                let items: Vec<ListItem> = categories
                    .iter()
                    .enumerate()
                    .skip(offset)
                    .take(visible)
                    .map(|(index, category)| {
                        let line = Line::from(vec![
                            Span::styled(
                                format!("{:<32}", category.name),
                                Style::default().fg(HEADER_TEXT),
                            ),
                            Span::styled(
                                format!("{:>4} products  ›", category.count),
                                Style::default().fg(MUTED_TEXT),
                            ),
                        ]);
                        let item = ListItem::new(line);
                        if index == state.selected {
                            item.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                        } else {
                            item
                        }
                    })
                    .collect();
                frame.render_widget(
                    List::new(items).block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(GLOBAL_BORDER)),
                    ),
                    content,
                );
            }
        },
    }
}

fn title_block(state: &CatalogueState) -> Paragraph<'static> {
    let heading = Style::default()
        .fg(HEADER_TEXT)
        .add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(MUTED_TEXT);

    let lines = match &state.open {
        Some(category) => {
            let count = state.products.loaded().map(Vec::len).unwrap_or(0);
            vec![
                Line::from(vec![
                    Span::styled(" ← ", muted),
                    Span::styled(category.name.clone(), heading),
                ]),
                Line::styled(format!("   {} products", count), muted),
            ]
        }
        None => {
            let mode = match state.view_mode {
                ViewMode::Grid => "[Grid] List",
                ViewMode::List => "Grid [List]",
            };
            vec![
                Line::from(vec![
                    Span::styled(" Product Categories", heading),
                    Span::styled(format!("   {}", mode), Style::default().fg(CATALOGUE_PURPLE)),
                ]),
                Line::styled(" Browse inventory by category", muted),
            ]
        }
    };
    Paragraph::new(lines)
}

/// Lay `cards` out in rows of [`GRID_COLUMNS`], scrolled to keep `selected` visible.
fn render_grid(frame: &mut Frame<'_>, area: Rect, cards: Vec<Vec<Line<'static>>>, selected: usize) {
    if cards.is_empty() {
        frame.render_widget(status_message("Nothing here yet.", MUTED_TEXT), area);
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = scroll_offset(selected / GRID_COLUMNS, visible_rows);

    let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows]).split(area);
    let rows = cards.chunks(GRID_COLUMNS).enumerate().skip(first_row);

    for (row_area, (row_index, row)) in row_areas.iter().zip(rows) {
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(*row_area);

        for (column, (cell, lines)) in cells.iter().zip(row).enumerate() {
            let index = row_index * GRID_COLUMNS + column;
            let (border, background) = if index == selected {
                (BRAND_BLUE, Style::default().bg(ACTIVE_HIGHLIGHT))
            } else {
                (GLOBAL_BORDER, Style::default())
            };
            let card = Paragraph::new(lines.clone()).style(background).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
            frame.render_widget(card, *cell);
        }
    }
}
