use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::Product;
use crate::catalog::pricing::{
    discount_badge, format_price, is_top_rated, original_price, stock_label,
};
use crate::ui::components::{scroll_offset, status_message};
use crate::ui::load::LoadState;
use crate::ui::product::state::ProductState;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, RATING_STAR,
    STATUS_ERROR, STATUS_OK,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &ProductState, spinner: char) {
    let product = match &state.product {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(
                status_message(&format!("{} Loading product...", spinner), BRAND_BLUE),
                area,
            );
            return;
        }
        LoadState::Failed(message) => {
            frame.render_widget(
                status_message(&format!("{}  (Esc: Go Back)", message), STATUS_ERROR),
                area,
            );
            return;
        }
        LoadState::Loaded(product) => product,
    };

    let [main, sidebar] =
        Layout::horizontal([Constraint::Percentage(68), Constraint::Percentage(32)]).areas(area);
    let [gallery, details] =
        Layout::vertical([Constraint::Length(gallery_height(product)), Constraint::Min(6)])
            .areas(main);

    frame.render_widget(gallery_widget(product, state.image_index), gallery);
    frame.render_widget(details_widget(product), details);
    render_similar(frame, sidebar, state, spinner);
}

fn gallery_height(product: &Product) -> u16 {
    let rows = product.images.len().clamp(1, 5) as u16;
    rows + 2
}

fn gallery_widget(product: &Product, image_index: usize) -> Paragraph<'static> {
    let lines: Vec<Line> = if product.images.is_empty() {
        vec![Line::styled(
            format!(" {}", product.thumbnail),
            Style::default().fg(MUTED_TEXT),
        )]
    } else {
        let visible = 5;
        let offset = scroll_offset(image_index, visible);
        product
            .images
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, url)| {
                let marker = if index == image_index { "▶" } else { " " };
                let line = Line::from(vec![
                    Span::styled(format!("{} {:>2}. ", marker, index + 1), Style::default().fg(MUTED_TEXT)),
                    Span::styled(url.clone(), Style::default().fg(HEADER_TEXT)),
                ]);
                if index == image_index {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                } else {
                    line
                }
            })
            .collect()
    };

    let title = format!(
        " Images {}/{} ",
        (image_index + 1).min(product.images.len().max(1)),
        product.images.len().max(1)
    );
    Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn details_widget(product: &Product) -> Paragraph<'static> {
    let muted = Style::default().fg(MUTED_TEXT);
    let brand = product.brand.clone().unwrap_or_else(|| "-".to_string());

    let mut price_line = vec![Span::styled(
        format_price(product.price),
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = discount_badge(product.discount_percentage) {
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(
            format_price(original_price(product.price, product.discount_percentage)),
            muted.add_modifier(Modifier::CROSSED_OUT),
        ));
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(badge, Style::default().fg(STATUS_OK)));
    }

    let stock_color = if product.stock > 0 { STATUS_OK } else { STATUS_ERROR };

    let lines = vec![
        Line::styled(
            product.title.clone(),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("{} • {}", brand, product.category), muted),
        Line::from(""),
        Line::from(price_line),
        Line::from(vec![
            Span::styled("★ ", Style::default().fg(RATING_STAR)),
            Span::raw(format!("{:.1}/5.0", product.rating)),
            Span::raw("   "),
            Span::styled(stock_label(product.stock), Style::default().fg(stock_color)),
        ]),
        Line::from(""),
        Line::from(product.description.clone()),
        Line::from(""),
        Line::from(vec![Span::styled("Brand: ", muted), Span::raw(brand)]),
        Line::from(vec![
            Span::styled("Category: ", muted),
            Span::raw(product.category.clone()),
        ]),
        Line::from(vec![
            Span::styled("Stock: ", muted),
            Span::raw(format!("{} units", product.stock)),
        ]),
    ];

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn render_similar(frame: &mut Frame<'_>, area: Rect, state: &ProductState, spinner: char) {
    let block = Block::default()
        .title(" Similar Products ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let lines: Vec<Line> = match &state.similar {
        LoadState::Idle => Vec::new(),
        LoadState::Loading => vec![Line::styled(
            format!(" {} Loading...", spinner),
            Style::default().fg(BRAND_BLUE),
        )],
        LoadState::Failed(message) => {
            vec![Line::styled(format!(" {}", message), Style::default().fg(STATUS_ERROR))]
        }
        LoadState::Loaded(products) if products.is_empty() => vec![Line::styled(
            " No similar products found",
            Style::default().fg(MUTED_TEXT),
        )],
        LoadState::Loaded(products) => products
            .iter()
            .enumerate()
            .flat_map(|(index, product)| {
                let mut price = vec![
                    Span::raw("   "),
                    Span::styled(format_price(product.price), Style::default().fg(MUTED_TEXT)),
                ];
                if is_top_rated(product.rating) {
                    price.push(Span::raw(" "));
                    price.push(Span::styled("Top", Style::default().fg(RATING_STAR)));
                }
                let mut title = Line::styled(
                    format!(" {}", product.title),
                    Style::default().fg(HEADER_TEXT),
                );
                let mut price = Line::from(price);
                if index == state.similar_selected {
                    title = title.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                    price = price.style(Style::default().bg(ACTIVE_HIGHLIGHT));
                }
                [title, price]
            })
            .collect(),
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
