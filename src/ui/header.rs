use crate::ui::app::Route;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const TABS: [(&str, Route); 3] = [
    ("1 Home", Route::Home),
    ("2 Inventory", Route::Inventory),
    ("3 Catalogue", Route::Catalogue),
];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: Route) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "RetailFlow",
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
        ];

        for (label, tab) in TABS {
            spans.push(Span::styled("  │  ", separator_style));
            let style = if tab == route {
                text_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            spans.push(Span::styled(label, style));
        }

        if let Route::Product(id) = route {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} #{}", route.title(), id),
                text_style.add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
