use crate::ui::app::{App, Route};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, app: &App, area: Rect) -> Paragraph<'static> {
        let hints = hints(app);
        let version = format!("v{} ", VERSION);

        // Char count, not byte count: hints contain arrows.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let mut spans = vec![Span::styled(hints, text_style)];
        if let Some(error) = app.last_command_error() {
            spans = vec![Span::styled(
                format!(" {}", error),
                Style::default().fg(STATUS_ERROR),
            )];
        }
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));

        Paragraph::new(Line::from(spans))
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints(app: &App) -> String {
    let screen = match app.route() {
        Route::Home => "↑↓: Select │ Enter: Open",
        Route::Inventory if app.inventory().editing_search => "Type to search │ Enter/Esc: Done",
        Route::Inventory => "/: Search │ c/C: Category │ a: All │ s: Sort │ ←→: Page │ Enter: Details",
        Route::Catalogue if app.catalogue().open.is_some() => "Arrows: Move │ Enter: Details │ Esc: Categories",
        Route::Catalogue => "Arrows: Move │ v: Grid/List │ Enter: Open",
        Route::Product(_) => "←→: Image │ ↑↓: Similar │ Enter: Open similar",
    };
    let back = if app.can_go_back() { " │ Esc: Back" } else { "" };
    format!(" {}{} │ q: Quit", screen, back)
}
