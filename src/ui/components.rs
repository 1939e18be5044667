use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::ui::theme::GLOBAL_BORDER;

/// Bordered box with a single centered message (loading, error, empty).
pub fn status_message(message: &str, color: Color) -> Paragraph<'static> {
    Paragraph::new(vec![Line::from(""), Line::from(message.to_string())])
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

/// First row to draw so that `selected` stays inside a window of `visible` rows.
pub fn scroll_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

/// Shrink `area` to at most `width` x `height`, centered.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(5, 0), 5);
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_by_size(area, 40, 10), Rect::new(20, 7, 40, 10));
        assert_eq!(centered_rect_by_size(area, 200, 50), area);
    }
}
