use crate::ui::app::{App, Route};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::{catalogue, home, inventory, product};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.route()), header);
    frame.render_widget(Clear, body);

    let spinner = app.spinner();
    match app.route() {
        Route::Home => home::render(frame, body, app.home()),
        Route::Inventory => inventory::view::render(frame, body, app.inventory(), spinner),
        Route::Catalogue => catalogue::view::render(frame, body, app.catalogue(), spinner),
        Route::Product(_) => product::view::render(frame, body, app.product(), spinner),
    }

    frame.render_widget(Footer::new().widget(app, footer), footer);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UiConfig;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn home_shows_welcome_and_features() {
        let app = App::new(UiConfig::default());
        let screen = rendered(&app);
        assert!(screen.contains("RetailFlow"));
        assert!(screen.contains("Inventory Overview"));
        assert!(screen.contains("Catalogue Overview"));
    }

    #[test]
    fn every_route_draws_without_data() {
        for route in [Route::Inventory, Route::Catalogue, Route::Product(1)] {
            let mut app = App::new(UiConfig::default());
            app.navigate(route);
            let screen = rendered(&app);
            assert!(screen.contains("q: Quit"), "footer missing on {:?}", route);
        }
    }
}
