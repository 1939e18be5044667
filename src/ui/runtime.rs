use crate::api::CatalogClient;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::ui::app::{App, Route};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::CatalogWorker;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

const COMMAND_QUEUE: usize = 64;

pub async fn run(config: Config, client: CatalogClient, start: Route) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = mpsc::channel(COMMAND_QUEUE);
    let worker = CatalogWorker::new(command_rx).spawn(client, events.sender());

    let settled_tx = events.sender();
    let debouncer = Debouncer::new(
        Duration::from_millis(config.ui.search_debounce_ms),
        move |term: String| {
            if settled_tx.send(AppEvent::SearchSettled(term)).is_err() {
                tracing::trace!("Search term dropped (UI gone)");
            }
        },
    );

    let mut app = App::new(config.ui);
    app.set_command_sender(command_tx);
    app.set_search_debouncer(debouncer);
    app.start(start);
    tracing::info!(route = start.title(), "UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Tick) => app.on_tick(),
            // Redrawn on the next iteration.
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::SearchSettled(term)) => app.on_search_settled(term),
            Some(AppEvent::Catalog(event)) => app.on_catalog_event(event),
            Some(AppEvent::InputClosed) | None => {
                tracing::error!("Terminal input closed, exiting");
                break;
            }
        }
    }

    // Dropping the app closes the command channel and stops the worker.
    drop(app);
    if let Err(err) = worker.await {
        tracing::warn!("Catalog worker ended abnormally: {}", err);
    }
    drop(guard);
    Ok(())
}
