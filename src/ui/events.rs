use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::ui::worker::CatalogEvent;

pub enum AppEvent {
    Key(KeyEvent),
    Tick,
    Resize(u16, u16),
    /// Search box was stable for the debounce delay.
    SearchSettled(String),
    /// A catalog fetch finished.
    Catalog(CatalogEvent),
    /// The input thread stopped on a terminal error; no more keys will come.
    InputClosed,
}

/// Funnels terminal input, ticks, debounce emissions and fetch results
/// into one channel consumed by the runtime loop.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    tx: mpsc::UnboundedSender<AppEvent>,
    stop: Arc<AtomicBool>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let event_tx = tx.clone();
        let stop_flag = Arc::clone(&stop);

        if let Err(err) = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(event_tx, stop_flag, tick_rate, read_terminal))
        {
            tracing::error!("Failed to spawn input thread: {}", err);
        }

        Self { rx, tx, stop }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
    }
}

fn read_terminal(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

fn input_loop<F>(
    tx: mpsc::UnboundedSender<AppEvent>,
    stop: Arc<AtomicBool>,
    tick_rate: Duration,
    mut next_event: F,
) where
    F: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    while !stop.load(Ordering::Relaxed) {
        // Short poll timeout so the stop flag is checked frequently
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(Duration::from_millis(50));

        let forwarded = match next_event(timeout) {
            Ok(Some(Event::Key(key))) => Some(AppEvent::Key(key)),
            Ok(Some(Event::Resize(cols, rows))) => Some(AppEvent::Resize(cols, rows)),
            Ok(_) => None,
            Err(err) => {
                tracing::error!("Terminal input failed: {}", err);
                if tx.send(AppEvent::InputClosed).is_err() {
                    tracing::trace!("Input close dropped (UI gone)");
                }
                return;
            }
        };
        if let Some(event) = forwarded {
            if tx.send(event).is_err() {
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};

    #[test]
    fn read_error_reports_input_closed() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let mut calls = 0;

        input_loop(tx, stop, Duration::from_secs(60), |_| {
            calls += 1;
            if calls == 1 {
                Ok(Some(Event::Key(KeyEvent::from(KeyCode::Char('x')))))
            } else {
                Err(io::Error::other("terminal gone"))
            }
        });

        assert!(matches!(rx.try_recv(), Ok(AppEvent::Key(_))));
        assert!(matches!(rx.try_recv(), Ok(AppEvent::InputClosed)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn stop_flag_ends_loop_quietly() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(true));
        input_loop(tx, stop, Duration::from_secs(60), |_| Ok(None));
        assert!(rx.try_recv().is_err());
    }
}
