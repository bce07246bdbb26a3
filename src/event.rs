use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

pub enum AppEvent {
    Key(KeyEvent),
    /// Emitted at the tick rate whenever no input arrives; drives the fade
    /// deadline check. Everything else (including resizes) just triggers the
    /// next redraw.
    Tick,
}

/// Input pump: one background thread polls the terminal and forwards key
/// presses, falling back to ticks so time-based state keeps advancing.
pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let _tx = tx.clone();

        thread::spawn(move || {
            loop {
                let message = if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                        // Resize redraws on the next loop pass anyway
                        _ => None,
                    }
                } else {
                    Some(AppEvent::Tick)
                };

                if let Some(message) = message {
                    if tx.send(message).is_err() {
                        return;
                    }
                }
            }
        });

        Self { rx, _tx }
    }

    pub fn next(&self) -> anyhow::Result<AppEvent> {
        Ok(self.rx.recv()?)
    }
}
