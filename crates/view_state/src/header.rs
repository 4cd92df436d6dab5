use std::sync::Arc;

use futures::StreamExt;
use tokio::{sync::watch, task::JoinHandle};
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Scrolling down hides the header only once the page is past this offset.
pub const HIDE_AFTER_SCROLL_Y: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderVisibility {
    #[default]
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    pub visibility: HeaderVisibility,
    pub mobile_menu_open: bool,
    pub last_scroll_y: f64,
}

impl HeaderState {
    pub fn on_scroll(&mut self, y: f64) {
        if y > self.last_scroll_y && y > HIDE_AFTER_SCROLL_Y {
            self.visibility = HeaderVisibility::Hidden;
            self.mobile_menu_open = false;
        } else if y < self.last_scroll_y {
            self.visibility = HeaderVisibility::Visible;
        }
        self.last_scroll_y = y;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == HeaderVisibility::Visible
    }

    /// The page body must not scroll while the mobile menu covers it.
    pub fn locks_body_scroll(&self) -> bool {
        self.mobile_menu_open
    }
}

/// Source of scroll positions, standing in for the window's scroll events.
#[derive(Debug)]
pub struct ScrollSignal {
    tx: watch::Sender<f64>,
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { tx }
    }

    pub fn scroll_to(&self, y: f64) {
        self.tx.send_replace(y);
    }

    pub fn position(&self) -> f64 {
        *self.tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<f64> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// Keeps a [`HeaderState`] in step with a [`ScrollSignal`] for as long as it
/// lives. Dropping the controller stops the listener and releases its
/// subscription.
pub struct HeaderController {
    state: Arc<watch::Sender<HeaderState>>,
    listener: JoinHandle<()>,
}

impl HeaderController {
    /// Must be called from within a tokio runtime. Only positions published
    /// after attaching are observed.
    pub fn attach(signal: &ScrollSignal) -> Self {
        let (state_tx, _state_rx) = watch::channel(HeaderState::default());
        let state = Arc::new(state_tx);
        let mut positions = WatchStream::from_changes(signal.subscribe());
        let task_state = Arc::clone(&state);
        let listener = tokio::spawn(async move {
            while let Some(y) = positions.next().await {
                task_state.send_modify(|header| header.on_scroll(y));
            }
            debug!("scroll signal closed, header listener stopped");
        });
        debug!("header listener attached");
        Self { state, listener }
    }

    pub fn state(&self) -> HeaderState {
        *self.state.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<HeaderState> {
        self.state.subscribe()
    }

    pub fn toggle_mobile_menu(&self) {
        self.state.send_modify(HeaderState::toggle_mobile_menu);
    }

    pub fn close_mobile_menu(&self) {
        self.state.send_modify(HeaderState::close_mobile_menu);
    }

    /// Resolves with the first state satisfying `predicate`, which may be the
    /// current one.
    pub async fn wait_until(&self, mut predicate: impl FnMut(&HeaderState) -> bool) -> HeaderState {
        let mut rx = self.state.subscribe();
        let state = match rx.wait_for(|state| predicate(state)).await {
            Ok(state) => *state,
            // The sender lives in `self`, so the channel cannot close here.
            Err(_) => self.state(),
        };
        state
    }
}

impl Drop for HeaderController {
    fn drop(&mut self) {
        self.listener.abort();
        debug!("header listener detached");
    }
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
