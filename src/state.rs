//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the configuration, the row-data source shared by every grid, and
//! a map of live view sessions. Each view session owns the grid currently on
//! display (if any) and the queue its cell listeners notify into.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{Mutex, RwLock, mpsc};

use uuid::Uuid;

use crate::config::Config;
use crate::grid::Grid;
use crate::grid::data::{DataProvider, RangeDataProvider};
use crate::notify::{ChannelNotifier, Notification};

// =============================================================================
// VIEW STATE
// =============================================================================

/// Per-page server state. Created on page render, dropped on close or after
/// sitting idle past the configured timeout.
pub struct ViewState {
    /// Grid currently on display. `None` until the first render. Shared so
    /// rows can be rendered without holding the view map lock.
    pub grid: Option<Arc<Grid>>,
    /// Notifier handed to every grid built for this view.
    pub notifier: Arc<ChannelNotifier>,
    /// Pending notifications, drained after each event. Holding this lock
    /// serializes events for one view without touching the view map.
    pub notifications: Arc<Mutex<mpsc::Receiver<Notification>>>,
    /// Last time a request touched this view.
    pub last_seen: Instant,
}

impl ViewState {
    #[must_use]
    pub fn new(queue_capacity: usize) -> Self {
        let (notifier, notifications) = ChannelNotifier::channel(queue_capacity);
        Self {
            grid: None,
            notifier: Arc::new(notifier),
            notifications: Arc::new(Mutex::new(notifications)),
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<dyn DataProvider>,
    pub views: Arc<RwLock<HashMap<Uuid, ViewState>>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            provider: Arc::new(RangeDataProvider::new()),
            views: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
