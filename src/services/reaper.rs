//! Reaper service — background eviction of abandoned view sessions.
//!
//! DESIGN
//! ======
//! Browsers do not reliably report page close, so every view carries a
//! `last_seen` stamp and this task sweeps idle views on a fixed interval.
//! An evicted view's next request gets `E_VIEW_NOT_FOUND`; the page script
//! reloads to open a fresh session.

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::info;

use crate::services::view;
use crate::state::AppState;

/// Spawn the background reaper task. Returns a handle for shutdown.
pub fn spawn_reaper_task(state: AppState) -> JoinHandle<()> {
    let sweep = state.config.view_sweep_interval;
    let idle = state.config.view_idle_timeout;
    info!(sweep_secs = sweep.as_secs(), idle_secs = idle.as_secs(), "view reaper configured");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // First tick completes immediately; skip it so a fresh server does
        // not sweep before any view could be idle.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            view::evict_idle(&state).await;
        }
    })
}

#[cfg(test)]
#[path = "reaper_test.rs"]
mod tests;
