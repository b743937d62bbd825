use super::*;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::state::test_helpers;

fn fast_sweep(idle: Duration) -> Config {
    let mut config = Config::default();
    config.view_sweep_interval = Duration::from_millis(10);
    config.view_idle_timeout = idle;
    config
}

#[tokio::test]
async fn reaper_evicts_views_after_idle_timeout() {
    let state = test_helpers::test_app_state_with(fast_sweep(Duration::from_secs(60)));
    let view_id = test_helpers::seed_view(&state).await;
    {
        let mut views = state.views.write().await;
        let view = views.get_mut(&view_id).expect("seeded view should exist");
        view.last_seen = Instant::now()
            .checked_sub(Duration::from_secs(3600))
            .expect("clock should allow going back an hour");
    }

    let handle = spawn_reaper_task(state.clone());
    let deadline = Instant::now() + Duration::from_secs(5);
    while !state.views.read().await.is_empty() {
        assert!(Instant::now() < deadline, "reaper did not evict the idle view");
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    handle.abort();
}

#[tokio::test]
async fn reaper_keeps_active_views() {
    let state = test_helpers::test_app_state_with(fast_sweep(Duration::from_secs(3600)));
    let view_id = test_helpers::seed_view(&state).await;

    let handle = spawn_reaper_task(state.clone());
    // Many sweep intervals pass; none may evict a view seen this hour.
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(state.views.read().await.contains_key(&view_id));
    handle.abort();
}
