//! Fixed-interval price polling.
//!
//! One fetch on start, then one per interval tick. Each tick spawns its
//! fetch without waiting for the previous one, so slow responses can
//! overlap; whichever finishes last wins. In-flight fetches live in a
//! `JoinSet` owned by the poll task, so stopping the poller aborts them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, trace};

use super::{PriceSource, TickerState};

/// Handle to a running poll loop. Dropping it stops polling.
#[derive(Debug)]
pub struct PricePoller {
    task: JoinHandle<()>,
}

impl PricePoller {
    /// Starts polling on the current tokio runtime.
    ///
    /// The receiver starts at [`TickerState::Loading`] and only changes on
    /// successful fetches.
    pub fn spawn(
        source: Arc<dyn PriceSource>,
        interval: Duration,
    ) -> (Self, watch::Receiver<TickerState>) {
        let (tx, rx) = watch::channel(TickerState::Loading);
        info!(interval_secs = interval.as_secs_f64(), "Starting price poller");
        let task = tokio::spawn(poll_loop(source, interval, tx));
        (Self { task }, rx)
    }

    /// Stops polling; no fetch starts after this returns.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            debug!("Stopping price poller");
        }
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for PricePoller {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn poll_loop(
    source: Arc<dyn PriceSource>,
    interval: Duration,
    tx: watch::Sender<TickerState>,
) {
    let mut ticks = tokio::time::interval(interval);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut in_flight = JoinSet::new();

    loop {
        ticks.tick().await;

        if tx.is_closed() {
            debug!("Ticker display gone, price poller exiting");
            return;
        }

        // Reap finished fetches
        while in_flight.try_join_next().is_some() {}

        trace!(in_flight = in_flight.len(), "Price poll tick");
        let source = Arc::clone(&source);
        let tx = tx.clone();
        in_flight.spawn(async move {
            let result = source.fetch().await;
            tx.send_if_modified(|state| state.apply(result));
        });
    }
}
