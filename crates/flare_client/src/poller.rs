use std::sync::Arc;
use std::time::Duration;

use dash_logging::{dash_debug, dash_info};
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::handle::{EventSink, ServiceEvent};
use crate::service::JobService;

/// Owns the one recurring status timer. The guard lives here, inside
/// `start`, so callers cannot multiply timers by re-issuing the effect.
pub struct Poller {
    interval: Duration,
    runtime: tokio::runtime::Handle,
    parent: CancellationToken,
    active: Option<CancellationToken>,
}

impl Poller {
    pub fn new(
        interval: Duration,
        runtime: tokio::runtime::Handle,
        parent: CancellationToken,
    ) -> Self {
        Self {
            interval,
            runtime,
            parent,
            active: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|token| !token.is_cancelled())
    }

    /// Arms the timer. Returns false (and does nothing) when a timer is
    /// already armed: at most one active poll loop exists per poller.
    pub fn start(&mut self, service: Arc<dyn JobService>, sink: EventSink) -> bool {
        if self.is_active() {
            dash_debug!("Poll timer already armed; ignoring start");
            return false;
        }

        let token = self.parent.child_token();
        self.active = Some(token.clone());
        let interval = self.interval;

        self.runtime.spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        // Failures are forwarded too; the synchronizer decides
                        // that transient ones do not end the poll.
                        let result = service.scrape_status().await;
                        sink.emit(ServiceEvent::Status(result));
                    }
                }
            }
            dash_debug!("Poll loop exited");
        });

        dash_info!("Poll timer armed at {:?} cadence", interval);
        true
    }

    /// Cancels the timer if present. Idempotent; safe when not polling.
    pub fn stop(&mut self) {
        if let Some(token) = self.active.take() {
            token.cancel();
            dash_info!("Poll timer cancelled");
        }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.stop();
    }
}
