use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use dash_logging::dash_info;
use tokio_util::sync::CancellationToken;

use crate::error::ServiceError;
use crate::poller::Poller;
use crate::service::{HttpJobService, JobService};
use crate::settings::ServiceSettings;
use crate::types::{JobStatus, Record};

enum ServiceCommand {
    StartScrape,
    StopScrape,
    RefreshStatus,
    StartPolling,
    StopPolling,
    FetchRecords,
    Dispose,
}

/// Completions crossing back to the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceEvent {
    StartFinished(Result<(), ServiceError>),
    StopFinished(Result<(), ServiceError>),
    Status(Result<JobStatus, ServiceError>),
    RecordsFetched(Result<Vec<Record>, ServiceError>),
}

/// Event channel guarded by the root cancellation token: once the handle is
/// disposed, completions of requests still in flight are discarded instead of
/// reaching state that no longer exists.
#[derive(Clone)]
pub struct EventSink {
    tx: mpsc::Sender<ServiceEvent>,
    root: CancellationToken,
}

impl EventSink {
    pub fn new(tx: mpsc::Sender<ServiceEvent>, root: CancellationToken) -> Self {
        Self { tx, root }
    }

    pub fn emit(&self, event: ServiceEvent) {
        if self.root.is_cancelled() {
            return;
        }
        let _ = self.tx.send(event);
    }
}

/// Owns a background thread with a tokio runtime; the UI thread sends
/// commands in and drains events out with `try_recv`.
pub struct ServiceHandle {
    cmd_tx: mpsc::Sender<ServiceCommand>,
    event_rx: mpsc::Receiver<ServiceEvent>,
    root: CancellationToken,
}

impl ServiceHandle {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        let poll_interval = settings.poll_interval;
        let service = Arc::new(HttpJobService::new(settings)?);
        Ok(Self::with_service(service, poll_interval))
    }

    /// Wires the handle to any `JobService`, so tests can substitute a stub.
    pub fn with_service(service: Arc<dyn JobService>, poll_interval: Duration) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let root = CancellationToken::new();
        let loop_root = root.clone();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            let sink = EventSink::new(event_tx, loop_root.clone());
            let mut poller = Poller::new(poll_interval, runtime.handle().clone(), loop_root);

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    ServiceCommand::Dispose => break,
                    ServiceCommand::StartScrape => {
                        let service = service.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            sink.emit(ServiceEvent::StartFinished(service.start_scrape().await));
                        });
                    }
                    ServiceCommand::StopScrape => {
                        let service = service.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            sink.emit(ServiceEvent::StopFinished(service.stop_scrape().await));
                        });
                    }
                    ServiceCommand::RefreshStatus => {
                        let service = service.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            sink.emit(ServiceEvent::Status(service.scrape_status().await));
                        });
                    }
                    ServiceCommand::StartPolling => {
                        poller.start(service.clone(), sink.clone());
                    }
                    ServiceCommand::StopPolling => poller.stop(),
                    ServiceCommand::FetchRecords => {
                        let service = service.clone();
                        let sink = sink.clone();
                        runtime.spawn(async move {
                            sink.emit(ServiceEvent::RecordsFetched(service.fetch_records().await));
                        });
                    }
                }
            }
            poller.stop();
            dash_info!("Service command loop exited");
        });

        Self {
            cmd_tx,
            event_rx,
            root,
        }
    }

    pub fn start_scrape(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::StartScrape);
    }

    pub fn stop_scrape(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::StopScrape);
    }

    pub fn refresh_status(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::RefreshStatus);
    }

    pub fn start_polling(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::StartPolling);
    }

    pub fn stop_polling(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::StopPolling);
    }

    pub fn fetch_records(&self) {
        let _ = self.cmd_tx.send(ServiceCommand::FetchRecords);
    }

    pub fn try_recv(&self) -> Option<ServiceEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Synchronously cancels the poll timer and marks every in-flight
    /// completion as discardable, then winds down the command loop.
    pub fn dispose(&self) {
        self.root.cancel();
        let _ = self.cmd_tx.send(ServiceCommand::Dispose);
    }
}

impl Drop for ServiceHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
