use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use flare_client::{
    EventSink, JobService, JobStatus, Poller, Record, ServiceError, ServiceEvent, ServiceHandle,
};

/// Canned job service: every status call succeeds and reports one more
/// scraped row than the last, after an optional artificial delay.
#[derive(Default)]
struct StubService {
    status_delay: Duration,
    status_calls: AtomicUsize,
    start_calls: AtomicUsize,
}

impl StubService {
    fn with_status_delay(delay: Duration) -> Self {
        Self {
            status_delay: delay,
            ..Self::default()
        }
    }
}

#[async_trait::async_trait]
impl JobService for StubService {
    async fn start_scrape(&self) -> Result<(), ServiceError> {
        self.start_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn stop_scrape(&self) -> Result<(), ServiceError> {
        Ok(())
    }

    async fn scrape_status(&self) -> Result<JobStatus, ServiceError> {
        let calls = self.status_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if !self.status_delay.is_zero() {
            tokio::time::sleep(self.status_delay).await;
        }
        Ok(JobStatus {
            is_running: true,
            rows_scraped: calls as u64,
        })
    }

    async fn fetch_records(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(Vec::new())
    }
}

fn sink_pair() -> (EventSink, mpsc::Receiver<ServiceEvent>, CancellationToken) {
    let (tx, rx) = mpsc::channel();
    let root = CancellationToken::new();
    (EventSink::new(tx, root.clone()), rx, root)
}

fn wait_for_event(handle: &ServiceHandle, timeout: Duration) -> Option<ServiceEvent> {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Some(event) = handle.try_recv() {
            return Some(event);
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    None
}

#[tokio::test(flavor = "multi_thread")]
async fn poller_start_is_a_noop_while_armed() {
    let stub = Arc::new(StubService::default());
    let (sink, rx, root) = sink_pair();
    let mut poller = Poller::new(
        Duration::from_millis(20),
        tokio::runtime::Handle::current(),
        root,
    );

    assert!(poller.start(stub.clone(), sink.clone()));
    // Re-issuing the effect must not arm a second timer.
    assert!(!poller.start(stub.clone(), sink.clone()));
    assert!(poller.is_active());

    tokio::time::sleep(Duration::from_millis(110)).await;
    poller.stop();

    // One 20 ms timer over ~110 ms: an immediate tick plus roughly five more.
    // A duplicated timer would roughly double this.
    let calls = stub.status_calls.load(Ordering::SeqCst);
    assert!((2..=8).contains(&calls), "unexpected tick count {calls}");
    assert!(rx.try_recv().is_ok(), "poll results should reach the sink");
}

#[tokio::test(flavor = "multi_thread")]
async fn poller_stop_is_idempotent_and_silences_ticks() {
    let stub = Arc::new(StubService::default());
    let (sink, _rx, root) = sink_pair();
    let mut poller = Poller::new(
        Duration::from_millis(20),
        tokio::runtime::Handle::current(),
        root,
    );

    poller.start(stub.clone(), sink);
    tokio::time::sleep(Duration::from_millis(50)).await;
    poller.stop();
    poller.stop();
    assert!(!poller.is_active());

    tokio::time::sleep(Duration::from_millis(30)).await;
    let calls_after_stop = stub.status_calls.load(Ordering::SeqCst);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(
        stub.status_calls.load(Ordering::SeqCst),
        calls_after_stop,
        "no ticks may fire after stop"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn poller_can_be_rearmed_for_a_new_job() {
    let stub = Arc::new(StubService::default());
    let (sink, _rx, root) = sink_pair();
    let mut poller = Poller::new(
        Duration::from_millis(20),
        tokio::runtime::Handle::current(),
        root,
    );

    assert!(poller.start(stub.clone(), sink.clone()));
    poller.stop();
    assert!(poller.start(stub.clone(), sink));
    assert!(poller.is_active());
    poller.stop();
}

#[test]
fn handle_forwards_status_completions() {
    let stub = Arc::new(StubService::default());
    let handle = ServiceHandle::with_service(stub, Duration::from_secs(1));

    handle.refresh_status();
    match wait_for_event(&handle, Duration::from_secs(2)) {
        Some(ServiceEvent::Status(Ok(status))) => {
            assert!(status.is_running);
            assert_eq!(status.rows_scraped, 1);
        }
        other => panic!("expected a status event, got {other:?}"),
    }
}

#[test]
fn handle_sends_one_start_request_per_command() {
    let stub = Arc::new(StubService::default());
    let handle = ServiceHandle::with_service(stub.clone(), Duration::from_secs(1));

    handle.start_scrape();
    match wait_for_event(&handle, Duration::from_secs(2)) {
        Some(ServiceEvent::StartFinished(Ok(()))) => {}
        other => panic!("expected a start completion, got {other:?}"),
    }
    assert_eq!(stub.start_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_keeps_a_single_poll_timer() {
    let stub = Arc::new(StubService::default());
    let handle = ServiceHandle::with_service(stub.clone(), Duration::from_millis(50));

    handle.start_polling();
    handle.start_polling();
    std::thread::sleep(Duration::from_millis(280));
    handle.stop_polling();
    handle.stop_polling();
    std::thread::sleep(Duration::from_millis(60));

    // ~280 ms at a 50 ms cadence: immediate tick plus five more. A second
    // timer would have roughly doubled the count.
    let calls = stub.status_calls.load(Ordering::SeqCst);
    assert!((3..=9).contains(&calls), "unexpected tick count {calls}");

    let settled = stub.status_calls.load(Ordering::SeqCst);
    std::thread::sleep(Duration::from_millis(150));
    assert_eq!(stub.status_calls.load(Ordering::SeqCst), settled);
}

#[test]
fn dispose_discards_in_flight_completions() {
    let stub = Arc::new(StubService::with_status_delay(Duration::from_millis(150)));
    let handle = ServiceHandle::with_service(stub.clone(), Duration::from_secs(1));

    handle.refresh_status();
    // Give the command loop time to dispatch the request, then tear down
    // while the response is still pending.
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(stub.status_calls.load(Ordering::SeqCst), 1);
    handle.dispose();

    std::thread::sleep(Duration::from_millis(300));
    assert!(
        handle.try_recv().is_none(),
        "completions after dispose must be discarded"
    );
}
