//! Flare client: HTTP access to the remote job service, the status poller,
//! and the background-runtime handle the UI talks to.
mod error;
mod handle;
mod poller;
mod service;
mod settings;
mod types;

pub use error::ServiceError;
pub use handle::{EventSink, ServiceEvent, ServiceHandle};
pub use poller::Poller;
pub use service::{HttpJobService, JobService};
pub use settings::{ServiceSettings, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use types::{JobStatus, Record};
