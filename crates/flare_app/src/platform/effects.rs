use dash_logging::{dash_info, dash_warn};
use flare_client::{ServiceError, ServiceEvent, ServiceHandle, ServiceSettings};
use flare_core::{Effect, Msg, Record};

/// Executes the effects the pure core asks for and turns service completions
/// back into messages. Dropping the runner disposes the service handle, which
/// tears down the poll timer and discards in-flight completions.
pub struct EffectRunner {
    handle: ServiceHandle,
}

impl EffectRunner {
    pub fn new(settings: ServiceSettings) -> Result<Self, ServiceError> {
        Ok(Self {
            handle: ServiceHandle::new(settings)?,
        })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartScrape => {
                    dash_info!("Requesting scrape start");
                    self.handle.start_scrape();
                }
                Effect::StopScrape => {
                    dash_info!("Requesting scrape stop");
                    self.handle.stop_scrape();
                }
                Effect::RefreshStatus => self.handle.refresh_status(),
                Effect::StartPolling => self.handle.start_polling(),
                Effect::StopPolling => self.handle.stop_polling(),
                Effect::FetchRecords => {
                    dash_info!("Fetching record collection");
                    self.handle.fetch_records();
                }
            }
        }
    }

    /// Drains every completion the service produced since the last frame.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.handle.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: ServiceEvent) -> Msg {
    match event {
        ServiceEvent::StartFinished(result) => Msg::StartFinished {
            result: result.map_err(|err| {
                dash_warn!("Scrape start failed: {err}");
                err.to_string()
            }),
        },
        ServiceEvent::StopFinished(result) => Msg::StopFinished {
            result: result.map_err(|err| {
                dash_warn!("Scrape stop failed: {err}");
                err.to_string()
            }),
        },
        ServiceEvent::Status(Ok(status)) => Msg::StatusArrived {
            is_running: status.is_running,
            rows_scraped: status.rows_scraped,
        },
        ServiceEvent::Status(Err(err)) => Msg::StatusFailed {
            message: err.to_string(),
        },
        ServiceEvent::RecordsFetched(result) => Msg::RecordsLoaded {
            result: result
                .map(|records| records.into_iter().map(map_record).collect())
                .map_err(|err| {
                    dash_warn!("Record fetch failed: {err}");
                    err.to_string()
                }),
        },
    }
}

fn map_record(record: flare_client::Record) -> Record {
    Record {
        id: record.id,
        volume: record.volume,
        duration: record.duration,
        h2s: record.h2s,
        date: record.date,
        latitude: record.latitude,
        longitude: record.longitude,
        location: record.location,
        operator: record.operator,
    }
}
