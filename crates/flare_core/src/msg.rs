use crate::Record;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App booted; kicks off the initial record fetch.
    Init,
    /// User edited the search box.
    SearchChanged(String),
    /// User clicked "Scrape New Data".
    ScrapeClicked,
    /// User clicked Stop.
    StopClicked,
    /// User paged the record table forward.
    NextPageClicked,
    /// User paged the record table back.
    PrevPageClicked,
    /// The start request completed.
    StartFinished { result: Result<(), String> },
    /// The stop request completed.
    StopFinished { result: Result<(), String> },
    /// A status response arrived (from the poller or a one-shot refresh).
    StatusArrived { is_running: bool, rows_scraped: u64 },
    /// A status request failed; polling keeps going.
    StatusFailed { message: String },
    /// The record collection fetch completed.
    RecordsLoaded { result: Result<Vec<Record>, String> },
    /// Fallback for placeholder wiring.
    NoOp,
}
