#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Send the start request to the job service.
    StartScrape,
    /// Send the stop request to the job service.
    StopScrape,
    /// Issue a single status request outside the polling cadence.
    RefreshStatus,
    /// Arm the recurring status poll.
    StartPolling,
    /// Tear down the recurring status poll.
    StopPolling,
    /// Fetch the full record collection.
    FetchRecords,
}
