use crate::record::{matches_term, Record};
use crate::view_model::{AppViewModel, RecordTableView, RecordsView};

/// Fixed page size for the record table.
pub const PAGE_SIZE: usize = 10;

/// Where the scrape-job lifecycle currently stands.
///
/// `Starting` doubles as the in-flight guard: a second start cannot be issued
/// while one is pending. `StopRequested` still counts as running; the machine
/// only goes back to `Idle` when a status response confirms the job stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrapePhase {
    #[default]
    Idle,
    Starting,
    Running,
    StopRequested,
}

impl ScrapePhase {
    pub fn is_running(self) -> bool {
        matches!(self, ScrapePhase::Running | ScrapePhase::StopRequested)
    }
}

/// The record collection as the view knows it. A failed fetch is terminal for
/// the view; there is no meaningful partial list to show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecordsState {
    #[default]
    Loading,
    Loaded(Vec<Record>),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    phase: ScrapePhase,
    rows_processed: u64,
    error: Option<String>,
    records: RecordsState,
    search_term: String,
    page: usize,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScrapePhase {
        self.phase
    }

    /// Returns whether a re-render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_phase(&mut self, phase: ScrapePhase) {
        self.phase = phase;
        self.dirty = true;
    }

    pub(crate) fn set_rows_processed(&mut self, rows: u64) {
        self.rows_processed = rows;
        self.dirty = true;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.dirty = true;
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
        self.dirty = true;
    }

    pub(crate) fn set_records(&mut self, records: RecordsState) {
        self.records = records;
        self.page = self.page.min(self.page_count().saturating_sub(1));
        self.dirty = true;
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.page = 0;
        self.dirty = true;
    }

    pub(crate) fn next_page(&mut self) -> bool {
        if self.page + 1 < self.page_count() {
            self.page += 1;
            self.dirty = true;
            return true;
        }
        false
    }

    pub(crate) fn prev_page(&mut self) -> bool {
        if self.page > 0 {
            self.page -= 1;
            self.dirty = true;
            return true;
        }
        false
    }

    fn filtered(&self) -> Vec<Record> {
        match &self.records {
            RecordsState::Loaded(all) => all
                .iter()
                .filter(|record| matches_term(record, &self.search_term))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    fn page_count(&self) -> usize {
        let filtered_len = match &self.records {
            RecordsState::Loaded(all) => all
                .iter()
                .filter(|record| matches_term(record, &self.search_term))
                .count(),
            _ => 0,
        };
        filtered_len.div_ceil(PAGE_SIZE).max(1)
    }

    pub fn view(&self) -> AppViewModel {
        let records = match &self.records {
            RecordsState::Loading => RecordsView::Loading,
            RecordsState::Failed(message) => RecordsView::Failed(message.clone()),
            RecordsState::Loaded(all) => {
                let filtered = self.filtered();
                let page_count = filtered.len().div_ceil(PAGE_SIZE).max(1);
                let page_index = self.page.min(page_count - 1);
                let page_start = page_index * PAGE_SIZE;
                let page_len = filtered.len().saturating_sub(page_start).min(PAGE_SIZE);
                RecordsView::Ready(RecordTableView {
                    total_count: all.len(),
                    filtered,
                    page_index,
                    page_count,
                    page_start,
                    page_len,
                    can_prev: page_index > 0,
                    can_next: page_index + 1 < page_count,
                })
            }
        };

        AppViewModel {
            is_running: self.phase.is_running(),
            start_pending: self.phase == ScrapePhase::Starting,
            stop_pending: self.phase == ScrapePhase::StopRequested,
            rows_processed: self.rows_processed,
            error: self.error.clone(),
            search_term: self.search_term.clone(),
            records,
        }
    }
}
