use crate::Record;

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub is_running: bool,
    pub start_pending: bool,
    pub stop_pending: bool,
    pub rows_processed: u64,
    pub error: Option<String>,
    pub search_term: String,
    pub records: RecordsView,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum RecordsView {
    #[default]
    Loading,
    Failed(String),
    Ready(RecordTableView),
}

/// The filtered collection plus the pagination window over it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTableView {
    pub filtered: Vec<Record>,
    pub total_count: usize,
    pub page_index: usize,
    pub page_count: usize,
    pub page_start: usize,
    pub page_len: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

impl RecordTableView {
    /// The records on the current page.
    pub fn page_rows(&self) -> &[Record] {
        &self.filtered[self.page_start..self.page_start + self.page_len]
    }
}
