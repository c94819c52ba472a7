/// One scraped data row (a "flare" filing). Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    pub id: i64,
    pub volume: f64,
    pub duration: f64,
    pub h2s: f64,
    pub date: String,
    pub latitude: f64,
    pub longitude: f64,
    pub location: String,
    pub operator: String,
}

impl Record {
    /// True when the record carries usable map coordinates.
    pub fn has_coordinates(&self) -> bool {
        self.latitude != 0.0 && self.longitude != 0.0
    }
}

/// Case-insensitive substring match of the search term against the record's
/// text fields. An empty term matches everything.
pub fn matches_term(record: &Record, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.location.to_lowercase().contains(&needle)
        || record.operator.to_lowercase().contains(&needle)
}
