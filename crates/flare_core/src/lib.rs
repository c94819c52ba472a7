//! Flare core: pure state machine for the scrape-job lifecycle and data view.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use record::{matches_term, Record};
pub use state::{AppState, RecordsState, ScrapePhase, PAGE_SIZE};
pub use update::update;
pub use view_model::{AppViewModel, RecordTableView, RecordsView};
