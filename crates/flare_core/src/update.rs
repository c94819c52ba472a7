use crate::{AppState, Effect, Msg, RecordsState, ScrapePhase};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Init => vec![Effect::FetchRecords],
        Msg::SearchChanged(term) => {
            state.set_search_term(term);
            Vec::new()
        }
        Msg::ScrapeClicked => {
            // One outbound start request per job: clicks while a start is in
            // flight or a job is running are ignored.
            if state.phase() == ScrapePhase::Idle {
                state.set_phase(ScrapePhase::Starting);
                state.clear_error();
                vec![Effect::StartScrape]
            } else {
                Vec::new()
            }
        }
        Msg::StartFinished { result } => match result {
            Ok(()) => {
                if state.phase() == ScrapePhase::Starting {
                    state.set_phase(ScrapePhase::Running);
                    vec![Effect::StartPolling]
                } else {
                    // A status response already settled the phase; the late
                    // acknowledgement carries no new information.
                    Vec::new()
                }
            }
            Err(message) => {
                if state.phase() == ScrapePhase::Starting {
                    state.set_phase(ScrapePhase::Idle);
                }
                state.set_error(message);
                Vec::new()
            }
        },
        Msg::StopClicked => {
            // Safe to send regardless of phase. The phase is not optimistically
            // reset; the forced status refresh after the stop request settles
            // whether the server actually honoured it.
            if state.phase() == ScrapePhase::Running {
                state.set_phase(ScrapePhase::StopRequested);
            }
            vec![Effect::StopScrape]
        }
        Msg::StopFinished { result } => {
            if let Err(message) = result {
                state.set_error(message);
            }
            vec![Effect::RefreshStatus]
        }
        Msg::StatusArrived {
            is_running,
            rows_scraped,
        } => {
            state.set_rows_processed(rows_scraped);
            if is_running {
                if state.phase() == ScrapePhase::Starting {
                    // The poll raced ahead of the start acknowledgement.
                    state.set_phase(ScrapePhase::Running);
                    vec![Effect::StartPolling]
                } else {
                    Vec::new()
                }
            } else {
                let was_running = state.phase().is_running();
                if was_running {
                    state.set_phase(ScrapePhase::Idle);
                }
                let mut effects = vec![Effect::StopPolling];
                if was_running {
                    // The job just completed; pick up the newly scraped rows.
                    effects.push(Effect::FetchRecords);
                }
                effects
            }
        }
        Msg::StatusFailed { message } => {
            // Transient blips do not stop polling; only a successful
            // `is_running: false` response does.
            state.set_error(message);
            Vec::new()
        }
        Msg::RecordsLoaded { result } => {
            match result {
                Ok(records) => state.set_records(RecordsState::Loaded(records)),
                Err(message) => state.set_records(RecordsState::Failed(message)),
            }
            Vec::new()
        }
        Msg::NextPageClicked => {
            state.next_page();
            Vec::new()
        }
        Msg::PrevPageClicked => {
            state.prev_page();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
