use std::error::Error;
use std::time::Duration;

use dash_logging::dash_info;
use eframe::egui;
use flare_client::ServiceSettings;
use flare_core::{update, AppState, AppViewModel, Msg};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> Result<(), Box<dyn Error>> {
    logging::initialize(LogDestination::File);

    let settings = ServiceSettings::from_env();
    dash_info!("Using job service at {}", settings.base_url);
    let app = DashApp::new(settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flare Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}

pub struct DashApp {
    // single source of truth (UI thread only)
    state: AppState,
    // snapshot rebuilt whenever the state marks itself dirty
    view: AppViewModel,
    runner: EffectRunner,
}

impl DashApp {
    fn new(settings: ServiceSettings) -> Result<Self, Box<dyn Error>> {
        let runner = EffectRunner::new(settings)?;
        let mut app = Self {
            state: AppState::new(),
            view: AppViewModel::default(),
            runner,
        };
        app.dispatch(Msg::Init);
        Ok(app)
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for msg in self.runner.drain_events() {
            self.dispatch(msg);
        }
        if self.state.consume_dirty() {
            self.view = self.state.view();
        }

        let mut intents = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::render(ui, &self.view, &mut intents);
        });
        for msg in intents {
            self.dispatch(msg);
        }

        // Service completions arrive off-frame; wake up for them.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
