use tracing::{info, warn};

use crate::config::Config;
use crate::engine::predictor::{GradePredictor, Prediction};
use crate::session::input::{InputField, PredictionInput};
use crate::ui::theme::Theme;

pub struct App {
    pub input: PredictionInput,
    pub selected: InputField,
    pub last_prediction: Option<Prediction>,
    pub predictor: GradePredictor,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub should_quit: bool,
    pub status: Option<String>,
    persist_config: bool,
}

impl App {
    pub fn new(config: Config, theme: Theme, predictor: GradePredictor) -> Self {
        Self {
            input: config.initial_input(),
            selected: InputField::StudyHours,
            last_prediction: None,
            predictor,
            theme,
            config,
            show_help: false,
            should_quit: false,
            status: None,
            persist_config: true,
        }
    }

    /// Keep theme changes in memory only.
    pub fn without_persistence(mut self) -> Self {
        self.persist_config = false;
        self
    }

    pub fn predict(&mut self) {
        self.last_prediction = Some(self.predictor.evaluate(&self.input));
        self.status = None;
    }

    /// The shown prediction was made from different inputs than the controls
    /// now hold.
    pub fn is_stale(&self) -> bool {
        self.last_prediction
            .as_ref()
            .is_some_and(|p| p.input != self.input)
    }

    pub fn select_next(&mut self) {
        self.selected = self.selected.next();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.prev();
    }

    pub fn adjust(&mut self, delta: i32) {
        self.input.adjust(self.selected, delta);
    }

    pub fn page(&mut self, up: bool) {
        let step = self.selected.page_step();
        self.adjust(if up { step } else { -step });
    }

    pub fn jump_to_min(&mut self) {
        self.input.set(self.selected, i64::from(self.selected.min()));
    }

    pub fn jump_to_max(&mut self) {
        self.input.set(self.selected, i64::from(self.selected.max()));
    }

    pub fn reset_inputs(&mut self) {
        self.input = self.config.initial_input();
        self.selected = InputField::StudyHours;
        self.status = Some("Controls reset".to_string());
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn cycle_theme(&mut self) {
        let Some(name) = Theme::next_name(&self.theme.name) else {
            return;
        };
        let Some(theme) = Theme::load(&name) else {
            warn!(theme = %name, "bundled theme failed to load");
            return;
        };
        info!(theme = %name, "theme changed");
        self.theme = theme;
        self.config.theme = name.clone();
        self.status = Some(format!("Theme: {name}"));

        if self.persist_config {
            if let Err(err) = self.config.save() {
                warn!(%err, "could not save config");
                self.status = Some(format!("Theme: {name} (not saved: {err})"));
            }
        }
    }
}
