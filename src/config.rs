use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::session::input::{InputField, PredictionInput};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_study_hours")]
    pub default_study_hours: i64,
    #[serde(default = "default_past_score")]
    pub default_past_score: i64,
    #[serde(default = "default_attendance")]
    pub default_attendance: i64,
    #[serde(default = "default_sleep_hours")]
    pub default_sleep_hours: i64,
}

fn default_theme() -> String {
    "catppuccin-mocha".to_string()
}
fn default_study_hours() -> i64 {
    InputField::StudyHours.default_value().into()
}
fn default_past_score() -> i64 {
    InputField::PastScore.default_value().into()
}
fn default_attendance() -> i64 {
    InputField::Attendance.default_value().into()
}
fn default_sleep_hours() -> i64 {
    InputField::SleepHours.default_value().into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_study_hours: default_study_hours(),
            default_past_score: default_past_score(),
            default_attendance: default_attendance(),
            default_sleep_hours: default_sleep_hours(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let mut config: Config = toml::from_str(&content)?;
            config.normalize();
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gradeopt")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Pin the configured starting values into the control bounds.
    pub fn normalize(&mut self) {
        let input = self.initial_input();
        self.default_study_hours = input.study_hours.into();
        self.default_past_score = input.past_score.into();
        self.default_attendance = input.attendance.into();
        self.default_sleep_hours = input.sleep_hours.into();
        if self.theme.trim().is_empty() {
            self.theme = default_theme();
        }
    }

    pub fn initial_input(&self) -> PredictionInput {
        PredictionInput::bounded(
            self.default_study_hours,
            self.default_past_score,
            self.default_attendance,
            self.default_sleep_hours,
        )
    }
}
