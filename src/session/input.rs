use serde::Serialize;

/// One of the four bounded controls on the prediction screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputField {
    StudyHours,
    PastScore,
    Attendance,
    SleepHours,
}

impl InputField {
    pub const ALL: [InputField; 4] = [
        InputField::StudyHours,
        InputField::PastScore,
        InputField::Attendance,
        InputField::SleepHours,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InputField::StudyHours => "Hours Studied Daily",
            InputField::PastScore => "Past Score (%)",
            InputField::Attendance => "Attendance (%)",
            InputField::SleepHours => "Sleep Hours Daily",
        }
    }

    pub fn max(self) -> u8 {
        match self {
            InputField::StudyHours => 10,
            InputField::PastScore | InputField::Attendance => 100,
            InputField::SleepHours => 12,
        }
    }

    pub fn min(self) -> u8 {
        0
    }

    pub fn default_value(self) -> u8 {
        match self {
            InputField::StudyHours => 5,
            InputField::PastScore => 60,
            InputField::Attendance => 80,
            InputField::SleepHours => 7,
        }
    }

    /// Large step for page keys.
    pub fn page_step(self) -> i32 {
        match self {
            InputField::PastScore | InputField::Attendance => 10,
            InputField::StudyHours | InputField::SleepHours => 2,
        }
    }

    pub fn clamp(self, value: i64) -> u8 {
        value.clamp(i64::from(self.min()), i64::from(self.max())) as u8
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PredictionInput {
    pub study_hours: u8,
    pub past_score: u8,
    pub attendance: u8,
    pub sleep_hours: u8,
}

impl Default for PredictionInput {
    fn default() -> Self {
        Self {
            study_hours: InputField::StudyHours.default_value(),
            past_score: InputField::PastScore.default_value(),
            attendance: InputField::Attendance.default_value(),
            sleep_hours: InputField::SleepHours.default_value(),
        }
    }
}

impl PredictionInput {
    /// Builds an input the way the controls would, pinning each value to its
    /// bounds.
    pub fn bounded(study_hours: i64, past_score: i64, attendance: i64, sleep_hours: i64) -> Self {
        Self {
            study_hours: InputField::StudyHours.clamp(study_hours),
            past_score: InputField::PastScore.clamp(past_score),
            attendance: InputField::Attendance.clamp(attendance),
            sleep_hours: InputField::SleepHours.clamp(sleep_hours),
        }
    }

    pub fn get(&self, field: InputField) -> u8 {
        match field {
            InputField::StudyHours => self.study_hours,
            InputField::PastScore => self.past_score,
            InputField::Attendance => self.attendance,
            InputField::SleepHours => self.sleep_hours,
        }
    }

    pub fn set(&mut self, field: InputField, value: i64) {
        let value = field.clamp(value);
        match field {
            InputField::StudyHours => self.study_hours = value,
            InputField::PastScore => self.past_score = value,
            InputField::Attendance => self.attendance = value,
            InputField::SleepHours => self.sleep_hours = value,
        }
    }

    /// Returns true if the value actually moved.
    pub fn adjust(&mut self, field: InputField, delta: i32) -> bool {
        let before = self.get(field);
        self.set(field, i64::from(before) + i64::from(delta));
        self.get(field) != before
    }

    pub fn ratio(&self, field: InputField) -> f64 {
        f64::from(self.get(field)) / f64::from(field.max())
    }
}
