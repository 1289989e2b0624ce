/// One observed student: four lifestyle/academic inputs and the grade they
/// went on to get.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrainingExample {
    pub study_hours: f64,
    pub past_score: f64,
    pub attendance: f64,
    pub sleep_hours: f64,
    pub observed_grade: f64,
}

impl TrainingExample {
    pub const fn new(
        study_hours: f64,
        past_score: f64,
        attendance: f64,
        sleep_hours: f64,
        observed_grade: f64,
    ) -> Self {
        Self {
            study_hours,
            past_score,
            attendance,
            sleep_hours,
            observed_grade,
        }
    }

    pub fn sleep_hours_squared(&self) -> f64 {
        self.sleep_hours * self.sleep_hours
    }

    /// The regression feature row: `[hours, past, attendance, sleep, sleep²]`.
    pub fn features(&self) -> [f64; 5] {
        feature_vector(
            self.study_hours,
            self.past_score,
            self.attendance,
            self.sleep_hours,
        )
    }
}

/// Augments the four raw inputs with the squared sleep term so a linear model
/// can express an optimal amount of sleep.
pub fn feature_vector(study_hours: f64, past_score: f64, attendance: f64, sleep_hours: f64) -> [f64; 5] {
    [
        study_hours,
        past_score,
        attendance,
        sleep_hours,
        sleep_hours * sleep_hours,
    ]
}

// Rows are ordered from weakest to strongest routine. Sleep peaks around
// 7-8 hours; row 7 has high effort but short sleep and dips accordingly.
pub const TRAINING_SET: [TrainingExample; 9] = [
    TrainingExample::new(1.0, 30.0, 10.0, 4.0, 30.0),
    TrainingExample::new(2.0, 50.0, 40.0, 5.0, 45.0),
    TrainingExample::new(3.0, 60.0, 65.0, 6.0, 60.0),
    TrainingExample::new(4.0, 55.0, 70.0, 7.0, 75.0),
    TrainingExample::new(5.0, 70.0, 80.0, 8.0, 85.0),
    TrainingExample::new(6.0, 75.0, 85.0, 7.0, 88.0),
    TrainingExample::new(7.0, 80.0, 90.0, 6.0, 82.0),
    TrainingExample::new(8.0, 85.0, 95.0, 8.0, 95.0),
    TrainingExample::new(9.0, 90.0, 98.0, 9.0, 98.0),
];
