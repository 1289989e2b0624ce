use serde::Serialize;
use tracing::info;

use crate::engine::chart_data::ChartData;
use crate::engine::dataset::TRAINING_SET;
use crate::engine::grading::{LetterGrade, clamp_grade, classify};
use crate::engine::regression::{FitError, FittedModel};
use crate::session::input::PredictionInput;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    pub raw_grade: f64,
    pub clamped_grade: f64,
    pub feedback: &'static str,
    pub letter: LetterGrade,
}

impl PredictionResult {
    /// Clamps first; the letter is always derived from the clamped value.
    pub fn from_raw(raw_grade: f64) -> Self {
        let clamped_grade = clamp_grade(raw_grade);
        let (feedback, letter) = classify(clamped_grade);
        Self {
            raw_grade,
            clamped_grade,
            feedback,
            letter,
        }
    }

    /// `81.80%`
    pub fn grade_text(&self) -> String {
        format!("{:.2}%", self.clamped_grade)
    }

    pub fn headline(&self) -> String {
        format!("Predicted Final Grade: {} ({})", self.grade_text(), self.letter)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Prediction {
    pub input: PredictionInput,
    pub result: PredictionResult,
    pub chart: ChartData,
}

/// Evaluates inputs against one fitted model. The model is never mutated, so
/// a predictor can be shared freely across callers.
#[derive(Clone, Debug)]
pub struct GradePredictor {
    model: FittedModel,
}

impl GradePredictor {
    pub fn new(model: FittedModel) -> Self {
        Self { model }
    }

    pub fn from_training_set() -> Result<Self, FitError> {
        let model = FittedModel::fit(&TRAINING_SET)?;
        info!(
            samples = model.sample_count,
            r_squared = model.r_squared,
            "grade model ready"
        );
        Ok(Self::new(model))
    }

    pub fn model(&self) -> &FittedModel {
        &self.model
    }

    pub fn evaluate(&self, input: &PredictionInput) -> Prediction {
        let result = PredictionResult::from_raw(self.model.predict(input));
        let chart = ChartData::assemble(result.clamped_grade, f64::from(input.past_score));
        info!(
            study_hours = input.study_hours,
            past_score = input.past_score,
            attendance = input.attendance,
            sleep_hours = input.sleep_hours,
            raw = result.raw_grade,
            grade = result.clamped_grade,
            letter = result.letter.as_str(),
            "prediction"
        );
        Prediction {
            input: *input,
            result,
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::chart_data::{PREDICTED_LABEL, TARGET_LABEL};

    fn predictor() -> GradePredictor {
        GradePredictor::from_training_set().unwrap()
    }

    #[test]
    fn test_clamp_then_classify_high() {
        let result = PredictionResult::from_raw(131.0);
        assert_eq!(result.raw_grade, 131.0);
        assert_eq!(result.clamped_grade, 100.0);
        assert_eq!(result.letter, LetterGrade::APlus);
    }

    #[test]
    fn test_clamp_then_classify_low() {
        let result = PredictionResult::from_raw(-12.0);
        assert_eq!(result.clamped_grade, 0.0);
        assert_eq!(result.letter, LetterGrade::D);
        assert_eq!(result.grade_text(), "0.00%");
    }

    #[test]
    fn test_headline_format() {
        let result = PredictionResult::from_raw(81.803_662_998);
        assert_eq!(result.headline(), "Predicted Final Grade: 81.80% (A)");
    }

    #[test]
    fn test_evaluate_builds_chart_from_clamped_grade() {
        let input = PredictionInput {
            study_hours: 0,
            past_score: 0,
            attendance: 0,
            sleep_hours: 0,
        };
        let prediction = predictor().evaluate(&input);
        assert!(prediction.result.raw_grade < 0.0);
        assert_eq!(prediction.chart.get(PREDICTED_LABEL), Some(0.0));
        assert_eq!(prediction.chart.get(TARGET_LABEL), Some(90.0));
    }

    #[test]
    fn test_predictor_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GradePredictor>();
    }
}
