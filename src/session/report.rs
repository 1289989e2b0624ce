use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::engine::chart_data::ChartBar;
use crate::engine::grading::LetterGrade;
use crate::engine::predictor::Prediction;
use crate::engine::regression::{FEATURE_NAMES, FittedModel};
use crate::session::input::PredictionInput;

pub const REPORT_VERSION: u32 = 1;

#[derive(Clone, Debug, Serialize)]
pub struct ModelSummary {
    pub features: [&'static str; 5],
    pub coefficients: [f64; 5],
    pub intercept: f64,
    pub r_squared: f64,
    pub sample_count: usize,
}

impl From<&FittedModel> for ModelSummary {
    fn from(model: &FittedModel) -> Self {
        Self {
            features: FEATURE_NAMES,
            coefficients: model.coefficients,
            intercept: model.intercept,
            r_squared: model.r_squared,
            sample_count: model.sample_count,
        }
    }
}

/// Output of a one-shot prediction, serialized as JSON for `--once --json`.
#[derive(Clone, Debug, Serialize)]
pub struct PredictionReport {
    pub report_version: u32,
    pub generated_at: DateTime<Utc>,
    pub input: PredictionInput,
    pub raw_grade: f64,
    pub predicted_grade: f64,
    pub letter: LetterGrade,
    pub feedback: &'static str,
    pub chart: Vec<ChartBar>,
    pub model: ModelSummary,
}

impl PredictionReport {
    pub fn new(prediction: &Prediction, model: &FittedModel) -> Self {
        Self {
            report_version: REPORT_VERSION,
            generated_at: Utc::now(),
            input: prediction.input,
            raw_grade: prediction.result.raw_grade,
            predicted_grade: prediction.result.clamped_grade,
            letter: prediction.result.letter,
            feedback: prediction.result.feedback,
            chart: prediction.chart.bars.to_vec(),
            model: ModelSummary::from(model),
        }
    }

    /// Plain-text rendering for terminals and pipes.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Predicted Final Grade: {:.2}% ({})\n",
            self.predicted_grade, self.letter
        ));
        out.push_str(&format!("Feedback: {} {}\n", self.letter.icon(), self.feedback));
        out.push('\n');
        for bar in &self.chart {
            let filled = (bar.value / 100.0 * 40.0).round().clamp(0.0, 40.0) as usize;
            out.push_str(&format!(
                "{:<16}|{:<40}| {}\n",
                bar.label,
                "#".repeat(filled),
                bar.annotation()
            ));
        }
        out
    }
}

pub fn model_text(summary: &ModelSummary) -> String {
    let mut out = String::new();
    for (name, coef) in summary.features.iter().zip(summary.coefficients) {
        out.push_str(&format!("{name:<20} {coef:>14.6}\n"));
    }
    out.push_str(&format!("{:<20} {:>14.6}\n", "intercept", summary.intercept));
    out.push_str(&format!(
        "R\u{b2} = {:.4} over {} examples\n",
        summary.r_squared, summary.sample_count
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::predictor::GradePredictor;

    fn report() -> PredictionReport {
        let predictor = GradePredictor::from_training_set().unwrap();
        let input = PredictionInput {
            study_hours: 5,
            past_score: 70,
            attendance: 80,
            sleep_hours: 8,
        };
        PredictionReport::new(&predictor.evaluate(&input), predictor.model())
    }

    #[test]
    fn test_json_fields() {
        let json: serde_json::Value = serde_json::to_value(report()).unwrap();
        assert_eq!(json["report_version"], 1);
        assert_eq!(json["letter"], "A");
        assert_eq!(json["input"]["sleep_hours"], 8);
        assert_eq!(json["chart"].as_array().unwrap().len(), 3);
        assert_eq!(json["chart"][2]["label"], "Ideal Target");
        assert_eq!(json["chart"][2]["value"], 90.0);
        assert_eq!(json["model"]["features"][4], "sleep_hours_squared");
        assert!(json["generated_at"].is_string());
    }

    #[test]
    fn test_text_rendering() {
        let text = report().to_text();
        assert!(text.starts_with("Predicted Final Grade: 81.80% (A)"));
        assert!(text.contains("Very Good! You're on the right track!"));
        assert!(text.contains("Ideal Target"));
        assert!(text.contains("| 90%"));
        assert!(text.contains("| 82%"));
    }

    #[test]
    fn test_model_text_lists_every_feature() {
        let text = model_text(&report().model);
        for name in FEATURE_NAMES {
            assert!(text.contains(name));
        }
        assert!(text.contains("intercept"));
        assert!(text.contains("over 9 examples"));
    }
}
