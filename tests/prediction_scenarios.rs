use gradeopt::engine::chart_data::{IDEAL_TARGET, PAST_LABEL, PREDICTED_LABEL, TARGET_LABEL};
use gradeopt::engine::dataset::TRAINING_SET;
use gradeopt::engine::grading::LetterGrade;
use gradeopt::engine::{FittedModel, GradePredictor};
use gradeopt::session::input::PredictionInput;
use gradeopt::session::report::PredictionReport;

fn predictor() -> GradePredictor {
    GradePredictor::from_training_set().expect("reference data must fit")
}

fn input(study_hours: u8, past_score: u8, attendance: u8, sleep_hours: u8) -> PredictionInput {
    PredictionInput {
        study_hours,
        past_score,
        attendance,
        sleep_hours,
    }
}

#[test]
fn optimal_sleep_routine_lands_in_a_band() {
    let prediction = predictor().evaluate(&input(5, 70, 80, 8));
    let result = &prediction.result;
    assert!((result.raw_grade - 81.803_663).abs() < 1e-4, "{}", result.raw_grade);
    assert_eq!(result.raw_grade, result.clamped_grade);
    assert_eq!(result.letter, LetterGrade::A);
    assert_eq!(result.feedback, "Very Good! You're on the right track!");
    assert_eq!(result.grade_text(), "81.80%");
}

#[test]
fn all_minimum_inputs_clamp_to_zero() {
    let prediction = predictor().evaluate(&input(0, 0, 0, 0));
    let result = &prediction.result;
    assert!((result.raw_grade - -105.222_408).abs() < 1e-4);
    assert_eq!(result.clamped_grade, 0.0);
    assert_eq!(result.letter, LetterGrade::D);
    assert_eq!(prediction.chart.get(PREDICTED_LABEL), Some(0.0));
    assert_eq!(prediction.chart.get(PAST_LABEL), Some(0.0));
}

#[test]
fn all_maximum_inputs_classify_the_clamped_value() {
    let prediction = predictor().evaluate(&input(10, 100, 100, 12));
    let result = &prediction.result;
    // Twelve hours of sleep sits far past the fitted optimum.
    assert!((result.raw_grade - 60.242_746).abs() < 1e-4);
    assert!((0.0..=100.0).contains(&result.clamped_grade));
    assert_eq!(result.letter, LetterGrade::from_grade(result.clamped_grade));
    assert_eq!(result.letter, LetterGrade::C);
}

#[test]
fn default_controls_predict_without_error() {
    let prediction = predictor().evaluate(&PredictionInput::default());
    assert!((prediction.result.clamped_grade - 81.105_183).abs() < 1e-4);
    assert_eq!(prediction.result.letter, LetterGrade::A);
}

#[test]
fn chart_always_has_three_bars_with_fixed_target() {
    let predictor = predictor();
    for hours in [0, 5, 10] {
        for past in [0, 55, 100] {
            for sleep in [0, 7, 12] {
                let prediction = predictor.evaluate(&input(hours, past, 80, sleep));
                assert_eq!(prediction.chart.bars.len(), 3);
                assert_eq!(prediction.chart.get(TARGET_LABEL), Some(IDEAL_TARGET));
                assert_eq!(prediction.chart.get(PAST_LABEL), Some(f64::from(past)));
                assert_eq!(
                    prediction.chart.get(PREDICTED_LABEL),
                    Some(prediction.result.clamped_grade)
                );
            }
        }
    }
}

#[test]
fn fitted_model_tracks_training_rows() {
    let model = FittedModel::fit(&TRAINING_SET).unwrap();
    for ex in &TRAINING_SET {
        let predicted = model.predict_raw(ex.study_hours, ex.past_score, ex.attendance, ex.sleep_hours);
        assert!((predicted - ex.observed_grade).abs() < 5.0, "{ex:?} -> {predicted}");
    }
}

#[test]
fn refitting_is_deterministic() {
    let first = predictor();
    let second = predictor();
    assert_eq!(first.model(), second.model());
}

#[test]
fn json_report_describes_prediction() {
    let predictor = predictor();
    let prediction = predictor.evaluate(&input(9, 90, 98, 9));
    let report = PredictionReport::new(&prediction, predictor.model());
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["letter"], "A+");
    assert!(json["raw_grade"].as_f64().unwrap() > 90.0);
    assert_eq!(json["model"]["sample_count"], 9);
}
