pub mod chart_data;
pub mod dataset;
pub mod grading;
pub mod predictor;
pub mod regression;

pub use predictor::{GradePredictor, Prediction, PredictionResult};
pub use regression::{FitError, FittedModel};
