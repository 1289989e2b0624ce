use nalgebra::{DMatrix, DVector};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::engine::dataset::{TrainingExample, feature_vector};
use crate::session::input::PredictionInput;

pub const FEATURE_COUNT: usize = 5;

pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "study_hours",
    "past_score",
    "attendance",
    "sleep_hours",
    "sleep_hours_squared",
];

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitError {
    #[error("cannot fit a model to an empty dataset")]
    Empty,
    /// Fewer rows than fitted parameters (coefficients plus intercept).
    #[error("need at least {needed} examples to fit, got {got}")]
    Underdetermined { needed: usize, got: usize },
    #[error("design matrix is rank deficient (rank {rank}, need 5)")]
    RankDeficient { rank: usize },
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
    #[error("least-squares solve failed: {0}")]
    Solve(&'static str),
}

/// Ordinary least-squares model over the augmented feature row
/// `[hours, past, attendance, sleep, sleep²]`. Immutable once fitted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FittedModel {
    pub coefficients: [f64; FEATURE_COUNT],
    pub intercept: f64,
    /// Coefficient of determination on the training rows.
    pub r_squared: f64,
    pub sample_count: usize,
}

impl FittedModel {
    /// Fits by solving the mean-centred system with an SVD least-squares
    /// solve; the intercept is recovered from the column means.
    pub fn fit(examples: &[TrainingExample]) -> Result<Self, FitError> {
        let n = examples.len();
        if n == 0 {
            return Err(FitError::Empty);
        }
        if n < FEATURE_COUNT + 1 {
            return Err(FitError::Underdetermined {
                needed: FEATURE_COUNT + 1,
                got: n,
            });
        }

        let rows: Vec<[f64; FEATURE_COUNT]> = examples.iter().map(|ex| ex.features()).collect();
        let targets: Vec<f64> = examples.iter().map(|ex| ex.observed_grade).collect();

        if rows.iter().flatten().chain(targets.iter()).any(|v| !v.is_finite()) {
            return Err(FitError::NonFinite("training data"));
        }

        let mut means = [0.0; FEATURE_COUNT];
        for row in &rows {
            for (mean, v) in means.iter_mut().zip(row) {
                *mean += v;
            }
        }
        for mean in &mut means {
            *mean /= n as f64;
        }
        let target_mean = targets.iter().sum::<f64>() / n as f64;

        let design = DMatrix::from_fn(n, FEATURE_COUNT, |r, c| rows[r][c] - means[c]);
        let centred_targets = DVector::from_iterator(n, targets.iter().map(|y| y - target_mean));

        let svd = design.svd(true, true);
        let max_singular = svd.singular_values.max();
        let eps = max_singular * n.max(FEATURE_COUNT) as f64 * f64::EPSILON;
        let rank = svd.rank(eps);
        if rank < FEATURE_COUNT {
            return Err(FitError::RankDeficient { rank });
        }

        let solution = svd.solve(&centred_targets, eps).map_err(FitError::Solve)?;

        let mut coefficients = [0.0; FEATURE_COUNT];
        for (coef, v) in coefficients.iter_mut().zip(solution.iter()) {
            *coef = *v;
        }
        let intercept = target_mean
            - coefficients
                .iter()
                .zip(&means)
                .map(|(w, m)| w * m)
                .sum::<f64>();

        if coefficients.iter().any(|c| !c.is_finite()) || !intercept.is_finite() {
            return Err(FitError::NonFinite("fitted coefficients"));
        }

        let mut model = Self {
            coefficients,
            intercept,
            r_squared: 0.0,
            sample_count: n,
        };
        model.r_squared = model.score(examples);

        debug!(
            coefficients = ?model.coefficients,
            intercept = model.intercept,
            r_squared = model.r_squared,
            rank,
            "fitted grade model"
        );
        Ok(model)
    }

    pub fn predict_features(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        self.coefficients
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    /// Pure linear evaluation; extrapolates freely outside the training range.
    pub fn predict_raw(&self, study_hours: f64, past_score: f64, attendance: f64, sleep_hours: f64) -> f64 {
        self.predict_features(&feature_vector(study_hours, past_score, attendance, sleep_hours))
    }

    pub fn predict(&self, input: &PredictionInput) -> f64 {
        self.predict_raw(
            f64::from(input.study_hours),
            f64::from(input.past_score),
            f64::from(input.attendance),
            f64::from(input.sleep_hours),
        )
    }

    /// R² of this model over `examples`. A constant target scores 1.0 when
    /// reproduced exactly, 0.0 otherwise.
    pub fn score(&self, examples: &[TrainingExample]) -> f64 {
        if examples.is_empty() {
            return 0.0;
        }
        let mean = examples.iter().map(|ex| ex.observed_grade).sum::<f64>() / examples.len() as f64;
        let mut ss_res = 0.0;
        let mut ss_tot = 0.0;
        for ex in examples {
            let residual = ex.observed_grade - self.predict_features(&ex.features());
            ss_res += residual * residual;
            ss_tot += (ex.observed_grade - mean).powi(2);
        }
        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }
        1.0 - ss_res / ss_tot
    }
}
