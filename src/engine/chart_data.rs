use serde::Serialize;

pub const IDEAL_TARGET: f64 = 90.0;
pub const AXIS_BOUNDS: [f64; 2] = [0.0, 100.0];

pub const PREDICTED_LABEL: &str = "Predicted Grade";
pub const PAST_LABEL: &str = "Past Score";
pub const TARGET_LABEL: &str = "Ideal Target";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub value: f64,
}

impl ChartBar {
    /// Rounded integer percentage drawn above the bar.
    pub fn annotation(&self) -> String {
        format!("{:.0}%", self.value)
    }
}

/// Comparison bars for one prediction: predicted, past, target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    pub bars: [ChartBar; 3],
}

impl ChartData {
    pub fn assemble(clamped_grade: f64, past_score: f64) -> Self {
        Self {
            bars: [
                ChartBar {
                    label: PREDICTED_LABEL,
                    value: clamped_grade,
                },
                ChartBar {
                    label: PAST_LABEL,
                    value: past_score,
                },
                ChartBar {
                    label: TARGET_LABEL,
                    value: IDEAL_TARGET,
                },
            ],
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.bars.iter().find(|b| b.label == label).map(|b| b.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bars_in_order() {
        let chart = ChartData::assemble(81.8, 70.0);
        let labels: Vec<&str> = chart.bars.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["Predicted Grade", "Past Score", "Ideal Target"]);
        assert_eq!(chart.get(PREDICTED_LABEL), Some(81.8));
        assert_eq!(chart.get(PAST_LABEL), Some(70.0));
        assert_eq!(chart.get(TARGET_LABEL), Some(90.0));
    }

    #[test]
    fn test_target_is_constant() {
        for (grade, past) in [(0.0, 0.0), (100.0, 100.0), (55.5, 12.0)] {
            assert_eq!(ChartData::assemble(grade, past).get(TARGET_LABEL), Some(IDEAL_TARGET));
        }
    }

    #[test]
    fn test_annotation_rounds() {
        let chart = ChartData::assemble(81.803, 60.0);
        assert_eq!(chart.bars[0].annotation(), "82%");
        assert_eq!(chart.bars[1].annotation(), "60%");
        assert_eq!(chart.bars[2].annotation(), "90%");
    }
}
