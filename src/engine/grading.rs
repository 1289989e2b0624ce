use std::fmt;

use serde::{Serialize, Serializer};

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

/// Restricts a raw model output to a valid percentage. NaN maps to 0.
pub fn clamp_grade(raw: f64) -> f64 {
    if raw.is_nan() {
        return MIN_GRADE;
    }
    raw.clamp(MIN_GRADE, MAX_GRADE)
}

/// Letter bands, ordered from worst to best.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterGrade {
    D,
    C,
    B,
    A,
    APlus,
}

impl LetterGrade {
    pub const ALL: [LetterGrade; 5] = [
        LetterGrade::APlus,
        LetterGrade::A,
        LetterGrade::B,
        LetterGrade::C,
        LetterGrade::D,
    ];

    /// Inclusive lower bound of the band.
    pub fn threshold(self) -> f64 {
        match self {
            LetterGrade::APlus => 90.0,
            LetterGrade::A => 80.0,
            LetterGrade::B => 70.0,
            LetterGrade::C => 60.0,
            LetterGrade::D => 0.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LetterGrade::APlus => "A+",
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
        }
    }

    pub fn feedback(self) -> &'static str {
        match self {
            LetterGrade::APlus => "Excellent! Keep up the great work!",
            LetterGrade::A => "Very Good! You're on the right track!",
            LetterGrade::B => "Good! A bit more effort and you'll shine!",
            LetterGrade::C => "Fair. Try to focus and revise regularly.",
            LetterGrade::D => "Needs Improvement. Consider a better routine.",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            LetterGrade::APlus => "\u{1f31f}",
            LetterGrade::A => "\u{1f44d}",
            LetterGrade::B => "\u{1f642}",
            LetterGrade::C => "\u{1f610}",
            LetterGrade::D => "\u{26a0}\u{fe0f}",
        }
    }

    /// Step function over the clamped grade; each threshold is inclusive.
    pub fn from_grade(clamped: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|letter| clamped >= letter.threshold())
            .unwrap_or(LetterGrade::D)
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LetterGrade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn classify(clamped: f64) -> (&'static str, LetterGrade) {
    let letter = LetterGrade::from_grade(clamped);
    (letter.feedback(), letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_identity_inside_range() {
        assert_eq!(clamp_grade(0.0), 0.0);
        assert_eq!(clamp_grade(42.5), 42.5);
        assert_eq!(clamp_grade(100.0), 100.0);
    }

    #[test]
    fn test_clamp_caps_outside_range() {
        assert_eq!(clamp_grade(-105.2), 0.0);
        assert_eq!(clamp_grade(101.0), 100.0);
        assert_eq!(clamp_grade(f64::INFINITY), 100.0);
        assert_eq!(clamp_grade(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_grade(f64::NAN), 0.0);
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(100.0).1, LetterGrade::APlus);
        assert_eq!(classify(90.0).1, LetterGrade::APlus);
        assert_eq!(classify(89.999).1, LetterGrade::A);
        assert_eq!(classify(80.0).1, LetterGrade::A);
        assert_eq!(classify(79.999).1, LetterGrade::B);
        assert_eq!(classify(70.0).1, LetterGrade::B);
        assert_eq!(classify(60.0).1, LetterGrade::C);
        assert_eq!(classify(59.999).1, LetterGrade::D);
        assert_eq!(classify(0.0).1, LetterGrade::D);
    }

    #[test]
    fn test_messages() {
        assert_eq!(classify(95.0).0, "Excellent! Keep up the great work!");
        assert_eq!(classify(85.0).0, "Very Good! You're on the right track!");
        assert_eq!(classify(75.0).0, "Good! A bit more effort and you'll shine!");
        assert_eq!(classify(65.0).0, "Fair. Try to focus and revise regularly.");
        assert_eq!(classify(5.0).0, "Needs Improvement. Consider a better routine.");
    }

    #[test]
    fn test_letter_order_and_display() {
        assert!(LetterGrade::D < LetterGrade::C);
        assert!(LetterGrade::A < LetterGrade::APlus);
        assert_eq!(LetterGrade::APlus.to_string(), "A+");
        assert_eq!(serde_json::to_string(&LetterGrade::APlus).unwrap(), "\"A+\"");
    }
}
