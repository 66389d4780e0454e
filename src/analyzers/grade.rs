//! The fixed letter-grade scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade and its integer grade-point value.
///
/// | Label | Points |
/// |-------|--------|
/// | A+    | 10     |
/// | A     | 9      |
/// | B+    | 8      |
/// | B     | 7      |
/// | C+    | 6      |
/// | C     | 5      |
/// | D     | 4      |
/// | F     | 0      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    D,
    F,
}

/// Every grade on the scale, highest first.
pub const GRADE_SCALE: [Grade; 8] = [
    Grade::APlus,
    Grade::A,
    Grade::BPlus,
    Grade::B,
    Grade::CPlus,
    Grade::C,
    Grade::D,
    Grade::F,
];

impl Grade {
    pub fn points(self) -> u8 {
        match self {
            Grade::APlus => 10,
            Grade::A => 9,
            Grade::BPlus => 8,
            Grade::B => 7,
            Grade::CPlus => 6,
            Grade::C => 5,
            Grade::D => 4,
            Grade::F => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Looks up the grade worth exactly `points`. Returns `None` for values
    /// that are not on the scale (1, 2, 3 and anything above 10).
    pub fn from_points(points: u8) -> Option<Grade> {
        GRADE_SCALE.iter().copied().find(|g| g.points() == points)
    }

    /// Looks up a grade by its letter label, ignoring case and surrounding
    /// whitespace.
    pub fn from_label(label: &str) -> Option<Grade> {
        let label = label.trim();
        GRADE_SCALE
            .iter()
            .copied()
            .find(|g| g.label().eq_ignore_ascii_case(label))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raised when text names neither a letter grade nor a legal point value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown grade '{0}' (expected one of A+, A, B+, B, C+, C, D, F or 10, 9, 8, 7, 6, 5, 4, 0)")]
pub struct UnknownGrade(pub String);

impl FromStr for Grade {
    type Err = UnknownGrade;

    /// Accepts either a letter label (`"B+"`) or a point value (`"8"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(g) = Grade::from_label(trimmed) {
            return Ok(g);
        }
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Grade::from_points)
            .ok_or_else(|| UnknownGrade(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_points() {
        let points: Vec<u8> = GRADE_SCALE.iter().map(|g| g.points()).collect();
        assert_eq!(points, vec![10, 9, 8, 7, 6, 5, 4, 0]);
    }

    #[test]
    fn test_from_points_is_inverse_of_points() {
        for g in GRADE_SCALE {
            assert_eq!(Grade::from_points(g.points()), Some(g));
        }
    }

    #[test]
    fn test_from_points_rejects_gaps() {
        assert_eq!(Grade::from_points(1), None);
        assert_eq!(Grade::from_points(2), None);
        assert_eq!(Grade::from_points(3), None);
        assert_eq!(Grade::from_points(11), None);
    }

    #[test]
    fn test_parse_labels_and_points() {
        assert_eq!("A+".parse::<Grade>().unwrap(), Grade::APlus);
        assert_eq!(" b+ ".parse::<Grade>().unwrap(), Grade::BPlus);
        assert_eq!("9".parse::<Grade>().unwrap(), Grade::A);
        assert_eq!("0".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!("E".parse::<Grade>(), Err(UnknownGrade("E".to_string())));
        assert!("3".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_serde_uses_labels() {
        assert_eq!(serde_json::to_string(&Grade::CPlus).unwrap(), "\"C+\"");
        let g: Grade = serde_json::from_str("\"A+\"").unwrap();
        assert_eq!(g, Grade::APlus);
    }
}
