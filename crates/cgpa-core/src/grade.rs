//! Letter grades and the fixed grade-point scale.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use tracing::debug;

/// Warning shown when a grade token is not on the scale.
pub const INVALID_GRADE_WARNING: &str = "Invalid grade entered! Defaulting to 0.";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Grade {
    /// Outstanding
    #[strum(serialize = "O")]
    O,
    #[strum(serialize = "A+")]
    #[serde(rename = "A+")]
    APlus,
    #[strum(serialize = "A")]
    A,
    #[strum(serialize = "B+")]
    #[serde(rename = "B+")]
    BPlus,
    #[strum(serialize = "B")]
    B,
    #[strum(serialize = "C")]
    C,
    /// Fail
    #[strum(serialize = "F")]
    F,
}

impl Grade {
    /// The whole scale, highest grade first.
    pub const ALL: [Grade; 7] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::F,
    ];

    /// Look up a grade token, ignoring letter case and surrounding whitespace.
    pub fn parse(token: &str) -> Option<Self> {
        Self::from_str(token.trim()).ok()
    }

    pub fn points(&self) -> f64 {
        match self {
            Self::O => 10.0,
            Self::APlus => 9.0,
            Self::A => 8.0,
            Self::BPlus => 7.0,
            Self::B => 6.0,
            Self::C => 5.0,
            Self::F => 0.0,
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of converting a raw grade token to points.
#[derive(Debug, Clone, PartialEq)]
pub enum GradeConversion {
    Valid(Grade),
    /// Token was not on the scale; it counts as zero points.
    Invalid(String),
}

impl GradeConversion {
    pub fn points(&self) -> f64 {
        match self {
            Self::Valid(grade) => grade.points(),
            Self::Invalid(_) => 0.0,
        }
    }

    pub fn grade(&self) -> Option<Grade> {
        match self {
            Self::Valid(grade) => Some(*grade),
            Self::Invalid(_) => None,
        }
    }

    /// Warning text for the user, present only for unrecognized tokens.
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(_) => Some(INVALID_GRADE_WARNING),
        }
    }
}

/// Convert a grade token to its point value. Never fails.
pub fn convert_grade(token: &str) -> GradeConversion {
    match Grade::parse(token) {
        Some(grade) => GradeConversion::Valid(grade),
        None => {
            debug!("Unrecognized grade token {:?}", token);
            GradeConversion::Invalid(token.to_string())
        }
    }
}

/// Point value of a grade token; unrecognized tokens are worth zero.
pub fn grade_to_point(token: &str) -> f64 {
    convert_grade(token).points()
}
