use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// Qualitative band for a computed CGPA.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, IntoStaticStr,
)]
pub enum Remark {
    #[strum(serialize = "Needs improvement")]
    NeedsImprovement,
    #[strum(serialize = "Satisfactory")]
    Satisfactory,
    #[strum(serialize = "Good")]
    Good,
    #[strum(serialize = "Very Good")]
    VeryGood,
    #[strum(serialize = "Excellent")]
    Excellent,
}

impl Remark {
    /// Bands are half-open and checked highest first; NaN lands in the lowest band.
    pub fn from_cgpa(cgpa: f64) -> Self {
        if cgpa >= 9.0 {
            Self::Excellent
        } else if cgpa >= 8.0 {
            Self::VeryGood
        } else if cgpa >= 7.0 {
            Self::Good
        } else if cgpa >= 6.0 {
            Self::Satisfactory
        } else {
            Self::NeedsImprovement
        }
    }

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Line printed under the CGPA
    pub fn message(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Performance! 🎉",
            Self::VeryGood => "Very Good Performance!",
            Self::Good => "Good, keep improving!",
            Self::Satisfactory => "Satisfactory, but work harder!",
            Self::NeedsImprovement => "Needs improvement. Don't give up!",
        }
    }
}

impl std::fmt::Display for Remark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
