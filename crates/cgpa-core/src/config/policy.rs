use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use crate::error::{Error, Result};

/// Which credit-hour values a session accepts.
///
/// Non-finite values are always rejected. Zero is always accepted so a
/// run can still end with zero total credits.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum CreditPolicy {
    /// Reject negative credit hours
    #[default]
    NonNegative,
    /// Accept any finite value, including negatives
    Any,
}

impl CreditPolicy {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Parse and check a credit-hour token against this policy.
    pub fn parse_credit(&self, token: &str) -> Result<f64> {
        let value: f64 = token
            .trim()
            .parse()
            .map_err(|_| Error::InvalidCredit(token.to_string()))?;
        if !value.is_finite() {
            return Err(Error::InvalidCredit(token.to_string()));
        }
        if *self == Self::NonNegative && value < 0.0 {
            return Err(Error::NegativeCredit(value));
        }
        Ok(value)
    }
}

impl std::fmt::Display for CreditPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_valid_credits() {
        let policy = CreditPolicy::NonNegative;
        assert_eq!(policy.parse_credit("4").unwrap(), 4.0);
        assert_eq!(policy.parse_credit("3.5").unwrap(), 3.5);
        assert_eq!(policy.parse_credit("0").unwrap(), 0.0);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let policy = CreditPolicy::Any;
        assert!(matches!(
            policy.parse_credit("four"),
            Err(Error::InvalidCredit(_))
        ));
        assert!(matches!(policy.parse_credit(""), Err(Error::InvalidCredit(_))));
    }

    #[test]
    fn test_rejects_non_finite() {
        let policy = CreditPolicy::Any;
        assert!(matches!(policy.parse_credit("inf"), Err(Error::InvalidCredit(_))));
        assert!(matches!(policy.parse_credit("NaN"), Err(Error::InvalidCredit(_))));
    }

    #[test]
    fn test_negative_depends_on_policy() {
        assert!(matches!(
            CreditPolicy::NonNegative.parse_credit("-2"),
            Err(Error::NegativeCredit(v)) if v == -2.0
        ));
        assert_eq!(CreditPolicy::Any.parse_credit("-2").unwrap(), -2.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(CreditPolicy::NonNegative.as_str(), "non-negative");
        assert_eq!(CreditPolicy::from_str("any").unwrap(), CreditPolicy::Any);
        assert_eq!(
            CreditPolicy::from_str("non-negative").unwrap(),
            CreditPolicy::NonNegative
        );
    }
}
