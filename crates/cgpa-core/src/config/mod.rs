//! Calculator configuration.
//!
//! - `CalculatorConfig` - validation settings for an interactive session
//! - `CreditPolicy` - which credit-hour values are accepted
//! - Input limit constants

mod policy;

pub use policy::*;

/// Input validation limits.
pub mod limits {
    /// Invalid answers allowed per prompt before the session gives up.
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
}

/// Settings for a calculation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorConfig {
    pub credit_policy: CreditPolicy,
    /// Invalid answers allowed per prompt; 0 is treated as 1.
    pub max_attempts: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            credit_policy: CreditPolicy::default(),
            max_attempts: limits::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credit_policy(mut self, policy: CreditPolicy) -> Self {
        self.credit_policy = policy;
        self
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    pub(crate) fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
