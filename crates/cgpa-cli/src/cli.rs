//! CLI argument definitions for cgpa.

use std::io::IsTerminal;

use cgpa_core::{CalculatorConfig, CreditPolicy, config::limits};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cgpa")]
#[command(about = "Credit-weighted CGPA calculator", version)]
pub struct Args {
    /// Print the result as JSON (prompts go to stderr)
    #[arg(long, global = true)]
    pub json: bool,

    /// Print a per-subject breakdown after the result
    #[arg(long, global = true)]
    pub details: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Which credit-hour values are accepted
    #[arg(
        long,
        global = true,
        value_enum,
        default_value = "non-negative",
        env = "CGPA_CREDIT_POLICY"
    )]
    pub credit_policy: CreditPolicyArg,

    /// Invalid answers allowed per prompt before giving up
    #[arg(
        long,
        global = true,
        default_value_t = limits::DEFAULT_MAX_ATTEMPTS,
        env = "CGPA_MAX_ATTEMPTS"
    )]
    pub max_attempts: u32,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enter subjects interactively and compute the CGPA (default)
    Calculate,
    /// Show the grade-point scale
    Scale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CreditPolicyArg {
    /// Reject negative credit hours
    NonNegative,
    /// Accept any finite credit hours
    Any,
}

impl From<CreditPolicyArg> for CreditPolicy {
    fn from(arg: CreditPolicyArg) -> Self {
        match arg {
            CreditPolicyArg::NonNegative => Self::NonNegative,
            CreditPolicyArg::Any => Self::Any,
        }
    }
}

/// How results are written to the terminal
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    pub json: bool,
    pub details: bool,
    pub color: bool,
}

impl Args {
    pub fn calculator_config(&self) -> CalculatorConfig {
        CalculatorConfig::new()
            .with_credit_policy(self.credit_policy.into())
            .with_max_attempts(self.max_attempts)
    }

    pub fn output_options(&self) -> OutputOptions {
        let color = !self.no_color
            && !self.json
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal();
        OutputOptions {
            json: self.json,
            details: self.details,
            color,
        }
    }
}
