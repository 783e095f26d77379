//! Interactive calculation session.
//!
//! Drives a `Prompter` through the banner, the subject count and one
//! grade/credit pair per subject, then hands the totals to the calculator.
//! Numeric answers that fail validation are re-prompted up to
//! `CalculatorConfig::max_attempts` times; grade tokens are never rejected.

use tracing::{debug, info};

use crate::calculator::{CgpaCalculator, SubjectEntry};
use crate::config::CalculatorConfig;
use crate::error::{Error, Result};
use crate::grade::{Grade, convert_grade};
use crate::input::Prompter;
use crate::report::{CgpaReport, format_banner, format_report_summary};

const SUBJECT_COUNT_PROMPT: &str = "Enter number of subjects: ";
const CREDIT_PROMPT: &str = "Enter credit hours: ";

pub struct Session {
    config: CalculatorConfig,
}

impl Session {
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    /// Run the whole interaction and return the computed report.
    ///
    /// Fails with `Error::ZeroTotalCredits` when no credit hours were entered.
    pub fn run<P: Prompter>(&self, prompter: &mut P) -> Result<CgpaReport> {
        prompter.display_message(&format_banner())?;

        let count = self.read_with_retry(
            prompter,
            SUBJECT_COUNT_PROMPT,
            "number of subjects",
            parse_subject_count,
        )?;
        debug!("Reading {} subjects", count);

        let grade_prompt = grade_prompt();
        let mut calculator = CgpaCalculator::new();

        for index in 1..=count {
            prompter.display_message(&format!("\nSubject {}:", index))?;

            let token = prompter
                .prompt(&grade_prompt)?
                .ok_or(Error::UnexpectedEof("grade"))?;
            let policy = self.config.credit_policy;
            let credits = self.read_with_retry(prompter, CREDIT_PROMPT, "credit hours", |t| {
                policy.parse_credit(t)
            })?;

            let conversion = convert_grade(&token);
            if let Some(warning) = conversion.warning() {
                debug!("Subject {}: unrecognized grade {:?}", index, token);
                prompter.display_warning(warning)?;
            }

            calculator.add_entry(SubjectEntry::new(index, &conversion, &token, credits));
        }

        let report = calculator.finish()?;
        info!("{}", format_report_summary(&report));
        Ok(report)
    }

    /// Prompt until `parse` accepts an answer or the attempt budget runs out.
    fn read_with_retry<P, T, F>(
        &self,
        prompter: &mut P,
        message: &str,
        field: &'static str,
        parse: F,
    ) -> Result<T>
    where
        P: Prompter,
        F: Fn(&str) -> Result<T>,
    {
        let attempts = self.config.attempts();

        for attempt in 1..=attempts {
            let token = prompter
                .prompt(message)?
                .ok_or(Error::UnexpectedEof(field))?;

            match parse(&token) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!("Rejected {} (attempt {}/{}): {}", field, attempt, attempts, e);
                    if attempt < attempts {
                        prompter.display_warning(&format!("{}. Please try again.", e))?;
                    } else {
                        prompter.display_warning(&e.to_string())?;
                    }
                }
            }
        }

        Err(Error::TooManyAttempts { field, attempts })
    }
}

/// "Enter grade (O, A+, A, B+, B, C, F): "
fn grade_prompt() -> String {
    let labels: Vec<&str> = Grade::ALL.iter().map(|g| g.label()).collect();
    format!("Enter grade ({}): ", labels.join(", "))
}

fn parse_subject_count(token: &str) -> Result<usize> {
    token
        .trim()
        .parse::<usize>()
        .map_err(|_| Error::InvalidSubjectCount(token.to_string()))
}
