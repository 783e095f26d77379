//! # cgpa-core
//!
//! Core library for the CGPA calculator.
//!
//! This crate provides:
//! - The fixed grade-point scale and token conversion
//! - Credit-weighted accumulation and the CGPA ratio
//! - Remark bands for a computed CGPA
//! - The interactive input session behind a `Prompter` seam
//! - Report rendering for the console and JSON

pub mod calculator;
pub mod config;
pub mod error;
pub mod grade;
pub mod input;
pub mod remark;
pub mod report;
pub mod session;

pub use calculator::{CgpaCalculator, SubjectEntry, weighted_average};
pub use config::{CalculatorConfig, CreditPolicy};
pub use error::{Error, Result};
pub use grade::{Grade, GradeConversion, INVALID_GRADE_WARNING, convert_grade, grade_to_point};
pub use input::{ConsolePrompter, Prompter, TokenReader};
pub use remark::Remark;
pub use report::{
    CgpaReport, format_banner, format_report_console, format_report_summary, format_subject_table,
};
pub use session::Session;
