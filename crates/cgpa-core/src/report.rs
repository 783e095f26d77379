//! Final report and its console/JSON renderings

use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};

use crate::calculator::SubjectEntry;
use crate::error::Result;
use crate::remark::Remark;

const RULE: &str = "==============================";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CgpaReport {
    pub subjects: Vec<SubjectEntry>,
    pub weighted_sum: f64,
    pub total_credits: f64,
    pub cgpa: f64,
    pub remark: Remark,
    pub generated_at: DateTime<Utc>,
}

impl CgpaReport {
    /// CGPA rounded for display, e.g. "7.57"
    pub fn cgpa_display(&self) -> String {
        format!("{:.2}", self.cgpa)
    }

    pub fn invalid_grade_count(&self) -> usize {
        self.subjects.iter().filter(|s| s.grade.is_none()).count()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Banner shown before the first prompt
pub fn format_banner() -> String {
    format!("{RULE}\n      CGPA CALCULATOR\n{RULE}")
}

/// Format the result block: framed CGPA line followed by the remark.
///
/// The text is identical with and without color apart from ANSI codes.
pub fn format_report_console(report: &CgpaReport, color: bool) -> String {
    let mut output = String::new();

    let cgpa = report.cgpa_display();
    let cgpa = if color {
        cgpa.bold().to_string()
    } else {
        cgpa
    };
    let rule = if color {
        RULE.dimmed().to_string()
    } else {
        RULE.to_string()
    };

    let _ = writeln!(output, "{}", rule);
    let _ = writeln!(output, "Your CGPA is: {}", cgpa);
    let _ = writeln!(output, "{}", rule);
    let _ = write!(output, "{}", format_remark(report.remark, color));

    output
}

fn format_remark(remark: Remark, color: bool) -> String {
    let message = remark.message();
    if !color {
        return message.to_string();
    }
    match remark {
        Remark::Excellent => message.green().bold().to_string(),
        Remark::VeryGood => message.green().to_string(),
        Remark::Good => message.cyan().to_string(),
        Remark::Satisfactory => message.yellow().to_string(),
        Remark::NeedsImprovement => message.red().to_string(),
    }
}

/// Per-subject breakdown table
pub fn format_subject_table(report: &CgpaReport) -> String {
    let mut output = String::new();
    let _ = writeln!(
        output,
        "{:>3}  {:<6} {:>6} {:>8} {:>9}",
        "#", "GRADE", "POINTS", "CREDITS", "WEIGHTED"
    );
    for subject in &report.subjects {
        let grade = match subject.grade {
            Some(grade) => grade.label().to_string(),
            None => format!("{}?", subject.token),
        };
        let _ = writeln!(
            output,
            "{:>3}  {:<6} {:>6.1} {:>8.2} {:>9.2}",
            subject.index,
            grade,
            subject.points,
            subject.credits,
            subject.weighted_points()
        );
    }
    let _ = write!(
        output,
        "     {:<6} {:>6} {:>8.2} {:>9.2}",
        "TOTAL", "", report.total_credits, report.weighted_sum
    );
    output
}

/// One-line summary for logging
pub fn format_report_summary(report: &CgpaReport) -> String {
    format!(
        "CGPA {} ({}) over {} subjects, {} credits{}",
        report.cgpa_display(),
        report.remark,
        report.subjects.len(),
        report.total_credits,
        match report.invalid_grade_count() {
            0 => String::new(),
            n => format!(" [{} invalid grades]", n),
        }
    )
}
