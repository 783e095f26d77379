//! Credit-weighted grade point accumulation.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::grade::{Grade, GradeConversion};
use crate::remark::Remark;
use crate::report::CgpaReport;

/// One subject as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectEntry {
    /// 1-based position in the input
    pub index: usize,
    /// Grade token exactly as typed
    pub token: String,
    pub grade: Option<Grade>,
    pub points: f64,
    pub credits: f64,
}

impl SubjectEntry {
    pub fn new(index: usize, conversion: &GradeConversion, token: &str, credits: f64) -> Self {
        Self {
            index,
            token: token.to_string(),
            grade: conversion.grade(),
            points: conversion.points(),
            credits,
        }
    }

    pub fn weighted_points(&self) -> f64 {
        self.points * self.credits
    }
}

/// Running totals for a single calculation.
#[derive(Debug, Clone, Default)]
pub struct CgpaCalculator {
    weighted_sum: f64,
    total_credits: f64,
    count: usize,
    entries: Vec<SubjectEntry>,
}

impl CgpaCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate a bare (points, credits) pair.
    pub fn add(&mut self, points: f64, credits: f64) {
        self.weighted_sum += points * credits;
        self.total_credits += credits;
        self.count += 1;
    }

    /// Accumulate a subject and keep it for the report.
    pub fn add_entry(&mut self, entry: SubjectEntry) {
        debug!(
            "Subject {}: {} -> {} points x {} credits",
            entry.index, entry.token, entry.points, entry.credits
        );
        self.add(entry.points, entry.credits);
        self.entries.push(entry);
    }

    pub fn weighted_sum(&self) -> f64 {
        self.weighted_sum
    }

    pub fn total_credits(&self) -> f64 {
        self.total_credits
    }

    pub fn subject_count(&self) -> usize {
        self.count
    }

    pub fn entries(&self) -> &[SubjectEntry] {
        &self.entries
    }

    pub fn cgpa(&self) -> Result<f64> {
        if !self.weighted_sum.is_finite() || !self.total_credits.is_finite() {
            return Err(Error::TotalsOutOfRange);
        }
        if self.total_credits == 0.0 {
            return Err(Error::ZeroTotalCredits);
        }
        Ok(self.weighted_sum / self.total_credits)
    }

    pub fn finish(self) -> Result<CgpaReport> {
        let cgpa = self.cgpa()?;
        Ok(CgpaReport {
            subjects: self.entries,
            weighted_sum: self.weighted_sum,
            total_credits: self.total_credits,
            cgpa,
            remark: Remark::from_cgpa(cgpa),
            generated_at: Utc::now(),
        })
    }
}

/// `sum(points * credits) / sum(credits)` over any sequence of pairs.
pub fn weighted_average<I>(pairs: I) -> Result<f64>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut calculator = CgpaCalculator::new();
    for (points, credits) in pairs {
        calculator.add(points, credits);
    }
    calculator.cgpa()
}
