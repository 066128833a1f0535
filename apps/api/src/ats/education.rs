//! Education analysis.
//!
//! Entries without a degree are skipped. Scoring starts at a 40-point
//! presence base and adds 20 for each school and year found, summed across
//! entries and clamped to 100. The sum is across entries, not an average:
//! two complete entries always saturate the section.

use crate::ats::report::{SectionReport, SectionStatus, DEFAULT_BANDS};
use crate::models::resume::{Education, ResumeData};

pub const SECTION_NAME: &str = "Education";

pub fn analyze(resume: &ResumeData) -> SectionReport {
    let valid: Vec<&Education> = resume
        .education
        .iter()
        .filter(|e| !e.degree.trim().is_empty())
        .collect();

    if valid.is_empty() {
        return SectionReport {
            name: SECTION_NAME.to_string(),
            score: 0,
            status: SectionStatus::Error,
            suggestions: vec!["Add your educational background".to_string()],
        };
    }

    let mut score = 40;
    for entry in &valid {
        if !entry.school.trim().is_empty() {
            score += 20;
        }
        if !entry.year.trim().is_empty() {
            score += 20;
        }
    }

    SectionReport::new(SECTION_NAME, score.min(100), DEFAULT_BANDS, Vec::new())
}
