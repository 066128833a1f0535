//! ATS compatibility scoring.
//!
//! A pure, synchronous rubric over a resume snapshot: five section analyzers
//! run in fixed order, the composite score is the rounded mean of their
//! scores, and suggestions never feed back into scoring. Identical input
//! always produces an identical report, so callers may re-score on every
//! keystroke without coordination.

pub mod contact;
pub mod education;
pub mod experience;
pub mod handlers;
pub mod patterns;
pub mod report;
pub mod skills;
pub mod summary;

use crate::models::resume::ResumeData;

use self::report::{AtsReport, SectionReport, SectionStatus};

/// Headline suggestions drawn from error sections are capped at this many.
const MAX_OVERALL_SUGGESTIONS: usize = 3;

/// Scores a resume snapshot against the ATS rubric.
pub fn analyze_resume(resume: &ResumeData) -> AtsReport {
    let sections = vec![
        contact::analyze(resume),
        summary::analyze(resume),
        experience::analyze(resume),
        education::analyze(resume),
        skills::analyze(resume),
    ];

    let total: u32 = sections.iter().map(|s| s.score).sum();
    let score = (f64::from(total) / sections.len() as f64).round() as u32;

    let overall_suggestions = build_overall_suggestions(score, &sections);

    AtsReport {
        score,
        sections,
        overall_suggestions,
    }
}

/// Headline assessment followed by up to three suggestions pulled, in
/// section order, from sections that graded Error.
fn build_overall_suggestions(score: u32, sections: &[SectionReport]) -> Vec<String> {
    let headline = if score < 50 {
        "Your resume needs significant improvements to pass ATS screening."
    } else if score < 70 {
        "Your resume is good but could use optimization for better ATS compatibility."
    } else {
        "Your resume is well-optimized for ATS systems."
    };

    let mut suggestions = vec![headline.to_string()];
    suggestions.extend(
        sections
            .iter()
            .filter(|s| s.status == SectionStatus::Error)
            .flat_map(|s| s.suggestions.iter().cloned())
            .take(MAX_OVERALL_SUGGESTIONS),
    );
    suggestions
}
