//! Skills analysis: technical list depth plus soft-skill and language
//! presence.

use crate::ats::report::{SectionReport, DEFAULT_BANDS};
use crate::models::resume::ResumeData;

pub const SECTION_NAME: &str = "Skills";

/// Splits a free-text skill list on commas and semicolons, dropping blanks.
fn tokenize(list: &str) -> Vec<&str> {
    list.split([',', ';'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

pub fn analyze(resume: &ResumeData) -> SectionReport {
    let mut score = 0;
    let mut suggestions = Vec::new();

    let technical_count = tokenize(&resume.skills.technical).len();
    if technical_count >= 5 {
        score += 40;
    } else if technical_count >= 3 {
        score += 25;
        suggestions.push("Add more technical skills (aim for 5-10 relevant skills)".to_string());
    } else if technical_count >= 1 {
        score += 15;
        suggestions
            .push("List at least 5 technical skills relevant to your target role".to_string());
    } else {
        suggestions.push("Add technical skills to your resume".to_string());
    }

    if !resume.skills.soft.trim().is_empty() {
        score += 30;
    } else {
        suggestions.push(
            "Include soft skills (e.g., leadership, communication, teamwork)".to_string(),
        );
    }

    if !resume.skills.languages.trim().is_empty() {
        score += 30;
    } else {
        suggestions.push("Add language proficiencies if applicable".to_string());
    }

    SectionReport::new(SECTION_NAME, score, DEFAULT_BANDS, suggestions)
}
