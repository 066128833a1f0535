//! Work experience analysis.
//!
//! Entries without a title are wizard placeholders and are skipped. Each
//! remaining entry earns field-presence and description-quality points; the
//! section score is a 20-point presence base plus the per-entry average
//! capped at 60. Description suggestions are emitted once, driven by the
//! first entry only, so the list stays short on long histories.

use crate::ats::patterns::{has_action_verb, has_quantified_metric};
use crate::ats::report::{SectionReport, SectionStatus, DEFAULT_BANDS};
use crate::models::resume::{Experience, ResumeData};

pub const SECTION_NAME: &str = "Work Experience";

const BASE_SCORE: f64 = 20.0;
const ENTRY_CAP: f64 = 60.0;
const MIN_DESCRIPTION_WORDS: usize = 20;

pub fn analyze(resume: &ResumeData) -> SectionReport {
    let valid: Vec<&Experience> = resume
        .experiences
        .iter()
        .filter(|e| !e.title.trim().is_empty())
        .collect();

    if valid.is_empty() {
        return SectionReport {
            name: SECTION_NAME.to_string(),
            score: 0,
            status: SectionStatus::Error,
            suggestions: vec!["Add at least one work experience entry".to_string()],
        };
    }

    let mut suggestions = Vec::new();
    let mut entry_total = 0u32;

    for (index, entry) in valid.iter().enumerate() {
        entry_total += score_entry(entry, index == 0, &mut suggestions);
    }

    let average = f64::from(entry_total) / valid.len() as f64;
    let score = (BASE_SCORE + average.min(ENTRY_CAP)).round() as u32;

    if valid.len() < 2 {
        suggestions.push("Consider adding more work experience entries".to_string());
    }

    SectionReport::new(SECTION_NAME, score, DEFAULT_BANDS, suggestions)
}

/// Scores one entry. `first` gates suggestion emission: later entries score
/// identically but stay silent.
fn score_entry(entry: &Experience, first: bool, suggestions: &mut Vec<String>) -> u32 {
    let mut score = 0;

    if !entry.title.trim().is_empty() {
        score += 10;
    }
    if !entry.company.trim().is_empty() {
        score += 10;
    }
    if !entry.duration.trim().is_empty() {
        score += 10;
    }

    let description = entry.description.trim();
    if description.is_empty() {
        if first {
            suggestions.push("Add descriptions to your work experiences".to_string());
        }
        return score;
    }

    if has_action_verb(description) {
        score += 15;
    } else if first {
        suggestions.push(
            "Start descriptions with action verbs (led, developed, implemented)".to_string(),
        );
    }

    if has_quantified_metric(description) {
        score += 15;
    } else if first {
        suggestions
            .push("Include quantifiable results (e.g., increased sales by 20%)".to_string());
    }

    if description.split_whitespace().count() >= MIN_DESCRIPTION_WORDS {
        score += 10;
    } else if first {
        suggestions.push(format!(
            "Add more detail to your descriptions (aim for {MIN_DESCRIPTION_WORDS}+ words)"
        ));
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(title: &str, company: &str, duration: &str, description: &str) -> Experience {
        Experience {
            title: title.to_string(),
            company: company.to_string(),
            duration: duration.to_string(),
            description: description.to_string(),
        }
    }

    fn with_experiences(experiences: Vec<Experience>) -> ResumeData {
        ResumeData {
            experiences,
            ..Default::default()
        }
    }

    /// A description that passes all three quality checks: action verb,
    /// quantified metric, and at least 20 words.
    fn strong_description() -> &'static str {
        "Led a team of 5 engineers and increased deployment speed by 40% \
         while migrating the continuous delivery pipeline to a new platform \
         across every product group"
    }

    #[test]
    fn test_no_valid_entries_scores_0_error() {
        let report = analyze(&with_experiences(vec![entry("", "Acme", "2020", "did work")]));
        assert_eq!(report.score, 0);
        assert_eq!(report.status, SectionStatus::Error);
        assert_eq!(
            report.suggestions,
            vec!["Add at least one work experience entry".to_string()]
        );
    }

    #[test]
    fn test_empty_experience_list_scores_0_error() {
        let report = analyze(&with_experiences(vec![]));
        assert_eq!(report.score, 0);
        assert_eq!(report.status, SectionStatus::Error);
    }

    #[test]
    fn test_single_strong_entry_scores_80() {
        let description = strong_description();
        assert!(description.split_whitespace().count() >= 20);

        let report = analyze(&with_experiences(vec![entry(
            "Engineer",
            "Acme",
            "2020-2022",
            description,
        )]));
        // entry: 10+10+10+15+15+10 = 70, capped to 60, plus base 20
        assert_eq!(report.score, 80);
        assert_eq!(report.status, SectionStatus::Good);
        // score unaffected by the lone more-entries suggestion
        assert_eq!(
            report.suggestions,
            vec!["Consider adding more work experience entries".to_string()]
        );
    }

    #[test]
    fn test_title_only_entry() {
        let report = analyze(&with_experiences(vec![entry("Engineer", "", "", "")]));
        // entry: 10, base 20, plus rounding of 30.0
        assert_eq!(report.score, 30);
        assert_eq!(report.status, SectionStatus::Error);
        assert!(report
            .suggestions
            .contains(&"Add descriptions to your work experiences".to_string()));
    }

    #[test]
    fn test_weak_description_triggers_all_three_suggestions() {
        let report = analyze(&with_experiences(vec![entry(
            "Engineer",
            "Acme",
            "2020",
            "responsible for stuff",
        )]));
        let text = report.suggestions.join("\n");
        assert!(text.contains("action verbs"));
        assert!(text.contains("quantifiable results"));
        assert!(text.contains("20+ words"));
    }

    #[test]
    fn test_only_first_entry_drives_description_suggestions() {
        let strong = entry("Engineer", "Acme", "2020-2022", strong_description());
        let weak = entry("Intern", "", "", "");
        let report = analyze(&with_experiences(vec![strong, weak]));
        // second entry's empty description does not add a suggestion
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_two_entries_average() {
        let strong = entry("Engineer", "Acme", "2020-2022", strong_description());
        let weak = entry("Intern", "", "", "");
        let report = analyze(&with_experiences(vec![strong, weak]));
        // (70 + 10) / 2 = 40, plus base 20
        assert_eq!(report.score, 60);
        assert_eq!(report.status, SectionStatus::Warning);
    }

    #[test]
    fn test_single_entry_appends_more_entries_suggestion() {
        let report = analyze(&with_experiences(vec![entry("Engineer", "", "", "")]));
        assert!(report
            .suggestions
            .contains(&"Consider adding more work experience entries".to_string()));

        let two = analyze(&with_experiences(vec![
            entry("Engineer", "", "", ""),
            entry("Manager", "", "", ""),
        ]));
        assert!(!two
            .suggestions
            .contains(&"Consider adding more work experience entries".to_string()));
    }

    #[test]
    fn test_fractional_average_rounds_half_up() {
        // entries score 25 (title + action verb) and 10 (title only):
        // average 17.5, so the section lands on 37.5 and rounds to 38
        let report = analyze(&with_experiences(vec![
            entry("Engineer", "", "", "built the internal deploy tool"),
            entry("Intern", "", "", ""),
        ]));
        assert_eq!(report.score, 38);
    }

    #[test]
    fn test_filling_company_never_decreases_score() {
        let without = analyze(&with_experiences(vec![entry("Engineer", "", "2020", "")]));
        let with = analyze(&with_experiences(vec![entry("Engineer", "Acme", "2020", "")]));
        assert!(with.score >= without.score);
    }
}
