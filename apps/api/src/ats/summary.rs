//! Professional summary analysis: length band, seniority keywords, and
//! quantified achievements.

use crate::ats::patterns::{has_quantified_metric, SUMMARY_KEYWORDS};
use crate::ats::report::{SectionReport, SectionStatus, DEFAULT_BANDS};
use crate::models::resume::ResumeData;

pub const SECTION_NAME: &str = "Professional Summary";

const MIN_WORDS: usize = 30;
const MAX_WORDS: usize = 100;

pub fn analyze(resume: &ResumeData) -> SectionReport {
    let summary = resume.summary.trim();

    if summary.is_empty() {
        return SectionReport {
            name: SECTION_NAME.to_string(),
            score: 0,
            status: SectionStatus::Error,
            suggestions: vec![
                "Add a professional summary - this is highly valued by ATS systems".to_string(),
            ],
        };
    }

    let mut score = 0;
    let mut suggestions = Vec::new();

    let word_count = summary.split_whitespace().count();
    if (MIN_WORDS..=MAX_WORDS).contains(&word_count) {
        score += 40;
    } else if word_count < MIN_WORDS {
        score += 20;
        suggestions.push(format!(
            "Expand your summary to {MIN_WORDS}-{MAX_WORDS} words for better impact"
        ));
    } else {
        score += 20;
        suggestions.push(format!("Shorten your summary to under {MAX_WORDS} words"));
    }

    if SUMMARY_KEYWORDS.is_match(summary) {
        score += 30;
    } else {
        suggestions.push(
            "Include industry keywords and your years of experience in the summary".to_string(),
        );
    }

    if has_quantified_metric(summary) {
        score += 30;
    } else {
        suggestions.push(
            "Add quantifiable achievements (percentages, amounts, team sizes)".to_string(),
        );
    }

    SectionReport::new(SECTION_NAME, score, DEFAULT_BANDS, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_summary(summary: &str) -> ResumeData {
        ResumeData {
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    /// Summary in the 30-100 word band carrying "5 years of experience"
    /// and "increased revenue 20%": every check passes.
    fn strong_summary() -> String {
        let filler = "building and operating payment platforms for global retail merchants \
                      across three continents with a focus on reliability and developer \
                      productivity at scale every single day";
        format!(
            "Professional engineer with 5 years of experience {filler} who increased revenue 20% \
             while leading the checkout group"
        )
    }

    #[test]
    fn test_empty_summary_scores_0_error() {
        let report = analyze(&with_summary(""));
        assert_eq!(report.score, 0);
        assert_eq!(report.status, SectionStatus::Error);
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_strong_summary_scores_100_good() {
        let summary = strong_summary();
        let word_count = summary.split_whitespace().count();
        assert!((30..=100).contains(&word_count), "fixture has {word_count} words");

        let report = analyze(&with_summary(&summary));
        assert_eq!(report.score, 100);
        assert_eq!(report.status, SectionStatus::Good);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_short_summary_gets_partial_length_credit() {
        // keywords and metric present, but only 7 words
        let report = analyze(&with_summary("Professional with 5 years experience, improved 3"));
        assert_eq!(report.score, 20 + 30 + 30);
        assert_eq!(report.status, SectionStatus::Good);
        assert!(report.suggestions[0].starts_with("Expand your summary"));
    }

    #[test]
    fn test_long_summary_gets_partial_length_credit() {
        let long = "word ".repeat(101) + "professional with 5 years";
        let report = analyze(&with_summary(&long));
        assert_eq!(report.score, 20 + 30 + 30);
        assert!(report.suggestions[0].starts_with("Shorten your summary"));
    }

    #[test]
    fn test_word_count_boundaries() {
        // exactly 30 and exactly 100 words land in the full-credit band
        let thirty = "alpha ".repeat(30);
        let hundred = "alpha ".repeat(100);
        let over = "alpha ".repeat(101);
        assert_eq!(analyze(&with_summary(&thirty)).score, 40);
        assert_eq!(analyze(&with_summary(&hundred)).score, 40);
        assert_eq!(analyze(&with_summary(&over)).score, 20);
    }

    #[test]
    fn test_missing_keywords_suggestion() {
        let report = analyze(&with_summary("I build reliable systems with 40% less toil"));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("industry keywords")));
    }

    #[test]
    fn test_missing_metrics_suggestion() {
        let report = analyze(&with_summary("Skilled professional in backend work"));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("quantifiable achievements")));
    }

    #[test]
    fn test_status_warning_band() {
        // only keyword credit on a short summary: 20 + 30 = 50
        let report = analyze(&with_summary("Skilled backend developer"));
        assert_eq!(report.score, 50);
        assert_eq!(report.status, SectionStatus::Warning);
    }
}
