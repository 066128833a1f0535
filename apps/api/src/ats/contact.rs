//! Contact information analysis: four independent 25-point checks.

use crate::ats::report::{SectionReport, CONTACT_BANDS};
use crate::models::resume::ResumeData;

pub const SECTION_NAME: &str = "Contact Information";

pub fn analyze(resume: &ResumeData) -> SectionReport {
    let mut score = 0;
    let mut suggestions = Vec::new();

    if !resume.full_name.trim().is_empty() {
        score += 25;
    } else {
        suggestions.push("Add your full name".to_string());
    }

    let email = resume.email.trim();
    if email.is_empty() {
        suggestions.push("Add your email address".to_string());
    } else if email.contains('@') && email.contains('.') {
        score += 25;
    } else {
        suggestions.push("Use a valid professional email address".to_string());
    }

    if !resume.phone.trim().is_empty() {
        score += 25;
    } else {
        suggestions.push("Add your phone number".to_string());
    }

    if !resume.location.trim().is_empty() {
        score += 25;
    } else {
        suggestions.push("Add your location (city, state/country)".to_string());
    }

    SectionReport::new(SECTION_NAME, score, CONTACT_BANDS, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::report::SectionStatus;

    fn contact(full_name: &str, email: &str, phone: &str, location: &str) -> ResumeData {
        ResumeData {
            full_name: full_name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            location: location.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_complete_contact_scores_100_good() {
        let report = analyze(&contact("Jane Doe", "jane@x.com", "555-1234", "NYC"));
        assert_eq!(report.score, 100);
        assert_eq!(report.status, SectionStatus::Good);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_empty_contact_scores_0_error_with_all_suggestions() {
        let report = analyze(&contact("", "", "", ""));
        assert_eq!(report.score, 0);
        assert_eq!(report.status, SectionStatus::Error);
        assert_eq!(report.suggestions.len(), 4);
        assert_eq!(report.suggestions[0], "Add your full name");
        assert_eq!(report.suggestions[1], "Add your email address");
    }

    #[test]
    fn test_malformed_email_gets_no_points_and_distinct_suggestion() {
        let report = analyze(&contact("Jane Doe", "jane-at-x", "555-1234", "NYC"));
        assert_eq!(report.score, 75);
        assert_eq!(report.status, SectionStatus::Good);
        assert_eq!(
            report.suggestions,
            vec!["Use a valid professional email address".to_string()]
        );
    }

    #[test]
    fn test_email_needs_both_at_and_dot() {
        assert_eq!(analyze(&contact("", "jane@host", "", "")).score, 0);
        assert_eq!(analyze(&contact("", "jane.host", "", "")).score, 0);
        assert_eq!(analyze(&contact("", "jane@host.com", "", "")).score, 25);
    }

    #[test]
    fn test_one_missing_field_is_still_good() {
        // 75 is the Good boundary for this section
        let report = analyze(&contact("Jane Doe", "jane@x.com", "555-1234", ""));
        assert_eq!(report.score, 75);
        assert_eq!(report.status, SectionStatus::Good);
    }

    #[test]
    fn test_two_missing_fields_grade_warning() {
        let report = analyze(&contact("Jane Doe", "jane@x.com", "", ""));
        assert_eq!(report.score, 50);
        assert_eq!(report.status, SectionStatus::Warning);
    }

    #[test]
    fn test_whitespace_only_fields_count_as_missing() {
        let report = analyze(&contact("   ", " ", "\t", " "));
        assert_eq!(report.score, 0);
        assert_eq!(report.suggestions.len(), 4);
    }

    #[test]
    fn test_filling_phone_never_decreases_score() {
        let without = analyze(&contact("Jane Doe", "jane@x.com", "", "NYC"));
        let with = analyze(&contact("Jane Doe", "jane@x.com", "555-1234", "NYC"));
        assert!(with.score >= without.score);
    }
}
