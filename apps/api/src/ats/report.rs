use serde::{Deserialize, Serialize};

/// Traffic-light classification derived purely from a section score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionStatus {
    Good,
    Warning,
    Error,
}

/// Score bands mapping a 0-100 score to a status. Scores at or above `good`
/// grade Good, at or above `warning` grade Warning, everything below Error.
#[derive(Debug, Clone, Copy)]
pub struct StatusBands {
    pub good: u32,
    pub warning: u32,
}

/// Bands used by every section except contact information.
pub const DEFAULT_BANDS: StatusBands = StatusBands {
    good: 70,
    warning: 40,
};

/// Contact information grades on a stricter scale: each of its four checks
/// is worth 25, so Good means at most one check failed.
pub const CONTACT_BANDS: StatusBands = StatusBands {
    good: 75,
    warning: 50,
};

impl SectionStatus {
    pub fn grade(score: u32, bands: StatusBands) -> Self {
        if score >= bands.good {
            SectionStatus::Good
        } else if score >= bands.warning {
            SectionStatus::Warning
        } else {
            SectionStatus::Error
        }
    }
}

/// Scored outcome for a single resume section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionReport {
    pub name: String,
    pub score: u32,
    pub status: SectionStatus,
    pub suggestions: Vec<String>,
}

impl SectionReport {
    pub fn new(
        name: &str,
        score: u32,
        bands: StatusBands,
        suggestions: Vec<String>,
    ) -> Self {
        Self {
            name: name.to_string(),
            score,
            status: SectionStatus::grade(score, bands),
            suggestions,
        }
    }
}

/// Full ATS compatibility report: composite score, per-section breakdown in
/// fixed order, and a headline assessment with top suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub score: u32,
    pub sections: Vec<SectionReport>,
    pub overall_suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands_boundary_at_70() {
        assert_eq!(SectionStatus::grade(70, DEFAULT_BANDS), SectionStatus::Good);
        assert_eq!(
            SectionStatus::grade(69, DEFAULT_BANDS),
            SectionStatus::Warning
        );
    }

    #[test]
    fn test_default_bands_boundary_at_40() {
        assert_eq!(
            SectionStatus::grade(40, DEFAULT_BANDS),
            SectionStatus::Warning
        );
        assert_eq!(SectionStatus::grade(39, DEFAULT_BANDS), SectionStatus::Error);
    }

    #[test]
    fn test_contact_bands_boundary_at_75() {
        assert_eq!(SectionStatus::grade(75, CONTACT_BANDS), SectionStatus::Good);
        assert_eq!(
            SectionStatus::grade(74, CONTACT_BANDS),
            SectionStatus::Warning
        );
    }

    #[test]
    fn test_contact_bands_boundary_at_50() {
        assert_eq!(
            SectionStatus::grade(50, CONTACT_BANDS),
            SectionStatus::Warning
        );
        assert_eq!(SectionStatus::grade(49, CONTACT_BANDS), SectionStatus::Error);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&SectionStatus::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = AtsReport {
            score: 50,
            sections: vec![],
            overall_suggestions: vec!["headline".to_string()],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("overallSuggestions").is_some());
    }
}
