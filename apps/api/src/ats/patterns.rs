//! Shared pattern rubric: regex detectors for measurable achievements and
//! the action-verb vocabulary ATS parsers reward.

use std::sync::LazyLock;

use regex::Regex;

/// Keywords a summary should carry to signal seniority to ATS filters.
pub static SUMMARY_KEYWORDS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)experience|skilled|professional|expertise|years")
        .expect("summary keyword pattern compiles")
});

/// Detectors for quantified, measurable phrasing. A text counts as
/// quantified if any single detector matches.
static QUANTIFIED_METRICS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // percentage: "40%"
        r"\d+%",
        // dollar amount: "$1,200,000"
        r"\$[\d,]+",
        // count of people or deliverables: "500+ users", "3 teams"
        r"(?i)\d+\+?\s*(users|customers|clients|projects|teams|members)",
        // duration: "5 years", "18 months"
        r"(?i)\d+\s*(years?|months?)",
        // outcome verb eventually followed by a number
        r"(?i)(increased|decreased|improved|reduced).*\d",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("metric pattern compiles"))
    .collect()
});

/// Action verbs recognized in experience descriptions. Matched as
/// case-insensitive substrings, so inflected forms like "designing" count.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "accomplished",
    "administered",
    "analyzed",
    "built",
    "collaborated",
    "conducted",
    "created",
    "delivered",
    "designed",
    "developed",
    "directed",
    "established",
    "executed",
    "generated",
    "implemented",
    "improved",
    "increased",
    "launched",
    "led",
    "managed",
    "negotiated",
    "optimized",
    "organized",
    "oversaw",
    "planned",
    "produced",
    "reduced",
    "resolved",
    "spearheaded",
    "streamlined",
    "supervised",
    "trained",
    "transformed",
];

/// True if the text contains at least one quantified metric phrase.
pub fn has_quantified_metric(text: &str) -> bool {
    QUANTIFIED_METRICS.iter().any(|re| re.is_match(text))
}

/// True if the text contains at least one recognized action verb.
pub fn has_action_verb(text: &str) -> bool {
    let lower = text.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}
