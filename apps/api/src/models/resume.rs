//! Resume data models.
//!
//! Wire structs use camelCase because the snapshot payload is assembled by
//! the JS wizard and stored verbatim. Every field defaults to empty: a
//! half-filled wizard step is a valid snapshot, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A single work experience entry. An entry counts as filled in only when
/// `title` is non-empty; the wizard keeps blank placeholder rows around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
}

/// A single education entry. Counts as filled in only when `degree` is
/// non-empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub year: String,
}

/// Free-text skill lists, each a comma- or semicolon-separated string as
/// typed into the wizard.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SkillGroups {
    pub technical: String,
    pub soft: String,
    pub languages: String,
}

/// Full resume snapshot as assembled by the wizard steps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: SkillGroups,
}

/// Persisted resume snapshot row. `data` holds the wire `ResumeData` as
/// JSONB; scores are always recomputed from it, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub data: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
