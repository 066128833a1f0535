//! Content generation behind a pluggable, trait-based backend.
//!
//! `AppState` holds an `Arc<dyn ContentGenerator>`; the default backend
//! proxies Claude through `llm_client`. The trait seam keeps handlers
//! independent of the LLM plumbing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompts::{
    COVER_LETTER_PROMPT_TEMPLATE, COVER_LETTER_SYSTEM, SKILLS_PROMPT_TEMPLATE, SKILLS_SYSTEM,
    SUMMARY_PROMPT_TEMPLATE, SUMMARY_SYSTEM,
};
use crate::llm_client::LlmClient;
use crate::models::resume::ResumeData;

/// Skill lists suggested for a target role, grouped the way the wizard's
/// skills step is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillSuggestions {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// The content generation backend. Implement this to swap backends without
/// touching the endpoints or handlers.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Generates a professional summary for the given target role.
    async fn summary(
        &self,
        job_title: &str,
        years_of_experience: Option<u32>,
        skills: &str,
    ) -> Result<String, AppError>;

    /// Generates a cover letter grounded in the resume snapshot.
    async fn cover_letter(
        &self,
        resume: &ResumeData,
        company: &str,
        job_title: &str,
        job_description: Option<&str>,
    ) -> Result<String, AppError>;

    /// Suggests technical and soft skills for the given target role.
    async fn skill_suggestions(&self, job_title: &str) -> Result<SkillSuggestions, AppError>;
}

/// Default backend: proxies Claude via the shared `LlmClient`.
pub struct LlmContentGenerator(pub LlmClient);

#[async_trait]
impl ContentGenerator for LlmContentGenerator {
    async fn summary(
        &self,
        job_title: &str,
        years_of_experience: Option<u32>,
        skills: &str,
    ) -> Result<String, AppError> {
        let prompt = build_summary_prompt(job_title, years_of_experience, skills);
        self.0
            .call_text(&prompt, SUMMARY_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("summary generation failed: {e}")))
    }

    async fn cover_letter(
        &self,
        resume: &ResumeData,
        company: &str,
        job_title: &str,
        job_description: Option<&str>,
    ) -> Result<String, AppError> {
        let prompt = build_cover_letter_prompt(resume, company, job_title, job_description)?;
        self.0
            .call_text(&prompt, COVER_LETTER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("cover letter generation failed: {e}")))
    }

    async fn skill_suggestions(&self, job_title: &str) -> Result<SkillSuggestions, AppError> {
        let prompt = build_skills_prompt(job_title);
        self.0
            .call_json::<SkillSuggestions>(&prompt, SKILLS_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("skill suggestion failed: {e}")))
    }
}

fn build_summary_prompt(
    job_title: &str,
    years_of_experience: Option<u32>,
    skills: &str,
) -> String {
    let experience_line = match years_of_experience {
        Some(years) => format!("Years of experience: {years}"),
        None => String::new(),
    };
    SUMMARY_PROMPT_TEMPLATE
        .replace("{job_title}", job_title)
        .replace("{experience_line}", &experience_line)
        .replace("{skills}", skills)
}

fn build_cover_letter_prompt(
    resume: &ResumeData,
    company: &str,
    job_title: &str,
    job_description: Option<&str>,
) -> Result<String, AppError> {
    let resume_json = serde_json::to_string_pretty(resume)
        .map_err(|e| AppError::Internal(e.into()))?;
    Ok(COVER_LETTER_PROMPT_TEMPLATE
        .replace("{company}", company)
        .replace("{job_title}", job_title)
        .replace("{job_description}", job_description.unwrap_or(""))
        .replace("{resume_json}", &resume_json))
}

fn build_skills_prompt(job_title: &str) -> String {
    SKILLS_PROMPT_TEMPLATE.replace("{job_title}", job_title)
}
