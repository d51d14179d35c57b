//! Resume enhancer — pluggable backend behind the enhancement endpoints.
//!
//! `DemoEnhancer` runs the local heuristics. `LlmEnhancer` asks the model and
//! falls back to a safe value on any failure. Neither ever returns an error.
//!
//! `AppState` holds an `Arc<dyn ResumeEnhancer>`, chosen at startup by `build_enhancer`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::Config;
use crate::enhancement::prompts::{
    CV_OPTIONS, CV_PROMPT_TEMPLATE, SKILLS_OPTIONS, SKILLS_PROMPT_TEMPLATE, SUMMARY_OPTIONS,
    SUMMARY_PROMPT_TEMPLATE, TIPS_OPTIONS, TIPS_PROMPT_TEMPLATE,
    render_prompt,
};
use crate::enhancement::skills::{SkillEntry, SkillPriority};
use crate::enhancement::tips::{fallback_tips, pad_tips};
use crate::enhancement::vocabulary::TIP_COUNT;
use crate::enhancement::{cv_optimizer, skills, summary, tips};
use crate::llm_client::prompts::HR_ASSISTANT_SYSTEM;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnhancerMode {
    Demo,
    Live,
}

#[async_trait]
pub trait ResumeEnhancer: Send + Sync {
    fn mode(&self) -> EnhancerMode;

    async fn enhance_summary(&self, basic_summary: &str, job_description: &str) -> String;

    async fn prioritize_skills(&self, skills: &[String], job_description: &str) -> Vec<SkillEntry>;

    /// Always exactly five tips.
    async fn generate_tips(&self, cv_content: &str, job_description: &str) -> Vec<String>;

    async fn optimize_cv(&self, cv_content: &str, job_description: &str) -> String;
}

/// Picks the live backend when a usable API key is configured, demo otherwise.
pub fn build_enhancer(config: &Config) -> Result<Arc<dyn ResumeEnhancer>, LlmError> {
    match config.live_api_key() {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.to_string(), config.openai_base_url.clone())?;
            Ok(Arc::new(LlmEnhancer::new(llm)))
        }
        None => Ok(Arc::new(DemoEnhancer)),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// DemoEnhancer
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic heuristics, no network.
pub struct DemoEnhancer;

#[async_trait]
impl ResumeEnhancer for DemoEnhancer {
    fn mode(&self) -> EnhancerMode {
        EnhancerMode::Demo
    }

    async fn enhance_summary(&self, basic_summary: &str, job_description: &str) -> String {
        info!("Enhancing resume summary (demo)");
        summary::synthesize_summary(basic_summary, job_description)
    }

    async fn prioritize_skills(&self, skills: &[String], job_description: &str) -> Vec<SkillEntry> {
        info!("Prioritizing {} skills (demo)", skills.len());
        skills::prioritize_skills(skills, job_description)
    }

    async fn generate_tips(&self, cv_content: &str, job_description: &str) -> Vec<String> {
        info!("Generating pro tips (demo)");
        tips::generate_tips(cv_content, job_description)
    }

    async fn optimize_cv(&self, cv_content: &str, job_description: &str) -> String {
        info!("Optimizing CV content (demo)");
        cv_optimizer::optimize_cv(cv_content, job_description)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEnhancer
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SkillsPayload {
    #[serde(default)]
    skills: Vec<SkillEntry>,
}

/// Model-backed enhancer. Failures fall back: summary and CV to their input,
/// skills to medium priority, tips to the fixed list.
pub struct LlmEnhancer {
    llm: LlmClient,
}

impl LlmEnhancer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn try_enhance_summary(
        &self,
        basic_summary: &str,
        job_description: &str,
    ) -> Result<String, LlmError> {
        let prompt = render_prompt(
            SUMMARY_PROMPT_TEMPLATE,
            &[
                ("basic_summary", basic_summary),
                ("job_description", job_description),
            ],
        );
        self.llm
            .call_text(&prompt, HR_ASSISTANT_SYSTEM, SUMMARY_OPTIONS)
            .await
    }

    async fn try_prioritize_skills(
        &self,
        skills: &[String],
        job_description: &str,
    ) -> Result<Vec<SkillEntry>, LlmError> {
        let skills_json = serde_json::to_string(skills)?;
        let prompt = render_prompt(
            SKILLS_PROMPT_TEMPLATE,
            &[
                ("skills_json", &skills_json),
                ("job_description", job_description),
            ],
        );
        let payload: SkillsPayload = self
            .llm
            .call_json(&prompt, HR_ASSISTANT_SYSTEM, SKILLS_OPTIONS)
            .await?;
        Ok(payload.skills)
    }

    async fn try_generate_tips(
        &self,
        cv_content: &str,
        job_description: &str,
    ) -> Result<Vec<String>, LlmError> {
        let prompt = render_prompt(
            TIPS_PROMPT_TEMPLATE,
            &[("job_description", job_description), ("cv_content", cv_content)],
        );
        let text = self
            .llm
            .call_text(&prompt, HR_ASSISTANT_SYSTEM, TIPS_OPTIONS)
            .await?;
        Ok(pad_tips(parse_tip_lines(&text)))
    }

    async fn try_optimize_cv(
        &self,
        cv_content: &str,
        job_description: &str,
    ) -> Result<String, LlmError> {
        let prompt = render_prompt(
            CV_PROMPT_TEMPLATE,
            &[("job_description", job_description), ("cv_content", cv_content)],
        );
        self.llm
            .call_text(&prompt, HR_ASSISTANT_SYSTEM, CV_OPTIONS)
            .await
    }
}

#[async_trait]
impl ResumeEnhancer for LlmEnhancer {
    fn mode(&self) -> EnhancerMode {
        EnhancerMode::Live
    }

    async fn enhance_summary(&self, basic_summary: &str, job_description: &str) -> String {
        info!("Enhancing resume summary");
        self.try_enhance_summary(basic_summary, job_description)
            .await
            .unwrap_or_else(|e| {
                warn!("Error enhancing resume summary: {e}");
                basic_summary.to_string()
            })
    }

    async fn prioritize_skills(&self, skills: &[String], job_description: &str) -> Vec<SkillEntry> {
        info!("Prioritizing {} skills", skills.len());
        self.try_prioritize_skills(skills, job_description)
            .await
            .unwrap_or_else(|e| {
                warn!("Error prioritizing skills: {e}");
                skills
                    .iter()
                    .map(|s| SkillEntry::new(s.clone(), SkillPriority::Medium))
                    .collect()
            })
    }

    async fn generate_tips(&self, cv_content: &str, job_description: &str) -> Vec<String> {
        info!("Generating pro tips");
        self.try_generate_tips(cv_content, job_description)
            .await
            .unwrap_or_else(|e| {
                warn!("Error generating resume pro tips: {e}");
                fallback_tips()
            })
    }

    async fn optimize_cv(&self, cv_content: &str, job_description: &str) -> String {
        info!("Optimizing CV content");
        self.try_optimize_cv(cv_content, job_description)
            .await
            .unwrap_or_else(|e| {
                warn!("Error optimizing CV content: {e}");
                cv_content.to_string()
            })
    }
}

/// Splits a numbered/bulleted list into tips, dropping list markers and blank lines.
fn parse_tip_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim_start_matches(|c: char| {
                c.is_ascii_digit() || c.is_whitespace() || matches!(c, '.' | ')' | '-' | '*')
            })
            .trim()
        })
        .filter(|tip| !tip.is_empty())
        .take(TIP_COUNT)
        .map(str::to_string)
        .collect()
}
