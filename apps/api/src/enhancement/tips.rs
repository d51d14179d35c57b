//! Pro-tip generator — targeted resume advice from a CV / JD comparison.
//!
//! Always returns exactly `TIP_COUNT` tips. Targeted tips come first, in rule
//! order; generic tips pad the remainder.

use regex::Regex;
use tracing::warn;

use crate::enhancement::extraction::{contains_whole_word, join_leading, TermExtractor};
use crate::enhancement::vocabulary::{
    ACTION_VERB_PATTERN, FALLBACK_TIPS, GENERAL_TIPS, QUANTIFICATION_PATTERN,
    SUMMARY_HEADING_PATTERN, TIP_COUNT, TIP_KEYWORD_FALLBACK, TIP_SKILL_PATTERNS,
    TIP_SUMMARY_FALLBACK,
};
use crate::enhancement::EnhanceError;

/// What the tip rules look at. Computed once per call.
struct TipContext {
    job_skills: Vec<String>,
    missing_skills: Vec<String>,
    has_summary: bool,
    has_metrics: bool,
    has_action_verbs: bool,
}

impl TipContext {
    fn analyze(cv_content: &str, job_description: &str) -> Result<Self, EnhanceError> {
        let job_skills = TermExtractor::new(TIP_SKILL_PATTERNS)?.extract(job_description);

        let mut missing_skills = Vec::new();
        for skill in &job_skills {
            if !contains_whole_word(cv_content, skill)? {
                missing_skills.push(skill.clone());
            }
        }

        Ok(Self {
            job_skills,
            missing_skills,
            has_summary: Regex::new(SUMMARY_HEADING_PATTERN)?.is_match(cv_content),
            has_metrics: Regex::new(QUANTIFICATION_PATTERN)?.is_match(cv_content),
            has_action_verbs: Regex::new(ACTION_VERB_PATTERN)?.is_match(cv_content),
        })
    }
}

type TipRule = fn(&TipContext) -> Option<String>;

const TIP_RULES: &[TipRule] = &[
    summary_tip,
    missing_skills_tip,
    quantify_tip,
    action_verb_tip,
    keyword_tip,
];

fn summary_tip(ctx: &TipContext) -> Option<String> {
    (!ctx.has_summary).then(|| {
        format!(
            "Add a professional summary at the top of your resume highlighting your expertise in {}",
            join_leading(&ctx.job_skills, 3, TIP_SUMMARY_FALLBACK)
        )
    })
}

fn missing_skills_tip(ctx: &TipContext) -> Option<String> {
    (!ctx.missing_skills.is_empty()).then(|| {
        format!(
            "Add experience with {} to your skills section as these are specifically mentioned in the job description",
            join_leading(&ctx.missing_skills, 3, "")
        )
    })
}

fn quantify_tip(ctx: &TipContext) -> Option<String> {
    (!ctx.has_metrics).then(|| {
        "Quantify your achievements with metrics (e.g., 'Improved application performance by 30%' \
         instead of 'Improved application performance')"
            .to_string()
    })
}

fn action_verb_tip(ctx: &TipContext) -> Option<String> {
    (!ctx.has_action_verbs).then(|| {
        "Start your experience bullet points with strong action verbs like 'Developed', \
         'Implemented', or 'Designed'"
            .to_string()
    })
}

fn keyword_tip(ctx: &TipContext) -> Option<String> {
    Some(format!(
        "Ensure your resume includes these key keywords from the job description: {}",
        join_leading(&ctx.job_skills, 5, TIP_KEYWORD_FALLBACK)
    ))
}

/// Generates exactly five tips. Never fails; errors yield `FALLBACK_TIPS`.
pub fn generate_tips(cv_content: &str, job_description: &str) -> Vec<String> {
    match try_generate_tips(cv_content, job_description) {
        Ok(tips) => tips,
        Err(e) => {
            warn!("Tip generation failed, using fallback tips: {e}");
            fallback_tips()
        }
    }
}

fn try_generate_tips(cv_content: &str, job_description: &str) -> Result<Vec<String>, EnhanceError> {
    let ctx = TipContext::analyze(cv_content, job_description)?;
    let tips = TIP_RULES.iter().filter_map(|rule| rule(&ctx)).collect();
    Ok(pad_tips(tips))
}

/// Pads with `GENERAL_TIPS[len - 1]` until five tips exist, then truncates.
///
/// The index advances with the tip count and never restarts. An empty input
/// starts from the first generic tip.
pub fn pad_tips(mut tips: Vec<String>) -> Vec<String> {
    let mut index = tips.len().saturating_sub(1);
    while tips.len() < TIP_COUNT {
        tips.push(GENERAL_TIPS[index].to_string());
        index += 1;
    }
    tips.truncate(TIP_COUNT);
    tips
}

pub fn fallback_tips() -> Vec<String> {
    FALLBACK_TIPS.iter().map(|t| t.to_string()).collect()
}
