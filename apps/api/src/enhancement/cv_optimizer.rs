//! CV optimizer — rewrites CV text toward a job description.
//!
//! Three passes over the text, each independent of the others:
//! 1. experience scan: inserts achievement bullets at the end of the first experience section
//! 2. skills body: appends JD technologies missing from the skills section
//! 3. summary: prepends a professional summary when the CV has none

use regex::Regex;
use tracing::warn;

use crate::enhancement::extraction::{contains_ignore_case, join_leading, TermExtractor};
use crate::enhancement::vocabulary::{
    CV_TECH_FALLBACK, CV_TECH_PATTERNS, EXPERIENCE_HEADING_PATTERN, SECTION_END_HEADING_PATTERN,
    SENIOR_ROLE_MARKERS, SKILLS_SECTION_PATTERN, SUMMARY_LABEL_PATTERN,
};
use crate::enhancement::EnhanceError;

/// Returns the rewritten CV, or the input unchanged if rewriting fails.
pub fn optimize_cv(cv_content: &str, job_description: &str) -> String {
    match try_optimize_cv(cv_content, job_description) {
        Ok(optimized) => optimized,
        Err(e) => {
            warn!("CV optimization failed, returning original content: {e}");
            cv_content.to_string()
        }
    }
}

fn try_optimize_cv(cv_content: &str, job_description: &str) -> Result<String, EnhanceError> {
    let job_techs = TermExtractor::new(CV_TECH_PATTERNS)?.extract(job_description);

    let scanner = ExperienceScanner::new(&job_techs)?;
    let content = scanner.rewrite(cv_content);
    let content = append_missing_skills(content, &job_techs)?;
    prepend_summary(content, &job_techs, job_description)
}

// ────────────────────────────────────────────────────────────────────────────
// Experience section scan
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionState {
    Outside,
    InsideExperience,
}

struct ExperienceScanner {
    experience_heading: Regex,
    section_end_heading: Regex,
    /// Empty when the JD yielded no technologies; nothing is inserted then.
    bullets: Vec<String>,
}

impl ExperienceScanner {
    fn new(job_techs: &[String]) -> Result<Self, EnhanceError> {
        Ok(Self {
            experience_heading: Regex::new(EXPERIENCE_HEADING_PATTERN)?,
            section_end_heading: Regex::new(SECTION_END_HEADING_PATTERN)?,
            bullets: achievement_bullets(job_techs),
        })
    }

    /// Copies every line through, inserting a blank line and the bullets
    /// before the heading that first closes an experience section.
    fn rewrite(&self, cv_content: &str) -> String {
        let mut state = SectionState::Outside;
        let mut bullets_inserted = false;
        let mut output: Vec<&str> = Vec::new();

        for line in cv_content.split('\n') {
            if self.experience_heading.is_match(line) {
                state = SectionState::InsideExperience;
            } else if state == SectionState::InsideExperience
                && self.section_end_heading.is_match(line)
            {
                state = SectionState::Outside;
                if !bullets_inserted && !self.bullets.is_empty() {
                    output.push("");
                    output.extend(self.bullets.iter().map(String::as_str));
                    bullets_inserted = true;
                }
            }
            output.push(line);
        }

        output.join("\n")
    }
}

fn achievement_bullets(job_techs: &[String]) -> Vec<String> {
    if job_techs.is_empty() {
        return Vec::new();
    }
    let tech_mentions = join_leading(job_techs, 3, "");
    vec![
        format!(
            "• Developed responsive user interfaces using {tech_mentions}, resulting in improved \
             user engagement and 20% faster page load times"
        ),
        "• Collaborated with backend developers to integrate RESTful APIs, ensuring seamless \
         data flow and optimal application performance"
            .to_string(),
        "• Implemented automated testing practices to enhance code quality and reduce bugs in \
         production"
            .to_string(),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Skills section
// ────────────────────────────────────────────────────────────────────────────

/// Appends JD technologies absent from the skills body (case-insensitive substring test).
fn append_missing_skills(content: String, job_techs: &[String]) -> Result<String, EnhanceError> {
    let skills_section = Regex::new(SKILLS_SECTION_PATTERN)?;

    let Some(body) = skills_section.captures(&content).and_then(|c| c.get(1)) else {
        return Ok(content);
    };

    let trimmed = body.as_str().trim();
    let missing: Vec<&str> = job_techs
        .iter()
        .map(String::as_str)
        .filter(|tech| !contains_ignore_case(trimmed, tech))
        .collect();

    if missing.is_empty() {
        return Ok(content);
    }

    let missing = missing.join(", ");
    // Edit the located body only; the same text may appear elsewhere in the CV.
    let (insert_at, addition) = if trimmed.is_empty() {
        (body.start(), format!(" {missing}"))
    } else {
        let lead = body.as_str().len() - body.as_str().trim_start().len();
        (body.start() + lead + trimmed.len(), format!(", {missing}"))
    };

    let mut rewritten = content;
    rewritten.insert_str(insert_at, &addition);
    Ok(rewritten)
}

// ────────────────────────────────────────────────────────────────────────────
// Professional summary
// ────────────────────────────────────────────────────────────────────────────

fn prepend_summary(
    content: String,
    job_techs: &[String],
    job_description: &str,
) -> Result<String, EnhanceError> {
    if Regex::new(SUMMARY_LABEL_PATTERN)?.is_match(&content) {
        return Ok(content);
    }

    let techs = join_leading(job_techs, 3, CV_TECH_FALLBACK);
    let summary = if is_senior_role(job_description) {
        format!(
            "Professional Summary: Senior Software Developer with extensive experience in {techs}. \
             Proven track record of building scalable, efficient applications and leading \
             development teams to deliver high-quality products.\n\n"
        )
    } else {
        format!(
            "Professional Summary: Dedicated Software Developer specializing in {techs} with a \
             passion for creating responsive, user-friendly applications. Committed to writing \
             clean, maintainable code and staying current with industry best practices.\n\n"
        )
    };

    Ok(summary + &content)
}

fn is_senior_role(job_description: &str) -> bool {
    let jd_lower = job_description.to_lowercase();
    SENIOR_ROLE_MARKERS
        .iter()
        .any(|marker| jd_lower.contains(marker))
}
