// Live-mode prompt templates. Placeholders in `{braces}` are replaced before sending.

use crate::llm_client::CallOptions;

/// Replace: {basic_summary}, {job_description}
pub const SUMMARY_PROMPT_TEMPLATE: &str = r#"Create a professional and tailored resume summary based on the following information:

Basic Summary: {basic_summary}

Job Description: {job_description}

Create a professional summary that:
1. Is 2-3 sentences long
2. Highlights relevant skills and experience
3. Is tailored to the specific job description
4. Uses professional, confident language
5. Avoids clichés and generic statements

Return ONLY the enhanced summary text with no additional commentary."#;

pub const SUMMARY_OPTIONS: CallOptions = CallOptions {
    max_tokens: Some(150),
    temperature: 0.7,
    json_mode: false,
};

/// Replace: {job_description}, {skills_json}
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"Analyze this job description and prioritize the candidate's skills:

Job Description: {job_description}

Candidate Skills: {skills_json}

For each skill, determine:
1. Relevance to the job (high, medium, low)
2. How to phrase it professionally

Return a JSON object with a "skills" array, each skill having:
- name: The skill name (possibly rephrased)
- priority: "high", "medium", or "low" based on relevance

Format: {"skills": [{"name": "skill name", "priority": "high|medium|low"}, ...]}"#;

pub const SKILLS_OPTIONS: CallOptions = CallOptions {
    max_tokens: None,
    temperature: 0.3,
    json_mode: true,
};

/// Replace: {cv_content}, {job_description}
pub const TIPS_PROMPT_TEMPLATE: &str = r#"Review this CV content and job description to provide professional tips for resume improvement:

CV Content:
{cv_content}

Job Description:
{job_description}

Generate 5 specific, actionable tips to improve the resume for this job. Focus on:
1. Keyword optimization for ATS systems
2. Content structure and formatting
3. Skills highlighting and prioritization
4. Experience presentation
5. Overall impact and readability

Return ONLY a numbered list of 5 tips without additional commentary."#;

pub const TIPS_OPTIONS: CallOptions = CallOptions {
    max_tokens: Some(400),
    temperature: 0.6,
    json_mode: false,
};

/// Replace: {cv_content}, {job_description}
pub const CV_PROMPT_TEMPLATE: &str = r#"Optimize this CV content for the following job description:

CV Content:
{cv_content}

Job Description:
{job_description}

Please:
1. Reorder sections if needed (Professional Summary first, followed by Skills, Experience, Education)
2. Add a tailored Professional Summary if none exists
3. Highlight relevant skills and experience
4. Add any important skills mentioned in the job description that are missing
5. Ensure bullet points begin with strong action verbs
6. Quantify achievements where possible

Return the complete optimized CV content."#;

pub const CV_OPTIONS: CallOptions = CallOptions {
    max_tokens: Some(1500),
    temperature: 0.4,
    json_mode: false,
};

/// Fills `{name}` placeholders in a single left-to-right pass. Substituted
/// values are never rescanned, and unknown braces are copied through.
pub fn render_prompt(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let placeholder = values
            .iter()
            .find(|(name, _)| tail.starts_with(name) && tail[name.len()..].starts_with('}'));
        match placeholder {
            Some((name, value)) => {
                out.push_str(value);
                rest = &tail[name.len() + 1..];
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
