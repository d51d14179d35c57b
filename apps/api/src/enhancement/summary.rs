//! Summary synthesizer — templated professional summary from JD keywords.

use crate::enhancement::vocabulary::{DEFAULT_SENIORITY, SENIORITY_MARKERS, SUMMARY_KEYWORDS};

/// Builds a professional summary tailored to the job description.
///
/// `_basic_summary` is not consulted by the heuristic; live mode uses it as
/// prompt input and as its fallback value.
pub fn synthesize_summary(_basic_summary: &str, job_description: &str) -> String {
    let matched = matched_keywords(job_description);
    let level = experience_level(job_description);

    if matched.is_empty() {
        format!(
            "Versatile {level} developer with extensive experience in web development and a passion \
             for creating intuitive, high-performance applications. Combines strong technical skills \
             with collaborative problem-solving to deliver outstanding user experiences."
        )
    } else {
        let keyword_phrase = matched
            .iter()
            .take(3)
            .copied()
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "Accomplished {level} software developer with 5+ years of experience specializing in \
             {keyword_phrase}. Proven track record of building responsive, user-friendly web \
             applications with a focus on code quality and performance optimization."
        )
    }
}

/// Vocabulary terms contained in the job description (case-insensitive), in vocabulary order.
fn matched_keywords(job_description: &str) -> Vec<&'static str> {
    let jd_lower = job_description.to_lowercase();
    SUMMARY_KEYWORDS
        .iter()
        .filter(|kw| jd_lower.contains(&kw.to_lowercase()))
        .copied()
        .collect()
}

/// Case-sensitive marker search; "Sr" also hits words like "Src".
fn experience_level(job_description: &str) -> &'static str {
    SENIORITY_MARKERS
        .iter()
        .find(|(markers, _)| markers.iter().any(|m| job_description.contains(m)))
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_SENIORITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_senior_wins_over_junior() {
        let summary = synthesize_summary("", "Senior engineer mentoring Junior developers");
        assert!(summary.contains("senior-level"));
    }

    #[test]
    fn test_sr_abbreviation_is_senior() {
        assert_eq!(experience_level("Sr. Frontend Engineer"), "senior-level");
    }

    #[test]
    fn test_junior_and_jr() {
        assert_eq!(experience_level("Junior developer"), "junior-level");
        assert_eq!(experience_level("Jr developer"), "junior-level");
    }

    #[test]
    fn test_seniority_is_case_sensitive() {
        assert_eq!(experience_level("senior developer"), "mid-level");
    }

    #[test]
    fn test_empty_inputs_fall_back_to_generic_mid_level() {
        let summary = synthesize_summary("", "");
        assert!(summary.starts_with("Versatile mid-level developer"));
    }

    #[test]
    fn test_top_three_keywords_in_vocabulary_order() {
        let summary = synthesize_summary(
            "Web dev",
            "We use graphql, redux, typescript and react with CSS",
        );
        assert!(summary.starts_with("Accomplished mid-level software developer"));
        assert!(summary.contains("specializing in React, TypeScript, CSS."));
        assert!(!summary.contains("Redux"));
    }

    #[test]
    fn test_keyword_match_is_substring() {
        // "testing" is found inside "pentesting".
        assert_eq!(matched_keywords("pentesting experience"), vec!["testing"]);
    }
}
