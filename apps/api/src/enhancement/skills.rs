//! Skill prioritizer — assigns a relevance tier to each candidate skill.
//!
//! Priority comes from an ordered rule table; the first rule whose condition
//! holds decides. The ordering reproduces the observed behaviour exactly:
//! a skill containing a high-priority term never falls through to the
//! medium-tier rules, even when the term is absent from the JD.

use serde::{Deserialize, Serialize};

use crate::enhancement::vocabulary::{HIGH_PRIORITY_TERMS, MEDIUM_PRIORITY_TERMS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub priority: SkillPriority,
}

impl SkillEntry {
    pub fn new(name: impl Into<String>, priority: SkillPriority) -> Self {
        Self {
            name: name.into(),
            priority,
        }
    }
}

/// Condition half of a priority rule. Inputs are already lowercased.
#[derive(Debug, Clone, Copy)]
enum SkillCondition {
    /// The skill itself is a substring of the JD.
    MentionedInJd,
    /// The skill contains a tier term that also appears in the JD.
    TierTermInJd(&'static [&'static str]),
    /// The skill contains a tier term.
    ContainsTierTerm(&'static [&'static str]),
}

impl SkillCondition {
    fn holds(&self, skill: &str, jd: &str) -> bool {
        match *self {
            SkillCondition::MentionedInJd => jd.contains(skill),
            SkillCondition::TierTermInJd(terms) => {
                tier_terms_in(skill, terms).any(|term| jd.contains(&term))
            }
            SkillCondition::ContainsTierTerm(terms) => tier_terms_in(skill, terms).next().is_some(),
        }
    }
}

const PRIORITY_RULES: &[(SkillCondition, SkillPriority)] = &[
    (SkillCondition::MentionedInJd, SkillPriority::High),
    (SkillCondition::TierTermInJd(HIGH_PRIORITY_TERMS), SkillPriority::High),
    (SkillCondition::ContainsTierTerm(HIGH_PRIORITY_TERMS), SkillPriority::Medium),
    (SkillCondition::TierTermInJd(MEDIUM_PRIORITY_TERMS), SkillPriority::Medium),
    (SkillCondition::ContainsTierTerm(MEDIUM_PRIORITY_TERMS), SkillPriority::Low),
];

const DEFAULT_PRIORITY: SkillPriority = SkillPriority::Low;

/// Lowercased tier terms contained in the (lowercased) skill.
fn tier_terms_in<'a>(
    skill: &'a str,
    terms: &'static [&'static str],
) -> impl Iterator<Item = String> + 'a {
    terms
        .iter()
        .map(|term| term.to_lowercase())
        .filter(move |term| skill.contains(term.as_str()))
}

/// Scores every skill independently; output order matches input order.
pub fn prioritize_skills(skills: &[String], job_description: &str) -> Vec<SkillEntry> {
    let jd_lower = job_description.to_lowercase();
    skills
        .iter()
        .map(|skill| SkillEntry::new(skill.clone(), priority_for(skill, &jd_lower)))
        .collect()
}

fn priority_for(skill: &str, jd_lower: &str) -> SkillPriority {
    let skill_lower = skill.to_lowercase();
    PRIORITY_RULES
        .iter()
        .find(|(condition, _)| condition.holds(&skill_lower, jd_lower))
        .map(|(_, priority)| *priority)
        .unwrap_or(DEFAULT_PRIORITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn priorities(names: &[&str], jd: &str) -> Vec<SkillPriority> {
        prioritize_skills(&skills(names), jd)
            .into_iter()
            .map(|e| e.priority)
            .collect()
    }

    #[test]
    fn test_direct_mention_is_high() {
        let result = prioritize_skills(&skills(&["React"]), "We need React experience");
        assert_eq!(result[0], SkillEntry::new("React", SkillPriority::High));
    }

    #[test]
    fn test_empty_skills_yield_empty_result() {
        assert!(prioritize_skills(&[], "React").is_empty());
    }

    #[test]
    fn test_high_term_co_occurrence_is_high() {
        // "React Native" is not in the JD, but "react" is.
        assert_eq!(
            priorities(&["React Native"], "Strong react background"),
            vec![SkillPriority::High]
        );
    }

    #[test]
    fn test_high_term_without_co_occurrence_is_medium() {
        assert_eq!(
            priorities(&["Redux Toolkit"], "Angular developer"),
            vec![SkillPriority::Medium]
        );
    }

    #[test]
    fn test_high_term_blocks_medium_tier_rules() {
        // "typescript" is high-tier but absent from the JD; "css" is medium-tier and present.
        // The high-tier containment rule fires first.
        assert_eq!(
            priorities(&["TypeScript CSS-in-JS"], "Modern CSS required"),
            vec![SkillPriority::Medium]
        );
    }

    #[test]
    fn test_medium_term_co_occurrence_is_medium() {
        assert_eq!(
            priorities(&["Git workflows"], "Daily use of git"),
            vec![SkillPriority::Medium]
        );
    }

    #[test]
    fn test_medium_term_without_co_occurrence_is_low() {
        assert_eq!(
            priorities(&["HTML emails"], "Backend Go role"),
            vec![SkillPriority::Low]
        );
    }

    #[test]
    fn test_unrelated_skill_is_low() {
        assert_eq!(
            priorities(&["MongoDB"], "React and Redux"),
            vec![SkillPriority::Low]
        );
    }

    #[test]
    fn test_duplicates_scored_independently_in_order() {
        let result = prioritize_skills(&skills(&["Python", "React", "Python"]), "React shop");
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].name, "Python");
        assert_eq!(result[1].priority, SkillPriority::High);
        assert_eq!(result[2].name, "Python");
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        let entry = SkillEntry::new("React", SkillPriority::High);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json, serde_json::json!({"name": "React", "priority": "high"}));
    }

    #[test]
    fn test_sample_skills_against_sample_job() {
        const JOB: &str = "Senior Frontend Developer with React, TypeScript, Redux, \
            REST APIs, responsive design, HTML5, CSS3, Git and CI/CD experience.";
        let result = priorities(
            &["JavaScript", "React", "HTML", "CSS", "Node.js", "Python", "Redux"],
            JOB,
        );
        assert_eq!(
            result,
            vec![
                SkillPriority::Low,
                SkillPriority::High,
                SkillPriority::High,
                SkillPriority::High,
                SkillPriority::Low,
                SkillPriority::Low,
                SkillPriority::High,
            ]
        );
    }
}
