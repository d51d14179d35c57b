//! Fixed vocabularies used by the demo-mode heuristics.
//!
//! Order matters everywhere in this file: extraction, tip selection and
//! padding all preserve the order in which terms are listed here.

/// A named group of alternatives compiled into one word-bounded regex.
/// The first capture group of every match is the extracted term.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    pub category: &'static str,
    pub alternatives: &'static [&'static str],
}

impl PatternGroup {
    /// Regex source: case-insensitive, word-bounded, one capture group.
    pub fn regex_source(&self) -> String {
        format!(r"(?i)\b({})\b", self.alternatives.join("|"))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Summary synthesizer
// ────────────────────────────────────────────────────────────────────────────

pub const SUMMARY_KEYWORDS: &[&str] = &[
    "React",
    "TypeScript",
    "CSS",
    "responsive",
    "Redux",
    "GraphQL",
    "testing",
];

/// Case-sensitive seniority markers, checked in order. First hit wins.
pub const SENIORITY_MARKERS: &[(&[&str], &str)] = &[
    (&["Senior", "Sr"], "senior-level"),
    (&["Junior", "Jr"], "junior-level"),
];

pub const DEFAULT_SENIORITY: &str = "mid-level";

// ────────────────────────────────────────────────────────────────────────────
// Skill prioritizer
// ────────────────────────────────────────────────────────────────────────────

pub const HIGH_PRIORITY_TERMS: &[&str] = &["React", "TypeScript", "Redux", "responsive", "testing"];

pub const MEDIUM_PRIORITY_TERMS: &[&str] = &["JavaScript", "CSS", "HTML", "REST", "Git"];

// ────────────────────────────────────────────────────────────────────────────
// Tip generator
// ────────────────────────────────────────────────────────────────────────────

pub const TIP_SKILL_PATTERNS: &[PatternGroup] = &[
    PatternGroup {
        category: "frameworks",
        alternatives: &["React", "Angular", "Vue", "TypeScript", "JavaScript", r"Node\.js"],
    },
    PatternGroup {
        category: "styling",
        alternatives: &["HTML5", "CSS3", "SCSS", "LESS", "Tailwind", "Bootstrap"],
    },
    PatternGroup {
        category: "data",
        alternatives: &["Redux", "GraphQL", "REST API", "Axios", "Fetch"],
    },
    PatternGroup {
        category: "testing",
        alternatives: &["testing", "Jest", "Cypress", "Selenium", "unit testing"],
    },
    PatternGroup {
        category: "responsiveness",
        alternatives: &["responsive", "mobile-first", "cross-browser"],
    },
    PatternGroup {
        category: "process",
        alternatives: &["Git", "CI/CD", "Agile", "Scrum", "DevOps"],
    },
];

pub const SUMMARY_HEADING_PATTERN: &str = r"(?i)(summary|profile|objective)";

pub const QUANTIFICATION_PATTERN: &str =
    r"(?i)\b(\d+%|\d+ percent|increased|decreased|improved|reduced|saved|generated)\b";

pub const ACTION_VERB_PATTERN: &str =
    r"(?i)\b(developed|implemented|created|designed|managed|led|coordinated|analyzed)\b";

pub const TIP_SUMMARY_FALLBACK: &str = "frontend development";

pub const TIP_KEYWORD_FALLBACK: &str = "web development, frontend, JavaScript";

/// Padding source when fewer than five targeted tips apply.
pub const GENERAL_TIPS: [&str; 5] = [
    "Keep your resume to 1-2 pages maximum for optimal readability",
    "Tailor your resume for each job application to highlight relevant experience",
    "Use a clean, professional design with consistent formatting",
    "Include a GitHub link or portfolio showcasing your projects",
    "Remove outdated skills or irrelevant experience",
];

/// Returned as-is when tip generation fails.
pub const FALLBACK_TIPS: [&str; 5] = [
    "Tailor your resume to match the specific job description",
    "Quantify your achievements with specific metrics",
    "Use industry-relevant keywords throughout your resume",
    "Focus on your most relevant skills and experience",
    "Ensure your resume is free of errors and professionally formatted",
];

pub const TIP_COUNT: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// CV optimizer
// ────────────────────────────────────────────────────────────────────────────

pub const CV_TECH_PATTERNS: &[PatternGroup] = &[
    PatternGroup {
        category: "frameworks",
        alternatives: &["React", "Angular", "Vue", "TypeScript", "JavaScript", r"Node\.js"],
    },
    PatternGroup {
        category: "data",
        alternatives: &["Redux", "GraphQL", "REST API", "Axios", "Fetch"],
    },
    PatternGroup {
        category: "styling",
        alternatives: &["HTML5", "CSS3", "SCSS", "LESS", "Tailwind", "Bootstrap"],
    },
    PatternGroup {
        category: "responsiveness",
        alternatives: &["responsive", "mobile-first", "cross-browser"],
    },
    PatternGroup {
        category: "testing",
        alternatives: &["unit testing", "Jest", "Cypress", "Selenium", "TDD"],
    },
    PatternGroup {
        category: "process",
        alternatives: &["Git", "CI/CD", "Agile", "Scrum", "DevOps"],
    },
];

pub const EXPERIENCE_HEADING_PATTERN: &str =
    r"(?i)^experience|^work experience|^professional experience";

pub const SECTION_END_HEADING_PATTERN: &str = r"(?i)^education|^skills|^projects|^awards";

/// Skills heading through the next `word:` line or end of text. Group 1 is the body.
pub const SKILLS_SECTION_PATTERN: &str =
    r"(?ims)(?:skills|technical skills|core competencies)(?:.*?):(.*?)(?:^[a-z]+:|\z)";

pub const SUMMARY_LABEL_PATTERN: &str = r"(?i)(summary|profile|objective):";

/// Lowercase markers that switch the prepended summary to senior wording.
pub const SENIOR_ROLE_MARKERS: &[&str] = &["senior", "sr."];

pub const CV_TECH_FALLBACK: &str = "web development";

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_all_pattern_groups_compile() {
        for group in TIP_SKILL_PATTERNS.iter().chain(CV_TECH_PATTERNS) {
            assert!(
                Regex::new(&group.regex_source()).is_ok(),
                "group '{}' failed to compile",
                group.category
            );
        }
    }

    #[test]
    fn test_static_patterns_compile() {
        for pattern in [
            SUMMARY_HEADING_PATTERN,
            QUANTIFICATION_PATTERN,
            ACTION_VERB_PATTERN,
            EXPERIENCE_HEADING_PATTERN,
            SECTION_END_HEADING_PATTERN,
            SKILLS_SECTION_PATTERN,
            SUMMARY_LABEL_PATTERN,
        ] {
            assert!(Regex::new(pattern).is_ok(), "{pattern} failed to compile");
        }
    }

    #[test]
    fn test_regex_source_is_word_bounded_and_captured() {
        let group = PatternGroup {
            category: "t",
            alternatives: &["A", "B"],
        };
        assert_eq!(group.regex_source(), r"(?i)\b(A|B)\b");
    }

    #[test]
    fn test_tip_and_cv_testing_groups_differ() {
        // TDD is only recognized when rewriting the CV.
        assert!(!TIP_SKILL_PATTERNS
            .iter()
            .any(|g| g.alternatives.contains(&"TDD")));
        assert!(CV_TECH_PATTERNS
            .iter()
            .any(|g| g.alternatives.contains(&"TDD")));
    }
}
