// Section completeness — does the resume mention each required section?
//
// A section counts as present when its name appears anywhere in the text,
// case-insensitively. Headings like "Skills:" are covered by the same test.
// Each of the six sections is worth an equal share of 100.

use super::round2;

/// Sections every resume is expected to carry.
pub const REQUIRED_SECTIONS: &[&str] = &[
    "education",
    "experience",
    "skills",
    "projects",
    "certifications",
    "summary",
];

/// Required sections whose name occurs in the text, in table order.
pub fn found_sections(text: &str) -> Vec<&'static str> {
    let lower = text.to_lowercase();
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| lower.contains(section))
        .collect()
}

/// Required sections missing from the text, in table order.
pub fn missing_sections(text: &str) -> Vec<&'static str> {
    let found = found_sections(text);
    REQUIRED_SECTIONS
        .iter()
        .copied()
        .filter(|section| !found.contains(section))
        .collect()
}

/// Completeness sub-score, rounded to two decimals.
pub fn completeness_score(text: &str) -> f64 {
    let found = found_sections(text).len();
    round2(found as f64 / REQUIRED_SECTIONS.len() as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_sections() {
        assert_eq!(completeness_score(""), 0.0);
        assert_eq!(missing_sections("").len(), 6);
    }

    #[test]
    fn test_all_sections_any_case() {
        let text = "SUMMARY\nExperience:\nEducation\nSkills:\nProjects\nCertifications:";
        assert_eq!(completeness_score(text), 100.0);
        assert!(missing_sections(text).is_empty());
    }

    #[test]
    fn test_each_section_is_one_sixth() {
        assert_eq!(completeness_score("Education"), 16.67);
        assert_eq!(completeness_score("Education\nSkills"), 33.33);
    }

    #[test]
    fn test_singular_skill_is_not_enough() {
        assert_eq!(found_sections("Key skill: Rust"), Vec::<&str>::new());
    }
}
