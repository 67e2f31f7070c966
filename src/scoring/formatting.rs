// Formatting heuristic over the raw resume lines.
//
// Starts from a base of 60 and adds 10 for each structural signal found:
// bullet lines, an all-caps heading ending in a colon, an employment date,
// and more than 300 characters of content.

use std::sync::LazyLock;

use regex_lite::Regex;

pub const BASE_SCORE: f64 = 60.0;
pub const SIGNAL_BONUS: f64 = 10.0;

/// Characters of text above which the resume counts as substantial.
pub const SUBSTANTIAL_CHARS: usize = 300;

/// Glyphs that open a bullet line.
pub const BULLET_GLYPHS: &[char] = &['•', '-', '*'];

/// "March 2021", "Sep. 2019", or a year range like "2018 - 2022".
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}\b|\b\d{4}\s*[-–]\s*\d{4}\b",
    )
    .expect("date pattern is a valid regex")
});

/// Which formatting signals a resume shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormattingSignals {
    pub bullets: bool,
    pub caps_heading: bool,
    pub dates: bool,
    pub substantial: bool,
}

impl FormattingSignals {
    pub fn detect(text: &str) -> Self {
        Self {
            bullets: text.lines().any(is_bullet_line),
            caps_heading: text.lines().any(is_caps_heading),
            dates: DATE_PATTERN.is_match(text),
            substantial: text.chars().count() > SUBSTANTIAL_CHARS,
        }
    }

    pub fn count(&self) -> usize {
        [self.bullets, self.caps_heading, self.dates, self.substantial]
            .iter()
            .filter(|&&s| s)
            .count()
    }
}

/// Formatting sub-score in [60, 100].
pub fn formatting_score(text: &str) -> f64 {
    let signals = FormattingSignals::detect(text);
    (BASE_SCORE + signals.count() as f64 * SIGNAL_BONUS).min(100.0)
}

/// A bullet glyph followed by whitespace, after any indentation.
pub fn is_bullet_line(line: &str) -> bool {
    let mut chars = line.trim_start().chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), Some(next)) => BULLET_GLYPHS.contains(&glyph) && next.is_whitespace(),
        _ => false,
    }
}

/// An uppercase heading such as "WORK EXPERIENCE:" or "SKILLS & TOOLS:".
fn is_caps_heading(line: &str) -> bool {
    let Some(head) = line.trim().strip_suffix(':') else {
        return false;
    };
    let mut chars = head.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => {
            chars.all(|c| c.is_uppercase() || c.is_whitespace() || c == '&' || c == '/')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_base() {
        assert_eq!(formatting_score(""), 60.0);
    }

    #[test]
    fn test_bullet_lines() {
        assert!(is_bullet_line("• Shipped the billing service"));
        assert!(is_bullet_line("   - Led a team of four"));
        assert!(is_bullet_line("* Cut latency by half"));
        assert!(!is_bullet_line("-Led a team"));
        assert!(!is_bullet_line("Led a team"));
    }

    #[test]
    fn test_caps_heading() {
        assert!(is_caps_heading("EXPERIENCE:"));
        assert!(is_caps_heading("  SKILLS & TOOLS:  "));
        assert!(!is_caps_heading("Experience:"));
        assert!(!is_caps_heading("EXPERIENCE"));
        assert!(!is_caps_heading(":"));
    }

    #[test]
    fn test_dates() {
        assert!(FormattingSignals::detect("Acme Corp, March 2021").dates);
        assert!(FormattingSignals::detect("Acme Corp 2018 - 2022").dates);
        assert!(FormattingSignals::detect("Acme Corp 2018–2022").dates);
        assert!(!FormattingSignals::detect("Marketing 2020 plan").dates);
    }

    #[test]
    fn test_all_signals_cap_at_hundred() {
        let mut text = String::from("EXPERIENCE:\n• Built things, Jan 2020\n");
        text.push_str(&"detail ".repeat(60));
        let signals = FormattingSignals::detect(&text);
        assert_eq!(signals.count(), 4);
        assert_eq!(formatting_score(&text), 100.0);
    }
}
