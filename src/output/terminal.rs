// Colored terminal output for score reports, issues and keyword lists.

use colored::Colorize;

use crate::grammar::{GrammarReport, Issue, Severity};
use crate::scoring::completeness::missing_sections;
use crate::scoring::formatting::FormattingSignals;
use crate::scoring::report::{ScoreGrade, ScoreReport};

/// Display a full score report. `resume_text` is used to explain the
/// completeness and formatting scores.
pub fn display_report(report: &ScoreReport, resume_text: &str) {
    let grade = report.grade();
    println!(
        "\n{}",
        format!("=== Resume Score: {:.1}/100 ({}) ===", report.total, grade).bold()
    );
    println!();

    print_bar("Similarity", report.similarity);
    print_bar("Readability", report.readability);
    print_bar("Completeness", report.completeness);
    print_bar("Formatting", report.formatting);
    print_bar("Grammar", report.grammar_score);

    let missing = missing_sections(resume_text);
    if !missing.is_empty() {
        println!("\n  Missing sections: {}", missing.join(", ").yellow());
    }

    let signals = FormattingSignals::detect(resume_text);
    println!(
        "  Formatting signals: bullets {}  headings {}  dates {}  length {}",
        check(signals.bullets),
        check(signals.caps_heading),
        check(signals.dates),
        check(signals.substantial),
    );

    println!(
        "\n  Keyword match: {}",
        colorize_score(
            report.keyword_match_percentage,
            &format!("{:.0}%", report.keyword_match_percentage)
        )
    );
    display_keywords("Matched", &report.matched_keywords, true);
    display_keywords("Missing", &report.missing_keywords, false);

    display_issues(&report.grammar_issues);
}

/// Display a standalone grammar analysis.
pub fn display_grammar(report: &GrammarReport) {
    println!(
        "\n{}",
        format!("=== Grammar & Style: {:.1}/100 ===", report.score).bold()
    );
    display_issues(&report.issues);
}

/// Display a ranked keyword list.
pub fn display_ranked_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }
    println!("\n{}", format!("=== Top {} keywords ===", keywords.len()).bold());
    for (i, keyword) in keywords.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, keyword);
    }
}

fn display_keywords(label: &str, keywords: &[String], matched: bool) {
    if keywords.is_empty() {
        return;
    }
    let joined = keywords.join(", ");
    let colored = if matched {
        joined.green()
    } else {
        joined.red()
    };
    println!("    {label}: {colored}");
}

fn display_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("\n  {}", "No writing issues found.".green());
        return;
    }

    println!("\n  {} writing issues:", issues.len());
    for issue in issues {
        println!(
            "    [{}] {:<11} {:<9} {}",
            colorize_severity(issue.severity),
            issue.kind.to_string(),
            issue.location,
            issue.message
        );
        if !issue.context.is_empty() {
            println!("      {}", super::truncate_chars(&issue.context, 48).dimmed());
        }
    }
}

fn print_bar(label: &str, score: f64) {
    let bar_width: usize = 20;
    let filled = ((score / 100.0) * bar_width as f64).round() as usize;
    let empty = bar_width.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));
    println!(
        "  {:<13} {} {:>6.2}",
        label,
        colorize_score(score, &bar),
        score
    );
}

fn check(present: bool) -> colored::ColoredString {
    if present {
        "yes".green()
    } else {
        "no".dimmed()
    }
}

/// Color text by the grade band of `score`.
fn colorize_score(score: f64, text: &str) -> colored::ColoredString {
    match ScoreGrade::from_score(score) {
        ScoreGrade::Strong => text.bright_green(),
        ScoreGrade::Fair => text.yellow(),
        ScoreGrade::Weak => text.red(),
    }
}

fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().dimmed(),
    }
}
