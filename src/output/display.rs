//! Display functions for command results

use super::formatters::length_badge;
use crate::commands::{AuditReport, CheckResult};
use crate::core::{LetterPool, Outcome, normalize};
use colored::Colorize;

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult, word: &str) {
    let root = result.round.root_word();
    println!(
        "\nRoot: {}  Word: {}",
        root.to_uppercase().bright_yellow().bold(),
        word.trim().to_uppercase().bright_white().bold()
    );

    match &result.outcome {
        None => println!("{}", "Nothing to check (empty word)".bright_black()),
        Some(Outcome::Accepted { word, score_delta }) => {
            println!(
                "{} {} {}",
                "✅ Accepted".green().bold(),
                length_badge(word),
                format!("+{score_delta} points").bright_yellow()
            );
        }
        Some(Outcome::Rejected { reason, score_delta }) => {
            let alert = reason.alert(root);
            println!("{} {}", "❌".red(), alert.title.red().bold());
            println!("   {}", alert.message);
            println!("   {}", format!("{score_delta} point").bright_black());
        }
    }
}

/// Print every data-set word spellable from `root`
pub fn print_derivable(root: &str, words: &[String]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORDS FROM".bright_cyan().bold(),
        root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let pool = LetterPool::from_word(&normalize(root));
    if pool.is_empty() {
        println!("\n   No letters to spell with.");
        return;
    }
    println!("\n   {}", letters_summary(&pool));

    if words.is_empty() {
        println!("\n   No words in the data set can be spelled from it.");
        return;
    }

    println!();
    for word in words {
        println!("   {} {word}", length_badge(word));
    }
    println!("\n   {} words", words.len().to_string().bright_yellow());
}

/// Sorted letters of a pool with their count, e.g. `Letters: aabehlpt (8)`
fn letters_summary(pool: &LetterPool) -> String {
    format!("Letters: {pool} ({})", pool.len())
}

/// Print the result of a data-set audit
pub fn print_audit_report(report: &AuditReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DATA AUDIT".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Checked:".bright_cyan().bold());
    println!("   Records:      {}", report.records_checked);
    println!("   Words:        {}", report.words_checked);
    println!("   Time taken:   {:.3}s", report.duration.as_secs_f64());

    if report.is_clean() {
        println!("\n{}", "✅ Every listed word is playable".green().bold());
        return;
    }

    println!(
        "\n{}",
        format!("❌ {} unplayable words", report.issues.len())
            .red()
            .bold()
    );
    for issue in &report.issues {
        println!(
            "   {:<12} {:<12} {}",
            issue.root,
            issue.word.bright_white(),
            issue.reason.title().yellow()
        );
    }
}
