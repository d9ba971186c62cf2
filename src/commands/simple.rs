//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::core::{Outcome, ScoreReset};
use crate::engine::Session;
use crate::output::formatters::{create_progress_bar, length_badge, words_progress};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: Rng>(session: &mut Session<R>) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play(session, &mut stdin.lock(), &mut stdout.lock())
}

/// Game loop over arbitrary input and output streams
///
/// Ends on `:quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn play<R, I, O>(session: &mut Session<R>, input: &mut I, out: &mut O) -> io::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Spell words using the letters of the root word.")?;
    writeln!(out, "Commands: ':next' new root word, ':restart' start over, ':quit' exit\n")?;

    print_round(session, out)?;

    let mut line = String::new();
    loop {
        write!(out, "Enter your word: ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" => break,
            ":next" | ":n" => {
                session.next_word();
                writeln!(out, "\n🔄 Next word!\n")?;
                print_round(session, out)?;
            }
            ":restart" | ":r" => {
                let previous = session.restart(ScoreReset::Deferred);
                writeln!(out, "\n🔄 Restarting. Your score was {previous}.\n")?;
                session.settle_score_reset();
                print_round(session, out)?;
            }
            submission => match session.submit(submission) {
                None => {}
                Some(Outcome::Accepted { word, score_delta }) => {
                    writeln!(
                        out,
                        "{} {} {}",
                        "✓".green().bold(),
                        length_badge(&word),
                        format!("{word} (+{score_delta})").bright_white()
                    )?;
                    print_status(session, out)?;
                }
                Some(Outcome::Rejected { reason, score_delta }) => {
                    let alert = reason.alert(session.round().root_word());
                    writeln!(out, "{} {}", "✗".red().bold(), alert.title.red().bold())?;
                    writeln!(out, "  {} ({score_delta})", alert.message)?;
                    print_status(session, out)?;
                }
            },
        }
    }

    writeln!(out, "👋 Final score: {}", session.round().score())?;
    Ok(())
}

fn print_round<R: Rng, O: Write>(session: &Session<R>, out: &mut O) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        session.round().root_word().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    print_status(session, out)
}

fn print_status<R: Rng, O: Write>(session: &Session<R>, out: &mut O) -> io::Result<()> {
    let round = session.round();
    let (found, total) = (round.found_words(), round.valid_word_count());
    writeln!(
        out,
        "Score: {} | {} {}\n",
        round.score(),
        words_progress(found, total),
        create_progress_bar(found, total, 20).cyan()
    )
}
